use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "monday")]
#[command(about = "List monday.com boards, items, columns and connected items")]
#[command(version)]
pub struct Cli {
    /// Board to inspect (defaults to the first board returned)
    #[arg(long)]
    pub board_id: Option<String>,

    /// Connected-boards column to read (defaults to the first board_relation column)
    #[arg(long)]
    pub column_id: Option<String>,

    /// GraphQL endpoint, overriding MONDAY_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,
}
