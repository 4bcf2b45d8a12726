//! In-memory account data served by the mock.

use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct Fixture {
    pub boards: Vec<FixtureBoard>,
}

#[derive(Clone, Debug)]
pub struct FixtureBoard {
    pub id: String,
    pub name: String,
    pub columns: Vec<FixtureColumn>,
    pub items: Vec<FixtureItem>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FixtureColumn {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct FixtureItem {
    pub id: String,
    pub name: String,
    /// Cell values keyed by column id; columns without a cell are omitted.
    pub cells: Vec<(String, Option<String>)>,
}

impl Fixture {
    pub fn board(&self, id: &str) -> Option<&FixtureBoard> {
        self.boards.iter().find(|board| board.id == id)
    }

    /// A small account: a projects board linked to a clients board.
    pub fn sample() -> Self {
        let clients = FixtureBoard {
            id: "456".to_string(),
            name: "Clients".to_string(),
            columns: vec![column("name", "Name", "name")],
            items: vec![
                item("11", "Acme", vec![]),
                item("12", "Globex", vec![]),
            ],
        };
        let projects = FixtureBoard {
            id: "123".to_string(),
            name: "Projects".to_string(),
            columns: vec![
                column("name", "Name", "name"),
                column("status", "Status", "status"),
                column("link_col", "Client", "board_relation"),
            ],
            items: vec![
                item(
                    "1",
                    "A",
                    vec![
                        ("status", Some(r#"{"index":1}"#)),
                        ("link_col", Some(r#"{"linkedPulseIds":[{"linkedPulseId":11}]}"#)),
                    ],
                ),
                item("2", "B", vec![("status", None)]),
                item(
                    "3",
                    "C",
                    vec![("link_col", Some(r#"{"linkedPulseIds":[{"linkedPulseId":12}]}"#))],
                ),
            ],
        };
        Self {
            boards: vec![projects, clients],
        }
    }
}

fn column(id: &str, title: &str, kind: &str) -> FixtureColumn {
    FixtureColumn {
        id: id.to_string(),
        title: title.to_string(),
        kind: kind.to_string(),
    }
}

fn item(id: &str, name: &str, cells: Vec<(&str, Option<&str>)>) -> FixtureItem {
    FixtureItem {
        id: id.to_string(),
        name: name.to_string(),
        cells: cells
            .into_iter()
            .map(|(column, value)| (column.to_string(), value.map(str::to_string)))
            .collect(),
    }
}
