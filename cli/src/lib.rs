//! Command-line runner for the monday.com boards client.
//!
//! Loads configuration from the environment, executes requests with a
//! blocking ureq transport and prints what it finds.

pub mod cli;
pub mod config;
pub mod runner;
pub mod transport;

pub use cli::Cli;
pub use runner::{run, RunOptions};
pub use transport::UreqTransport;
