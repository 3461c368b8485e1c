use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kwdash")]
#[command(about = "A keyword analysis dashboard with recallable snapshots")]
#[command(version)]
pub struct Cli {
    /// Database file holding the snapshot archive
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive dashboard session
    Session(SessionArgs),

    /// List archived snapshots
    List(ListArgs),

    /// Display a stored snapshot (latest by default)
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Number of keyword slots per analysis
    #[arg(long)]
    pub slots: Option<usize>,

    /// Simulated analysis latency, e.g. "1500ms" or "2s"
    #[arg(long)]
    pub delay: Option<String>,

    /// Searches granted per login
    #[arg(long)]
    pub quota: Option<u32>,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Output the whole archive as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Archive position of the snapshot
    pub index: Option<usize>,

    /// Output as JSON
    #[arg(long, default_value_t = false, conflicts_with = "html")]
    pub json: bool,

    /// Output as HTML fragments
    #[arg(long, default_value_t = false)]
    pub html: bool,
}

impl ShowArgs {
    pub fn format(&self) -> crate::report::Format {
        if self.json {
            crate::report::Format::Json
        } else if self.html {
            crate::report::Format::Html
        } else {
            crate::report::Format::Table
        }
    }
}
