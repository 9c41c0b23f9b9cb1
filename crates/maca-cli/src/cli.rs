use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "maca")]
#[command(about = "Maçã ART studio: marketing art generation with daily credits")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
