//! maca - Maçã ART studio CLI
//!
//! Every command prints one JSON document on stdout; logs go to stderr or
//! the configured log file.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and check remaining credits
//! maca login --email ana@loja.com --password segredo
//! maca status --pretty
//!
//! # Generate a story and a video
//! maca generate storys --briefing "Promoção de pizza" --image foto.jpg
//! maca generate video --briefing "Forno a lenha"
//!
//! # Submit a PIX receipt
//! maca verify-payment --image comprovante.png
//! ```

use maca_cli::{Cli, CliResult, Commands, initialize_logger, run};
use maca_config::Config;
use maca_studio::{CancellationToken, Studio, StudioError};

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = execute(cli.command).await;

    let (value, code) = match result {
        Ok(value) => (value, ExitCode::SUCCESS),
        Err(e) => {
            error!("{e}");
            (json!({ "error": e.user_message() }), ExitCode::FAILURE)
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            code
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands) -> CliResult<Value> {
    let config = Config::load().map_err(StudioError::from)?;
    config.validate().map_err(StudioError::from)?;

    initialize_logger(
        config.logging.level,
        config.log_file_path().map_err(StudioError::from)?,
        config.logging.colored,
    )?;
    config.log_summary();

    let studio = Studio::from_config(&config)?;

    // Ctrl-C stops a video job between polls.
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    run(&studio, command, &cancel).await
}
