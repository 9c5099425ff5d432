//! Main application entry point.

use clap::Parser;
use smartboard_app::{App, AppConfig, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();
    log::info!("Starting SmartBoard");

    let result = App::with_config(AppConfig::from(cli)).run();

    match result {
        Ok(summary) => {
            log::info!(
                "Done: {} events, {} paths ({} still active)",
                summary.events,
                summary.paths,
                summary.active
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
