//=========================================================================
// Stagecraft Binary
//
// Opens the default window: menu first, Enter to play, Escape to return.
// Log output is filtered through RUST_LOG (default: info).
//
//=========================================================================

use std::process::ExitCode;

use log::{error, info};
use stagecraft::AppBuilder;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Stagecraft starting...");

    let app = match AppBuilder::new().build() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to build screens: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app.run() {
        error!("Platform error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
