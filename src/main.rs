//! Terminal bouncing-ball runner (default binary).
//!
//! Parses the box size and FPS cap, installs the shutdown signal handlers and
//! runs the animation until SIGINT or SIGTERM.

use std::process::ExitCode;

use tui_bounce::app;
use tui_bounce::cli;
use tui_bounce::shutdown::ShutdownFlag;

fn main() -> ExitCode {
    env_logger::init();

    let config = match cli::parse_from(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            // Help goes to stdout, errors (with usage) to stderr.
            let _ = err.print();
            return ExitCode::from(cli::exit_code(&err));
        }
    };
    log::info!(
        "starting: {}x{} box, max fps {}",
        config.width,
        config.height,
        config
            .max_fps
            .map_or_else(|| "unlimited".to_string(), |fps| fps.to_string())
    );

    let result = ShutdownFlag::install().and_then(|shutdown| app::run(&config, &shutdown));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
