//! Command-line parsing.
//!
//! `-h` is the box height, so clap's built-in help flag is disabled and help
//! is only reachable through `--help`.

use std::ffi::OsString;
use std::num::NonZeroU32;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};

use crate::types::{Config, DEFAULT_HEIGHT, DEFAULT_WIDTH};

const EXAMPLES: &str = "\
Examples:
  tui-bounce                       # Run with default size
  tui-bounce -w 80 -h 40           # Run with 80x40 box
  tui-bounce -f 60                 # Run with 60 FPS limit
  tui-bounce -w 100 -h 30 -f 30    # Run with custom size and FPS";

/// Bounce a ball inside a box in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tui-bounce",
    version,
    disable_help_flag = true,
    args_override_self = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Set box width
    #[arg(
        short = 'w',
        value_name = "WIDTH",
        default_value_t = DEFAULT_WIDTH,
        allow_hyphen_values = true,
        value_parser = parse_dimension
    )]
    pub width: u16,

    /// Set box height
    #[arg(
        short = 'h',
        value_name = "HEIGHT",
        default_value_t = DEFAULT_HEIGHT,
        allow_hyphen_values = true,
        value_parser = parse_dimension
    )]
    pub height: u16,

    /// Set maximum FPS [default: unlimited]
    #[arg(
        short = 'f',
        value_name = "FPS",
        allow_hyphen_values = true,
        value_parser = parse_fps
    )]
    pub max_fps: Option<NonZeroU32>,

    /// Show this help message
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config::new(self.width, self.height, self.max_fps)
    }
}

/// Parse arguments (including the program name) into a [`Config`].
///
/// `--help` and `--version` come back as errors too; use [`exit_code`] to
/// tell them apart from real failures. Failures always carry the usage line.
pub fn parse_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
        .map(Cli::into_config)
        .map_err(with_usage)
}

fn with_usage(mut err: clap::Error) -> clap::Error {
    if exit_code(&err) != 0 && err.get(ContextKind::Usage).is_none() {
        let usage = Cli::command().render_usage();
        err.insert(ContextKind::Usage, ContextValue::StyledStr(usage));
    }
    err
}

/// Process exit code for a parse outcome: 0 for help/version, 1 otherwise.
pub fn exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn parse_dimension(s: &str) -> Result<u16, String> {
    match s.parse::<u16>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!(
            "'{s}' is not a valid size, must be a positive integer (1-{})",
            u16::MAX
        )),
    }
}

fn parse_fps(s: &str) -> Result<NonZeroU32, String> {
    s.parse::<NonZeroU32>()
        .map_err(|_| format!("'{s}' is not a valid FPS, must be a positive integer"))
}
