//! tui-bounce (workspace facade crate).
//!
//! The simulation and rendering live in dedicated crates under `crates/`;
//! this package re-exports them as `tui_bounce::{core,term,types}` and adds
//! the application glue (CLI, signal handling, main loop).

pub mod app;
pub mod cli;
pub mod shutdown;

pub use tui_bounce_core as core;
pub use tui_bounce_term as term;
pub use tui_bounce_types as types;
