//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the ball physics and the frame-rate bookkeeping. It has
//! **no dependencies** on the terminal or on wall-clock reads: every time
//! value is passed in by the caller, which keeps it deterministic under test.
//!
//! # Module Structure
//!
//! - [`ball`]: ball position/velocity and wall reflection
//! - [`pacer`]: tick timing, rolling FPS window and pacing sleeps
//! - [`state`]: [`RuntimeState`] bundling both for the loop driver
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tui_bounce_core::RuntimeState;
//! use tui_bounce_types::Config;
//!
//! let config = Config::default();
//! let t0 = Instant::now();
//! let mut state = RuntimeState::new(&config, t0);
//!
//! state.step(t0 + Duration::from_millis(16), &config);
//! state.finish_tick();
//!
//! assert!(state.ball().x > 5.0);
//! ```

pub mod ball;
pub mod pacer;
pub mod state;

pub use tui_bounce_types as types;

pub use ball::{Ball, Bounce};
pub use pacer::{FramePacer, FrameStats};
pub use state::RuntimeState;
