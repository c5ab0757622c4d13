//! Core types module - shared configuration and constants
//!
//! This crate defines the fundamental types used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the physics core, the terminal renderer and the CLI alike.
//!
//! # Box Dimensions
//!
//! The box is measured in terminal cells:
//!
//! - **Width**: 40 columns by default (indexed 0-39)
//! - **Height**: 20 rows by default (indexed 0-19)
//! - The outermost rows and columns hold the border, the ball bounces between
//!   column `0` and `width - 1` (and row `0` and `height - 1`).
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BALL_SPEED` | 30.0 | Cells per second at unit velocity |
//! | `FPS_UPDATE_INTERVAL` | 500ms | Window over which FPS is averaged |
//! | `INITIAL_HIGHEST_FPS` | 1.0 | Floor of the reported peak FPS |
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroU32;
//! use tui_bounce_types::{Config, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let config = Config::default();
//! assert_eq!(config.width, DEFAULT_WIDTH);
//! assert_eq!(config.height, DEFAULT_HEIGHT);
//! assert!(config.target_frame_time().is_none());
//!
//! let capped = Config::new(80, 40, NonZeroU32::new(60));
//! assert!(capped.target_frame_time().is_some());
//! ```

use std::num::NonZeroU32;
use std::time::Duration;

/// Default box width in columns.
pub const DEFAULT_WIDTH: u16 = 40;

/// Default box height in rows.
pub const DEFAULT_HEIGHT: u16 = 20;

/// Distance travelled per second at unit velocity, in cells.
pub const BALL_SPEED: f64 = 30.0;

/// Minimum length of one FPS averaging window.
pub const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Starting value of the peak FPS tracker.
///
/// The peak is never reported below this, even when the real frame rate is
/// lower.
pub const INITIAL_HIGHEST_FPS: f64 = 1.0;

/// Glyph used for empty cells.
pub const EMPTY_GLYPH: u8 = b' ';

/// Glyph used for the top and bottom border rows.
pub const HORIZONTAL_GLYPH: u8 = b'-';

/// Glyph used for the left and right border columns.
pub const VERTICAL_GLYPH: u8 = b'|';

/// Glyph used for the ball.
pub const BALL_GLYPH: u8 = b'O';

/// Run configuration, produced once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Box width in columns (always > 0).
    pub width: u16,
    /// Box height in rows (always > 0).
    pub height: u16,
    /// Frame-rate cap. `None` means unlimited.
    pub max_fps: Option<NonZeroU32>,
}

impl Config {
    pub const fn new(width: u16, height: u16, max_fps: Option<NonZeroU32>) -> Self {
        Self {
            width,
            height,
            max_fps,
        }
    }

    /// Largest valid x coordinate of the ball.
    pub fn max_x(&self) -> f64 {
        f64::from(self.width) - 1.0
    }

    /// Largest valid y coordinate of the ball.
    pub fn max_y(&self) -> f64 {
        f64::from(self.height) - 1.0
    }

    /// Minimum duration of one tick when a cap is configured.
    pub fn target_frame_time(&self) -> Option<Duration> {
        self.max_fps
            .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps.get())))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, None)
    }
}
