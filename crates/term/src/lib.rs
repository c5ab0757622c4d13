//! Terminal "game renderer" module.
//!
//! This is a small rendering layer for the bouncing-ball box. It renders into
//! a flat framebuffer that is then flushed to a terminal backend in a single
//! write per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep frame building pure so it can be checked without a terminal
//! - Reuse one buffer across frames (no per-frame allocation)

pub mod box_view;
pub mod fb;
pub mod renderer;

pub use tui_bounce_core as core;
pub use tui_bounce_types as types;

pub use box_view::{fps_label, BoxView, FpsLabel};
pub use fb::FrameBuffer;
pub use renderer::{encode_frame_into, TerminalRenderer};
