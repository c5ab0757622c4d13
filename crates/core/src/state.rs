//! Runtime state - everything the main loop mutates between ticks.

use std::time::Instant;

use crate::ball::{Ball, Bounce};
use crate::pacer::{FramePacer, FrameStats};
use crate::types::Config;

/// Ball and frame statistics for one run.
///
/// Owned by the loop driver and passed by mutable reference; nothing in here
/// is touched from a signal context.
#[derive(Debug, Clone)]
pub struct RuntimeState {
    ball: Ball,
    pacer: FramePacer,
}

impl RuntimeState {
    pub fn new(config: &Config, now: Instant) -> Self {
        Self {
            ball: Ball::spawn(config),
            pacer: FramePacer::new(config.target_frame_time(), now),
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn stats(&self) -> &FrameStats {
        self.pacer.stats()
    }

    /// First half of a tick: account the frame and integrate physics.
    pub fn step(&mut self, now: Instant, config: &Config) -> Bounce {
        let delta_time = self.pacer.begin_tick(now);
        self.ball.update(delta_time, config)
    }

    /// Second half of a tick, after the frame has been drawn.
    pub fn finish_tick(&mut self) {
        self.pacer.sample_highest();
    }
}
