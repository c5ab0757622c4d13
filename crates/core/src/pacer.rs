//! Frame pacing and FPS statistics.
//!
//! [`FramePacer`] is driven with timestamps supplied by the caller, so the
//! loop uses `Instant::now()` while tests feed synthetic ticks.

use std::time::{Duration, Instant};

use crate::types::{FPS_UPDATE_INTERVAL, INITIAL_HIGHEST_FPS};

/// Rolling frame-rate statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Ticks counted since the window started.
    pub frame_count: u32,
    /// Start of the current averaging window.
    pub last_fps_update: Instant,
    /// FPS of the last completed window (0.0 until the first one closes).
    pub current_fps: f64,
    /// Peak of `current_fps` sampled once per tick, floored at 1.0.
    pub highest_fps: f64,
}

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self {
            frame_count: 0,
            last_fps_update: now,
            current_fps: 0.0,
            highest_fps: INITIAL_HIGHEST_FPS,
        }
    }
}

/// Measures tick timing, maintains [`FrameStats`] and computes pacing sleeps.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_frame_time: Option<Duration>,
    last_tick: Instant,
    stats: FrameStats,
}

impl FramePacer {
    /// `target_frame_time` is `None` for an uncapped loop.
    pub fn new(target_frame_time: Option<Duration>, now: Instant) -> Self {
        Self {
            target_frame_time,
            last_tick: now,
            stats: FrameStats::new(now),
        }
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn current_fps(&self) -> f64 {
        self.stats.current_fps
    }

    pub fn highest_fps(&self) -> f64 {
        self.stats.highest_fps
    }

    /// Start a tick at `now`.
    ///
    /// Returns the seconds elapsed since the previous tick started. Once the
    /// averaging window is at least [`FPS_UPDATE_INTERVAL`] long, the FPS is
    /// recomputed from the ticks counted in that window only.
    pub fn begin_tick(&mut self, now: Instant) -> f64 {
        let delta_time = now.saturating_duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        let stats = &mut self.stats;
        stats.frame_count += 1;

        let window = now.saturating_duration_since(stats.last_fps_update);
        if window >= FPS_UPDATE_INTERVAL {
            stats.current_fps = f64::from(stats.frame_count) / window.as_secs_f64();
            log::debug!(
                "fps window closed: {} frames in {:.3}s = {:.1} fps",
                stats.frame_count,
                window.as_secs_f64(),
                stats.current_fps
            );
            stats.frame_count = 0;
            stats.last_fps_update = now;
        }

        delta_time
    }

    /// Fold the current FPS into the peak. Called once per tick.
    pub fn sample_highest(&mut self) {
        let stats = &mut self.stats;
        if stats.current_fps > stats.highest_fps {
            stats.highest_fps = stats.current_fps;
        }
    }

    /// Time left to sleep so a tick started at `tick_start` lasts at least the
    /// target frame time. `None` when uncapped or the tick already overran.
    pub fn remaining_sleep(&self, tick_start: Instant, now: Instant) -> Option<Duration> {
        let target = self.target_frame_time?;
        let elapsed = now.saturating_duration_since(tick_start);
        target.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}
