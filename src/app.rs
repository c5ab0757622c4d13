//! Main loop: time → physics → render → FPS stats → pacing.

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use anyhow::Result;

use crate::core::RuntimeState;
use crate::shutdown::ShutdownFlag;
use crate::term::{BoxView, FrameBuffer, TerminalRenderer};
use crate::types::Config;

/// Upper bound on the number of ticks to run, mainly for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickLimit {
    #[default]
    Unbounded,
    Ticks(u64),
}

impl TickLimit {
    fn reached(self, ticks: u64) -> bool {
        matches!(self, TickLimit::Ticks(max) if ticks >= max)
    }
}

/// Run ticks until shutdown is requested (or the limit is hit).
///
/// The flag is checked once at the top of each iteration, so a tick that has
/// started always renders before the loop exits. Returns the number of ticks.
pub fn drive<W: Write>(
    config: &Config,
    state: &mut RuntimeState,
    term: &mut TerminalRenderer<W>,
    shutdown: &ShutdownFlag,
    limit: TickLimit,
) -> Result<u64> {
    let view = BoxView::new();
    let mut fb = FrameBuffer::new(config.width, config.height);
    let mut ticks = 0u64;

    while !shutdown.is_requested() && !limit.reached(ticks) {
        let tick_start = Instant::now();

        state.step(tick_start, config);
        view.render_into(state.ball(), state.pacer().current_fps(), config, &mut fb);
        term.draw(&fb)?;
        state.finish_tick();
        ticks += 1;

        if let Some(remaining) = state.pacer().remaining_sleep(tick_start, Instant::now()) {
            thread::sleep(remaining);
        }
    }

    Ok(ticks)
}

/// Full run against `out`: hide cursor, loop, restore, report.
///
/// The terminal is restored and the peak FPS reported whether the loop ended
/// by shutdown request or by error; a loop error is returned afterwards.
pub fn run_with<W: Write>(
    config: &Config,
    out: W,
    shutdown: &ShutdownFlag,
    limit: TickLimit,
) -> Result<RunSummary> {
    let mut state = RuntimeState::new(config, Instant::now());
    let mut term = TerminalRenderer::new(out);
    term.enter()?;

    let outcome = drive(config, &mut state, &mut term, shutdown, limit);

    let restored = term.exit();
    let highest_fps = state.stats().highest_fps;
    let reported = term.report_highest_fps(highest_fps);

    let ticks = outcome?;
    restored?;
    reported?;

    if shutdown.is_requested() {
        log::info!("shutdown requested after {ticks} ticks");
    }
    log::info!("highest fps: {highest_fps:.1}");
    Ok(RunSummary { ticks, highest_fps })
}

/// Run on stdout until a signal arrives.
pub fn run(config: &Config, shutdown: &ShutdownFlag) -> Result<RunSummary> {
    run_with(config, io::stdout(), shutdown, TickLimit::Unbounded)
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub highest_fps: f64,
}
