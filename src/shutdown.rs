//! Signal-driven shutdown flag.
//!
//! This is the one piece of process-wide state: a single atomic flag that the
//! SIGINT/SIGTERM handlers set and the main loop polls between ticks. The
//! handlers do nothing else; all cleanup runs in normal control flow once the
//! loop has returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::{SIGINT, SIGTERM};

/// Shared "stop at the next tick boundary" flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag and register it for SIGINT and SIGTERM.
    pub fn install() -> Result<Self> {
        let flag = Self::new();
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&flag.requested))
                .with_context(|| format!("failed to register handler for signal {signal}"))?;
        }
        Ok(flag)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}
