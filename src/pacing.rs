//! Per-file output pacing

use std::{thread, time::Duration};

/// Strategy invoked right before a file path is printed
pub trait Pacer {
    fn pause(&self);
}

/// Blocks the current thread for a constant duration
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(crate::get_default_delay())
    }
}

impl Pacer for FixedDelay {
    fn pause(&self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

/// Does not wait at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) {}
}
