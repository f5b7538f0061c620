//! Cancellation token for superseded async work.
//!
//! The owner of a trigger (a path change, a session resync) hands a token to
//! the work it starts and cancels it when the trigger fires again or its
//! owner is torn down. The work checks the token after every await and drops
//! its result once cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
