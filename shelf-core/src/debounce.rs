//! Trailing-edge debounce without owning a runtime
//!
//! A `DebounceGate` hands out tickets. Arming the gate again supersedes every
//! earlier ticket, so after the quiet period only the newest call is still
//! current. The timer itself is supplied by the caller: `tokio::time::sleep`
//! on native targets, a browser timeout on wasm.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Per-control debounce state
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Arc<AtomicU64>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new window, superseding all outstanding tickets
    pub fn arm(&self) -> DebounceTicket {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            generation: self.generation.clone(),
            issued,
        }
    }

    /// Invalidate outstanding tickets without starting a new window
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Handle for one debounced call
#[derive(Debug)]
pub struct DebounceTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl DebounceTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }

    /// Wait out `delay` using `sleep`, then report whether this call survived
    pub async fn settle<F, Fut>(&self, delay: Duration, sleep: F) -> bool
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        sleep(delay).await;
        self.is_current()
    }
}
