use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tells the read loop to stop before its next prompt.
///
/// Raising is idempotent and never blocks, so a second `exit` queued behind
/// the first is harmless.
#[derive(Debug, Clone, Default)]
pub struct ExitSignal {
    raised: Arc<AtomicBool>,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
