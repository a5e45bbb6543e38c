// ── Reactive state stream ──
//
// Subscription type for consuming engine state changes.

use std::sync::Arc;

use tokio::sync::watch;

use crate::engine::EngineState;

/// A subscription to the engine state.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed).
pub struct StateStream {
    current: Arc<EngineState>,
    receiver: watch::Receiver<Arc<EngineState>>,
}

impl StateStream {
    pub(crate) fn new(receiver: watch::Receiver<Arc<EngineState>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation time or at the last `changed()`.
    pub fn current(&self) -> &Arc<EngineState> {
        &self.current
    }

    /// The latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<EngineState> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once every `Pokedex` handle has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<EngineState>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }
}
