//! Data bridge: forwards engine state snapshots to the TUI action loop.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use pokedex_core::Pokedex;

use crate::action::Action;

/// Subscribe to the engine, start the catalog loads, and forward every
/// state change as [`Action::StateUpdated`] until cancelled.
pub async fn spawn_data_bridge(
    dex: Pokedex,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut state = dex.subscribe();
    let _ = action_tx.send(Action::StateUpdated(state.current().clone()));

    // Loads commit their own state; the bridge only needs to hear about it
    let loader_tx = action_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = dex.initialize().await {
            warn!(error = %e, "catalog failed to load");
        }
        let _ = loader_tx.send(Action::CatalogReady);
    });

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(snapshot) = state.changed() => {
                debug!(
                    generation = snapshot.generation,
                    displayed = snapshot.displayed.len(),
                    "dispatching StateUpdated"
                );
                let _ = action_tx.send(Action::StateUpdated(snapshot));
            }

            else => break,
        }
    }

    debug!("data bridge shut down");
}
