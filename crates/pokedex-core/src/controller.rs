// ── Pokedex controller ──
//
// Owns the engine state and the catalog source. Every intent goes
// through one reducer step under `watch::Sender::send_modify`; effects
// requested by the reducer run here and report back as new intents.
// Front-ends that fire intents without awaiting them go through the
// intent queue, which applies them one at a time in send order.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use pokedex_api::{PokeApiClient, TransportConfig};

use crate::catalog;
use crate::config::CatalogConfig;
use crate::engine::{self, Effect, EngineState, Intent};
use crate::error::CoreError;
use crate::model::{FilterField, NamedResource, PokemonType};
use crate::source::CatalogSource;
use crate::stream::StateStream;

// ── Pokedex ──────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<PokedexInner>`; every clone drives the same
/// state. Construction requires a [`CatalogSource`], so there is no way to
/// obtain a handle that is not wired to a catalog.
pub struct Pokedex<S: CatalogSource = PokeApiClient> {
    inner: Arc<PokedexInner<S>>,
}

struct PokedexInner<S> {
    config: CatalogConfig,
    source: S,
    state: watch::Sender<Arc<EngineState>>,
}

impl<S: CatalogSource> Clone for Pokedex<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Pokedex<PokeApiClient> {
    /// Build a handle backed by the HTTP catalog client. Does not fetch
    /// anything; call [`initialize()`](Self::initialize) next.
    pub fn connect(config: CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::with_timeout(config.timeout);
        let client = PokeApiClient::new(config.base_url.as_str(), &transport)?;
        debug!(base_url = %config.base_url, "catalog client ready");
        Ok(Self::new(client, config))
    }
}

impl<S: CatalogSource> Pokedex<S> {
    pub fn new(source: S, config: CatalogConfig) -> Self {
        let (state, _) = watch::channel(Arc::new(EngineState::default()));
        Self {
            inner: Arc::new(PokedexInner {
                config,
                source,
                state,
            }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    // ── State access ─────────────────────────────────────────────

    /// Current state snapshot.
    pub fn snapshot(&self) -> Arc<EngineState> {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.inner.state.subscribe())
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Load the type roster and the first roster page concurrently.
    ///
    /// Both outcomes are committed to state. Returns the first failure,
    /// which has also been recorded as the terminal error.
    pub async fn initialize(&self) -> Result<(), CoreError> {
        let config = &self.inner.config;
        info!(
            base_url = %config.base_url,
            page_size = config.page_size,
            offset = config.offset,
            "initializing catalog"
        );

        let (types, roster) = tokio::join!(
            catalog::load_types(&self.inner.source),
            catalog::load_roster(&self.inner.source, config.page_size, config.offset),
        );

        let mut first_error = None;
        for outcome in [types.map(Intent::TypesLoaded), roster.map(Intent::RosterLoaded)] {
            match outcome {
                Ok(intent) => self.dispatch(intent).await,
                Err(e) => {
                    self.dispatch(Intent::LoadFailed(e.to_string())).await;
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────

    /// Apply an intent and run whatever effects it requests.
    pub async fn dispatch(&self, intent: Intent) {
        if let Some(effect) = self.apply(intent) {
            self.run_effects(effect).await;
        }
    }

    /// Apply queued intents in send order until every [`IntentQueue`]
    /// clone is dropped.
    ///
    /// Each reducer step completes before the next intent is read. Type
    /// narrowings run on their own tasks and their results are dropped
    /// once the selection has moved on.
    pub async fn process_intents(&self, mut inbox: IntentInbox) {
        while let Some(intent) = inbox.rx.recv().await {
            if let Some(effect) = self.apply(intent) {
                let dex = self.clone();
                tokio::spawn(async move { dex.run_effects(effect).await });
            }
        }
        debug!("intent queue closed");
    }

    fn apply(&self, intent: Intent) -> Option<Effect> {
        let mut effect = None;
        self.inner.state.send_modify(|state| {
            effect = engine::step(Arc::make_mut(state), intent);
        });
        effect
    }

    async fn run_effects(&self, effect: Effect) {
        let mut next = Some(effect);
        while let Some(effect) = next.take() {
            next = self.run_effect(effect).await;
        }
    }

    async fn run_effect(&self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::ResolveTypes { generation, types } => {
                debug!(generation, ?types, "resolving type selection");
                let result = catalog::resolve_members(&self.inner.source, &types).await;
                self.apply(Intent::TypesResolved { generation, result })
            }
        }
    }

    // ── Intents ──────────────────────────────────────────────────

    pub async fn search(&self, query: impl Into<String>) {
        self.dispatch(Intent::Search(query.into())).await;
    }

    pub async fn add_favourite(&self, resource: &NamedResource) {
        self.dispatch(Intent::AddFavourite(resource.name.clone()))
            .await;
    }

    pub async fn remove_favourite(&self, resource: &NamedResource) {
        self.dispatch(Intent::RemoveFavourite(resource.name.clone()))
            .await;
    }

    /// Add the resource to favourites, or remove it if already there.
    pub async fn toggle_favourite(&self, resource: &NamedResource) {
        self.dispatch(Intent::ToggleFavourite(resource.name.clone()))
            .await;
    }

    pub async fn add_filter(&self, field: FilterField, value: bool) {
        self.dispatch(Intent::AddFilter(field, value)).await;
    }

    pub async fn remove_filter(&self, field: FilterField) {
        self.dispatch(Intent::RemoveFilter(field)).await;
    }

    /// Replace the type selection and wait for its narrowing to settle.
    ///
    /// Duplicates are collapsed; more than two distinct types is rejected.
    pub async fn set_selected_types(&self, types: &[PokemonType]) -> Result<(), CoreError> {
        let distinct = engine::validate_selection(types)?;
        self.dispatch(Intent::SelectTypes(distinct)).await;
        Ok(())
    }

    /// Select or deselect one type. Selecting a third type does nothing.
    pub async fn toggle_type(&self, ty: PokemonType) {
        self.dispatch(Intent::ToggleType(ty)).await;
    }

    pub async fn clear_types(&self) {
        self.dispatch(Intent::SelectTypes(Vec::new())).await;
    }
}

// ── Intent queue ─────────────────────────────────────────────────

/// Create an ordered intent queue. Hand the inbox to
/// [`Pokedex::process_intents`] and keep the sender.
pub fn intent_queue() -> (IntentQueue, IntentInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (IntentQueue { tx }, IntentInbox { rx })
}

/// Sending half of the intent queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct IntentQueue {
    tx: mpsc::UnboundedSender<Intent>,
}

impl IntentQueue {
    /// Queue an intent behind every intent sent before it.
    ///
    /// Returns `false` once the inbox has been dropped.
    pub fn send(&self, intent: Intent) -> bool {
        self.tx.send(intent).is_ok()
    }
}

/// Receiving half of the intent queue.
#[derive(Debug)]
pub struct IntentInbox {
    rx: mpsc::UnboundedReceiver<Intent>,
}

impl IntentInbox {
    /// Take the next queued intent without waiting.
    pub fn try_recv(&mut self) -> Option<Intent> {
        self.rx.try_recv().ok()
    }
}
