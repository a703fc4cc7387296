//! Text set library store.
//!
//! The bundled catalog is parsed lazily, the first time a text sets pane asks
//! for it, and then shared read-only.

use shared::{CatalogError, TextSetCatalog};
use std::sync::Arc;
use zoon::*;

use crate::debug_utils::debug_critical;

static BUNDLED_CATALOG: &str = include_str!("../catalog/text_sets.json");

#[derive(Clone, Debug, Default)]
pub enum LibraryState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Arc<TextSetCatalog>),
    Failed(String),
}

impl LibraryState {
    pub fn catalog(&self) -> Option<Arc<TextSetCatalog>> {
        match self {
            LibraryState::Loaded(catalog) => Some(catalog.clone()),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct TextSetsLibrary {
    state: Mutable<LibraryState>,
    source: &'static str,
}

impl TextSetsLibrary {
    pub fn new(source: &'static str) -> Self {
        Self {
            state: Mutable::new(LibraryState::NotLoaded),
            source,
        }
    }

    pub fn bundled() -> Self {
        Self::new(BUNDLED_CATALOG)
    }

    pub fn state_signal(&self) -> impl Signal<Item = LibraryState> + use<> {
        self.state.signal_cloned()
    }

    pub fn catalog_signal(&self) -> impl Signal<Item = Option<Arc<TextSetCatalog>>> + use<> {
        self.state.signal_ref(LibraryState::catalog)
    }

    /// Start loading unless a load already started. Returns whether it did.
    pub fn ensure_loaded(&self) -> bool {
        if !self.begin_load() {
            return false;
        }
        let library = self.clone();
        Task::start(async move {
            match library.parse() {
                Ok(catalog) => zoon::println!(
                    "LIBRARY: loaded {} text sets in {} categories",
                    catalog.all_items().len(),
                    catalog.categories.len()
                ),
                Err(error) => debug_critical(&format!("LIBRARY: {error}")),
            }
        });
        true
    }

    fn begin_load(&self) -> bool {
        let mut state = self.state.lock_mut();
        if !matches!(*state, LibraryState::NotLoaded) {
            return false;
        }
        *state = LibraryState::Loading;
        true
    }

    /// Parse the catalog source and publish the outcome.
    fn parse(&self) -> Result<Arc<TextSetCatalog>, CatalogError> {
        match TextSetCatalog::from_json(self.source) {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                self.state.set(LibraryState::Loaded(catalog.clone()));
                Ok(catalog)
            }
            Err(error) => {
                self.state.set(LibraryState::Failed(error.to_string()));
                Err(error)
            }
        }
    }
}
