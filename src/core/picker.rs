//! Picker state: the visible symbol list, the current query and the selection.
//!
//! The picker owns no rendering. A host feeds it query changes and taps, reads
//! back the visible entries and dismisses when it receives
//! [`PickerEvent::Selected`].

use crate::core::priority::TopSymbols;
use crate::core::search::{Query, SearchRanker};
use crate::platform::ResourceProvider;
use crate::services::catalog::{Catalog, CatalogLoader, SymbolEntry};

/// Events reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The user picked a symbol; the host should dismiss the picker
    Selected(String),
}

/// State behind one open picker.
#[derive(Debug, Clone)]
pub struct SymbolPicker {
    catalog: Catalog,
    ranker: SearchRanker,
    /// Catalog positions with top symbols first
    baseline: Vec<usize>,
    visible: Vec<usize>,
    query: String,
    selection: Option<String>,
}

impl SymbolPicker {
    /// Build a picker over a loaded catalog.
    pub fn new(catalog: Catalog, top_symbols: &TopSymbols) -> Self {
        let baseline = top_symbols.partition_indices(&catalog);
        Self {
            visible: baseline.clone(),
            baseline,
            catalog,
            ranker: SearchRanker::new(),
            query: String::new(),
            selection: None,
        }
    }

    /// Load the catalog (or reuse the cached one) and build a picker.
    pub async fn open<P: ResourceProvider>(
        loader: &CatalogLoader<P>,
        top_symbols: &TopSymbols,
    ) -> Self {
        let catalog = loader.get_all_symbols().await;
        if catalog.is_empty() {
            tracing::debug!("Opening picker with an empty catalog");
        }
        Self::new(catalog, top_symbols)
    }

    /// Start with a symbol already highlighted.
    pub fn with_selection(mut self, name: impl Into<String>) -> Self {
        self.selection = Some(name.into());
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query and recompute the visible list from the full catalog.
    ///
    /// A blank query restores the prioritized default view. Any other query is
    /// ranked against catalog order, so top symbols get no boost.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();

        self.visible = if Query::parse(&self.query).is_none() {
            self.baseline.clone()
        } else {
            self.ranker
                .rank_scored(&self.query, &self.catalog)
                .into_iter()
                .map(|scored| scored.index)
                .collect()
        };
    }

    /// Entries currently shown, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &SymbolEntry> + '_ {
        self.visible.iter().map(|&i| &self.catalog[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// True when nothing is shown, either no catalog or no match.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.as_deref() == Some(name)
    }

    /// Record a tap on a symbol.
    ///
    /// Returns `None` and keeps the previous selection if the name is not in
    /// the catalog.
    pub fn select(&mut self, name: &str) -> Option<PickerEvent> {
        if !self.catalog.iter().any(|entry| entry.name == name) {
            tracing::debug!("Ignoring selection of unknown symbol {}", name);
            return None;
        }

        self.selection = Some(name.to_string());
        Some(PickerEvent::Selected(name.to_string()))
    }
}
