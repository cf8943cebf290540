//! Symbol catalog loading and caching.
//!
//! The catalog is assembled once from the three resource tables: the explicit
//! display order comes first, followed by every remaining available name in
//! lexicographic order. Each entry carries its search tokens, or none.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::PickerResult;
use crate::platform::{ResourceProvider, ResourceTables};

/// One symbol with the alias strings used to find it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// Unique identifier, also the display value
    pub name: String,
    /// Aliases and descriptions; matched against but never displayed
    pub search_tokens: Vec<String>,
}

impl SymbolEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_tokens: Vec::new(),
        }
    }

    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }
}

/// Immutable catalog snapshot shared between consumers.
pub type Catalog = Arc<[SymbolEntry]>;

fn empty_catalog() -> Catalog {
    Arc::from(Vec::new())
}

/// Merge the raw tables into an ordered, deduplicated entry list.
///
/// Repeated names in the order list keep their first position. Names that are
/// only available (never ordered) follow in lexicographic order. Empty names
/// are dropped.
pub fn assemble_catalog(tables: ResourceTables) -> Vec<SymbolEntry> {
    let ResourceTables {
        available,
        order,
        mut search_tokens,
    } = tables;

    let mut seen: HashSet<String> = HashSet::with_capacity(order.len());
    let mut names: Vec<String> = Vec::with_capacity(available.len().max(order.len()));

    for name in order {
        if !name.is_empty() && seen.insert(name.clone()) {
            names.push(name);
        }
    }

    // BTreeSet iteration is already sorted
    names.extend(
        available
            .into_iter()
            .filter(|name| !name.is_empty() && !seen.contains(name)),
    );

    names
        .into_iter()
        .map(|name| {
            let tokens = search_tokens.remove(&name).unwrap_or_default();
            SymbolEntry {
                name,
                search_tokens: tokens,
            }
        })
        .collect()
}

/// Loads the catalog from a provider once and serves it from memory.
///
/// Concurrent first calls share a single load. A failed load is not cached,
/// so a later call tries again.
pub struct CatalogLoader<P> {
    provider: P,
    cache: OnceCell<Catalog>,
}

impl<P: ResourceProvider> CatalogLoader<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: OnceCell::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Report whether all three resource tables are present.
    ///
    /// Does not touch the cache.
    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    /// The cached catalog, if a load already succeeded.
    pub fn cached(&self) -> Option<Catalog> {
        self.cache.get().cloned()
    }

    /// Get the full catalog, loading it on first use.
    ///
    /// Returns an empty catalog when any resource is missing or malformed.
    pub async fn get_all_symbols(&self) -> Catalog {
        if let Some(catalog) = self.cache.get() {
            return Arc::clone(catalog);
        }

        match self.cache.get_or_try_init(|| self.load()).await {
            Ok(catalog) => Arc::clone(catalog),
            Err(e) => {
                tracing::warn!("Symbol catalog unavailable: {}", e);
                empty_catalog()
            }
        }
    }

    async fn load(&self) -> PickerResult<Catalog> {
        let tables = self.provider.load_tables().await?;
        let entries = assemble_catalog(tables);
        tracing::info!("Indexed {} symbols", entries.len());
        Ok(Catalog::from(entries))
    }
}
