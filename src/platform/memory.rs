//! In-memory resource provider.

use std::collections::{BTreeSet, HashMap};

use super::{ResourceKind, ResourceProvider, ResourceTables};
use crate::error::{PickerError, PickerResult};

/// Provider holding its tables in memory. A `None` table acts as missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    pub available: Option<BTreeSet<String>>,
    pub order: Option<Vec<String>>,
    pub search_tokens: Option<HashMap<String, Vec<String>>>,
}

impl MemoryProvider {
    /// Build a provider with all three tables present.
    pub fn new<N, O, T, S>(available: N, order: O, search_tokens: T) -> Self
    where
        N: IntoIterator<Item = S>,
        O: IntoIterator<Item = S>,
        T: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        Self {
            available: Some(available.into_iter().map(Into::into).collect()),
            order: Some(order.into_iter().map(Into::into).collect()),
            search_tokens: Some(
                search_tokens
                    .into_iter()
                    .map(|(name, tokens)| {
                        (name.into(), tokens.into_iter().map(Into::into).collect())
                    })
                    .collect(),
            ),
        }
    }

    /// Drop one table, simulating a missing resource.
    pub fn without(mut self, kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::NameAvailability => self.available = None,
            ResourceKind::SymbolOrder => self.order = None,
            ResourceKind::SymbolSearch => self.search_tokens = None,
        }
        self
    }

    fn missing(&self) -> Option<ResourceKind> {
        if self.available.is_none() {
            Some(ResourceKind::NameAvailability)
        } else if self.order.is_none() {
            Some(ResourceKind::SymbolOrder)
        } else if self.search_tokens.is_none() {
            Some(ResourceKind::SymbolSearch)
        } else {
            None
        }
    }
}

impl ResourceProvider for MemoryProvider {
    fn is_available(&self) -> bool {
        self.missing().is_none()
    }

    async fn load_tables(&self) -> PickerResult<ResourceTables> {
        if let Some(kind) = self.missing() {
            return Err(PickerError::unavailable(kind, "table not provided"));
        }

        Ok(ResourceTables {
            available: self.available.clone().unwrap_or_default(),
            order: self.order.clone().unwrap_or_default(),
            search_tokens: self.search_tokens.clone().unwrap_or_default(),
        })
    }
}
