//! Directory-backed resource provider.
//!
//! Reads the catalog tables from JSON files laid out like the platform glyph
//! bundle:
//! - `name_availability.json`: `{ "symbols": { "<name>": "<release>" } }`
//! - `symbol_order.json`: `["<name>", ...]`
//! - `symbol_search.json`: `{ "<name>": ["<alias>", ...] }`

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ResourceKind, ResourceProvider, ResourceTables};
use crate::error::{PickerError, PickerResult};

#[derive(Debug, Deserialize)]
struct NameAvailability {
    symbols: HashMap<String, String>,
}

/// Provider reading resource files from a single directory.
#[derive(Debug, Clone)]
pub struct BundleProvider {
    root: PathBuf,
}

impl BundleProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this provider reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing a resource.
    pub fn path_for(&self, kind: ResourceKind) -> PathBuf {
        self.root.join(format!("{}.json", kind.stem()))
    }

    async fn read_table<T: DeserializeOwned>(&self, kind: ResourceKind) -> PickerResult<T> {
        let path = self.path_for(kind);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| PickerError::unavailable(kind, format!("{}: {}", path.display(), e)))?;

        serde_json::from_slice(&bytes).map_err(|e| PickerError::unavailable(kind, e.to_string()))
    }
}

impl ResourceProvider for BundleProvider {
    fn is_available(&self) -> bool {
        ResourceKind::ALL.iter().all(|&kind| {
            let path = self.path_for(kind);
            let readable = path.is_file() && std::fs::File::open(&path).is_ok();
            if !readable {
                tracing::debug!("Resource {} missing at {}", kind, path.display());
            }
            readable
        })
    }

    async fn load_tables(&self) -> PickerResult<ResourceTables> {
        let (names, order, search_tokens) = tokio::try_join!(
            self.read_table::<NameAvailability>(ResourceKind::NameAvailability),
            self.read_table::<Vec<String>>(ResourceKind::SymbolOrder),
            self.read_table::<HashMap<String, Vec<String>>>(ResourceKind::SymbolSearch),
        )?;

        let available: BTreeSet<String> = names.symbols.into_keys().collect();

        tracing::debug!(
            "Loaded resources from {}: {} available, {} ordered, {} with tokens",
            self.root.display(),
            available.len(),
            order.len(),
            search_tokens.len()
        );

        Ok(ResourceTables {
            available,
            order,
            search_tokens,
        })
    }
}
