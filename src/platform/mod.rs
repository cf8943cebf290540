//! Resource abstraction layer for the symbol catalog.
//!
//! This module defines the `ResourceProvider` trait that abstracts where the
//! three catalog tables come from, allowing the catalog loader to remain
//! agnostic of files, embedded data or anything else.

mod bundle;
mod memory;

pub use bundle::BundleProvider;
pub use memory::MemoryProvider;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;

/// The three tables a catalog is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Name → metadata table; only the key set is used
    NameAvailability,
    /// Explicit display order, possibly incomplete
    SymbolOrder,
    /// Name → alias strings
    SymbolSearch,
}

impl ResourceKind {
    /// All resource kinds, in load order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::NameAvailability,
        ResourceKind::SymbolOrder,
        ResourceKind::SymbolSearch,
    ];

    /// File stem used by bundle-style providers.
    pub fn stem(&self) -> &'static str {
        match self {
            ResourceKind::NameAvailability => "name_availability",
            ResourceKind::SymbolOrder => "symbol_order",
            ResourceKind::SymbolSearch => "symbol_search",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Raw tables as supplied by a provider, before assembly.
#[derive(Debug, Clone, Default)]
pub struct ResourceTables {
    /// Every name the platform can render
    pub available: BTreeSet<String>,
    /// Names in their preferred display order
    pub order: Vec<String>,
    /// Alias strings keyed by name
    pub search_tokens: HashMap<String, Vec<String>>,
}

/// Supplier of the three catalog tables.
///
/// Implementations only decide where the tables live. Shape validation
/// happens while producing [`ResourceTables`]; any failure is reported as
/// [`PickerError::ResourceUnavailable`](crate::PickerError::ResourceUnavailable).
pub trait ResourceProvider: Send + Sync {
    /// Check that all three tables are present.
    ///
    /// Must not load or cache anything and must be safe to call at any time.
    fn is_available(&self) -> bool;

    /// Fetch all three tables.
    fn load_tables(&self) -> impl Future<Output = crate::PickerResult<ResourceTables>> + Send;
}

/// Default directory searched for resource files.
///
/// - Linux: `~/.local/share/symbol-picker/resources/`
/// - macOS: `~/Library/Application Support/symbol-picker/resources/`
/// - Windows: `%APPDATA%\symbol-picker\resources\`
pub fn default_resource_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".local/share"))
                .unwrap_or_else(|| PathBuf::from("/tmp"))
        })
        .join("symbol-picker")
        .join("resources")
}
