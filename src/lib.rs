//! Symbol picker - browse and search a catalog of named symbols.
//!
//! The picker loads a catalog of symbols from three resource tables, shows a
//! prioritized default view and re-ranks the catalog on every query change.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`platform`] - Resource providers supplying the raw catalog tables
//! - [`services`] - Catalog assembly and the once-per-process cache
//! - [`core`] - Search ranking, priority ordering and picker state
//! - [`config`] - Configuration loading and management
//! - [`cli`] - Command line surface used by the binary
//!
//! # Example
//!
//! ```ignore
//! use symbol_picker::{BundleProvider, CatalogLoader, SymbolPicker, TopSymbols};
//!
//! let loader = CatalogLoader::new(BundleProvider::new("/path/to/resources"));
//! let mut picker = SymbolPicker::open(&loader, TopSymbols::defaults()).await;
//!
//! picker.set_query("trash");
//! for symbol in picker.visible() {
//!     println!("{}", symbol.name);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod platform;
pub mod services;

mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use crate::core::{PickerEvent, SearchRanker, SymbolPicker, TopSymbols};
pub use error::{PickerError, PickerResult};
pub use platform::{BundleProvider, MemoryProvider, ResourceKind, ResourceProvider};
pub use services::catalog::{Catalog, CatalogLoader, SymbolEntry};
