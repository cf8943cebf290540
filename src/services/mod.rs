pub mod catalog;

pub use catalog::{assemble_catalog, Catalog, CatalogLoader, SymbolEntry};
