//! Core picker logic - no I/O, no rendering.
//!
//! This module contains the parts that only compute over a loaded catalog:
//! - Search ranking
//! - Priority ordering for the default view
//! - Picker state (query, visible list, selection)

pub mod picker;
pub mod priority;
pub mod search;

pub use picker::{PickerEvent, SymbolPicker};
pub use priority::{TopSymbols, DEFAULT_TOP_SYMBOLS};
pub use search::{Query, ScoredEntry, SearchRanker};
