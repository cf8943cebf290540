//! Search ranking for the symbol catalog.
//!
//! Scoring is a substring and word-overlap heuristic:
//!
//! ```text
//! score = 100 × [name contains query]
//!       +  50 × |tokens containing query|
//!       +  30 × |query words ∩ token words|
//! ```
//!
//! Entries scoring zero are dropped. The rest are ordered by descending score;
//! equal scores keep their catalog order.

use std::collections::HashSet;

use crate::services::catalog::SymbolEntry;

/// Awarded when the symbol name contains the query.
pub const NAME_MATCH: u32 = 100;

/// Awarded per search token containing the query.
pub const TOKEN_MATCH: u32 = 50;

/// Awarded per distinct query word that is also a token word.
pub const WORD_MATCH: u32 = 30;

/// A trimmed, lower-cased, non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    /// Normalize raw input. Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Distinct whitespace-separated words.
    pub fn words(&self) -> HashSet<&str> {
        self.text.split_whitespace().collect()
    }
}

/// An entry together with its score and catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub index: usize,
    pub entry: &'a SymbolEntry,
    pub score: u32,
}

/// Stateless ranker turning a query into the visible subset of a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchRanker;

impl SearchRanker {
    pub fn new() -> Self {
        Self
    }

    /// Score one entry against a parsed query.
    pub fn match_score(&self, query: &Query, entry: &SymbolEntry) -> u32 {
        self.score_with_words(query, &query.words(), entry)
    }

    fn score_with_words(
        &self,
        query: &Query,
        query_words: &HashSet<&str>,
        entry: &SymbolEntry,
    ) -> u32 {
        let needle = query.as_str();
        let mut score = 0;

        if entry.name.to_lowercase().contains(needle) {
            score += NAME_MATCH;
        }

        let tokens: Vec<String> = entry
            .search_tokens
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        let token_hits = tokens.iter().filter(|t| t.contains(needle)).count() as u32;
        score += TOKEN_MATCH * token_hits;

        let token_words: HashSet<&str> =
            tokens.iter().flat_map(|t| t.split_whitespace()).collect();
        let common = query_words.intersection(&token_words).count() as u32;
        score += WORD_MATCH * common;

        score
    }

    /// Rank a catalog, keeping scores and positions.
    ///
    /// An empty query yields every entry in catalog order with score 0.
    pub fn rank_scored<'a>(
        &self,
        raw_query: &str,
        catalog: &'a [SymbolEntry],
    ) -> Vec<ScoredEntry<'a>> {
        let Some(query) = Query::parse(raw_query) else {
            return catalog
                .iter()
                .enumerate()
                .map(|(index, entry)| ScoredEntry {
                    index,
                    entry,
                    score: 0,
                })
                .collect();
        };

        let query_words = query.words();
        let mut results: Vec<ScoredEntry<'a>> = catalog
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let score = self.score_with_words(&query, &query_words, entry);
                (score > 0).then_some(ScoredEntry {
                    index,
                    entry,
                    score,
                })
            })
            .collect();

        // Stable: ties stay in catalog order
        results.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::trace!(
            "Query {:?} matched {} of {} symbols",
            query.as_str(),
            results.len(),
            catalog.len()
        );

        results
    }

    /// Rank a catalog against raw user input.
    pub fn rank<'a>(&self, raw_query: &str, catalog: &'a [SymbolEntry]) -> Vec<&'a SymbolEntry> {
        self.rank_scored(raw_query, catalog)
            .into_iter()
            .map(|scored| scored.entry)
            .collect()
    }
}
