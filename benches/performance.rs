//! Performance benchmarks for the symbol picker.
//!
//! Run with: cargo bench
//!
//! Target performance:
//! - Catalog assembly: < 10ms for 6000 symbols
//! - Search latency: < 16ms per keystroke

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use symbol_picker::core::search::SearchRanker;
use symbol_picker::platform::ResourceTables;
use symbol_picker::services::catalog::{assemble_catalog, Catalog};
use symbol_picker::{SymbolPicker, TopSymbols};

const SHAPES: [&str; 8] = [
    "circle", "square", "trash", "folder", "star", "heart", "cloud", "person",
];
const VARIANTS: [&str; 6] = ["fill", "slash", "badge", "circle", "square", "inverse"];

/// Synthetic tables similar in size and naming to a real glyph bundle.
fn synthetic_tables(count: usize) -> ResourceTables {
    let names: Vec<String> = (0..count)
        .map(|i| {
            format!(
                "{}.{}.{}",
                SHAPES[i % SHAPES.len()],
                VARIANTS[(i / SHAPES.len()) % VARIANTS.len()],
                i
            )
        })
        .collect();

    let search_tokens: HashMap<String, Vec<String>> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let tokens = vec![
                format!("{} shape", SHAPES[(i + 3) % SHAPES.len()]),
                format!("symbol number {}", i),
            ];
            (name.clone(), tokens)
        })
        .collect();

    ResourceTables {
        available: names.iter().cloned().collect::<BTreeSet<_>>(),
        order: names.iter().take(count / 2).cloned().collect(),
        search_tokens,
    }
}

/// Benchmark merging the three tables into a catalog.
fn bench_catalog_assembly(c: &mut Criterion) {
    let tables = synthetic_tables(6000);

    c.bench_function("assemble_catalog_6000", |b| {
        b.iter(|| black_box(assemble_catalog(black_box(tables.clone()))))
    });
}

/// Benchmark ranking across typical query shapes.
fn bench_rank(c: &mut Criterion) {
    let catalog: Catalog = Arc::from(assemble_catalog(synthetic_tables(6000)));
    let ranker = SearchRanker::new();

    let queries = ["t", "trash", "fill", "heart shape", "symbol number 42", "zzz"];

    let mut group = c.benchmark_group("rank");

    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| black_box(ranker.rank(black_box(query), &catalog)))
        });
    }

    group.finish();
}

/// Benchmark building the prioritized default view.
fn bench_default_view(c: &mut Criterion) {
    let catalog: Catalog = Arc::from(assemble_catalog(synthetic_tables(6000)));
    let top = TopSymbols::defaults();

    c.bench_function("picker_default_view", |b| {
        b.iter(|| black_box(SymbolPicker::new(Arc::clone(&catalog), top)))
    });
}

criterion_group!(
    benches,
    bench_catalog_assembly,
    bench_rank,
    bench_default_view,
);

criterion_main!(benches);
