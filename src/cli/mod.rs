//! CLI commands for the symbol picker.
//!
//! A terminal stand-in for the picker view: check resources, list the default
//! view, or search.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::core::priority::TopSymbols;
use crate::core::search::SearchRanker;
use crate::core::SymbolPicker;
use crate::platform::{BundleProvider, ResourceProvider};
use crate::services::catalog::CatalogLoader;

#[derive(Debug, Parser)]
#[command(name = "symbol-picker")]
#[command(about = "Browse and search the symbol catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the resource files (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Maximum number of symbols to print (overrides config)
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Report whether all resource files are present
    Check,

    /// Print the default view, top symbols first
    List,

    /// Print symbols matching a query, best first
    Search {
        /// Query words
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Show the score next to each symbol
        #[arg(long)]
        scores: bool,
    },
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub success: bool,
}

/// Run a command against a loader and return what should be printed.
pub async fn execute<P: ResourceProvider>(
    command: &Commands,
    loader: &CatalogLoader<P>,
    top_symbols: &TopSymbols,
    limit: usize,
) -> Report {
    match command {
        Commands::Check => {
            let available = loader.is_available();
            let line = if available {
                "Resources available".to_string()
            } else {
                "Resources unavailable".to_string()
            };
            Report {
                lines: vec![line],
                success: available,
            }
        }
        Commands::List => {
            let picker = SymbolPicker::open(loader, top_symbols).await;
            let lines = picker
                .visible()
                .take(limit)
                .map(|entry| entry.name.clone())
                .collect();
            Report {
                lines,
                success: true,
            }
        }
        Commands::Search { query, scores } => {
            let query = query.join(" ");
            let catalog = loader.get_all_symbols().await;
            let lines = SearchRanker::new()
                .rank_scored(&query, &catalog)
                .into_iter()
                .take(limit)
                .map(|scored| {
                    if *scores {
                        format!("{:>5}  {}", scored.score, scored.entry.name)
                    } else {
                        scored.entry.name.clone()
                    }
                })
                .collect();
            Report {
                lines,
                success: true,
            }
        }
    }
}

/// Run the parsed CLI with the given configuration.
pub async fn run(cli: Cli, config: &Config) -> ExitCode {
    let directory = cli
        .resources
        .clone()
        .unwrap_or_else(|| config.resources.directory_path());
    let limit = cli
        .limit
        .unwrap_or(config.display.max_results as usize);

    tracing::debug!("Using resources from {}", directory.display());

    let loader = CatalogLoader::new(BundleProvider::new(directory));
    let top_symbols = config.picker.top_symbols();

    let report = execute(&cli.command, &loader, &top_symbols, limit).await;
    for line in &report.lines {
        println!("{}", line);
    }

    if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryProvider, ResourceKind};

    fn loader() -> CatalogLoader<MemoryProvider> {
        CatalogLoader::new(MemoryProvider::new(
            ["trash.fill", "folder.fill", "archivebox"],
            ["trash.fill", "folder.fill"],
            [
                ("trash.fill", vec!["delete", "remove"]),
                ("archivebox", vec!["archive", "box"]),
            ],
        ))
    }

    fn top() -> TopSymbols {
        ["archivebox"].into_iter().collect()
    }

    #[test]
    fn test_parse_search_joins_words() {
        let cli =
            Cli::try_parse_from(["symbol-picker", "search", "trash", "can", "--scores"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Search {
                query: vec!["trash".to_string(), "can".to_string()],
                scores: true,
            }
        );
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "symbol-picker",
            "list",
            "--resources",
            "/tmp/r",
            "--limit",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.resources, Some(PathBuf::from("/tmp/r")));
        assert_eq!(cli.limit, Some(3));
    }

    #[test]
    fn test_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["symbol-picker", "list", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["symbol-picker", "list", "--limit", "1"]).is_ok());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["symbol-picker", "search"]).is_err());
    }

    #[tokio::test]
    async fn test_list_prints_default_view() {
        let report = execute(&Commands::List, &loader(), &top(), 10).await;
        assert_eq!(report.lines, vec!["archivebox", "trash.fill", "folder.fill"]);
        assert!(report.success);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let report = execute(&Commands::List, &loader(), &top(), 1).await;
        assert_eq!(report.lines, vec!["archivebox"]);
    }

    #[tokio::test]
    async fn test_search_with_scores() {
        let command = Commands::Search {
            query: vec!["remove".to_string()],
            scores: true,
        };
        let report = execute(&command, &loader(), &top(), 10).await;
        assert_eq!(report.lines, vec!["   80  trash.fill"]);
    }

    #[tokio::test]
    async fn test_check_reports_missing_resource() {
        let loader = CatalogLoader::new(
            MemoryProvider::new(["a"], ["a"], [("a", vec!["x"])])
                .without(ResourceKind::SymbolOrder),
        );
        let report = execute(&Commands::Check, &loader, &top(), 10).await;
        assert_eq!(report.lines, vec!["Resources unavailable"]);
        assert!(!report.success);
    }
}
