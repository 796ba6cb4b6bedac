//! Command implementations for the genoguide CLI

pub mod composition;
pub mod config;
pub mod gene;
pub mod karyotype;
pub mod search;
pub mod summary;

use genoguide_core::SnapshotSource;
use serde::Serialize;

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Character width of a 100% bar in table output.
pub const BAR_WIDTH: usize = 50;

/// Open the snapshot directory named by the configuration.
pub fn open_source(config: &Config) -> CliResult<SnapshotSource> {
    let dir = &config.data.dir;
    if !dir.is_dir() {
        return Err(CliError::file_not_found(dir.clone()));
    }

    log::info!("Loading snapshot from: {}", dir.display());
    let source = SnapshotSource::load_dir(dir)?;
    Ok(source)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Horizontal bar filled to `percent` of `width` cells.
pub fn bar(percent: f64, width: usize) -> String {
    let filled = cells(percent, width);
    "#".repeat(filled)
}

/// A `width`-cell track with the span `[start, start + span)` marked.
/// Any non-zero span is drawn at least one cell wide.
pub fn track(start_percent: f64, span_percent: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let first = cells(start_percent, width).min(width - 1);
    let last = cells(start_percent + span_percent, width).clamp(first + 1, width);

    (0..width)
        .map(|i| if (first..last).contains(&i) { '|' } else { '-' })
        .collect()
}

fn cells(percent: f64, width: usize) -> usize {
    let clamped = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    (clamped * width as f64 / 100.0).round() as usize
}

#[cfg(test)]
pub(crate) mod test_support {
    use genoguide_core::io::DecodeError;
    use genoguide_core::source::SourceResult;
    use genoguide_core::{BaseComposition, Chromosome, Gene, GenomeDataSource, SourceError};
    use std::path::PathBuf;

    /// A source whose every query fails as if `genes.json` were malformed.
    pub struct FailingSource;

    fn decode_failure<T>() -> SourceResult<T> {
        Err(SourceError::Decode {
            path: PathBuf::from("snapshot/genes.json"),
            source: DecodeError::EmptyName,
        })
    }

    impl GenomeDataSource for FailingSource {
        fn list_chromosomes(&self) -> SourceResult<Vec<Chromosome>> {
            decode_failure()
        }

        fn gene_by_exact_name(&self, _name: &str) -> SourceResult<Option<Gene>> {
            decode_failure()
        }

        fn search_genes_by_prefix(&self, _query: &str, _limit: usize) -> SourceResult<Vec<Gene>> {
            decode_failure()
        }

        fn named_statistic(&self, _name: &str) -> SourceResult<Option<BaseComposition>> {
            decode_failure()
        }
    }
}
