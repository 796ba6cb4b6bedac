//! Genome data source contract and a snapshot-backed implementation
//!
//! The live genome data service is an external collaborator. Anything that
//! can answer its four queries implements [`GenomeDataSource`]; the layout
//! engine itself never talks to a source.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::composition::BaseComposition;
use crate::io::{self, DecodeError, NamedStatistic};
use crate::types::{Chromosome, Gene};

/// Cap applied by the service to prefix searches.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

pub const CHROMOSOMES_FILE: &str = "chromosomes.json";
pub const GENES_FILE: &str = "genes.json";
pub const STATISTICS_FILE: &str = "statistics.json";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Snapshot file not found: {0}")]
    MissingFile(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// The queries the dashboard issues against the genome data service.
pub trait GenomeDataSource {
    /// All chromosome records, scaffold contigs included.
    fn list_chromosomes(&self) -> SourceResult<Vec<Chromosome>>;

    /// The gene whose symbol equals `name` exactly.
    fn gene_by_exact_name(&self, name: &str) -> SourceResult<Option<Gene>>;

    /// Genes whose symbol starts with `query`, ignoring case, at most `limit`.
    fn search_genes_by_prefix(&self, query: &str, limit: usize) -> SourceResult<Vec<Gene>>;

    /// Base counts stored under `name`.
    fn named_statistic(&self, name: &str) -> SourceResult<Option<BaseComposition>>;
}

/// Payloads captured from the service, held in memory.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    chromosomes: Vec<Chromosome>,
    genes: Vec<Gene>,
    statistics: Vec<NamedStatistic>,
}

impl SnapshotSource {
    pub fn new(
        chromosomes: Vec<Chromosome>,
        genes: Vec<Gene>,
        statistics: Vec<NamedStatistic>,
    ) -> Self {
        Self {
            chromosomes,
            genes,
            statistics,
        }
    }

    /// Load `chromosomes.json`, `genes.json` and `statistics.json` (or their
    /// `.json.gz` variants) from `dir`. Only the chromosome listing is required.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> SourceResult<Self> {
        let dir = dir.as_ref();
        log::info!("Loading genome snapshot from: {}", dir.display());

        let chromosomes = match load_payload(dir, CHROMOSOMES_FILE, io::decode_chromosomes)? {
            Some(chromosomes) => chromosomes,
            None => return Err(SourceError::MissingFile(dir.join(CHROMOSOMES_FILE))),
        };
        let genes = load_payload(dir, GENES_FILE, io::decode_genes)?.unwrap_or_default();
        let statistics =
            load_payload(dir, STATISTICS_FILE, io::decode_statistics)?.unwrap_or_default();

        log::info!(
            "Snapshot holds {} chromosomes, {} genes, {} statistics",
            chromosomes.len(),
            genes.len(),
            statistics.len()
        );

        Ok(Self::new(chromosomes, genes, statistics))
    }

    pub fn statistic_names(&self) -> impl Iterator<Item = &str> {
        self.statistics.iter().map(|s| s.name.as_str())
    }
}

fn load_payload<T>(
    dir: &Path,
    file_name: &str,
    decode: fn(&str) -> Result<T, DecodeError>,
) -> SourceResult<Option<T>> {
    let plain = dir.join(file_name);
    let gzipped = dir.join(format!("{}.gz", file_name));

    let path = if plain.exists() {
        plain
    } else if gzipped.exists() {
        gzipped
    } else {
        log::debug!("No {} in {}", file_name, dir.display());
        return Ok(None);
    };

    let content = io::read_payload(&path).map_err(|source| SourceError::Io {
        path: path.clone(),
        source,
    })?;
    let decoded = decode(&content).map_err(|source| SourceError::Decode { path, source })?;
    Ok(Some(decoded))
}

impl GenomeDataSource for SnapshotSource {
    fn list_chromosomes(&self) -> SourceResult<Vec<Chromosome>> {
        Ok(self.chromosomes.clone())
    }

    fn gene_by_exact_name(&self, name: &str) -> SourceResult<Option<Gene>> {
        Ok(self
            .genes
            .iter()
            .find(|g| g.symbol.as_deref() == Some(name))
            .cloned())
    }

    fn search_genes_by_prefix(&self, query: &str, limit: usize) -> SourceResult<Vec<Gene>> {
        let query = query.to_lowercase();
        let mut hits: Vec<Gene> = self
            .genes
            .iter()
            .filter(|g| {
                g.symbol
                    .as_deref()
                    .map_or(false, |s| s.to_lowercase().starts_with(&query))
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| a.label().cmp(b.label()));
        hits.truncate(limit);
        Ok(hits)
    }

    fn named_statistic(&self, name: &str) -> SourceResult<Option<BaseComposition>> {
        Ok(self
            .statistics
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.composition.clone()))
    }
}
