//! Validating decode of genome data service JSON payloads
//!
//! The service answers with records shaped like
//!
//! ```text
//! chromosome: {"id": 1, "name": "chr1", "length": 248956422}
//! gene:       {"id": 9, "gene_id": "ENSG00000012048", "gene_name": "BRCA1",
//!              "start_pos": 43044295, "end_pos": 43125483, "strand": "-",
//!              "chromosome": {"name": "chr17", "length": 83257441}}
//! statistic:  {"stat_name": "nuclear_base_composition",
//!              "stat_value": {"A": 854963149, "C": 592966916, ...}}
//! ```
//!
//! Numbers are decoded as signed integers first so that negative values are
//! reported as invalid records instead of generic type errors.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::composition::BaseComposition;
use crate::types::{Chromosome, ChromosomeRef, Gene, Position, Strand};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Chromosome record with an empty name")]
    EmptyName,
    #[error("Invalid length for chromosome {name}: {length} (must be positive)")]
    InvalidLength { name: String, length: i64 },
    #[error("Duplicate chromosome name: {0}")]
    DuplicateChromosome(String),
    #[error("Invalid coordinates for gene {gene}: start={start}, end={end}")]
    InvalidPosition { gene: String, start: i64, end: i64 },
    #[error("Invalid strand for gene {gene}: {strand}")]
    InvalidStrand { gene: String, strand: String },
    #[error("Invalid count for {symbol} in statistic {stat}: {value}")]
    InvalidCount {
        stat: String,
        symbol: String,
        value: String,
    },
    #[error("Base counts of statistic {stat} overflow a 64-bit total")]
    CountOverflow { stat: String },
}

/// A named statistic holding base counts, e.g. `nuclear_base_composition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedStatistic {
    pub name: String,
    pub composition: BaseComposition,
}

#[derive(Debug, Deserialize)]
struct RawChromosome {
    id: i64,
    name: String,
    length: i64,
}

#[derive(Debug, Deserialize)]
struct RawChromosomeRef {
    name: String,
    length: i64,
}

#[derive(Debug, Deserialize)]
struct RawGene {
    id: i64,
    gene_id: String,
    #[serde(default)]
    gene_name: Option<String>,
    start_pos: i64,
    end_pos: i64,
    strand: String,
    chromosome: RawChromosomeRef,
}

#[derive(Debug, Deserialize)]
struct RawStatistic {
    stat_name: String,
    stat_value: Map<String, Value>,
}

fn positive_length(name: &str, length: i64) -> Result<Position, DecodeError> {
    if name.is_empty() {
        return Err(DecodeError::EmptyName);
    }
    if length <= 0 {
        return Err(DecodeError::InvalidLength {
            name: name.to_string(),
            length,
        });
    }
    Ok(length as Position)
}

impl TryFrom<RawChromosome> for Chromosome {
    type Error = DecodeError;

    fn try_from(raw: RawChromosome) -> Result<Self, DecodeError> {
        let length = positive_length(&raw.name, raw.length)?;
        Ok(Chromosome::new(raw.id, raw.name, length))
    }
}

impl TryFrom<RawChromosomeRef> for ChromosomeRef {
    type Error = DecodeError;

    fn try_from(raw: RawChromosomeRef) -> Result<Self, DecodeError> {
        let length = positive_length(&raw.name, raw.length)?;
        Ok(ChromosomeRef {
            name: raw.name,
            length,
        })
    }
}

impl TryFrom<RawGene> for Gene {
    type Error = DecodeError;

    fn try_from(raw: RawGene) -> Result<Self, DecodeError> {
        let label = raw.gene_name.clone().unwrap_or_else(|| raw.gene_id.clone());

        if raw.start_pos < 0 || raw.end_pos < 0 || raw.start_pos > raw.end_pos {
            return Err(DecodeError::InvalidPosition {
                gene: label,
                start: raw.start_pos,
                end: raw.end_pos,
            });
        }

        let strand = Strand::parse(&raw.strand).ok_or_else(|| DecodeError::InvalidStrand {
            gene: label.clone(),
            strand: raw.strand.clone(),
        })?;

        let chromosome = ChromosomeRef::try_from(raw.chromosome)?;

        Ok(Gene {
            id: raw.id,
            gene_id: raw.gene_id,
            // an empty symbol counts as missing
            symbol: raw.gene_name.filter(|s| !s.is_empty()),
            start: raw.start_pos as Position,
            end: raw.end_pos as Position,
            strand,
            chromosome,
        })
    }
}

impl TryFrom<RawStatistic> for NamedStatistic {
    type Error = DecodeError;

    fn try_from(raw: RawStatistic) -> Result<Self, DecodeError> {
        let mut counts = Vec::with_capacity(raw.stat_value.len());

        for (symbol, value) in raw.stat_value {
            match value.as_u64() {
                Some(count) => counts.push((symbol, count)),
                None => {
                    return Err(DecodeError::InvalidCount {
                        stat: raw.stat_name,
                        symbol,
                        value: value.to_string(),
                    })
                }
            }
        }

        let composition = match BaseComposition::try_from_counts(counts) {
            Some(composition) => composition,
            None => return Err(DecodeError::CountOverflow { stat: raw.stat_name }),
        };

        Ok(NamedStatistic {
            name: raw.stat_name,
            composition,
        })
    }
}

/// Decode a chromosome listing, rejecting invalid lengths and duplicate names.
pub fn decode_chromosomes(payload: &str) -> Result<Vec<Chromosome>, DecodeError> {
    let raw: Vec<RawChromosome> = serde_json::from_str(payload)?;
    let mut seen = HashSet::with_capacity(raw.len());
    let mut chromosomes = Vec::with_capacity(raw.len());

    for record in raw {
        let chromosome = Chromosome::try_from(record)?;
        if !seen.insert(chromosome.name.clone()) {
            return Err(DecodeError::DuplicateChromosome(chromosome.name));
        }
        chromosomes.push(chromosome);
    }

    Ok(chromosomes)
}

pub fn decode_gene(payload: &str) -> Result<Gene, DecodeError> {
    let raw: RawGene = serde_json::from_str(payload)?;
    Gene::try_from(raw)
}

pub fn decode_genes(payload: &str) -> Result<Vec<Gene>, DecodeError> {
    let raw: Vec<RawGene> = serde_json::from_str(payload)?;
    raw.into_iter().map(Gene::try_from).collect()
}

pub fn decode_statistic(payload: &str) -> Result<NamedStatistic, DecodeError> {
    let raw: RawStatistic = serde_json::from_str(payload)?;
    NamedStatistic::try_from(raw)
}

pub fn decode_statistics(payload: &str) -> Result<Vec<NamedStatistic>, DecodeError> {
    let raw: Vec<RawStatistic> = serde_json::from_str(payload)?;
    raw.into_iter().map(NamedStatistic::try_from).collect()
}
