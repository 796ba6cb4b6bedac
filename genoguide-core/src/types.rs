use serde::{Deserialize, Serialize};
use std::fmt;

pub type Position = u64;
pub type ChromosomeId = i64;

/// A chromosome record as listed by the genome data service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome {
    pub id: ChromosomeId,
    pub name: String,
    /// Length in base pairs, always > 0 once decoded.
    pub length: Position,
}

impl Chromosome {
    pub fn new(id: ChromosomeId, name: impl Into<String>, length: Position) -> Self {
        Self {
            id,
            name: name.into(),
            length,
        }
    }

    pub fn to_ref(&self) -> ChromosomeRef {
        ChromosomeRef {
            name: self.name.clone(),
            length: self.length,
        }
    }
}

/// The owning chromosome embedded in a gene payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChromosomeRef {
    pub name: String,
    pub length: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn parse(s: &str) -> Option<Strand> {
        match s {
            "+" => Some(Strand::Forward),
            "-" => Some(Strand::Reverse),
            _ => None,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    pub id: i64,
    /// Stable accession, e.g. `ENSG00000012048`.
    pub gene_id: String,
    pub symbol: Option<String>,
    pub start: Position,
    pub end: Position,
    pub strand: Strand,
    pub chromosome: ChromosomeRef,
}

impl Gene {
    pub fn new(
        id: i64,
        gene_id: impl Into<String>,
        start: Position,
        end: Position,
        strand: Strand,
        chromosome: ChromosomeRef,
    ) -> Self {
        Self {
            id,
            gene_id: gene_id.into(),
            symbol: None,
            start,
            end,
            strand,
            chromosome,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Symbol when known, accession otherwise.
    pub fn label(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.gene_id)
    }

    pub fn span(&self) -> Position {
        self.end.saturating_sub(self.start)
    }
}

/// Display category of a chromosome in the karyotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Autosome,
    X,
    Y,
}

impl ColorClass {
    pub fn for_name(name: &str) -> ColorClass {
        match name {
            "chrX" => ColorClass::X,
            "chrY" => ColorClass::Y,
            _ => ColorClass::Autosome,
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorClass::Autosome => write!(f, "autosome"),
            ColorClass::X => write!(f, "X"),
            ColorClass::Y => write!(f, "Y"),
        }
    }
}

/// One bar of the karyotype, scaled against the longest primary chromosome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub id: ChromosomeId,
    pub name: String,
    pub label: String,
    pub length: Position,
    /// Relative height in percent, within [0, 100].
    pub scale: f64,
    pub color: ColorClass,
}

impl From<&LayoutRecord> for Chromosome {
    fn from(record: &LayoutRecord) -> Self {
        Chromosome::new(record.id, record.name.clone(), record.length)
    }
}

/// Placement of a gene on its chromosome bar, all values in percent of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneMarker {
    pub start_percent: f64,
    pub raw_width_percent: f64,
    pub width_percent: f64,
    pub center_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCount {
    pub symbol: String,
    pub count: u64,
}
