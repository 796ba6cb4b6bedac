//! Base-composition aggregation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::types::BaseCount;

/// Percentage of `part` in `whole`, reported as 0 when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    try_percent_of(part, whole).unwrap_or(0.0)
}

/// Percentage of `part` in `whole`, or [`LayoutError::DivisionByZero`].
pub fn try_percent_of(part: u64, whole: u64) -> LayoutResult<f64> {
    if whole == 0 {
        return Err(LayoutError::DivisionByZero);
    }
    Ok(part as f64 * 100.0 / whole as f64)
}

/// Base counts sorted by symbol, with their total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseComposition {
    pub entries: Vec<BaseCount>,
    pub total: u64,
}

/// A composition entry with its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseShare {
    pub symbol: String,
    pub count: u64,
    pub percent: f64,
}

impl BaseComposition {
    /// Build from a symbol-to-count mapping. Entries come out in
    /// lexicographic symbol order whatever the iteration order of `counts`.
    ///
    /// Counts and the total saturate at `u64::MAX`; use
    /// [`BaseComposition::try_from_counts`] to reject such input instead.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self::merge(counts, u64::saturating_add).unwrap_or_default()
    }

    /// Like [`BaseComposition::from_counts`], but `None` when a merged count
    /// or the total does not fit in a `u64`.
    pub fn try_from_counts<I, S>(counts: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self::merge(counts, u64::checked_add)
    }

    fn merge<I, S, A, R>(counts: I, add: A) -> Option<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
        A: Fn(u64, u64) -> R,
        R: Into<Option<u64>>,
    {
        let mut merged: BTreeMap<String, u64> = BTreeMap::new();
        for (symbol, count) in counts {
            let slot = merged.entry(symbol.into()).or_insert(0);
            *slot = add(*slot, count).into()?;
        }

        let mut total = 0u64;
        for count in merged.values() {
            total = add(total, *count).into()?;
        }

        let entries = merged
            .into_iter()
            .map(|(symbol, count)| BaseCount { symbol, count })
            .collect();

        Some(Self { entries, total })
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, symbol: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn percent(&self, symbol: &str) -> f64 {
        percent_of(self.count(symbol), self.total)
    }

    pub fn shares(&self) -> Vec<BaseShare> {
        self.entries
            .iter()
            .map(|e| BaseShare {
                symbol: e.symbol.clone(),
                count: e.count,
                percent: percent_of(e.count, self.total),
            })
            .collect()
    }

    /// GC content over the unambiguous bases; `N` and other symbols are ignored.
    pub fn gc_content(&self) -> f64 {
        let gc = self.count("G").saturating_add(self.count("C"));
        let acgt = gc
            .saturating_add(self.count("A"))
            .saturating_add(self.count("T"));
        percent_of(gc, acgt)
    }
}

/// Tally the bases of a sequence, folding lowercase (soft-masked) bases into
/// uppercase.
pub fn count_bases(sequence: &[u8]) -> BaseComposition {
    let mut counts = [0u64; 256];
    for &base in sequence {
        counts[base.to_ascii_uppercase() as usize] += 1;
    }

    BaseComposition::from_counts(
        counts
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(byte, &n)| ((byte as u8 as char).to_string(), n)),
    )
}
