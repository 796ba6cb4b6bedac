//! Genome-wide summary figures and number formatting for display

use serde::{Deserialize, Serialize};

use crate::karyotype::is_primary;
use crate::types::{Chromosome, Gene, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeSummary {
    pub primary_chromosomes: usize,
    /// Sum of primary chromosome lengths, saturating at `u64::MAX`.
    pub total_length: Position,
    /// Scaffold contigs left out of the two figures above.
    pub scaffolds: usize,
}

impl GenomeSummary {
    pub fn from_chromosomes(chromosomes: &[Chromosome]) -> Self {
        chromosomes.iter().fold(Self::default(), |mut acc, c| {
            if is_primary(&c.name) {
                acc.primary_chromosomes += 1;
                acc.total_length = acc.total_length.saturating_add(c.length);
            } else {
                acc.scaffolds += 1;
            }
            acc
        })
    }
}

/// Compact base-pair count: `3.2B`, `249.0M`, `16.6K`, or plain digits below a thousand.
pub fn format_base_pairs(bp: Position) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    let tenths = |size: u64| (bp as u128 * 10 + size as u128 / 2) / size as u128;

    for (i, &(size, suffix)) in UNITS.iter().enumerate() {
        if bp < size {
            continue;
        }
        // 999,950 rounds to 1000.0K; show it as 1.0M instead
        let (size, suffix) = if tenths(size) >= 10_000 && i > 0 {
            UNITS[i - 1]
        } else {
            (size, suffix)
        };
        let t = tenths(size);
        return format!("{}.{}{}", t / 10, t % 10, suffix);
    }
    bp.to_string()
}

/// Digits grouped by thousands: `43044295` becomes `43,044,295`.
pub fn format_thousands(n: Position) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `chr17:43,044,295-43,125,483`
pub fn format_locus(gene: &Gene) -> String {
    format!(
        "{}:{}-{}",
        gene.chromosome.name,
        format_thousands(gene.start),
        format_thousands(gene.end)
    )
}
