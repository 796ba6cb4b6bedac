//! Karyotype ordering and scaling
//!
//! Primary chromosomes are the ones whose name carries no underscore, which
//! drops alternate and unplaced scaffolds such as `chr1_random` or
//! `chrUn_KI270302v1`. They are ordered chr1..chr22 followed by the
//! non-numeric names (chrM, chrX, chrY) and scaled against the longest one.

use std::cmp::Ordering;

use crate::error::{LayoutError, LayoutResult};
use crate::types::{Chromosome, ColorClass, LayoutRecord};

const CHR_PREFIX: &str = "chr";

/// Whether `name` is a primary chromosome rather than a scaffold contig.
pub fn is_primary(name: &str) -> bool {
    !name.contains('_')
}

/// Name without the leading `chr`, as shown under each karyotype bar.
pub fn chromosome_label(name: &str) -> &str {
    name.strip_prefix(CHR_PREFIX).unwrap_or(name)
}

/// The label as a number when it consists of ASCII digits only.
///
/// `"1a"` and `"+1"` are not numeric; they sort with the text names.
pub fn numeric_label(label: &str) -> Option<u64> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    label.parse().ok()
}

/// Numeric names first in ascending order, then the rest lexicographically.
pub fn compare_chromosome_names(a: &str, b: &str) -> Ordering {
    let (la, lb) = (chromosome_label(a), chromosome_label(b));

    let by_label = match (numeric_label(la), numeric_label(lb)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => la.cmp(lb),
    };

    // "chr1" vs "chr01" or "chr1" vs "1" tie on the label; keep the order total
    by_label.then_with(|| la.cmp(lb)).then_with(|| a.cmp(b))
}

/// Filter out scaffold contigs and sort what remains in karyotype order.
pub fn primary_ordered(chromosomes: &[Chromosome]) -> Vec<Chromosome> {
    let mut primary: Vec<Chromosome> = chromosomes
        .iter()
        .filter(|c| is_primary(&c.name))
        .cloned()
        .collect();

    primary.sort_by(|a, b| compare_chromosome_names(&a.name, &b.name));

    log::debug!(
        "Kept {} primary chromosomes out of {}",
        primary.len(),
        chromosomes.len()
    );

    primary
}

/// Scale each chromosome against the longest one in `chromosomes`.
///
/// The input is expected to be filtered and ordered already; the output
/// keeps its order. Fails with [`LayoutError::EmptyInputSet`] when there is
/// nothing to take a maximum over.
pub fn scale_karyotype(chromosomes: &[Chromosome]) -> LayoutResult<Vec<LayoutRecord>> {
    let max_length = chromosomes
        .iter()
        .map(|c| c.length)
        .max()
        .ok_or(LayoutError::EmptyInputSet)?;

    if max_length == 0 {
        // Decoded chromosomes never have a zero length, but hand-built ones can
        return Err(LayoutError::DivisionByZero);
    }

    let records = chromosomes
        .iter()
        .map(|c| LayoutRecord {
            id: c.id,
            name: c.name.clone(),
            label: chromosome_label(&c.name).to_string(),
            length: c.length,
            scale: relative_scale(c.length, max_length),
            color: ColorClass::for_name(&c.name),
        })
        .collect();

    Ok(records)
}

/// Filter, order and scale in one pass.
pub fn karyotype_layout(chromosomes: &[Chromosome]) -> LayoutResult<Vec<LayoutRecord>> {
    scale_karyotype(&primary_ordered(chromosomes))
}

fn relative_scale(length: u64, max_length: u64) -> f64 {
    (length as f64 * 100.0 / max_length as f64).clamp(0.0, 100.0)
}
