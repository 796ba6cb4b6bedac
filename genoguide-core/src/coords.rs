//! Gene-on-chromosome coordinate mapping

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::types::{Gene, GeneMarker, Position};

/// Narrowest marker drawn for a gene, in percent of the chromosome bar.
pub const DEFAULT_MIN_MARKER_WIDTH_PERCENT: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerParams {
    pub min_width_percent: f64,
}

impl Default for MarkerParams {
    fn default() -> Self {
        Self {
            min_width_percent: DEFAULT_MIN_MARKER_WIDTH_PERCENT,
        }
    }
}

impl MarkerParams {
    pub fn with_min_width(min_width_percent: f64) -> Self {
        Self { min_width_percent }
    }
}

/// Map the half-open span `start..end` onto a bar representing `length` bases.
///
/// Requires `start <= end <= length` and a non-empty chromosome. The center
/// is taken from the raw width, so a floored marker can sit off its center.
pub fn map_span(
    start: Position,
    end: Position,
    length: Position,
    params: &MarkerParams,
) -> LayoutResult<GeneMarker> {
    if length == 0 || start > end || end > length {
        return Err(LayoutError::InvalidCoordinate { start, end, length });
    }

    let start_percent = position_percent(start, length);
    let raw_width_percent = position_percent(end - start, length);

    Ok(GeneMarker {
        start_percent,
        raw_width_percent,
        width_percent: raw_width_percent.max(params.min_width_percent),
        center_percent: start_percent + raw_width_percent / 2.0,
    })
}

/// Marker for `gene` on its owning chromosome.
pub fn map_gene(gene: &Gene, params: &MarkerParams) -> LayoutResult<GeneMarker> {
    map_span(gene.start, gene.end, gene.chromosome.length, params)
}

fn position_percent(pos: Position, length: Position) -> f64 {
    pos as f64 * 100.0 / length as f64
}
