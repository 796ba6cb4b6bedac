//! Gene command: exact symbol lookup and its marker on the chromosome bar

use anyhow::{Context, Result};
use genoguide_core::{
    format_base_pairs, format_locus, view, GeneView, GenomeDataSource, MarkerParams,
};

use super::{open_source, print_json, track, BAR_WIDTH};
use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config, symbol: String) -> Result<()> {
    let source = open_source(config)?;
    let params = config.marker_params();

    let gene_view = find_gene(&source, &symbol, &params)?;

    if config.is_json() {
        print_json(&gene_view)?;
    } else {
        print!("{}", render(&gene_view));
    }

    Ok(())
}

/// Exact-symbol lookup; a missing gene is a [`CliError::NotFound`].
pub fn find_gene<S: GenomeDataSource + ?Sized>(
    source: &S,
    symbol: &str,
    params: &MarkerParams,
) -> Result<GeneView> {
    view::gene_view(source, symbol, params)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to look up gene {}", symbol))?
        .ok_or_else(|| CliError::not_found("gene", symbol).into())
}

pub fn render(gene_view: &GeneView) -> String {
    let gene = &gene_view.gene;
    let mut out = String::new();

    out.push_str(&format!("Symbol:     {}\n", gene.label()));
    out.push_str(&format!("Gene ID:    {}\n", gene.gene_id));
    out.push_str(&format!("Location:   {}\n", format_locus(gene)));
    out.push_str(&format!("Strand:     {}\n", gene.strand));
    out.push_str(&format!("Length:     {} bp\n", format_base_pairs(gene.span())));
    out.push_str(&format!(
        "Chromosome: {} ({})\n",
        gene.chromosome.name,
        format_base_pairs(gene.chromosome.length)
    ));

    match &gene_view.marker {
        Some(marker) => {
            out.push_str(&format!(
                "Marker:     {:.2}% (width {:.3}%, center {:.2}%)\n",
                marker.start_percent, marker.width_percent, marker.center_percent
            ));
            out.push_str(&format!(
                "            [{}]\n",
                track(marker.start_percent, marker.width_percent, BAR_WIDTH)
            ));
        }
        None => out.push_str("Marker:     outside chromosome bounds\n"),
    }

    out
}
