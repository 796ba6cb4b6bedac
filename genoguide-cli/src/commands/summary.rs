//! Summary command: the dashboard for an optional gene, chromosome and query selection

use anyhow::{Context, Result};
use genoguide_core::{format_base_pairs, format_locus, Dashboard, ViewState};

use super::{open_source, print_json};
use crate::config::Config;
use crate::error::CliError;

pub fn execute(
    config: &Config,
    gene: Option<String>,
    chromosome: Option<String>,
    query: Option<String>,
) -> Result<()> {
    let source = open_source(config)?;

    let mut state = ViewState::default();
    if let Some(symbol) = gene {
        state.select_gene(symbol);
    }
    if let Some(name) = chromosome {
        state.select_chromosome(name);
    }
    if let Some(query) = query {
        state.set_query(query);
    }

    let dashboard = state
        .refresh(&source, &config.marker_params(), config.search.limit)
        .map_err(CliError::from)
        .context("Failed to assemble dashboard")?;

    if config.is_json() {
        print_json(&dashboard)?;
    } else {
        print!("{}", render(&state, &dashboard));
    }

    Ok(())
}

pub fn render(state: &ViewState, dashboard: &Dashboard) -> String {
    let summary = &dashboard.summary;
    let mut out = String::new();

    out.push_str(&format!("Primary chromosomes: {}\n", summary.primary_chromosomes));
    out.push_str(&format!("Total length:        {}\n", format_base_pairs(summary.total_length)));
    out.push_str(&format!("Scaffolds:           {}\n", summary.scaffolds));

    if let Some(longest) = dashboard.karyotype.iter().find(|r| r.scale == 100.0) {
        out.push_str(&format!(
            "Longest:             {} ({})\n",
            longest.name,
            format_base_pairs(longest.length)
        ));
    }

    if let Some(name) = &state.selected_chromosome {
        match &dashboard.selected_chromosome {
            Some(record) => out.push_str(&format!(
                "Chromosome:          {} ({}, {:.1}% of longest)\n",
                record.name,
                format_base_pairs(record.length),
                record.scale
            )),
            None => out.push_str(&format!("Chromosome:          {} (not a primary chromosome)\n", name)),
        }
    }

    if let Some(symbol) = &state.selected_gene {
        match &dashboard.selected_gene {
            Some(view) => out.push_str(&format!(
                "Gene:                {} at {}\n",
                view.gene.label(),
                format_locus(&view.gene)
            )),
            None => out.push_str(&format!("Gene:                {} (not found)\n", symbol)),
        }
    }

    if !state.search_query.trim().is_empty() {
        out.push_str(&format!(
            "Search '{}':        {} result(s)\n",
            state.search_query,
            dashboard.search_results.len()
        ));
        for result in &dashboard.search_results {
            out.push_str(&format!("  {:<14} {}\n", result.gene.label(), format_locus(&result.gene)));
        }
    }

    out
}
