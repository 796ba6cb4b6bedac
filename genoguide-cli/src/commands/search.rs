//! Search command: case-insensitive gene symbol prefix search

use anyhow::{Context, Result};
use genoguide_core::{format_locus, view, GeneView, GenomeDataSource, MarkerParams};

use super::{open_source, print_json};
use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config, query: String, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(config.search.limit);
    if limit == 0 {
        return Err(CliError::validation("--limit must be at least 1").into());
    }

    let source = open_source(config)?;
    let results = find_genes(&source, &query, limit, &config.marker_params())?;

    log::info!("Found {} genes matching '{}'", results.len(), query);

    if config.is_json() {
        print_json(&results)?;
    } else {
        print!("{}", render_table(&results));
    }

    Ok(())
}

pub fn find_genes<S: GenomeDataSource + ?Sized>(
    source: &S,
    query: &str,
    limit: usize,
    params: &MarkerParams,
) -> Result<Vec<GeneView>> {
    view::search_view(source, query, limit, params)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to search genes for '{}'", query))
}

pub fn render_table(results: &[GeneView]) -> String {
    if results.is_empty() {
        return "No matching genes\n".to_string();
    }

    let mut out = format!("{:<14} {:<18} {:<6} {}\n", "SYMBOL", "GENE ID", "STRAND", "LOCATION");
    for result in results {
        let gene = &result.gene;
        out.push_str(&format!(
            "{:<14} {:<18} {:<6} {}\n",
            gene.label(),
            gene.gene_id,
            gene.strand.to_string(),
            format_locus(gene)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::test_support::FailingSource;
    use genoguide_core::{ChromosomeRef, Gene, Strand};

    #[test]
    fn test_render_table() {
        let chrm = ChromosomeRef { name: "chrM".to_string(), length: 16_569 };
        let results = vec![
            GeneView {
                gene: Gene::new(3, "ENSG00000198888", 3_307, 4_262, Strand::Forward, chrm.clone())
                    .with_symbol("MT-ND1"),
                marker: None,
            },
            GeneView {
                gene: Gene::new(4, "ENSG00000198763", 4_470, 5_511, Strand::Forward, chrm),
                marker: None,
            },
        ];

        let table = render_table(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("MT-ND1 "));
        assert!(lines[1].ends_with("chrM:3,307-4,262"));
        // no symbol falls back to the stable gene id
        assert!(lines[2].starts_with("ENSG00000198763 "));
    }

    #[test]
    fn test_source_failure_is_a_cli_error() {
        let err = find_genes(&FailingSource, "tp", 10, &MarkerParams::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to search genes for 'tp'"));
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "No matching genes\n");
    }
}
