//! Composition command: base shares of a named statistic or a sequence file

use anyhow::{Context, Result};
use genoguide_core::{count_bases, format_thousands, io::read_payload, view, CompositionView};
use std::path::{Path, PathBuf};

use super::{bar, open_source, print_json, BAR_WIDTH};
use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config, stat_name: Option<String>, sequence: Option<PathBuf>) -> Result<()> {
    let composition = match (stat_name, sequence) {
        (_, Some(path)) => sequence_composition(&path)?,
        (Some(name), None) => named_composition(config, &name)?,
        (None, None) => {
            let source = open_source(config)?;
            let names: Vec<&str> = source.statistic_names().collect();
            if config.is_json() {
                print_json(&names)?;
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
            return Ok(());
        }
    };

    if config.is_json() {
        print_json(&composition)?;
    } else {
        print!("{}", render_table(&composition));
    }

    Ok(())
}

fn named_composition(config: &Config, name: &str) -> Result<CompositionView> {
    let source = open_source(config)?;
    let composition = view::composition_view(&source, name)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to load statistic {}", name))?;

    match composition {
        Some(composition) => Ok(composition),
        None => Err(CliError::not_found("statistic", name)
            .with_available(source.statistic_names())
            .into()),
    }
}

/// Tally a plain or FASTA sequence file; header lines and whitespace are skipped.
fn sequence_composition(path: &Path) -> Result<CompositionView> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()).into());
    }

    log::info!("Counting bases in: {}", path.display());
    let text = read_payload(path)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let residues: Vec<u8> = text
        .lines()
        .filter(|line| !line.starts_with('>'))
        .flat_map(|line| line.bytes().filter(|b| !b.is_ascii_whitespace()))
        .collect();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(CompositionView::new(name, &count_bases(&residues)))
}

pub fn render_table(composition: &CompositionView) -> String {
    let mut out = format!(
        "{} ({} bases, GC {:.2}%)\n",
        composition.name,
        format_thousands(composition.total),
        composition.gc_content
    );

    if composition.shares.is_empty() {
        out.push_str("No bases counted\n");
        return out;
    }

    out.push_str(&format!("{:<6} {:>14} {:>8}  {}\n", "BASE", "COUNT", "SHARE", "BAR"));
    for share in &composition.shares {
        out.push_str(&format!(
            "{:<6} {:>14} {:>7.2}%  {}\n",
            share.symbol,
            format_thousands(share.count),
            share.percent,
            bar(share.percent, BAR_WIDTH)
        ));
    }
    out
}
