//! Karyotype command: primary chromosomes as scaled bars

use anyhow::{Context, Result};
use genoguide_core::{format_base_pairs, view, LayoutRecord};

use super::{bar, open_source, print_json, BAR_WIDTH};
use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config) -> Result<()> {
    let source = open_source(config)?;
    let layout = view::karyotype_view(&source)
        .map_err(CliError::from)
        .context("Failed to build karyotype")?;

    log::info!("Karyotype has {} primary chromosomes", layout.len());

    if config.is_json() {
        print_json(&layout)?;
    } else {
        print!("{}", render_table(&layout));
    }

    Ok(())
}

pub fn render_table(layout: &[LayoutRecord]) -> String {
    if layout.is_empty() {
        return "No primary chromosomes\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<8} {:>8} {:>7}  {}\n",
        "LABEL", "COLOR", "LENGTH", "SCALE", "BAR"
    );
    for record in layout {
        out.push_str(&format!(
            "{:<6} {:<8} {:>8} {:>6.1}%  {}\n",
            record.label,
            record.color.to_string(),
            format_base_pairs(record.length),
            record.scale,
            bar(record.scale, BAR_WIDTH)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use genoguide_core::{karyotype_layout, Chromosome};

    #[test]
    fn test_render_table() {
        let layout = karyotype_layout(&[
            Chromosome::new(1, "chr1", 200),
            Chromosome::new(2, "chrX", 100),
            Chromosome::new(3, "chr1_KI270706v1_random", 5),
        ])
        .unwrap();

        let table = render_table(&layout);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("LABEL"));
        assert!(lines[1].starts_with("1 "));
        assert!(lines[1].contains("100.0%"));
        assert!(lines[1].ends_with(&"#".repeat(BAR_WIDTH)));
        assert!(lines[2].starts_with("X "));
        assert!(lines[2].contains(" X "));
        assert!(lines[2].contains("50.0%"));
        assert!(!table.contains("KI270706"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "No primary chromosomes\n");
    }
}
