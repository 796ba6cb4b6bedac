//! View assembly: a data source composed with the layout engine
//!
//! The caller owns a [`ViewState`] (selected gene, selected chromosome,
//! search query) and asks for the values a renderer needs. Layout failures
//! that have a safe default (empty karyotype, zero percentages) are logged
//! and replaced here; source failures are returned.

use serde::{Deserialize, Serialize};

use crate::composition::{BaseComposition, BaseShare};
use crate::coords::{map_gene, MarkerParams};
use crate::karyotype::karyotype_layout;
use crate::source::{GenomeDataSource, SourceResult};
use crate::summary::GenomeSummary;
use crate::types::{Gene, GeneMarker, LayoutRecord};

/// A gene with its marker on the owning chromosome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneView {
    pub gene: Gene,
    /// `None` when the gene does not fit its chromosome.
    pub marker: Option<GeneMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionView {
    pub name: String,
    pub total: u64,
    pub gc_content: f64,
    pub shares: Vec<BaseShare>,
}

impl CompositionView {
    pub fn new(name: impl Into<String>, composition: &BaseComposition) -> Self {
        Self {
            name: name.into(),
            total: composition.total,
            gc_content: composition.gc_content(),
            shares: composition.shares(),
        }
    }
}

/// Karyotype bars for every primary chromosome; empty when there are none.
pub fn karyotype_view<S: GenomeDataSource + ?Sized>(source: &S) -> SourceResult<Vec<LayoutRecord>> {
    let chromosomes = source.list_chromosomes()?;
    match karyotype_layout(&chromosomes) {
        Ok(records) => Ok(records),
        Err(e) => {
            log::warn!("Karyotype left empty: {}", e);
            Ok(Vec::new())
        }
    }
}

pub fn gene_view<S: GenomeDataSource + ?Sized>(
    source: &S,
    symbol: &str,
    params: &MarkerParams,
) -> SourceResult<Option<GeneView>> {
    let gene = match source.gene_by_exact_name(symbol)? {
        Some(gene) => gene,
        None => {
            log::debug!("Gene not found: {}", symbol);
            return Ok(None);
        }
    };

    Ok(Some(build_gene_view(gene, params)))
}

pub fn search_view<S: GenomeDataSource + ?Sized>(
    source: &S,
    query: &str,
    limit: usize,
    params: &MarkerParams,
) -> SourceResult<Vec<GeneView>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let genes = source.search_genes_by_prefix(query.trim(), limit)?;
    Ok(genes.into_iter().map(|g| build_gene_view(g, params)).collect())
}

pub fn composition_view<S: GenomeDataSource + ?Sized>(
    source: &S,
    stat_name: &str,
) -> SourceResult<Option<CompositionView>> {
    Ok(source
        .named_statistic(stat_name)?
        .map(|composition| CompositionView::new(stat_name, &composition)))
}

fn build_gene_view(gene: Gene, params: &MarkerParams) -> GeneView {
    let marker = match map_gene(&gene, params) {
        Ok(marker) => Some(marker),
        Err(e) => {
            log::warn!("No marker for {}: {}", gene.label(), e);
            None
        }
    };
    GeneView { gene, marker }
}

/// Per-view selections, owned by whoever drives the rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub selected_gene: Option<String>,
    pub selected_chromosome: Option<String>,
    pub search_query: String,
}

/// Everything the dashboard shows for one [`ViewState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: GenomeSummary,
    pub karyotype: Vec<LayoutRecord>,
    pub selected_gene: Option<GeneView>,
    /// Karyotype bar of the selected chromosome, if it is a primary one.
    pub selected_chromosome: Option<LayoutRecord>,
    pub search_results: Vec<GeneView>,
}

impl ViewState {
    pub fn select_gene(&mut self, symbol: impl Into<String>) {
        self.selected_gene = Some(symbol.into());
    }

    pub fn select_chromosome(&mut self, name: impl Into<String>) {
        self.selected_chromosome = Some(name.into());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Re-derive the dashboard for the current selections.
    pub fn refresh<S: GenomeDataSource + ?Sized>(
        &self,
        source: &S,
        params: &MarkerParams,
        search_limit: usize,
    ) -> SourceResult<Dashboard> {
        let chromosomes = source.list_chromosomes()?;
        let summary = GenomeSummary::from_chromosomes(&chromosomes);

        let karyotype = match karyotype_layout(&chromosomes) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Karyotype left empty: {}", e);
                Vec::new()
            }
        };

        let selected_gene = match &self.selected_gene {
            Some(symbol) => gene_view(source, symbol, params)?,
            None => None,
        };

        let selected_chromosome = self
            .selected_chromosome
            .as_ref()
            .and_then(|name| karyotype.iter().find(|r| &r.name == name).cloned());

        let search_results = search_view(source, &self.search_query, search_limit, params)?;

        Ok(Dashboard {
            summary,
            karyotype,
            selected_gene,
            selected_chromosome,
            search_results,
        })
    }
}
