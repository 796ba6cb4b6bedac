//! Genome Guide core library
//!
//! Pure layout functions for a genome reference dashboard: karyotype ordering
//! and scaling, gene-on-chromosome markers and base-composition shares, plus
//! the typed boundary that turns genome data service payloads into inputs.

/// Core data types
pub mod types;

/// Layout error taxonomy
pub mod error;

/// Primary chromosome filtering, ordering and scaling
pub mod karyotype;

/// Gene coordinates to marker percentages
pub mod coords;

/// Base-composition aggregation
pub mod composition;

/// Genome summary and display formatting
pub mod summary;

/// Payload decoding at the service boundary
pub mod io;

/// Data source contract and snapshot implementation
pub mod source;

/// View state and dashboard assembly
pub mod view;

// Re-export commonly used types and functions
pub use types::*;
pub use error::{LayoutError, LayoutResult};
pub use karyotype::{
    chromosome_label, compare_chromosome_names, is_primary, karyotype_layout, numeric_label,
    primary_ordered, scale_karyotype,
};
pub use coords::{map_gene, map_span, MarkerParams, DEFAULT_MIN_MARKER_WIDTH_PERCENT};
pub use composition::{count_bases, percent_of, try_percent_of, BaseComposition, BaseShare};
pub use summary::{format_base_pairs, format_locus, format_thousands, GenomeSummary};
pub use source::{GenomeDataSource, SnapshotSource, SourceError, DEFAULT_SEARCH_LIMIT};
pub use view::{CompositionView, Dashboard, GeneView, ViewState};

/// Version information for the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
