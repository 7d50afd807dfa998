// mod.rs - Data structures module

pub mod label;
pub mod loaders;
pub mod sample;
pub mod table;

// Re-export main types for convenience
pub use label::{prefixed_column, strain_label, strain_labels};
pub use sample::SampleTable;
pub use table::{Cell, Column, Table};

/// Columns identifying a gene/transcript; the join keys
pub const IDENTITY_COLUMNS: [&str; 3] = ["GeneName", "GeneId", "TranscriptId"];

/// Per-sample variant impact counts, prefixed with the strain label after loading
pub const MEASUREMENT_COLUMNS: [&str; 4] = [
    "variants_impact_HIGH",
    "variants_impact_LOW",
    "variants_impact_MODERATE",
    "variants_impact_MODIFIER",
];

/// Column used for final deduplication
pub const GENE_ID: &str = "GeneId";
