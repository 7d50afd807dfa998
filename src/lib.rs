// lib.rs - snpeff-merge library root

//! # snpeff-merge - Merge per-strain snpEff gene tables into one matrix
//!
//! snpEff writes one `*_genes.txt` table per sample, counting variants per gene
//! by impact class. This library lines those tables up on the gene identity
//! columns (`GeneName`, `GeneId`, `TranscriptId`), prefixes each strain's
//! impact counts with the strain label taken from its file name, outer-joins
//! the strains, appends the genes that only occur in a reference gene list and
//! keeps one row per `GeneId`.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use snpeff_merge::prelude::*;
//!
//! let inputs = vec![
//!     "strain6602_snpEff_genes.txt".to_string(),
//!     "strain6574_snpEff_genes.txt".to_string(),
//! ];
//! let result = merge_files(&inputs, "gene_list.txt")?;
//! write_table("merged_datasets.txt", &result.table)?;
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{merge_files, merge_samples, merge_tables, MergeResult, MergeStats};
    pub use crate::data::loaders::{load_gene_list, load_sample_table};
    pub use crate::data::{SampleTable, Table, IDENTITY_COLUMNS, MEASUREMENT_COLUMNS};
    pub use crate::output::{write_report, write_table, RunReport};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{MergeResult, MergeStats};
pub use crate::data::{Column, SampleTable, Table};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "snpeff-merge v{} - Merge snpEff gene tables across strains",
        VERSION
    )
}
