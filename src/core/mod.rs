// mod.rs - Core logic module

pub mod merge;

// Re-export main types for convenience
pub use merge::{
    finalize, merge_files, merge_samples, merge_tables, MergeResult, MergeStats, StrainSummary,
};
