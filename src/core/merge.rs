// merge.rs - Sample fold, gene list append and deduplication

use crate::data::loaders::{load_gene_list, load_sample_table};
use crate::data::{SampleTable, Table, GENE_ID, IDENTITY_COLUMNS};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;

/// Row count contributed by one strain
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StrainSummary {
    pub label: String,
    pub path: String,
    pub rows: usize,
}

/// Counts gathered while merging
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MergeStats {
    pub strains: Vec<StrainSummary>,
    pub gene_list_rows: usize,
    pub rows_before_dedup: usize,
    pub duplicates_removed: usize,
    pub output_rows: usize,
    pub columns: Vec<String>,
}

/// Final merged table with its statistics
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub table: Table,
    pub stats: MergeStats,
}

/// Outer-join all sample tables on the identity columns, in order
///
/// The first table seeds the accumulator; each later one is joined onto the
/// result of the previous step.
pub fn merge_samples(samples: &[SampleTable]) -> Result<Table, String> {
    samples.iter().try_fold(Table::default(), |acc, sample| {
        if acc.is_empty() {
            Ok(sample.table.clone())
        } else {
            acc.outer_join(&sample.table, &IDENTITY_COLUMNS)
                .map_err(|e| format!("Failed to merge '{}': {}", sample.path, e))
        }
    })
}

/// Append the gene list, keep the first row per `GeneId`, put identity columns first
pub fn finalize(merged: &Table, gene_list: &Table) -> Result<(Table, usize), String> {
    let combined = merged.concat(gene_list)?;
    let rows_before = combined.n_rows();
    let deduplicated = combined.drop_duplicates(GENE_ID)?;
    let ordered = deduplicated.with_leading(&IDENTITY_COLUMNS)?;
    Ok((ordered, rows_before))
}

/// Run the whole merge on in-memory tables
pub fn merge_tables(samples: &[SampleTable], gene_list: &Table) -> Result<MergeResult, String> {
    if samples.is_empty() {
        return Err("At least one input table is required".to_string());
    }

    println!("🔗 Merging {} strain tables on {}", samples.len(), IDENTITY_COLUMNS.join(", "));
    let merged = merge_samples(samples)?;
    println!("✅ Merged table: {} rows, {} columns", merged.n_rows(), merged.n_columns());

    let (table, rows_before_dedup) = finalize(&merged, gene_list)?;
    let duplicates_removed = rows_before_dedup - table.n_rows();
    println!(
        "🧹 Deduplicated on {}: {} rows kept, {} removed",
        GENE_ID,
        table.n_rows(),
        duplicates_removed
    );

    let stats = MergeStats {
        strains: samples
            .iter()
            .map(|s| StrainSummary {
                label: s.label.clone(),
                path: s.path.clone(),
                rows: s.n_rows(),
            })
            .collect(),
        gene_list_rows: gene_list.n_rows(),
        rows_before_dedup,
        duplicates_removed,
        output_rows: table.n_rows(),
        columns: table.column_names().iter().map(|c| c.to_string()).collect(),
    };

    Ok(MergeResult { table, stats })
}

/// Load every input and the gene list from disk, then merge
pub fn merge_files(inputs: &[String], genes_file: &str) -> Result<MergeResult, String> {
    println!("📂 Loading {} input tables", inputs.len());

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| format!("Invalid progress template: {}", e))?
            .progress_chars("#>-"),
    );

    let mut samples = Vec::with_capacity(inputs.len());
    for input in inputs {
        pb.set_message(input.clone());
        samples.push(load_sample_table(Path::new(input))?);
        pb.inc(1);
    }
    pb.finish_with_message("inputs loaded");

    println!("📂 Loading gene list: {}", genes_file);
    let gene_list = load_gene_list(Path::new(genes_file))?;

    merge_tables(&samples, &gene_list)
}
