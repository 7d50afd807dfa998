// mod.rs - Output writers: merged TSV table and JSON run report

use crate::core::MergeStats;
use crate::data::Table;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Write a table as tab-separated text: one header line, no index column
///
/// Missing values are written as empty fields.
pub fn write_tsv<W: Write>(writer: W, table: &Table) -> Result<(), String> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    tsv.write_record(table.column_names())
        .map_err(|e| format!("Write error: {}", e))?;
    for row in (0..table.n_rows()).filter_map(|i| table.row(i)) {
        tsv.write_record(row.iter().map(|cell| cell.unwrap_or("")))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    tsv.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write the merged table to `file_path`
pub fn write_table(file_path: &str, table: &Table) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    write_tsv(BufWriter::new(file), table)?;
    println!(
        "💾 Merged table written to: {} ({} rows, {} columns)",
        file_path,
        table.n_rows(),
        table.n_columns()
    );
    Ok(())
}

/// Machine-readable summary of one merge run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub version: String,
    pub generated: String,
    pub command_line: String,
    pub genes_file: String,
    pub output_file: String,
    #[serde(flatten)]
    pub stats: MergeStats,
}

impl RunReport {
    pub fn new(command_line: &str, genes_file: &str, output_file: &str, stats: MergeStats) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            command_line: command_line.to_string(),
            genes_file: genes_file.to_string(),
            output_file: output_file.to_string(),
            stats,
        }
    }
}

/// Write the run report as pretty-printed JSON
pub fn write_report(file_path: &str, report: &RunReport) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let content = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write report '{}': {}", file_path, e))?;
    println!("📄 Run report written to: {}", file_path);
    Ok(())
}

/// Human-readable summary printed at the end of every run
pub fn print_summary(stats: &MergeStats) {
    println!("\n📊 === MERGE SUMMARY ===");
    for strain in &stats.strains {
        println!("  • {}: {} genes ({})", strain.label, strain.rows, strain.path);
    }
    println!("  • Gene list: {} genes", stats.gene_list_rows);
    println!(
        "  • Rows before deduplication: {}, duplicates removed: {}",
        stats.rows_before_dedup, stats.duplicates_removed
    );
    println!(
        "  • Output: {} genes x {} columns",
        stats.output_rows,
        stats.columns.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StrainSummary;
    use crate::data::Column;
    use tempfile::TempDir;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new("GeneName", vec![Some("g1".to_string()), Some("g2".to_string())]),
            Column::new("GeneId", vec![Some("id1".to_string()), Some("id2".to_string())]),
            Column::new("A_variants_impact_HIGH", vec![Some("3".to_string()), None]),
        ])
        .unwrap()
    }

    fn stats() -> MergeStats {
        MergeStats {
            strains: vec![StrainSummary {
                label: "A".to_string(),
                path: "A_genes.txt".to_string(),
                rows: 2,
            }],
            gene_list_rows: 1,
            rows_before_dedup: 3,
            duplicates_removed: 1,
            output_rows: 2,
            columns: vec!["GeneName".to_string(), "GeneId".to_string()],
        }
    }

    #[test]
    fn test_write_tsv_nulls_are_empty() {
        let mut buffer = Vec::new();
        write_tsv(&mut buffer, &sample_table()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "GeneName\tGeneId\tA_variants_impact_HIGH\ng1\tid1\t3\ng2\tid2\t\n"
        );
    }

    #[test]
    fn test_write_table_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/merged.txt");
        write_table(path.to_str().unwrap(), &sample_table()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("GeneName\tGeneId\t"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_write_report_flattens_stats() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let report = RunReport::new("snpeff-merge --input A_genes.txt", "genes.txt", "out.txt", stats());
        write_report(path.to_str().unwrap(), &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["output_rows"], 2);
        assert_eq!(value["strains"][0]["label"], "A");
        assert_eq!(value["genes_file"], "genes.txt");
        assert!(value["generated"].as_str().unwrap().ends_with("UTC"));
    }
}
