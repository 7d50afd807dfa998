// tsv.rs - TSV loaders for snpEff gene tables and the reference gene list

use crate::data::label::{prefixed_column, strain_label};
use crate::data::sample::SampleTable;
use crate::data::table::{Cell, Table};
use crate::data::{GENE_ID, IDENTITY_COLUMNS, MEASUREMENT_COLUMNS};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Header with snpEff's comment marker removed from the first cell (`#GeneName` -> `GeneName`)
///
/// The marker is kept when stripping it would clash with another column.
fn clean_header(header: &csv::StringRecord) -> Vec<String> {
    let mut names: Vec<String> = header.iter().map(String::from).collect();
    if let Some(stripped) = names.first().and_then(|n| n.strip_prefix('#')).map(String::from) {
        if !names[1..].contains(&stripped) {
            names[0] = stripped;
        }
    }
    names
}

fn parse_cell(field: &str) -> Cell {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

impl Table {
    /// Load a tab-separated file, ignoring the first `skip_lines` lines
    ///
    /// The next line is the header. Empty fields load as missing values and
    /// every row must have as many fields as the header.
    pub fn from_tsv(file_path: &Path, skip_lines: usize) -> Result<Self, String> {
        let file = File::open(file_path)
            .map_err(|e| format!("Failed to open '{}': {}", file_path.display(), e))?;
        let mut reader = BufReader::new(file);

        let mut discarded = String::new();
        for line_num in 0..skip_lines {
            discarded.clear();
            let read = reader.read_line(&mut discarded).map_err(|e| {
                format!(
                    "Failed to read line {} of '{}': {}",
                    line_num + 1,
                    file_path.display(),
                    e
                )
            })?;
            if read == 0 {
                return Err(format!(
                    "'{}' ended before its header line",
                    file_path.display()
                ));
            }
        }

        let mut tsv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let header = clean_header(
            tsv.headers()
                .map_err(|e| format!("Failed to read header of '{}': {}", file_path.display(), e))?,
        );

        if header.is_empty() || header.iter().all(|h| h.is_empty()) {
            return Err(format!("'{}' has no header line", file_path.display()));
        }

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for (record_num, record) in tsv.records().enumerate() {
            let record = record.map_err(|e| {
                format!(
                    "Malformed row {} in '{}': {}",
                    record_num + 1,
                    file_path.display(),
                    e
                )
            })?;
            rows.push(record.iter().map(parse_cell).collect());
        }

        Table::from_rows(&header, rows).map_err(|e| format!("'{}': {}", file_path.display(), e))
    }
}

/// Load one snpEff genes table and prefix its measurement columns
///
/// The file starts with a banner line, followed by the real header. Only the
/// identity and measurement columns are kept.
pub fn load_sample_table(file_path: &Path) -> Result<SampleTable, String> {
    let label = strain_label(file_path)?;

    let wanted: Vec<&str> = IDENTITY_COLUMNS
        .iter()
        .chain(MEASUREMENT_COLUMNS.iter())
        .copied()
        .collect();
    let table = Table::from_tsv(file_path, 1)?
        .select(&wanted)
        .map_err(|e| format!("'{}': {}", file_path.display(), e))?;

    let renames: HashMap<String, String> = MEASUREMENT_COLUMNS
        .iter()
        .map(|c| (c.to_string(), prefixed_column(&label, c)))
        .collect();
    let table = table.rename(&renames)?;

    println!(
        "✅ {} loaded as '{}': {} genes",
        file_path.display(),
        label,
        table.n_rows()
    );

    Ok(SampleTable {
        label,
        path: file_path.display().to_string(),
        table,
    })
}

/// Load the reference gene list with all of its columns
pub fn load_gene_list(file_path: &Path) -> Result<Table, String> {
    let table = Table::from_tsv(file_path, 0)?;
    if !table.has_column(GENE_ID) {
        return Err(format!(
            "Gene list '{}' has no '{}' column",
            file_path.display(),
            GENE_ID
        ));
    }

    println!(
        "✅ Gene list loaded: {} genes, {} columns",
        table.n_rows(),
        table.n_columns()
    );
    Ok(table)
}
