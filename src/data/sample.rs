// sample.rs - One loaded per-strain annotation table

use crate::data::label::prefixed_column;
use crate::data::table::Table;
use crate::data::MEASUREMENT_COLUMNS;

/// Identity and prefixed measurement columns of one input file
#[derive(Debug, Clone)]
pub struct SampleTable {
    pub label: String,
    pub path: String,
    pub table: Table,
}

impl SampleTable {
    pub fn n_rows(&self) -> usize {
        self.table.n_rows()
    }

    /// Measurement column names as they appear after prefixing
    pub fn measurement_columns(&self) -> Vec<String> {
        MEASUREMENT_COLUMNS
            .iter()
            .map(|c| prefixed_column(&self.label, c))
            .collect()
    }
}
