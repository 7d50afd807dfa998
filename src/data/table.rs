// table.rs - Minimal column-oriented table with join/concat/dedup operations

use std::collections::{HashMap, HashSet};

/// A single cell: `None` is a missing value
pub type Cell = Option<String>;

/// Named column of optional text cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Ordered collection of equal-length columns
///
/// Every operation returns a new table; nothing is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from columns, checking names are unique and lengths agree
    pub fn new(columns: Vec<Column>) -> Result<Self, String> {
        let n_rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(format!("Duplicate column '{}'", column.name));
            }
            if column.values.len() != n_rows {
                return Err(format!(
                    "Column '{}' has {} values, expected {}",
                    column.name,
                    column.values.len(),
                    n_rows
                ));
            }
        }
        Ok(Self { columns, n_rows })
    }

    /// Build a table from a header and row-major cells
    pub fn from_rows(header: &[String], rows: Vec<Vec<Cell>>) -> Result<Self, String> {
        let mut columns: Vec<Column> = header
            .iter()
            .map(|name| Column::new(name.clone(), Vec::with_capacity(rows.len())))
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != header.len() {
                return Err(format!(
                    "Row {} has {} fields, expected {}",
                    row_idx + 1,
                    row.len(),
                    header.len()
                ));
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.values.push(cell);
            }
        }

        Self::new(columns)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cell at `row` in column `name`; `None` when missing or absent
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        self.column(name)
            .and_then(|c| c.values.get(row))
            .and_then(|v| v.as_deref())
    }

    /// Cells of one row in column order; `None` when `row` is out of range
    pub fn row(&self, row: usize) -> Option<Vec<Option<&str>>> {
        if row >= self.n_rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values[row].as_deref())
                .collect(),
        )
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    fn require(&self, name: &str) -> Result<usize, String> {
        self.position(name).ok_or_else(|| {
            format!(
                "Column '{}' not found (available: {})",
                name,
                self.column_names().join(", ")
            )
        })
    }

    /// Project to the named columns, in the given order
    pub fn select(&self, names: &[&str]) -> Result<Self, String> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let idx = self.require(name)?;
            columns.push(self.columns[idx].clone());
        }
        Self::new(columns)
    }

    /// Rename columns according to `mapping` (old name -> new name)
    pub fn rename(&self, mapping: &HashMap<String, String>) -> Result<Self, String> {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                let name = mapping.get(&c.name).cloned().unwrap_or_else(|| c.name.clone());
                Column::new(name, c.values.clone())
            })
            .collect();
        Self::new(columns)
    }

    /// Copy of the rows at `indices`, `None` producing an all-null row
    fn take(&self, indices: &[Option<usize>]) -> Vec<Column> {
        self.columns
            .iter()
            .map(|c| {
                let values = indices
                    .iter()
                    .map(|idx| idx.and_then(|i| c.values[i].clone()))
                    .collect();
                Column::new(c.name.clone(), values)
            })
            .collect()
    }

    fn key_of(&self, row: usize, key_idx: &[usize]) -> Vec<Cell> {
        key_idx
            .iter()
            .map(|&k| self.columns[k].values[row].clone())
            .collect()
    }

    /// Full outer join on the `on` columns
    ///
    /// Left rows keep their order and expand to every matching right row; right
    /// rows that matched nothing follow in their own order. Missing keys compare
    /// equal to each other.
    pub fn outer_join(&self, other: &Table, on: &[&str]) -> Result<Self, String> {
        let left_keys = on
            .iter()
            .map(|k| self.require(k))
            .collect::<Result<Vec<_>, _>>()?;
        let right_keys = on
            .iter()
            .map(|k| other.require(k))
            .collect::<Result<Vec<_>, _>>()?;

        for column in &other.columns {
            if !on.contains(&column.name.as_str()) && self.has_column(&column.name) {
                return Err(format!(
                    "Column '{}' present on both sides of join",
                    column.name
                ));
            }
        }

        let mut right_index: HashMap<Vec<Cell>, Vec<usize>> = HashMap::new();
        for row in 0..other.n_rows {
            right_index
                .entry(other.key_of(row, &right_keys))
                .or_default()
                .push(row);
        }

        let mut left_rows: Vec<Option<usize>> = Vec::new();
        let mut right_rows: Vec<Option<usize>> = Vec::new();
        let mut right_matched = vec![false; other.n_rows];

        for row in 0..self.n_rows {
            match right_index.get(&self.key_of(row, &left_keys)) {
                Some(matches) => {
                    for &r in matches {
                        left_rows.push(Some(row));
                        right_rows.push(Some(r));
                        right_matched[r] = true;
                    }
                }
                None => {
                    left_rows.push(Some(row));
                    right_rows.push(None);
                }
            }
        }

        let offset = left_rows.len();
        let unmatched: Vec<usize> = (0..other.n_rows).filter(|&r| !right_matched[r]).collect();
        for &r in &unmatched {
            left_rows.push(None);
            right_rows.push(Some(r));
        }

        let mut columns = self.take(&left_rows);

        // Key cells for right-only rows come from the right table
        for (&l, &r) in left_keys.iter().zip(&right_keys) {
            for (i, &row) in unmatched.iter().enumerate() {
                columns[l].values[offset + i] = other.columns[r].values[row].clone();
            }
        }

        for column in other.take(&right_rows) {
            if !on.contains(&column.name.as_str()) {
                columns.push(column);
            }
        }

        Self::new(columns)
    }

    /// Row-wise concatenation, matching columns by name
    ///
    /// Columns only present in `other` are appended after this table's columns.
    pub fn concat(&self, other: &Table) -> Result<Self, String> {
        let total = self.n_rows + other.n_rows;
        let mut columns: Vec<Column> = Vec::with_capacity(self.n_columns() + other.n_columns());

        for column in &self.columns {
            let mut values = Vec::with_capacity(total);
            values.extend(column.values.iter().cloned());
            match other.column(&column.name) {
                Some(theirs) => values.extend(theirs.values.iter().cloned()),
                None => values.extend(std::iter::repeat(None).take(other.n_rows)),
            }
            columns.push(Column::new(column.name.clone(), values));
        }

        for column in &other.columns {
            if self.has_column(&column.name) {
                continue;
            }
            let mut values = vec![None; self.n_rows];
            values.extend(column.values.iter().cloned());
            columns.push(Column::new(column.name.clone(), values));
        }

        Self::new(columns)
    }

    /// Keep the first row for each distinct value of `subset`
    pub fn drop_duplicates(&self, subset: &str) -> Result<Self, String> {
        let key_idx = self.require(subset)?;
        let mut seen: HashSet<&Cell> = HashSet::new();
        let keep: Vec<Option<usize>> = self.columns[key_idx]
            .values
            .iter()
            .enumerate()
            .filter(|(_, value)| seen.insert(*value))
            .map(|(row, _)| Some(row))
            .collect();
        Self::new(self.take(&keep))
    }

    /// Move `names` to the front, keeping the remaining columns in order
    pub fn with_leading(&self, names: &[&str]) -> Result<Self, String> {
        let mut columns = Vec::with_capacity(self.n_columns());
        for name in names {
            let idx = self.require(name)?;
            columns.push(self.columns[idx].clone());
        }
        for column in &self.columns {
            if !names.contains(&column.name.as_str()) {
                columns.push(column.clone());
            }
        }
        Self::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Cell> {
        values
            .iter()
            .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
            .collect()
    }

    fn table(columns: &[(&str, &[&str])]) -> Table {
        Table::new(
            columns
                .iter()
                .map(|(name, values)| Column::new(*name, cells(values)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_duplicate_and_ragged_columns() {
        let dup = Table::new(vec![
            Column::new("a", cells(&["1"])),
            Column::new("a", cells(&["2"])),
        ]);
        assert!(dup.is_err());

        let ragged = Table::new(vec![
            Column::new("a", cells(&["1", "2"])),
            Column::new("b", cells(&["1"])),
        ]);
        assert!(ragged.is_err());
    }

    #[test]
    fn test_from_rows_and_cell_access() {
        let header = vec!["id".to_string(), "v".to_string()];
        let t = Table::from_rows(&header, vec![cells(&["g1", "3"]), cells(&["g2", ""])]).unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.cell(0, "v"), Some("3"));
        assert_eq!(t.cell(1, "v"), None);
        assert_eq!(t.row(1), Some(vec![Some("g2"), None]));

        assert_eq!(t.row(2), None);

        assert!(Table::from_rows(&header, vec![cells(&["only"])]).is_err());
    }

    #[test]
    fn test_select_reports_missing_column() {
        let t = table(&[("a", &["1"]), ("b", &["2"]), ("c", &["3"])]);
        let s = t.select(&["c", "a"]).unwrap();
        assert_eq!(s.column_names(), vec!["c", "a"]);

        let err = t.select(&["a", "zzz"]).unwrap_err();
        assert!(err.contains("zzz"));
    }

    #[test]
    fn test_rename() {
        let t = table(&[("a", &["1"]), ("b", &["2"])]);
        let mapping = HashMap::from([("b".to_string(), "x_b".to_string())]);
        let r = t.rename(&mapping).unwrap();
        assert_eq!(r.column_names(), vec!["a", "x_b"]);

        let clash = HashMap::from([("b".to_string(), "a".to_string())]);
        assert!(t.rename(&clash).is_err());
    }

    #[test]
    fn test_outer_join_keeps_rows_from_both_sides() {
        let left = table(&[("id", &["g1", "g2"]), ("l", &["1", "2"])]);
        let right = table(&[("id", &["g2", "g3"]), ("r", &["20", "30"])]);

        let joined = left.outer_join(&right, &["id"]).unwrap();
        assert_eq!(joined.column_names(), vec!["id", "l", "r"]);
        assert_eq!(joined.n_rows(), 3);

        assert_eq!(joined.row(0), Some(vec![Some("g1"), Some("1"), None]));
        assert_eq!(joined.row(1), Some(vec![Some("g2"), Some("2"), Some("20")]));
        assert_eq!(joined.row(2), Some(vec![Some("g3"), None, Some("30")]));
    }

    #[test]
    fn test_outer_join_multi_key_and_cartesian() {
        let left = table(&[
            ("name", &["A", "A"]),
            ("id", &["g1", "g1"]),
            ("l", &["1", "2"]),
        ]);
        let right = table(&[
            ("id", &["g1", "g1", "g9"]),
            ("name", &["A", "A", "Z"]),
            ("r", &["x", "y", "z"]),
        ]);

        let joined = left.outer_join(&right, &["name", "id"]).unwrap();
        assert_eq!(joined.column_names(), vec!["name", "id", "l", "r"]);
        // 2 left x 2 right matches, plus the unmatched right row
        assert_eq!(joined.n_rows(), 5);
        assert_eq!(joined.row(4), Some(vec![Some("Z"), Some("g9"), None, Some("z")]));
    }

    #[test]
    fn test_outer_join_null_keys_match() {
        let left = table(&[("id", &["g1"]), ("t", &[""]), ("l", &["1"])]);
        let right = table(&[("id", &["g1"]), ("t", &[""]), ("r", &["2"])]);
        let joined = left.outer_join(&right, &["id", "t"]).unwrap();
        assert_eq!(joined.n_rows(), 1);
        assert_eq!(joined.cell(0, "r"), Some("2"));
    }

    #[test]
    fn test_outer_join_rejects_colliding_columns() {
        let left = table(&[("id", &["g1"]), ("v", &["1"])]);
        let right = table(&[("id", &["g1"]), ("v", &["2"])]);
        assert!(left.outer_join(&right, &["id"]).is_err());
        assert!(left.outer_join(&right, &["missing"]).is_err());
    }

    #[test]
    fn test_concat_matches_by_name() {
        let top = table(&[("id", &["g1"]), ("v", &["1"])]);
        let bottom = table(&[("desc", &["kinase"]), ("id", &["g2"])]);

        let c = top.concat(&bottom).unwrap();
        assert_eq!(c.column_names(), vec!["id", "v", "desc"]);
        assert_eq!(c.row(0), Some(vec![Some("g1"), Some("1"), None]));
        assert_eq!(c.row(1), Some(vec![Some("g2"), None, Some("kinase")]));
    }

    #[test]
    fn test_concat_onto_empty_table() {
        let empty = Table::default();
        let t = table(&[("id", &["g1"])]);
        let c = empty.concat(&t).unwrap();
        assert_eq!(c, t);
    }

    #[test]
    fn test_drop_duplicates_keeps_first() {
        let t = table(&[("id", &["g1", "g2", "g1", "", ""]), ("v", &["a", "b", "c", "d", "e"])]);
        let d = t.drop_duplicates("id").unwrap();
        assert_eq!(d.n_rows(), 3);
        assert_eq!(d.cell(0, "v"), Some("a"));
        assert_eq!(d.cell(1, "v"), Some("b"));
        assert_eq!(d.cell(2, "v"), Some("d"));
    }

    #[test]
    fn test_with_leading() {
        let t = table(&[("x", &["1"]), ("b", &["2"]), ("a", &["3"]), ("y", &["4"])]);
        let r = t.with_leading(&["a", "b"]).unwrap();
        assert_eq!(r.column_names(), vec!["a", "b", "x", "y"]);
        assert!(t.with_leading(&["nope"]).is_err());
    }
}
