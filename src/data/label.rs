// label.rs - Strain label derivation from input filenames

use std::collections::HashMap;
use std::path::Path;

/// Strain label of an input file: the file name up to its first underscore
///
/// `data/strain6602_snpEff_genes.txt` yields `strain6602`. Directory components
/// never contribute to the label.
pub fn strain_label(path: &Path) -> Result<String, String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("Input path '{}' has no file name", path.display()))?;

    match file_name.split_once('_') {
        Some((label, _)) if !label.is_empty() => Ok(label.to_string()),
        Some(_) => Err(format!(
            "Input file '{}' starts with an underscore; expected STRAIN_name",
            file_name
        )),
        None => Err(format!(
            "Input file '{}' has no underscore; expected STRAIN_name",
            file_name
        )),
    }
}

/// Name of a measurement column once prefixed with its strain label
pub fn prefixed_column(label: &str, column: &str) -> String {
    format!("{}_{}", label, column)
}

/// Derive labels for all inputs, rejecting two files that share a label
pub fn strain_labels(paths: &[String]) -> Result<Vec<String>, String> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut labels = Vec::with_capacity(paths.len());

    for path in paths {
        let label = strain_label(Path::new(path))?;
        if let Some(previous) = owners.insert(label.clone(), path) {
            return Err(format!(
                "Input files '{}' and '{}' share the strain label '{}'",
                previous, path, label
            ));
        }
        labels.push(label);
    }

    Ok(labels)
}
