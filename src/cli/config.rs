// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<Vec<String>>,
    pub genes: Option<String>,
    pub output: Option<String>,
    pub report: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# snpeff-merge.toml - Configuration file for snpeff-merge
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# snpEff genes tables, one per strain. The text before the first underscore
# of each file name becomes the strain label (strain6602_snpEff_genes.txt -> strain6602)
input = [
    "strain6602_snpEff_genes.txt",
    "strain6574_snpEff_genes.txt",
    "strain6686_snpEff_genes.txt",
]

# Reference gene list (tab-separated, must contain a GeneId column)
genes = "gene_list.txt"

# Merged output table
output = "merged_datasets.txt"

# Optional JSON run report
# report = "merge_report.json"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs and print the merge plan without reading tables
dry_run = false
"#
        .to_string()
    }
}
