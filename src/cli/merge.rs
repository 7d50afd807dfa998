// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_empty() && self.extra_inputs.is_empty() {
            if let Some(input) = config.input {
                self.input = input;
            }
        }
        if self.genes.is_none() {
            self.genes = config.genes;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.report.is_none() {
            self.report = config.report;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["snpeff-merge"], args).unwrap()
    }

    fn config() -> Config {
        Config {
            input: Some(vec!["cfg_a.txt".to_string()]),
            genes: Some("cfg_genes.txt".to_string()),
            output: Some("cfg_out.txt".to_string()),
            report: Some("cfg_report.json".to_string()),
            dry_run: Some(true),
        }
    }

    #[test]
    fn test_config_fills_missing_values() {
        let args = parse(&[]).merge_with_config(config());
        assert_eq!(args.input_files(), vec!["cfg_a.txt"]);
        assert_eq!(args.genes.as_deref(), Some("cfg_genes.txt"));
        assert_eq!(args.report.as_deref(), Some("cfg_report.json"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let args = parse(&["--input", "cli_a.txt", "--output", "cli_out.txt"])
            .merge_with_config(config());
        assert_eq!(args.input_files(), vec!["cli_a.txt"]);
        assert_eq!(args.output.as_deref(), Some("cli_out.txt"));
        assert_eq!(args.genes.as_deref(), Some("cfg_genes.txt"));
    }

    #[test]
    fn test_with_config_file_reads_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("merge.toml");
        std::fs::write(
            &path,
            "input = [\"strainA_genes.txt\", \"strainB_genes.txt\"]\ngenes = \"gene_list.txt\"\noutput = \"merged.txt\"\n",
        )
        .unwrap();

        let args = parse(&["--output", "cli_out.txt"])
            .with_config_file(path.to_str().unwrap())
            .unwrap();
        assert_eq!(args.input_files(), vec!["strainA_genes.txt", "strainB_genes.txt"]);
        assert_eq!(args.genes.as_deref(), Some("gene_list.txt"));
        assert_eq!(args.output.as_deref(), Some("cli_out.txt"));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_with_config_file_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(parse(&[]).with_config_file(missing.to_str().unwrap()).is_err());
    }
}
