// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// snpeff-merge - Merge per-strain snpEff gene tables with a reference gene list
pub struct Args {
    /// snpEff genes table named STRAIN_*.txt (repeat for each strain)
    #[argh(option)]
    pub input: Vec<String>,

    /// reference gene list (tab-separated, must contain GeneId)
    #[argh(option)]
    pub genes: Option<String>,

    /// merged output table (tab-separated)
    #[argh(option)]
    pub output: Option<String>,

    /// write a JSON run report to this file
    #[argh(option)]
    pub report: Option<String>,

    /// validate inputs and print the merge plan without reading tables
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// further input tables, allowing `--input a.txt b.txt c.txt`
    #[argh(positional)]
    pub extra_inputs: Vec<String>,
}

impl Args {
    /// All input tables in command line order
    pub fn input_files(&self) -> Vec<String> {
        self.input
            .iter()
            .chain(self.extra_inputs.iter())
            .cloned()
            .collect()
    }
}
