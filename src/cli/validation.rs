// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::data::strain_labels;

/// Resolved, checked run parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub inputs: Vec<String>,
    pub labels: Vec<String>,
    pub genes: String,
    pub output: String,
    pub report: Option<String>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Repeated --input values and trailing files cannot be put back in command line order
    if args.input.len() > 1 && !args.extra_inputs.is_empty() {
        return Err(
            "Mix of repeated --input and positional inputs; use one form so input order is preserved"
                .to_string(),
        );
    }

    let inputs = args.input_files();
    if inputs.is_empty() {
        return Err("--input is required (one or more snpEff genes tables)".to_string());
    }
    let genes = args.genes.clone().ok_or("--genes is required")?;
    let output = args.output.clone().ok_or("--output is required")?;

    // Labels become column prefixes, so they must be derivable and distinct
    let labels = strain_labels(&inputs)?;

    if inputs.contains(&output) || genes == output {
        return Err(format!("Output file '{}' is also an input", output));
    }
    if let Some(report) = &args.report {
        if *report == output {
            return Err(format!("Report file '{}' is also the output file", report));
        }
    }

    Ok(ValidationResult {
        inputs,
        labels,
        genes,
        output,
        report: args.report.clone(),
    })
}

/// Print what a run with these parameters would do
pub fn print_plan(validation: &ValidationResult) {
    println!("🧪 Dry run: merge plan");
    for (input, label) in validation.inputs.iter().zip(&validation.labels) {
        println!("  • {} -> columns prefixed '{}_'", input, label);
    }
    println!("  • Gene list: {}", validation.genes);
    println!("  • Output: {}", validation.output);
    if let Some(report) = &validation.report {
        println!("  • Report: {}", report);
    }
}
