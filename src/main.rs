// main.rs - CLI entry point

use snpeff_merge::cli::print_plan;
use snpeff_merge::output::print_summary;
use snpeff_merge::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation = validate_args(&args)?;
    println!("🧬 {}", snpeff_merge::get_info());

    if args.dry_run {
        print_plan(&validation);
        println!("\n✅ Dry run completed: no tables were read");
        return Ok(());
    }

    let start = Instant::now();
    let result = merge_files(&validation.inputs, &validation.genes)?;
    write_table(&validation.output, &result.table)?;

    if let Some(report_path) = &validation.report {
        let report = RunReport::new(
            &command_line,
            &validation.genes,
            &validation.output,
            result.stats.clone(),
        );
        write_report(report_path, &report)?;
    }

    print_summary(&result.stats);
    println!(
        "\n✅ Merge completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
