use anyhow::{bail, Context, Result};
use clap::Parser;
use dike_revetment::calculator::Calculator;
use dike_revetment::cli::{Cli, Commands};
use dike_revetment::config::CalculatorSettings;
use dike_revetment::io::{read_document, write_report};
use dike_revetment::observability::{init_tracing, install_panic_hook};
use dike_revetment::report::{OutputLevel, ReportContext};
use std::path::Path;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            input,
            settings,
            locations_in_parallel,
            time_steps_in_parallel,
            output_level,
            output,
            verbosity,
        } => {
            init_tracing(verbosity);
            let settings = resolve_settings(
                settings.as_deref(),
                locations_in_parallel,
                time_steps_in_parallel,
            )?;
            handle_calculate(&input, &settings, output_level, output.as_deref())
        }
        Commands::Validate { input, verbosity } => {
            init_tracing(verbosity);
            handle_validate(&input)
        }
    }
}

/// Settings from the file (or defaults), with command line flags switched on
/// top.
fn resolve_settings(
    path: Option<&Path>,
    locations_in_parallel: bool,
    time_steps_in_parallel: bool,
) -> Result<CalculatorSettings> {
    let base = match path {
        Some(path) => CalculatorSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => CalculatorSettings::default(),
    };
    Ok(CalculatorSettings::new(
        base.calculate_locations_in_parallel || locations_in_parallel,
        base.calculate_time_steps_in_parallel || time_steps_in_parallel,
    ))
}

fn handle_calculate(
    input: &Path,
    settings: &CalculatorSettings,
    output_level: OutputLevel,
    output: Option<&Path>,
) -> Result<()> {
    let document = read_document(input)
        .with_context(|| format!("Failed to read input document {}", input.display()))?;

    let built = document.into_builder().build();
    let (calculation_input, build_events) = built.into_parts();
    let Some(calculation_input) = calculation_input else {
        return report_invalid_input(build_events, output_level, output);
    };

    let context = ReportContext::from_input(&calculation_input);
    let result = Calculator::calculate(calculation_input, settings)
        .context("Calculation aborted by an internal error")?;
    let report = context.report(&result, output_level);
    write_report(&report, output).context("Failed to write report")?;

    if !report.successful {
        bail!("Calculation input is invalid ({} events)", report.events.len());
    }
    Ok(())
}

fn report_invalid_input(
    events: Vec<dike_revetment::result::Event>,
    output_level: OutputLevel,
    output: Option<&Path>,
) -> Result<()> {
    let count = events.len();
    let report = dike_revetment::report::CalculationReport {
        successful: false,
        output_level,
        events,
        locations: vec![],
    };
    write_report(&report, output).context("Failed to write report")?;
    bail!("Calculation input is invalid ({count} events)")
}

fn handle_validate(input: &Path) -> Result<()> {
    let document = read_document(input)
        .with_context(|| format!("Failed to read input document {}", input.display()))?;
    let result = document.into_builder().build();

    for event in result.events() {
        eprintln!("{event}");
    }
    if !result.successful() {
        bail!("{} is invalid", input.display());
    }
    println!("{} is valid", input.display());
    Ok(())
}
