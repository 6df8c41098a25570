pub mod aggregator;
pub mod cli;
pub mod filter;
pub mod loader;

pub use aggregator::{
    Aggregation, AnalysisOutcome, ValueCount, aggregate_properties, aggregation_to_json,
    display_aggregation, entities_to_json, format_aggregation_text, run_analysis, select_entities,
};
pub use cli::{Cli, ColorMode, OutputFormat, SortOrder, cli_parse};
pub use filter::{
    EntityFilter, FilterParseError, parse_model_filters, parse_property_filters,
    print_filter_warnings,
};
pub use loader::{Entity, LoadError, Property, load_entities};

use anyhow::Context;
use std::path::Path;

fn write_output_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();

    // Set up color handling based on user preference
    match cli.color {
        ColorMode::Always => unsafe {
            std::env::set_var("CLICOLOR_FORCE", "1");
        },
        ColorMode::Never => unsafe {
            std::env::set_var("NO_COLOR", "1");
        },
        ColorMode::Auto => {
            // Default behavior - let the terminal decide
        }
    }

    if cli.verbose > 0 && !cli.quiet {
        eprintln!("Verbosity level: {}", cli.verbose);
        eprintln!("Input file: {}", cli.input.display());
        eprintln!("Model tokens: {:?}", cli.models);
        eprintln!("Property tokens: {:?}", cli.properties);
        if let Some(out_path) = &cli.output {
            eprintln!("Output will be written to: {}", out_path.display());
        }
    }

    let entities = load_entities(&cli.input)
        .with_context(|| format!("Failed to load entity file '{}'", cli.input.display()))?;

    if cli.verbose > 0 && !cli.quiet {
        eprintln!("Loaded {} entities", entities.len());
    }

    let models = parse_model_filters(&cli.models);
    let properties =
        parse_property_filters(&cli.properties).context("Invalid property filter")?;
    let entity_filter = EntityFilter::new(models, properties);

    if !cli.quiet {
        print_filter_warnings(&entity_filter, &entities);
    }

    match run_analysis(&entities, &entity_filter) {
        AnalysisOutcome::Aggregated {
            selected,
            total,
            aggregation,
        } => {
            let rendered = aggregation.sorted(cli.sort);
            match cli.format {
                OutputFormat::Text => {
                    display_aggregation(&rendered, selected, total);
                    if let Some(path) = &cli.output {
                        write_output_file(
                            path,
                            &format_aggregation_text(&rendered, selected, total),
                        )?;
                    }
                }
                OutputFormat::Json => {
                    let json = aggregation_to_json(&rendered);
                    println!("{json}");
                    if let Some(path) = &cli.output {
                        write_output_file(path, &json)?;
                    }
                }
            }
        }
        AnalysisOutcome::Unfiltered(passed_through) => {
            // Both formats emit the raw JSON array; the notice goes to stderr
            if !cli.quiet {
                eprintln!(
                    "No model filter supplied; printing all {} entities unaggregated.",
                    passed_through.len()
                );
            }
            let json = entities_to_json(&passed_through);
            println!("{json}");
            if let Some(path) = &cli.output {
                write_output_file(path, &json)?;
            }
        }
    }

    Ok(())
}
