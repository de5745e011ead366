use clap::Parser;
use color_eyre::eyre::bail;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use indoor_map::export::{export_connections_csv, export_json};
use indoor_map::loader::{load_map_draft, load_rules};
use indoor_map::topology::backfill_draft;
use indoor_map::validation::{validate, ValidationRules};

#[derive(Parser, Debug)]
#[command(name = "indoor-map")]
#[command(about = "Indoor Map - infer element connections and validate floor plans")]
#[command(version)]
struct Args {
    /// Path to map JSON file
    #[arg(required = true)]
    file: PathBuf,

    /// Validation rules JSON (omitted rules keep their defaults)
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Export connections to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the map with inferred connections to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Exit with an error when the map fails validation
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let draft = backfill_draft(load_map_draft(&args.file)?);
    let rules = match &args.rules {
        Some(path) => load_rules(path)?,
        None => ValidationRules::default(),
    };

    let report = validate(&draft, &rules);
    if report.is_valid() {
        println!("Validation: OK");
    } else {
        println!("Validation: {} problem(s)", report.violations.len());
        for error in report.errors() {
            println!("  - {error}");
        }
    }

    for floor in draft.floors.as_deref().unwrap_or_default() {
        println!(
            "Floor {} ({}): {} elements, {} connections",
            floor.level_label(),
            floor.name.as_deref().unwrap_or("-"),
            floor.elements.len(),
            floor.connections.len()
        );
    }

    if let Some(csv_path) = &args.csv {
        export_connections_csv(draft.floors.as_deref().unwrap_or_default(), csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&draft, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.strict && !report.is_valid() {
        bail!("map failed validation: {}", report.errors().join(", "));
    }

    Ok(())
}
