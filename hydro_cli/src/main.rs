//! # Hydrocalc CLI
//!
//! Command-line front end for the hydro_core engine: load an offset
//! table from CSV, compute hydrostatic curves over a set of drafts,
//! print a results table plus JSON for machine consumption.
//!
//! The offset CSV is headerless with three columns per row: station x,
//! half-breadth y, height z (meters).
//!
//! ## Example
//!
//! ```text
//! hydrocalc --offsets hull.csv --drafts 0.5,1.0,1.5 --method pchip
//! hydrocalc --offsets hull.csv --count 10 --step 0.25 --density 1.0
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use hydro_core::errors::HydroResult;
use hydro_core::geometry::HullGeometry;
use hydro_core::interp::InterpMethod;
use hydro_core::offsets::{OffsetPoint, OffsetTable};
use hydro_core::scheduler::{curves, ComputeConfig};
use hydro_core::HydroError;

/// Hydrostatic curve calculator for offset-table hulls.
#[derive(Parser)]
#[command(name = "hydrocalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Offset table CSV (headerless rows: x,y,z in meters)
    #[arg(short, long)]
    offsets: PathBuf,

    /// Explicit comma-separated draft list in meters (e.g. 0.5,1.0,1.5)
    #[arg(short, long, value_delimiter = ',')]
    drafts: Vec<f64>,

    /// Number of generated drafts (used with --step when --drafts is absent)
    #[arg(long, default_value = "10")]
    count: usize,

    /// Draft increment for generated drafts (meters)
    #[arg(long, default_value = "0.25")]
    step: f64,

    /// Interpolation method: linear or pchip
    #[arg(short, long, default_value = "pchip")]
    method: String,

    /// Fluid density (t/m³)
    #[arg(long, default_value = "1.025")]
    density: f64,

    /// Worker pool size (default: available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Emit only the JSON curve set on stdout
    #[arg(long)]
    json: bool,
}

/// Load a headerless x,y,z CSV into an offset table.
fn load_offsets(path: &PathBuf) -> HydroResult<OffsetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            HydroError::invalid_input("offsets", path.display().to_string(), e.to_string())
        })?;

    let mut points = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            HydroError::invalid_input("offsets", format!("line {}", line + 1), e.to_string())
        })?;
        if record.len() < 3 {
            return Err(HydroError::invalid_input(
                "offsets",
                format!("line {}", line + 1),
                "Expected 3 columns: x,y,z",
            ));
        }
        let parse = |i: usize, name: &str| -> HydroResult<f64> {
            record[i].parse::<f64>().map_err(|_| {
                HydroError::invalid_input(
                    name,
                    record[i].to_string(),
                    format!("line {}: not a number", line + 1),
                )
            })
        };
        points.push(OffsetPoint::new(
            parse(0, "x")?,
            parse(1, "y")?,
            parse(2, "z")?,
        ));
    }
    OffsetTable::new(points)
}

fn run(cli: &Cli) -> HydroResult<()> {
    let method = InterpMethod::parse(&cli.method)?;
    let config = ComputeConfig {
        interpolation: method,
        density: cli.density,
        threads: cli.threads,
        ..ComputeConfig::default()
    };

    let table = load_offsets(&cli.offsets)?;
    info!(
        "loaded {} offset points across {} stations",
        table.len(),
        table.station_count()
    );

    let hull = HullGeometry::build(&table, method)?;

    let drafts: Vec<f64> = if cli.drafts.is_empty() {
        (1..=cli.count).map(|i| i as f64 * cli.step).collect()
    } else {
        cli.drafts.clone()
    };

    let set = curves(&hull, &drafts, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&set).unwrap_or_default());
        return Ok(());
    }

    println!("Hydrocalc - Hydrostatic Curves");
    println!("==============================");
    println!();
    println!(
        "Hull: {} stations, method: {:?}, density: {} t/m³",
        hull.station_count(),
        method,
        cli.density
    );
    println!();
    println!(
        "{:>7} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>7} {:>7} {:>7}",
        "T (m)", "V (m³)", "Disp (t)", "Awp", "LWL", "BWL", "LCB", "VCB", "KMt", "Cb", "Cp", "Cwp"
    );
    for r in &set.records {
        println!(
            "{:>7.3} {:>10.3} {:>10.3} {:>8.2} {:>8.2} {:>8.2} {:>8.3} {:>8.3} {:>8.3} {:>7.3} {:>7.3} {:>7.3}",
            r.draft,
            r.volume,
            r.displacement,
            r.waterplane_area,
            r.lwl,
            r.bwl,
            r.lcb,
            r.vcb,
            r.km_t,
            r.cb,
            r.cp,
            r.cwp
        );
    }
    if !set.skipped.is_empty() {
        println!();
        println!("Skipped invalid drafts: {:?}", set.skipped);
    }

    println!();
    println!("JSON output:");
    if let Ok(json) = serde_json::to_string_pretty(&set) {
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}
