//! # Wirecalc CLI
//!
//! Terminal front end for the wire voltage drop engine. Collects parameters
//! from flags, a defaults file or a JSON input document, converts feet to
//! meters, and prints the result table with a power flow breakdown (or JSON
//! with `--json`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use wire_core::calculations::{analyze, CalculationInput, CalculationResult, PowerFlow};
use wire_core::errors::CalcError;
use wire_core::materials::{WireGauge, WireMaterial};
use wire_core::settings::CalculatorDefaults;
use wire_core::units::{Feet, LengthUnit, Meters};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "wirecalc", about = "Wire voltage drop, power loss and efficiency calculator")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate voltage drop for a wire run.
    Calc(CalcArgs),
    /// List supported wire gauges.
    Gauges,
    /// List supported conductor materials.
    Materials,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Wire gauge in AWG (2-26, even sizes).
    #[arg(long)]
    gauge: Option<WireGauge>,
    /// Conductor material: copper, tinned-copper or aluminum.
    #[arg(long)]
    material: Option<WireMaterial>,
    /// One-way wire length, in --unit.
    #[arg(long, allow_negative_numbers = true)]
    length: Option<f64>,
    /// Length unit: meters or feet.
    #[arg(long)]
    unit: Option<LengthUnit>,
    /// Supply voltage (V).
    #[arg(long = "voltage", allow_negative_numbers = true)]
    input_voltage: Option<f64>,
    /// Load current (A).
    #[arg(long, allow_negative_numbers = true)]
    current: Option<f64>,
    /// Read the full calculation input from a JSON file.
    #[arg(
        long,
        conflicts_with_all = ["gauge", "material", "length", "unit", "input_voltage", "current"]
    )]
    input: Option<PathBuf>,
    /// JSON file with default values for omitted flags.
    #[arg(long)]
    defaults: Option<PathBuf>,
    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// Machine-readable report printed with `--json`
#[derive(Serialize)]
struct Report {
    input: CalculationInput,
    result: CalculationResult,
    power_flow: Option<PowerFlow>,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match &cli.command {
        Commands::Calc(args) => run_calc(args),
        Commands::Gauges => {
            print_gauges();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Materials => {
            print_materials();
            Ok(ExitCode::SUCCESS)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// calc
// ---------------------------------------------------------------------------

fn run_calc(args: &CalcArgs) -> Result<ExitCode> {
    let (input, display_unit) = match &args.input {
        Some(path) => {
            let json = read_file(path)?;
            match CalculationInput::from_json(&json) {
                Ok(input) => (input, LengthUnit::Meters),
                Err(e) => {
                    report_calc_error(&e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        None => {
            let defaults = load_defaults(args.defaults.as_deref())?;
            let unit = args.unit.unwrap_or(defaults.length_unit);
            (resolve_input(args, &defaults), unit)
        }
    };
    debug!(
        gauge = %input.gauge,
        material = %input.material,
        length_m = input.length_m,
        input_voltage_v = input.input_voltage_v,
        current_a = input.current_a,
        "calculating wire run"
    );

    let analysis = match analyze(&input) {
        Ok(analysis) => analysis,
        Err(e) => {
            report_calc_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };
    if analysis.drop_exceeds_supply() {
        warn!(
            voltage_drop_v = analysis.voltage_drop_v,
            input_voltage_v = input.input_voltage_v,
            "voltage drop exceeds the supply voltage; output voltage is negative"
        );
    }

    let result = analysis.rounded();
    let power_flow = match PowerFlow::from_result(&result) {
        Ok(flow) => Some(flow),
        Err(e) => {
            debug!("skipping power flow breakdown: {e}");
            None
        }
    };

    if args.json {
        let report = Report {
            input,
            result,
            power_flow,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_result(&input, &result, display_unit);
        if let Some(flow) = &power_flow {
            print_power_flow(&input, &result, flow);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Merge command-line flags over the defaults and convert the length to meters.
fn resolve_input(args: &CalcArgs, defaults: &CalculatorDefaults) -> CalculationInput {
    let unit = args.unit.unwrap_or(defaults.length_unit);
    let length = args.length.unwrap_or(defaults.length);
    CalculationInput::new(
        args.gauge.unwrap_or(defaults.gauge),
        args.material.unwrap_or(defaults.material),
        unit.to_meters(length),
        args.input_voltage.unwrap_or(defaults.input_voltage_v),
        args.current.unwrap_or(defaults.current_a),
    )
}

fn load_defaults(path: Option<&Path>) -> Result<CalculatorDefaults> {
    match path {
        Some(path) => {
            let json = read_file(path)?;
            CalculatorDefaults::from_json(&json)
                .with_context(|| format!("parsing defaults {}", path.display()))
        }
        None => Ok(CalculatorDefaults::default()),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn report_calc_error(e: &CalcError) {
    eprintln!("Error: {e}");
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{json}");
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_result(input: &CalculationInput, result: &CalculationResult, unit: LengthUnit) {
    let length = match unit {
        LengthUnit::Meters => format!("{:.2} m", input.length_m),
        LengthUnit::Feet => {
            let feet: Feet = Meters(input.length_m).into();
            format!("{:.2} ft ({:.3} m)", feet.value(), input.length_m)
        }
    };

    println!("═══════════════════════════════════════");
    println!("  WIRE VOLTAGE DROP");
    println!("═══════════════════════════════════════");
    println!();
    println!("Wire:");
    println!("  Gauge:    {}", input.gauge.label());
    println!("  Material: {}", input.material);
    println!("  Length:   {length}");
    println!();
    println!("Results:");
    println!("  Wire Resistance: {:.4} Ω", result.resistance_ohms);
    println!("  Input Voltage:   {:.2} V", input.input_voltage_v);
    println!("  Output Voltage:  {:.2} V", result.output_voltage_v);
    println!("  Voltage Drop:    {:.2} V", result.voltage_drop_v);
    println!("  Input Power:     {:.2} W", result.input_power_w);
    println!("  Output Power:    {:.2} W", result.output_power_w);
    println!("  Power Loss:      {:.2} W", result.power_loss_w);
    println!("  Efficiency:      {:.2}%", result.efficiency_percent);
    println!();
}

fn print_power_flow(input: &CalculationInput, result: &CalculationResult, flow: &PowerFlow) {
    println!("Power Flow:");
    println!(
        "  Input:      {:.2} W ({:.2} V × {:.2} A)",
        flow.input_power_w, input.input_voltage_v, input.current_a
    );
    println!(
        "  Loss:       {:.2} W ({:.1}%)",
        flow.power_loss_w, flow.loss_percent
    );
    println!(
        "  Throughput: {:.2} W ({:.1}%)",
        flow.output_power_w, flow.output_percent
    );
    println!(
        "  Output:     {:.2} W ({:.2} V × {:.2} A)",
        flow.output_power_w, result.output_voltage_v, input.current_a
    );
    println!("  {}", flow_bar(flow.loss_percent, 40));
}

/// Text bar with `#` for lost power and `=` for delivered power
fn flow_bar(loss_percent: f64, width: usize) -> String {
    let loss_cells = ((loss_percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(loss_cells), "=".repeat(width - loss_cells))
}

fn print_gauges() {
    println!("{:<8} {:>14} {:>12}", "Gauge", "Diameter (mm)", "Area (mm²)");
    for gauge in WireGauge::ALL {
        println!(
            "{:<8} {:>14.2} {:>12.3}",
            gauge.to_string(),
            gauge.diameter_mm().value(),
            gauge.area_m2() * 1e6
        );
    }
}

fn print_materials() {
    println!("{:<14} {:<14} {:>18}", "Material", "Code", "Resistivity (Ω·m)");
    for material in WireMaterial::ALL {
        println!(
            "{:<14} {:<14} {:>18.3e}",
            material.display_name(),
            material.code(),
            material.resistivity_ohm_m()
        );
    }
}
