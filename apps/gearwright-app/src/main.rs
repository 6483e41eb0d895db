//! Geared motor design CLI.
//!
//! Three modes of operation:
//! - `design`: Run a design job from a TOML file and print the report
//! - `example`: Design the built-in robot-wheel demo for two catalog motors
//! - `info`: Print workspace crate versions

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use gearwright_core::config::DesignJob;
use gearwright_core::error::GearwrightError;
use gearwright_design::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Gearwright geared motor design toolkit.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a design job from a TOML file.
    Design {
        /// Path to the design job file.
        #[arg(short, long)]
        config: PathBuf,

        /// Emit the result as JSON instead of a formatted report.
        #[arg(long)]
        json: bool,
    },

    /// Design the built-in robot-wheel demo (100 RPM, 500 mNm) for the
    /// FA-130 and RS-385 catalog motors.
    Example,

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Report printing
// ---------------------------------------------------------------------------

fn rule() {
    println!("{}", "=".repeat(70));
}

fn print_motor(motor: &MotorSpec) {
    println!();
    rule();
    println!("  DC motor: {}", motor.name);
    rule();
    println!("    nominal voltage  : {:>9.1} V", motor.voltage);
    println!("    no-load current  : {:>9.3} A", motor.no_load_current);
    println!("    stall current    : {:>9.2} A", motor.stall_current);
    println!("    no-load speed    : {:>9.0} RPM", motor.no_load_rpm);
    println!("    stall torque     : {:>9.1} mNm", motor.stall_torque_mnm);
    println!(
        "    body             : {:.1} mm dia x {:.1} mm, {:.1} g",
        motor.diameter_mm, motor.length_mm, motor.mass_g
    );
    println!(
        "    Ke               : {:>9.3} mV/(rad/s)",
        motor.back_emf_constant() * 1000.0
    );
    println!(
        "    Kt               : {:>9.3} mNm/A",
        motor.torque_constant() * 1000.0
    );
    println!("    Ra (estimate)    : {:>9.2} ohm", motor.armature_resistance());
    println!("    peak power       : {:>9.3} W", motor.max_mechanical_power());
}

fn print_target(target: &TargetSpec) {
    println!();
    rule();
    println!("  Target");
    rule();
    println!("    output speed     : {:>9.1} RPM", target.output_rpm);
    println!(
        "    output torque    : {:>9.1} mNm ({:.4} Nm)",
        target.output_torque_mnm(),
        target.output_torque_nm
    );
    println!("    output power     : {:>9.3} W", target.output_power_w());
}

fn print_stages(kind: GearKind, stages: &[GearStage]) {
    println!();
    rule();
    println!("  Gear train: {} x{} stage(s)", kind, stages.len());
    rule();
    for (i, stage) in stages.iter().enumerate() {
        println!("  [stage {}]", i + 1);
        println!("    ratio            : {:>9.2}:1", stage.ratio);
        println!(
            "    teeth            : {:>4} : {:<4}",
            stage.teeth_driving, stage.teeth_driven
        );
        println!("    module           : {:>9.2} mm", stage.module_mm);
        println!(
            "    pitch diameters  : {:.1} mm / {:.1} mm",
            stage.pitch_diameter_driving(),
            stage.pitch_diameter_driven()
        );
        println!("    center distance  : {:>9.1} mm", stage.center_distance());
        println!("    efficiency       : {:>9.1} %", stage.efficiency * 100.0);
    }
}

fn print_report(report: &PerformanceReport) {
    println!();
    rule();
    println!("  Performance");
    rule();
    println!("    total ratio      : {:>9.2}:1", report.total_ratio);
    println!(
        "    drive efficiency : {:>9.1} %",
        report.total_efficiency * 100.0
    );
    println!(
        "    required torque  : {:>9.2} mNm at the motor shaft",
        report.required_motor_torque_mnm
    );
    println!("    motor speed      : {:>9.0} RPM", report.motor_rpm);
    println!("    motor current    : {:>9.3} A", report.motor_current_a);
    println!("    torque margin    : {:>9.1} %", report.torque_margin_pct);
    println!("    output speed     : {:>9.1} RPM", report.output_rpm);
    println!(
        "    output torque    : {:>9.2} mNm ({:.4} Nm)",
        report.output_torque_mnm, report.output_torque_nm
    );
    println!("    output power     : {:>9.3} W", report.output_power_w);
    println!(
        "    system efficiency: {:>9.1} %",
        report.system_efficiency * 100.0
    );
    println!();
    if report.feasible {
        println!("    feasible: the motor can deliver the target through this train.");
    } else {
        println!("    NOT feasible: torque margin below 20%, a stronger motor is needed.");
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

/// JSON payload for `design --json`.
#[derive(Serialize)]
struct DesignOutput<'a> {
    motor: &'a MotorSpec,
    target: &'a TargetSpec,
    stages: &'a [GearStage],
    report: &'a PerformanceReport,
}

fn run_design(config: &Path, json: bool) -> Result<(), GearwrightError> {
    let job = DesignJob::from_path(config)?;

    let mut designer = GearTrainDesigner::from_job(&job)?;
    designer.synthesize(job.gearing.stages.map(|n| n as usize))?;
    let report = designer.evaluate()?;

    if json {
        let output = DesignOutput {
            motor: designer.motor(),
            target: designer.target(),
            stages: designer.stages(),
            report: &report,
        };
        let text =
            serde_json::to_string_pretty(&output).expect("design output serializes to JSON");
        println!("{text}");
    } else {
        print_motor(designer.motor());
        print_target(designer.target());
        print_stages(designer.kind(), designer.stages());
        print_report(&report);
    }

    Ok(())
}

fn run_example() -> Result<(), GearwrightError> {
    let target = presets::targets::robot_wheel();

    for motor in [presets::motors::fa_130(), presets::motors::rs_385()] {
        let mut designer = GearTrainDesigner::new(motor, target, GearKind::Spur)?;
        designer.synthesize(None)?;
        let report = designer.evaluate()?;

        print_motor(designer.motor());
        print_target(designer.target());
        print_stages(designer.kind(), designer.stages());
        print_report(&report);
    }

    Ok(())
}

fn run_info() {
    println!("gearwright v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  gearwright-core    {}", env!("CARGO_PKG_VERSION"));
    println!("  gearwright-design  {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("gear kinds:");
    for kind in GearKind::ALL {
        println!(
            "  {:<10} efficiency {:.0}%, max {}:1 per stage",
            kind.as_str(),
            kind.efficiency() * 100.0,
            kind.max_stage_ratio()
        );
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Design { config, json }) => run_design(&config, json),
        Some(Commands::Example) | None => run_example(),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
