//! # Beam Solver CLI
//!
//! ```text
//! beam_cli [input.json] [--output report.json]
//! ```
//!
//! With an input document the beam it describes is analysed. Without one a
//! simply supported demo beam is built from prompted values. Results are
//! printed as text followed by the JSON report; `--output` also saves the
//! report to a file. Set `RUST_LOG=debug` to trace the solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;

use beam_core::singularity::format_terms;
use beam_core::{load_beam_input, save_report, BeamError, BeamSolver, Determinacy, Load, Support};

struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        input: None,
        output: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let path = iter.next().ok_or("--output needs a file path")?;
                args.output = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                return Err("usage: beam_cli [input.json] [--output report.json]".to_string());
            }
            _ if args.input.is_none() => args.input = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument: {}", arg)),
        }
    }
    Ok(args)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn demo_solver() -> BeamSolver {
    println!("No input file given. Running simply supported demo...");
    println!();

    let span = prompt_f64("Enter beam span [5.0]: ", 5.0);
    let position = prompt_f64("Enter point load position [3.0]: ", 3.0);
    let magnitude = prompt_f64("Enter point load magnitude, upward positive [1.0]: ", 1.0);
    println!();

    let mut solver = BeamSolver::new();
    solver.initialise(
        vec![Support::pin(0.0), Support::roller(span)],
        vec![Load::point(position, magnitude)],
        span,
    );
    solver
}

fn run(args: &Args) -> Result<(), BeamError> {
    let mut solver = match &args.input {
        Some(path) => {
            info!("loading beam from {}", path.display());
            load_beam_input(path)?.into_solver()
        }
        None => demo_solver(),
    };

    let classification = solver.analyse()?;
    print_results(&solver, classification);

    let report = solver.report();
    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{}", json);
    }

    if let Some(path) = &args.output {
        save_report(&report, path)?;
        println!();
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

fn print_results(solver: &BeamSolver, classification: Determinacy) {
    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Span: {}", solver.span());
    if let Some(report) = solver.determinacy_report() {
        println!(
            "Classification: {} (r = {}, degree {})",
            classification,
            report.reaction_count,
            report.degree()
        );
    }

    if classification == Determinacy::Mechanism {
        println!();
        println!("  The supports cannot hold the beam in place; nothing to solve.");
        return;
    }

    println!();
    println!("Reactions:");
    for support in solver.supports() {
        println!(
            "  {:<6} @ {:<8} R = {:<12.6} M = {:.6}",
            support.kind.to_string(),
            support.position,
            support.reaction_force.unwrap_or(0.0),
            support.reaction_moment.unwrap_or(0.0)
        );
    }

    println!();
    println!("Equations:");
    println!("  M(x) = {}", format_terms(solver.bending_moment_equation()));
    println!("  θ(x) = {}", format_terms(solver.slope_equation()));
    println!("  v(x) = {}", format_terms(solver.deflection_equation()));
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Beam Solver - Singularity Function Analysis");
    println!("===========================================");
    println!();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
