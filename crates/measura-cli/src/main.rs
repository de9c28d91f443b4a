//! measura - Command-line unit converter
//!
//! Usage:
//!   measura "1 ft in in"              # Single expression
//!   echo "100 c in f" | measura       # Pipe mode
//!   measura -f conversions.txt        # File mode
//!   measura -i                        # Interactive REPL

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use measura_core::{MeasureError, MeasurementService, Outcome, DEFAULT_PRECISION};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "measura")]
#[command(about = "Convert, compare and combine length, weight, volume and temperature", long_about = None)]
struct Args {
    /// Expression to evaluate
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Read expressions from file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Interactive REPL mode
    #[arg(short, long)]
    interactive: bool,

    /// Show only the result (no input echo)
    #[arg(short, long)]
    quiet: bool,

    /// Print one JSON object per result
    #[arg(long)]
    json: bool,

    /// Decimal places in displayed results
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_PRECISION as u8,
        value_parser = clap::value_parser!(u8).range(0..=15)
    )]
    precision: u8,

    /// List the supported units and exit
    #[arg(long)]
    units: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy)]
struct Output {
    quiet: bool,
    json: bool,
    precision: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let service = MeasurementService::new();
    let output = Output {
        quiet: args.quiet,
        json: args.json,
        precision: usize::from(args.precision),
    };

    if args.units {
        print_catalog(&service);
        return Ok(());
    }

    // Determine input source
    if let Some(expr) = &args.expression {
        if !eval_and_print(&service, expr, output) {
            std::process::exit(1);
        }
    } else if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), lines = content.lines().count(), "evaluating file");
        for line in content.lines() {
            eval_and_print(&service, line, output);
        }
    } else if args.interactive {
        run_repl(&service, output)?;
    } else if !io::stdin().is_terminal() {
        // Pipe mode
        for line in io::stdin().lock().lines() {
            eval_and_print(&service, &line?, output);
        }
    } else {
        eprintln!("Usage: measura <expression>");
        eprintln!("       measura -f <file>");
        eprintln!("       measura -i");
        eprintln!("       echo \"1 ft in in\" | measura");
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` picks the level. Logs go to stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Evaluate one line and print it. Returns `false` if evaluation failed.
fn eval_and_print(service: &MeasurementService, input: &str, output: Output) -> bool {
    let result = service.evaluate(input);
    let ok = result.is_ok();

    if output.json {
        print_json(input, &result, output.precision);
        return ok;
    }

    let rendered = match &result {
        Ok(outcome) => outcome.render(output.precision),
        Err(e) => format!("Error: {e}"),
    };

    if output.quiet {
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    } else if rendered.is_empty() {
        println!("{input}");
    } else {
        // Pad input to align results
        let padding = 40usize.saturating_sub(input.chars().count());
        println!("{input}{:>padding$} = {rendered}", "");
    }

    ok
}

fn print_json(input: &str, result: &Result<Outcome, MeasureError>, precision: usize) {
    let line = match result {
        Ok(outcome) if outcome.is_empty() => return,
        Ok(outcome) => json!({
            "input": input,
            "result": outcome,
            "display": outcome.render(precision),
        }),
        Err(e) => json!({
            "input": input,
            "error": e.to_string(),
        }),
    };
    println!("{line}");
}

fn run_repl(service: &MeasurementService, output: Output) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("measura - Unit Converter");
    println!("Type a conversion, or 'help'. Press Ctrl+D to exit.\n");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "units" => {
                print_catalog(service);
                continue;
            }
            _ => {}
        }

        eval_and_print(service, line, output);
    }

    Ok(())
}

fn print_catalog(service: &MeasurementService) {
    for (category, units) in service.catalog() {
        println!("{category}:");
        for unit in units {
            println!("  {:<4} {}", unit.symbol(), unit.name());
        }
    }
}

fn print_help() {
    println!(
        r#"
Commands:
  help     Show this help
  units    List supported units
  quit     Exit the REPL

Examples:
  1 ft in in             Unit conversion
  100 c to f             Temperature conversion
  1 ft + 12 in           Addition (in the first unit)
  1 ft + 12 in in yd     Addition with a target unit
  1 gal - 500 ml         Subtraction
  1 ft / 6 in            Dimensionless ratio
  -40 c == -40 f         Equality within 1e-6
"#
    );
}
