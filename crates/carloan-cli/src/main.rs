mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::LoanArgs;

/// Car loan EMI and amortization calculations
#[derive(Parser)]
#[command(
    name = "carloan",
    version,
    about = "Car loan EMI and amortization calculations",
    long_about = "A CLI for car loan calculations with decimal precision. \
                  Derives the monthly payment (EMI), interest and cost totals, \
                  a year-by-year principal/interest schedule, and the cost \
                  proportions a pie chart renders."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the EMI and full amortization summary
    Emi(LoanArgs),
    /// Year-by-year principal/interest schedule
    Schedule(LoanArgs),
    /// Principal/interest/fees cost proportions
    Breakdown(LoanArgs),
    /// Check inputs and list field-level issues
    Validate(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Breakdown(args) => commands::loan::run_breakdown(args),
        Commands::Validate(args) => commands::loan::run_validate(args),
        Commands::Version => {
            println!("carloan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
