//! CLI entry point for the grade analyzer.
//!
//! Provides an interactive menu shell plus one-shot subcommands that load a
//! CSV roster and print the class report or the top performers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_analyzer::analyzers::types::StudentAverage;
use grade_analyzer::{
    config::LogConfig,
    output::{append_record, print_json, render_report, render_top_performers},
    parser::load_roster,
    shell::Shell,
    stats::ReportSnapshot,
};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_analyzer")]
#[command(about = "Record student grades and analyze class performance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu
    Shell,
    /// Print averages and class statistics for a roster
    Report {
        /// CSV roster with `name,grade` columns
        #[arg(short, long, value_name = "CSV")]
        input: String,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Optional: CSV file to append a report snapshot to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the students sharing the highest average
    Top {
        /// CSV roster with `name,grade` columns
        #[arg(short, long, value_name = "CSV")]
        input: String,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_config = LogConfig::from_env();
    let file_appender =
        tracing_appender::rolling::daily(&log_config.directory, &log_config.file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Shell::new(stdin.lock(), stdout.lock()).run()?;
        }
        Commands::Report {
            input,
            json,
            output,
        } => {
            report(&input, json, output.as_deref())?;
        }
        Commands::Top { input, json } => {
            top(&input, json)?;
        }
    }

    Ok(())
}

/// Loads a roster and prints its class report, optionally appending a
/// snapshot row (or an error row) to `output`.
#[tracing::instrument]
fn report(input: &str, json: bool, output: Option<&str>) -> Result<()> {
    let book = load_roster(input)?;

    let outcome = book
        .class_report()
        .and_then(|report| book.top_performers().map(|top| (report, top)));

    match outcome {
        Ok((report, top)) => {
            if json {
                print_json(&report)?;
            } else {
                print!("{}", render_report(&report));
            }

            if let Some(path) = output {
                let snapshot = ReportSnapshot::from_report(&report, &top).with_source(input);
                append_record(path, &snapshot)?;
                info!(path, "Report snapshot appended");
            }
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Report could not be produced");
            if let Some(path) = output {
                let snapshot = ReportSnapshot::from_error(e.kind(), &e.to_string()).with_source(input);
                append_record(path, &snapshot)?;
            }
            Err(e.into())
        }
    }
}

/// Loads a roster and prints every student tied for the best average.
#[tracing::instrument]
fn top(input: &str, json: bool) -> Result<()> {
    let book = load_roster(input)?;
    let top = book.top_performers()?;
    info!(count = top.len(), "Top performers selected");

    if json {
        let entries: Vec<StudentAverage> = top
            .iter()
            .map(|s| StudentAverage {
                name: s.name().to_string(),
                average: s.average(),
            })
            .collect();
        print_json(&entries)?;
    } else {
        print!("{}", render_top_performers(&top));
    }

    Ok(())
}
