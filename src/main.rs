//! csvprobe - structural diagnostics for credit-card CSV exports

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use csvprobe::config::{Config, OutputFormat, DEFAULT_EXPORT_URL};
use csvprobe::probe::run_probe;
use csvprobe::report::render_to_stdout;
use csvprobe::Source;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Structural diagnostics for credit-card CSV exports
#[derive(Parser, Debug)]
#[command(name = "csvprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Export to probe: an http(s) URL or a local CSV file
    #[arg(default_value = DEFAULT_EXPORT_URL)]
    input: String,

    /// Converted output produced by the import pipeline, for a row-count
    /// comparison
    #[arg(long)]
    converted: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,
}

fn main() -> ExitCode {
    match run() {
        Ok(drops_rows) => {
            if drops_rows {
                ExitCode::from(1) // The pipeline would drop rows
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.input).with_output_format(cli.format.into());
    if let Some(converted) = cli.converted {
        config = config.with_converted(converted);
    }

    let source = Source::parse(&config.input)?;
    let report = run_probe(&config)?;

    render_to_stdout(&report, &source, config.output_format)?;

    Ok(report.simulation.drops_rows())
}
