use std::process::ExitCode;

use anyhow::{Context, Result};
use binary_partition::{
    locate, IndicatorSequence, PartitionConfig, PartitionError, Partitioner, SymbolPair,
};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "binary-partition",
    about = "Finds a number in a range by binary partition"
)]
struct Cli {
    /// Number of positions in the range to partition.
    range_length: u64,
    /// Sequence of 0/1 partition indicators (letter codes with --symbols).
    #[arg(required_unless_present = "locate", num_args = 1..)]
    sequence: Vec<String>,
    /// Read the sequence as letter codes, lower symbol first (e.g. FB or LR).
    #[arg(long, value_name = "PAIR")]
    symbols: Option<SymbolPair>,
    /// Require exactly log2(range_length) indicators.
    #[arg(long)]
    strict: bool,
    /// Print the range after every indicator.
    #[arg(long)]
    trace: bool,
    /// Print the indicators selecting POSITION instead of partitioning.
    #[arg(long, value_name = "POSITION", conflicts_with = "sequence")]
    locate: Option<u64>,
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let outcome = match cli.locate {
        Some(position) => run_locate(&cli, position),
        None => run_partition(&cli)?,
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            println!("{}", err);
            Ok(ExitCode::from(1))
        }
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("failed to build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {}", err))
}

/// Outer `Result` covers malformed arguments; the inner one is the
/// partition outcome that decides the exit code.
fn run_partition(cli: &Cli) -> Result<Result<(), PartitionError>> {
    let indicators = match cli.symbols {
        Some(pair) => IndicatorSequence::from_symbols(&cli.sequence.join(" "), pair),
        None => {
            let values = parse_values(&cli.sequence)?;
            println!("{}", render_values(&values));
            IndicatorSequence::from_values(&values)
        }
    };

    let config = PartitionConfig { strict: cli.strict };
    let partitioner = Partitioner::new(config);

    Ok(indicators.and_then(|indicators| {
        if cli.symbols.is_some() {
            println!("{}", indicators);
        }

        let position = if cli.trace {
            let trace = partitioner.trace(cli.range_length, &indicators)?;
            println!("start: {}", trace.initial);
            for (idx, (indicator, range)) in trace.steps.iter().enumerate() {
                println!("step {}: {} -> {}", idx + 1, indicator.value(), range);
            }
            trace.result()?
        } else {
            partitioner.partition(cli.range_length, &indicators)?
        };

        println!("{}", position);
        Ok(())
    }))
}

fn run_locate(cli: &Cli, position: u64) -> Result<(), PartitionError> {
    let indicators = locate(cli.range_length, position)?;
    println!("{}", indicators);
    if let Some(pair) = cli.symbols {
        println!("{}", indicators.to_symbols(pair));
    }
    Ok(())
}

fn parse_values(tokens: &[String]) -> Result<Vec<u64>> {
    tokens
        .iter()
        .map(|token| {
            token.parse::<u64>().with_context(|| {
                format!("invalid indicator '{}': expected an unsigned integer", token)
            })
        })
        .collect()
}

fn render_values(values: &[u64]) -> String {
    let joined = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}
