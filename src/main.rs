use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cpu_schedule::loader::{load_catalog_file, to_csv};
use cpu_schedule::scheduler::{
    schedule_with, simulate, Algorithm, CursorPolicy, SchedulerConfig, DEFAULT_QUANTUM,
};
use cpu_schedule::workload::WorkloadSpec;
use cpu_schedule::{logging, report};

#[derive(Parser)]
#[command(about, long_about, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate scheduling algorithms over a process list
    Run(RunArgs),
    /// Print a random process list
    Generate(GenerateArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Comma-separated process list: id, burst, arrival[, priority]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,

    /// Algorithms to run, in order (default: all)
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<AlgorithmArg>,

    /// Round-robin quantum in ticks
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM)]
    quantum: NonZeroU32,

    /// Keep the round-robin cursor off processes that have not arrived yet
    #[arg(long)]
    rr_arrived_only: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(clap::Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Ticks during which processes may arrive
    #[arg(long, default_value_t = 100)]
    ticks: i64,

    /// Per-tick arrival probability
    #[arg(long, default_value_t = 0.1)]
    arrival_rate: f64,

    /// Probability that an arrival is short
    #[arg(long, default_value_t = 0.8)]
    short_rate: f64,

    #[arg(long, default_value_t = 2)]
    short_burst: i64,

    #[arg(long, default_value_t = 20)]
    long_burst: i64,

    #[arg(long, default_value_t = 5)]
    max_priority: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Fcfs,
    Sjf,
    Priority,
    Rr,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Fcfs => Algorithm::Fcfs,
            AlgorithmArg::Sjf => Algorithm::Sjf,
            AlgorithmArg::Priority => Algorithm::Priority,
            AlgorithmArg::Rr => Algorithm::RoundRobin,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Generate(args) => generate(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let catalog = load_catalog_file(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let algorithms: Vec<Algorithm> = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.into_iter().map(Algorithm::from).collect()
    };

    let cursor = if args.rr_arrived_only {
        CursorPolicy::ArrivedOnly
    } else {
        CursorPolicy::IgnoreArrival
    };
    let config = SchedulerConfig::default()
        .with_quantum(args.quantum)
        .with_cursor_policy(cursor);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.format {
        Format::Text => {
            for algorithm in algorithms {
                schedule_with(&mut out, algorithm.title(), algorithm, &catalog, &config)
                    .with_context(|| format!("{} run failed", algorithm.name()))?;
            }
        }
        Format::Json => {
            let outcomes = algorithms
                .into_iter()
                .map(|algorithm| {
                    simulate(algorithm, &catalog, &config)
                        .with_context(|| format!("{} run failed", algorithm.name()))
                })
                .collect::<Result<Vec<_>>>()?;
            report::render_json(&mut out, &outcomes)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let spec = WorkloadSpec::default()
        .with_ticks(args.ticks)
        .with_arrival_rate(args.arrival_rate)
        .with_short_rate(args.short_rate)
        .with_bursts(args.short_burst, args.long_burst)
        .with_max_priority(args.max_priority);
    let catalog = spec.generate(args.seed);
    tracing::info!(processes = catalog.len(), seed = args.seed, "generated workload");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(to_csv(&catalog).as_bytes())?;
    out.flush()?;
    Ok(())
}
