//! Command-line front end for the CPU scheduling simulator.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cpu_schedule::input::{format_processes, load_processes, save_processes};
use cpu_schedule::models::SchedulerConfig;
use cpu_schedule::report::Report;
use cpu_schedule::scheduler::{Algorithm, ScheduleMetrics};
use cpu_schedule::session::Session;
use cpu_schedule::validation::validate_config;
use cpu_schedule::workload::WorkloadSpec;

#[derive(Debug, Parser)]
#[command(name = "cpu-schedule", version, about = "Simulate FCFS, SRT and Round Robin CPU scheduling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive menu (default).
    Interactive {
        /// Process file.
        #[arg(default_value = "processes.txt")]
        file: PathBuf,
        #[command(flatten)]
        params: ParamArgs,
        /// Print the execution slice timeline.
        #[arg(long)]
        timeline: bool,
    },
    /// Run one algorithm and print its report.
    Run {
        /// fcfs, srt or rr.
        algorithm: Algorithm,
        /// Process file.
        #[arg(default_value = "processes.txt")]
        file: PathBuf,
        #[command(flatten)]
        params: ParamArgs,
        /// Print the execution slice timeline.
        #[arg(long)]
        timeline: bool,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Write a random process file.
    Generate {
        /// Number of processes.
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        /// RNG seed.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Latest arrival time.
        #[arg(long, default_value_t = 10)]
        max_arrival: i64,
        /// Longest burst time.
        #[arg(long, default_value_t = 10)]
        max_burst: i64,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct ParamArgs {
    /// Context-switch cost (ms).
    #[arg(short = 'c', long)]
    context_switch: Option<i64>,
    /// Round Robin time quantum (ms).
    #[arg(short = 'q', long)]
    quantum: Option<i64>,
}

impl ParamArgs {
    /// Config with defaults for missing values.
    ///
    /// Defaults are valid, so validating this checks exactly the given flags.
    fn or_default(&self) -> SchedulerConfig {
        let defaults = SchedulerConfig::default();
        SchedulerConfig::new(
            self.context_switch.unwrap_or(defaults.context_switch),
            self.quantum.unwrap_or(defaults.quantum),
        )
    }
}

/// Logs go to stderr so reports on stdout stay clean.
///
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Interactive {
        file: PathBuf::from("processes.txt"),
        params: ParamArgs {
            context_switch: None,
            quantum: None,
        },
        timeline: false,
    }) {
        Command::Interactive {
            file,
            params,
            timeline,
        } => interactive(file, params, timeline),
        Command::Run {
            algorithm,
            file,
            params,
            timeline,
            json,
        } => run(algorithm, file, params.or_default(), timeline, json),
        Command::Generate {
            count,
            seed,
            max_arrival,
            max_burst,
            output,
        } => generate(count, seed, max_arrival, max_burst, output),
    }
}

fn interactive(file: PathBuf, params: ParamArgs, timeline: bool) -> Result<()> {
    let processes = load_processes(&file)
        .with_context(|| format!("cannot load processes from {}", file.display()))?;
    info!(count = processes.len(), file = %file.display(), "starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    check_config(&params.or_default())?;
    let mut session = Session::new(processes, stdin.lock(), stdout.lock()).with_timeline(timeline);
    if let Some(context_switch) = params.context_switch {
        session = session.with_context_switch(context_switch);
    }
    if let Some(quantum) = params.quantum {
        session = session.with_quantum(quantum);
    }
    session.run().context("interactive session failed")
}

fn run(
    algorithm: Algorithm,
    file: PathBuf,
    config: SchedulerConfig,
    timeline: bool,
    json: bool,
) -> Result<()> {
    let processes = load_processes(&file)
        .with_context(|| format!("cannot load processes from {}", file.display()))?;
    let schedule = algorithm
        .run(&config, &processes)
        .with_context(|| format!("{algorithm} run failed"))?;
    let metrics = ScheduleMetrics::calculate(&schedule, &config)?;

    let report = Report::new(algorithm, &config, &schedule, &metrics).with_timeline(timeline);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn generate(
    count: usize,
    seed: u64,
    max_arrival: i64,
    max_burst: i64,
    output: Option<PathBuf>,
) -> Result<()> {
    if count == 0 {
        bail!("process count must be positive");
    }
    let processes = WorkloadSpec::new(count)
        .with_max_arrival(max_arrival)
        .with_burst_range(1, max_burst)
        .generate_seeded(seed);

    match output {
        Some(path) => {
            save_processes(&path, &processes)?;
            info!(count, seed, path = %path.display(), "workload written");
        }
        None => print!("{}", format_processes(&processes)),
    }
    Ok(())
}

/// Rejects invalid parameter flags before anything runs.
fn check_config(config: &SchedulerConfig) -> Result<()> {
    if let Err(errors) = validate_config(config) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        bail!("invalid parameters: {}", messages.join("; "));
    }
    Ok(())
}
