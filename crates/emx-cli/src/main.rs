//! EMx CLI - drive ternary kernels from the command line
//!
//! Thin shell over `emx-core`: single-kernel pattern runs, Monte Carlo
//! batches and the 27-triple partition table. This is the one genuinely
//! string-based entry point into the kernel, so the unknown-operator
//! path lives here rather than in typed library code.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use emx_core::{
    classify, k_class, run_batch, run_pattern, BatchConfig, EmxKernel, KernelConfig, NullClass,
    Pattern, Triple,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// EMx CLI - deterministic ternary symbolic-dynamics kernel
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive one kernel through a named operator pattern
    Run {
        /// Pattern to cycle
        #[arg(long, value_enum, default_value_t = PatternArg::Canonical)]
        pattern: PatternArg,

        /// Number of pattern cycles
        #[arg(long, default_value_t = 10)]
        cycles: usize,

        /// Initial triple, e.g. "+,0,-" or "1,0,-1" (default stillpoint)
        #[arg(long)]
        init: Option<String>,

        /// Print the full per-tick trace instead of the summary
        #[arg(long)]
        trace: bool,

        /// Output in JSON for integrations
        #[arg(long)]
        json: bool,
    },

    /// Run a Monte Carlo batch of independent kernels
    Batch {
        /// Number of independent kernels
        #[arg(long, default_value_t = 100)]
        runs: usize,

        /// Steps per kernel
        #[arg(long, default_value_t = 200)]
        steps: usize,

        /// RNG seed for a fully deterministic batch
        #[arg(long)]
        seed: Option<u64>,

        /// Output in JSON for integrations
        #[arg(long)]
        json: bool,
    },

    /// Print the 27-triple partition with k-class and N-class
    Classify,
}

/// clap-friendly mirror of [`Pattern`]
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternArg {
    Canonical,
    Expansion,
    Rotation,
    Normalize,
    Exchange,
    Integrate,
    Mixed,
    Oscillate,
}

impl From<PatternArg> for Pattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Canonical => Pattern::Canonical,
            PatternArg::Expansion => Pattern::Expansion,
            PatternArg::Rotation => Pattern::Rotation,
            PatternArg::Normalize => Pattern::Normalize,
            PatternArg::Exchange => Pattern::Exchange,
            PatternArg::Integrate => Pattern::Integrate,
            PatternArg::Mixed => Pattern::Mixed,
            PatternArg::Oscillate => Pattern::Oscillate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            pattern,
            cycles,
            init,
            trace,
            json,
        } => run_command(pattern.into(), cycles, init, trace, json),
        Commands::Batch {
            runs,
            steps,
            seed,
            json,
        } => batch_command(runs, steps, seed, json),
        Commands::Classify => {
            classify_command();
            Ok(())
        }
    }
}

fn run_command(
    pattern: Pattern,
    cycles: usize,
    init: Option<String>,
    trace: bool,
    json: bool,
) -> anyhow::Result<()> {
    let initial = match init {
        Some(literal) => Some(Triple::parse(&literal)?),
        None => None,
    };

    debug!(?pattern, cycles, "starting pattern run");
    let mut kernel = EmxKernel::new(initial);
    let report = run_pattern(&mut kernel, pattern, cycles);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if trace {
        for entry in &report.trace {
            let verdict = if entry.passed {
                "PASS".green()
            } else {
                entry.reason.red()
            };
            println!(
                "tick {:>4}  {:>4}  {}  k={}  ∅={:.3}  {}",
                entry.tick, entry.operator, entry.triple, entry.k, entry.null_load, verdict
            );
        }
    }

    info!(steps = report.steps, passes = report.gate_passes, "run complete");
    println!("{}", kernel);
    let h = kernel.harmonics();
    println!(
        "harmonics: α={:.3} β={:.3} γ={:.3} Ω={} ∅={:.3}",
        h.alpha, h.beta, h.gamma, h.omega, h.null_share
    );
    println!(
        "gate: {} / {} passed",
        report.gate_passes.to_string().green(),
        report.steps
    );
    let mut failures: Vec<(&String, &usize)> = report.gate_failures.iter().collect();
    failures.sort();
    for (reason, count) in failures {
        println!("  {} × {}", count, reason.red());
    }

    Ok(())
}

fn batch_command(runs: usize, steps: usize, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let config = BatchConfig { runs, steps, seed };
    info!(runs, steps, ?seed, "starting batch");
    let report = run_batch(&config, &KernelConfig::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("runs: {}  steps/run: {}", report.runs, report.steps);
    println!(
        "gate pass rate: {}",
        format!("{:.1}%", report.gate_pass_rate * 100.0).green()
    );
    println!(
        "final ∅: mean {:.4}  std {:.4}  min {:.4}  max {:.4}",
        report.mean_null_load, report.std_null_load, report.min_null_load, report.max_null_load
    );

    Ok(())
}

fn classify_command() {
    let mut histogram: HashMap<NullClass, usize> = HashMap::new();

    println!("{:<16} {}  {}", "triple", "k", "class");
    for triple in Triple::enumerate() {
        let class = classify(triple);
        *histogram.entry(class).or_default() += 1;
        println!("{:<16} {}  {}", triple.to_string(), k_class(triple), class);
    }

    println!();
    for class in [
        NullClass::N0,
        NullClass::N1,
        NullClass::N2,
        NullClass::N3,
        NullClass::N4,
        NullClass::N5,
    ] {
        println!("{:<20} {}", class.to_string(), histogram[&class]);
    }
}
