//! Trajectory generation and batch Monte Carlo runs
//!
//! Single-kernel pattern runs (the named operator cycles used throughout
//! the surrounding experimentation layers) and batches of independent
//! kernels driven by random operator choices. Kernels share no state, so
//! batch runs are embarrassingly parallel; this runner keeps a simple
//! serial loop and leaves sharding to callers.

use crate::algebra::{Operator, StepParams, Triple};
use crate::config::KernelConfig;
use crate::kernel::EmxKernel;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named operator sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Standard O2-O3-O6 cycle
    Canonical,
    /// Double expand
    Expansion,
    /// Full rotation
    Rotation,
    /// Deep normalization
    Normalize,
    /// Flip-expand-normalize
    Exchange,
    /// Expand-integrate-normalize
    Integrate,
    /// Varied
    Mixed,
    /// Back-forth
    Oscillate,
}

impl Pattern {
    /// Wire names of one cycle of this pattern
    pub const fn ops(self) -> &'static [&'static str] {
        match self {
            Pattern::Canonical => &["O2", "O3", "O6"],
            Pattern::Expansion => &["O2", "O2", "O6"],
            Pattern::Rotation => &["O3", "O3", "O3"],
            Pattern::Normalize => &["O6", "O6", "O6"],
            Pattern::Exchange => &["O7", "O2", "O6"],
            Pattern::Integrate => &["O2", "O10", "O6"],
            Pattern::Mixed => &["O2", "O3", "O7", "O6"],
            Pattern::Oscillate => &["O2", "O7", "O2", "O7"],
        }
    }

    /// All patterns, for CLI listings
    pub const ALL: [Pattern; 8] = [
        Pattern::Canonical,
        Pattern::Expansion,
        Pattern::Rotation,
        Pattern::Normalize,
        Pattern::Exchange,
        Pattern::Integrate,
        Pattern::Mixed,
        Pattern::Oscillate,
    ];
}

/// One recorded tick of a pattern run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Tick number after this step
    pub tick: u64,
    /// Operator wire name applied
    pub operator: String,
    /// Triple after the step
    pub triple: Triple,
    /// k-class after the step
    pub k: u8,
    /// NULL-load after the step
    pub null_load: f64,
    /// Whether the gate passed
    pub passed: bool,
    /// Gate reason text
    pub reason: String,
}

/// Summary of one pattern run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryReport {
    /// Pattern driven
    pub pattern: Pattern,
    /// Steps executed
    pub steps: usize,
    /// Gate passes
    pub gate_passes: usize,
    /// Gate failures keyed by reason text
    pub gate_failures: HashMap<String, usize>,
    /// Per-tick trace
    pub trace: Vec<TraceEntry>,
}

/// Drive one kernel through `cycles` repetitions of a pattern
pub fn run_pattern(kernel: &mut EmxKernel, pattern: Pattern, cycles: usize) -> TrajectoryReport {
    let mut report = TrajectoryReport {
        pattern,
        steps: 0,
        gate_passes: 0,
        gate_failures: HashMap::new(),
        trace: Vec::new(),
    };

    for _ in 0..cycles {
        for &name in pattern.ops() {
            let outcome = kernel.step_named(name);
            report.steps += 1;
            if outcome.passed {
                report.gate_passes += 1;
            } else {
                *report.gate_failures.entry(outcome.reason.clone()).or_default() += 1;
            }
            report.trace.push(TraceEntry {
                tick: kernel.state().properties().tick,
                operator: name.to_string(),
                triple: kernel.triple(),
                k: kernel.state().k(),
                null_load: kernel.null_load(),
                passed: outcome.passed,
                reason: outcome.reason,
            });
        }
    }

    report
}

/// Configuration for a Monte Carlo batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of independent kernels
    ///
    /// Typical: 100
    pub runs: usize,

    /// Steps per kernel
    ///
    /// Typical: 200
    pub steps: usize,

    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            steps: 200,
            seed: None,
        }
    }
}

/// Aggregate result of a Monte Carlo batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Kernels run
    pub runs: usize,
    /// Steps per kernel
    pub steps: usize,
    /// Fraction of all steps whose gate passed
    pub gate_pass_rate: f64,
    /// Mean final NULL-load across kernels
    pub mean_null_load: f64,
    /// Standard deviation of final NULL-loads
    pub std_null_load: f64,
    /// Minimum final NULL-load
    pub min_null_load: f64,
    /// Maximum final NULL-load
    pub max_null_load: f64,
    /// When the batch finished
    pub generated_at: DateTime<Utc>,
}

/// Run a batch of independent kernels under random steppable operators
///
/// Each kernel starts at a random triple and draws uniformly from the
/// six steppable wire names every tick. With a seed the batch is fully
/// deterministic.
pub fn run_batch(config: &BatchConfig, kernel_config: &KernelConfig) -> BatchReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut finals = Vec::with_capacity(config.runs);
    let mut passes = 0usize;
    let total_steps = config.runs * config.steps;

    for _ in 0..config.runs {
        let initial = random_triple(&mut rng);
        let mut kernel = EmxKernel::with_config(Some(initial), *kernel_config);

        for _ in 0..config.steps {
            let name = Operator::STEPPABLE[rng.gen_range(0..Operator::STEPPABLE.len())];
            let params = StepParams {
                axis: rng.gen_range(0..3),
                previous: None,
            };
            let outcome = kernel.step_named_with(name, params);
            if outcome.passed {
                passes += 1;
            }
        }

        finals.push(kernel.null_load());
    }

    let mean = finals.iter().sum::<f64>() / finals.len() as f64;
    let variance = finals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / finals.len() as f64;

    BatchReport {
        runs: config.runs,
        steps: config.steps,
        gate_pass_rate: passes as f64 / total_steps as f64,
        mean_null_load: mean,
        std_null_load: variance.sqrt(),
        min_null_load: finals.iter().copied().fold(f64::INFINITY, f64::min),
        max_null_load: finals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        generated_at: Utc::now(),
    }
}

/// Uniform random triple over the 27-element space
pub fn random_triple(rng: &mut impl Rng) -> Triple {
    use crate::algebra::Polarity;
    let mut axis = || Polarity::from_value(rng.gen_range(-1i8..=1)).unwrap_or(Polarity::Zero);
    let x = axis();
    let y = axis();
    let z = axis();
    Triple::new(x, y, z)
}
