//! The kernel: single mutable root of the subsystem
//!
//! An [`EmxKernel`] owns exactly one [`EmxState`] at a time and replaces
//! it wholesale each step. Everything below it is value semantics: a new
//! immutable snapshot is built every tick (history carried forward,
//! properties carried forward, triple replaced), which makes the
//! recompute-harmonics-every-tick rule trivially correct and rules out
//! aliasing bugs.
//!
//! The kernel is synchronous and not reentrant: callers serialize calls
//! to `step` per instance. Independent kernels share no state and may be
//! run in parallel freely.

use crate::algebra::{
    classify, delta, exchange, gradient, integrate, k_class, normalize, rotation, NullClass,
    Operator, StepParams, Triple,
};
use crate::config::KernelConfig;
use crate::gate::{Gate, GateVerdict};
use crate::harmonics::{self, Harmonics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-trajectory scalar bundle
///
/// Owned exclusively by one kernel instance and updated only inside its
/// step procedure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StateProperties {
    /// Accumulated systemic slack in [0, 1], evolved by the leaky
    /// integrator anchored to the configured baseline
    pub null_load: f64,

    /// Phase accumulator (unbounded), advanced by O10
    pub phase: f64,

    /// Step counter
    pub tick: u64,
}

impl StateProperties {
    /// Available capacity: C = 1 − ∅
    pub fn capacity(&self) -> f64 {
        1.0 - self.null_load
    }
}

/// Immutable per-tick snapshot: geometry + properties + history
///
/// Classification, k-class and harmonics are derived once at
/// construction and cached for the life of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmxState {
    triple: Triple,
    properties: StateProperties,
    history: Vec<Triple>,
    null_class: NullClass,
    k: u8,
    harmonics: Harmonics,
}

impl EmxState {
    /// Build a snapshot, deriving classification and harmonics
    pub fn new(
        triple: Triple,
        properties: StateProperties,
        history: Vec<Triple>,
        config: &KernelConfig,
    ) -> Self {
        let null_class = classify(triple);
        let k = k_class(triple);
        let harmonics = harmonics::measure(triple, &properties, &history, config);
        Self {
            triple,
            properties,
            history,
            null_class,
            k,
            harmonics,
        }
    }

    /// Current triple
    pub fn triple(&self) -> Triple {
        self.triple
    }

    /// Current scalar bundle
    pub fn properties(&self) -> &StateProperties {
        &self.properties
    }

    /// Trajectory history, oldest first
    pub fn history(&self) -> &[Triple] {
        &self.history
    }

    /// Cached geometric class of the current triple
    pub fn null_class(&self) -> NullClass {
        self.null_class
    }

    /// Cached k-class of the current triple
    pub fn k(&self) -> u8 {
        self.k
    }

    /// Cached harmonics snapshot
    pub fn harmonics(&self) -> &Harmonics {
        &self.harmonics
    }

    /// Run the gate against this snapshot
    pub fn gate_check(&self, config: &KernelConfig) -> GateVerdict {
        Gate::check(self.triple, &self.properties, &self.history, config)
    }
}

/// Outcome of one string-keyed step
///
/// The reason carries either the gate verdict text or the
/// unknown-operator diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Whether the step's gate passed (false also for an unknown name)
    pub passed: bool,
    /// Human-readable reason, "PASS" on success
    pub reason: String,
}

impl From<GateVerdict> for StepOutcome {
    fn from(verdict: GateVerdict) -> Self {
        Self {
            passed: verdict.passed,
            reason: verdict.reason.to_string(),
        }
    }
}

/// The recursive core with measured harmonics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmxKernel {
    state: EmxState,
    config: KernelConfig,
}

impl EmxKernel {
    /// Create a kernel at the given triple, defaulting to the stillpoint
    pub fn new(initial: Option<Triple>) -> Self {
        Self::with_config(initial, KernelConfig::default())
    }

    /// Create a kernel with explicit feedback/gate constants
    pub fn with_config(initial: Option<Triple>, config: KernelConfig) -> Self {
        let triple = initial.unwrap_or_else(Triple::zero);
        let state = EmxState::new(triple, StateProperties::default(), Vec::new(), &config);
        Self { state, config }
    }

    /// Resume a kernel from an existing snapshot
    pub fn from_state(state: EmxState, config: KernelConfig) -> Self {
        Self { state, config }
    }

    /// Execute one operator step (typed path)
    ///
    /// Always advances: a failed gate is a diagnostic on the new state,
    /// not a rollback.
    pub fn step(&mut self, op: Operator) -> GateVerdict {
        self.state.history.push(self.state.triple);
        self.advance(op)
    }

    /// Execute one operator step by wire name with default parameters
    ///
    /// See [`step_named_with`](Self::step_named_with).
    pub fn step_named(&mut self, name: &str) -> StepOutcome {
        self.step_named_with(name, StepParams::default())
    }

    /// Execute one operator step by wire name (string entry point)
    ///
    /// Known quirk: the current triple is appended to history before the
    /// name is validated, so an unknown operator still grows history
    /// while leaving triple, properties and tick untouched.
    pub fn step_named_with(&mut self, name: &str, params: StepParams) -> StepOutcome {
        self.state.history.push(self.state.triple);
        match Operator::from_name(name, &params) {
            Ok(op) => self.advance(op).into(),
            Err(err) => StepOutcome {
                passed: false,
                reason: err.to_string(),
            },
        }
    }

    /// Dispatch, NULL feedback, tick, snapshot rebuild, gate.
    /// History has already been appended by the caller.
    fn advance(&mut self, op: Operator) -> GateVerdict {
        let cur = self.state.triple;
        let mut properties = self.state.properties;

        let new_triple = match op {
            Operator::Delta { previous } => delta(previous.unwrap_or(cur), cur),
            Operator::Gradient => gradient(cur),
            Operator::Rotation => rotation(cur),
            Operator::Normalize => normalize(cur),
            Operator::Exchange { axis } => exchange(cur, axis),
            Operator::Integrate => {
                properties.phase = integrate(cur, properties.phase);
                cur
            }
        };

        // Leaky integrator: activity delta first, then the decay pull
        // toward baseline, then clamp. The order matters.
        let k_old = f64::from(k_class(cur));
        let k_new = f64::from(k_class(new_triple));
        properties.null_load += (k_new - k_old) * self.config.activity_scale;
        properties.null_load +=
            self.config.decay_rate * (self.config.target_null - properties.null_load);
        properties.null_load = properties.null_load.clamp(0.0, 1.0);

        properties.tick += 1;

        let history = std::mem::take(&mut self.state.history);
        self.state = EmxState::new(new_triple, properties, history, &self.config);
        self.state.gate_check(&self.config)
    }

    /// Current snapshot
    pub fn state(&self) -> &EmxState {
        &self.state
    }

    /// Current harmonics measurement
    pub fn harmonics(&self) -> &Harmonics {
        self.state.harmonics()
    }

    /// Current triple
    pub fn triple(&self) -> Triple {
        self.state.triple()
    }

    /// Current NULL-load
    pub fn null_load(&self) -> f64 {
        self.state.properties().null_load
    }

    /// The constants this kernel runs with
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }
}

impl fmt::Display for EmxKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.state.triple();
        write!(
            f,
            "EMx({}, {}, {}) | {} | ∅={:.2} | φ={:.2}",
            t.x(),
            t.y(),
            t.z(),
            self.state.null_class().label(),
            self.state.properties().null_load,
            self.state.properties().phase,
        )
    }
}
