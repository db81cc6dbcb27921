//! The gate: per-tick validity predicate
//!
//! An ordered composite of four checks with short-circuit semantics:
//! closure over the recent window, no-clone over the full history,
//! NULL capacity, and the forbidden-state list. A gate rejection is a
//! reported diagnostic, not an execution error — the kernel advances
//! regardless of the verdict.

use crate::algebra::{closure_check, no_clone_check, Polarity, Triple};
use crate::config::KernelConfig;
use crate::kernel::StateProperties;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three forbidden triples: (+,0,0), (+,0,+), (−,0,+)
pub const FORBIDDEN: [Triple; 3] = [
    Triple::new(Polarity::Plus, Polarity::Zero, Polarity::Zero),
    Triple::new(Polarity::Plus, Polarity::Zero, Polarity::Plus),
    Triple::new(Polarity::Minus, Polarity::Zero, Polarity::Plus),
];

/// Why the gate passed or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    /// All four checks passed
    Pass,
    /// The recent window's per-axis sums left the closure bound
    ClosureFailed,
    /// The current triple already occurs in history
    NoCloneViolated,
    /// NULL-load above the capacity ceiling
    CapacityExceeded,
    /// The current triple is on the forbidden list
    ForbiddenState,
}

impl fmt::Display for GateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateReason::Pass => "PASS",
            GateReason::ClosureFailed => "Closure failed",
            GateReason::NoCloneViolated => "No-clone violated",
            GateReason::CapacityExceeded => "NULL capacity exceeded",
            GateReason::ForbiddenState => "Forbidden state accessed",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one gate evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateVerdict {
    /// Whether all checks passed
    pub passed: bool,
    /// First failing check, or [`GateReason::Pass`]
    pub reason: GateReason,
}

impl GateVerdict {
    fn pass() -> Self {
        Self {
            passed: true,
            reason: GateReason::Pass,
        }
    }

    fn fail(reason: GateReason) -> Self {
        Self {
            passed: false,
            reason,
        }
    }
}

/// The equivalence-node checker
pub struct Gate;

impl Gate {
    /// Evaluate the four checks in order, stopping at the first failure
    ///
    /// Pure function of its inputs: no hidden state, identical inputs
    /// give identical verdicts.
    pub fn check(
        triple: Triple,
        props: &StateProperties,
        history: &[Triple],
        config: &KernelConfig,
    ) -> GateVerdict {
        // 1. Closure (O4) over the trailing window; skipped on an empty
        // history.
        if !history.is_empty() {
            let start = history.len().saturating_sub(config.closure_window);
            if !closure_check(&history[start..]) {
                return GateVerdict::fail(GateReason::ClosureFailed);
            }
        }

        // 2. No-clone (O9) against the full history.
        if !no_clone_check(triple, history) {
            return GateVerdict::fail(GateReason::NoCloneViolated);
        }

        // 3. Capacity.
        if props.null_load > config.capacity_ceiling {
            return GateVerdict::fail(GateReason::CapacityExceeded);
        }

        // 4. Forbidden states.
        if FORBIDDEN.contains(&triple) {
            return GateVerdict::fail(GateReason::ForbiddenState);
        }

        GateVerdict::pass()
    }
}
