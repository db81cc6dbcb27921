//! The operator set
//!
//! Six steppable pure transforms (delta, gradient, rotation, normalize,
//! exchange, integrate) and the two checkers the gate runs internally
//! (closure, no-clone). All are deterministic and side-effect-free on
//! their inputs.
//!
//! The canonical algebra names ten operator slots O1..O10. Only O1, O2,
//! O3, O6, O7 and O10 are load-bearing for the kernel's step function;
//! O4 and O9 are checks invoked by the gate, and O5/O8 are reserved.

use super::classify::k_class;
use super::polarity::{Polarity, Triple};
use crate::error::KernelError;
use serde::{Deserialize, Serialize};

/// Δ (O1): elementwise temporal difference
///
/// Each axis becomes the polarity of `cur - prev`. A difference of
/// magnitude 2 is a discontinuity and neutralizes that axis to Zero
/// rather than failing.
pub fn delta(prev: Triple, cur: Triple) -> Triple {
    let a = prev.values();
    let b = cur.values();
    let mut out = [Polarity::Zero; 3];
    for i in 0..3 {
        let diff = b[i] - a[i];
        out[i] = Polarity::from_value(diff).unwrap_or(Polarity::Zero);
    }
    Triple(out)
}

/// ∇ (O2): symmetry-breaking kick out of the stillpoint
///
/// Only fires at the exact all-zero point, forcing axis x to Plus;
/// everywhere else it is the identity.
pub fn gradient(triple: Triple) -> Triple {
    if triple.is_zero() {
        Triple::new(Polarity::Plus, Polarity::Zero, Polarity::Zero)
    } else {
        triple
    }
}

/// rot (O3): cyclic permutation (z, x, y)
///
/// Three applications return the original triple.
pub fn rotation(triple: Triple) -> Triple {
    Triple::new(triple.z(), triple.x(), triple.y())
}

/// 𝓝 (O6): each non-zero axis steps one toward Zero
///
/// Never increases the k-class.
pub fn normalize(triple: Triple) -> Triple {
    let mut out = [Polarity::Zero; 3];
    for (i, v) in triple.values().into_iter().enumerate() {
        // With values confined to {-1, 0, 1} a single step always lands
        // on Zero.
        out[i] = match v {
            0 => Polarity::Zero,
            v if v > 0 => Polarity::from_value(v - 1).unwrap_or(Polarity::Plus),
            v => Polarity::from_value(v + 1).unwrap_or(Polarity::Minus),
        };
    }
    Triple(out)
}

/// 𝓢 (O7): flip the sign of one axis
///
/// The axis index wraps mod 3; Zero stays Zero.
pub fn exchange(triple: Triple, axis: usize) -> Triple {
    let mut out = triple.0;
    let axis = axis % 3;
    out[axis] = -out[axis];
    Triple(out)
}

/// Σ (O10): phase accumulation
///
/// Returns the updated phase scalar; the triple itself is untouched.
pub fn integrate(triple: Triple, phase: f64) -> f64 {
    phase + 0.1 * f64::from(k_class(triple))
}

/// ∮ (O4): closure check over a bounded window of recent triples
///
/// Passes iff every axis's summed value over the window has magnitude
/// at most 1. An empty window passes.
pub fn closure_check(window: &[Triple]) -> bool {
    let mut totals = [0i32; 3];
    for triple in window {
        for (total, v) in totals.iter_mut().zip(triple.values()) {
            *total += i32::from(v);
        }
    }
    totals.iter().all(|t| t.abs() <= 1)
}

/// 𝓘 (O9): no-clone check
///
/// True iff the triple does not already occur anywhere in the history.
pub fn no_clone_check(triple: Triple, history: &[Triple]) -> bool {
    !history.contains(&triple)
}

/// Caller-supplied parameters for the string-keyed entry point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    /// Axis for O7 Exchange (wraps mod 3)
    pub axis: usize,
    /// Previous operand for O1 Delta; defaults to the current triple
    pub previous: Option<Triple>,
}

/// Closed dispatch over the steppable operators
///
/// The string-keyed wire names (O1, O2, O3, O6, O7, O10) exist only at
/// the external boundary; inside the kernel dispatch is a closed enum and
/// the unknown-operator path is unreachable for valid variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum Operator {
    /// O1: temporal difference against a previous triple
    Delta {
        /// Operand to diff against; `None` diffs the current triple
        /// against itself
        previous: Option<Triple>,
    },
    /// O2: stillpoint kick
    Gradient,
    /// O3: cyclic rotation
    Rotation,
    /// O6: step toward Zero
    Normalize,
    /// O7: flip one axis
    Exchange {
        /// Axis index, wraps mod 3
        axis: usize,
    },
    /// O10: phase accumulation
    Integrate,
}

impl Operator {
    /// Resolve a wire name to a steppable operator
    ///
    /// O4/O9 (gate-internal) and O5/O8 (reserved) are not steppable and
    /// resolve to [`KernelError::UnknownOperator`] like any other
    /// unrecognized name.
    pub fn from_name(name: &str, params: &StepParams) -> Result<Self, KernelError> {
        match name {
            "O1" => Ok(Operator::Delta {
                previous: params.previous,
            }),
            "O2" => Ok(Operator::Gradient),
            "O3" => Ok(Operator::Rotation),
            "O6" => Ok(Operator::Normalize),
            "O7" => Ok(Operator::Exchange { axis: params.axis }),
            "O10" => Ok(Operator::Integrate),
            _ => Err(KernelError::UnknownOperator(name.to_string())),
        }
    }

    /// Wire name of this operator
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Delta { .. } => "O1",
            Operator::Gradient => "O2",
            Operator::Rotation => "O3",
            Operator::Normalize => "O6",
            Operator::Exchange { .. } => "O7",
            Operator::Integrate => "O10",
        }
    }

    /// The steppable wire names, in slot order
    pub const STEPPABLE: [&'static str; 6] = ["O1", "O2", "O3", "O6", "O7", "O10"];
}
