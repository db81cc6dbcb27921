//! EMx Core - deterministic ternary symbolic-dynamics engine
//!
//! EMx is a state machine over ternary-polarity triples, advanced by a
//! fixed set of algebraic operators, with scalar "harmonics" measured
//! from the trajectory history rather than computed analytically.
//!
//! # Architecture
//!
//! The engine is built from six layers, leaves first:
//!
//! 1. **Polarity algebra** (`algebra::polarity`): the {−0, 0, +0}
//!    alphabet and its triple carrier
//! 2. **Operator set** (`algebra::operators`): the six steppable pure
//!    transforms plus the two gate-internal checkers
//! 3. **State classifier** (`algebra::classify`): k-class and the six-way
//!    N0..N5 partition of the 27-triple space
//! 4. **Harmonics estimator** (`harmonics`): α, β, γ, Ω, ∅ measured from
//!    the trailing trajectory window, bootstrapped on short histories
//! 5. **Gate** (`gate`): ordered closure / no-clone / capacity /
//!    forbidden-state validity predicate
//! 6. **Kernel** (`kernel`): the single mutable root, rebuilding an
//!    immutable state snapshot every tick
//!
//! # Quick Start
//!
//! ```
//! use emx_core::{EmxKernel, Operator};
//!
//! let mut kernel = EmxKernel::new(None); // starts at the stillpoint
//!
//! // Kick out of stillpoint, rotate, relax back.
//! kernel.step(Operator::Gradient);
//! kernel.step(Operator::Rotation);
//! let verdict = kernel.step(Operator::Normalize);
//!
//! // The gate verdict is a diagnostic; the kernel advanced regardless.
//! println!("{} ({})", kernel, verdict.reason);
//! assert_eq!(kernel.state().properties().tick, 3);
//! ```
//!
//! # Design Principles
//!
//! 1. **Value semantics everywhere**: operators never mutate their
//!    inputs; each tick produces a fresh immutable snapshot
//! 2. **Total functions**: the core clamps and neutralizes instead of
//!    failing; the one explicit error is an unknown operator name on the
//!    string entry point
//! 3. **Measured over prescribed**: harmonics come from the trajectory
//!    once enough history exists, never from cached values
//! 4. **Constants are configuration**: the 0.22 baseline, 0.78 ceiling
//!    and friends are injected via [`KernelConfig`], not scattered

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod algebra;
pub mod config;
pub mod encode;
pub mod error;
pub mod gate;
pub mod harmonics;
pub mod kernel;
pub mod trajectory;

// Re-export commonly used types for convenience
pub use algebra::{classify, k_class, NullClass, Operator, Polarity, StepParams, Triple};
pub use config::KernelConfig;
pub use error::{EmxError, KernelError, Result};
pub use gate::{Gate, GateReason, GateVerdict};
pub use harmonics::Harmonics;
pub use kernel::{EmxKernel, EmxState, StateProperties, StepOutcome};
pub use trajectory::{run_batch, run_pattern, BatchConfig, BatchReport, Pattern, TrajectoryReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
