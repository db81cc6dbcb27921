//! The ternary algebra: alphabet, classification and operators
//!
//! Everything in this module is a pure, total function over the 27-element
//! triple space. No allocation happens on the operator hot path.

pub mod classify;
pub mod operators;
pub mod polarity;

pub use classify::{classify, k_class, NullClass};
pub use operators::{
    closure_check, delta, exchange, gradient, integrate, no_clone_check, normalize, rotation,
    Operator, StepParams,
};
pub use polarity::{Polarity, Triple};
