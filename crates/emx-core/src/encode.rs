//! Entry-point encoders: external problems → initial triples
//!
//! Boundary adapters only. The kernel itself requires nothing but "a
//! valid triple as initial condition"; these helpers produce one from a
//! boolean, an integer (base-3 digit decomposition) or a float vector
//! (per-axis sign projection). All are pure and share no state.

use crate::algebra::{Polarity, Triple};

/// Encode a boolean as a single x-axis bias
pub fn from_boolean(value: bool) -> Triple {
    if value {
        Triple::new(Polarity::Plus, Polarity::Zero, Polarity::Zero)
    } else {
        Triple::new(Polarity::Minus, Polarity::Zero, Polarity::Zero)
    }
}

/// Encode an integer by base-3 digit decomposition into the three axes
///
/// Each digit is shifted from {0, 1, 2} to {-1, 0, 1}. Euclidean
/// division keeps the decomposition well-defined for negative inputs.
pub fn from_integer(n: i64) -> Triple {
    if n == 0 {
        return Triple::zero();
    }

    let digit = |d: i64| {
        let v = (d.rem_euclid(3) - 1).clamp(-1, 1) as i8;
        Polarity::from_value(v).unwrap_or(Polarity::Zero)
    };

    Triple::new(digit(n), digit(n.div_euclid(3)), digit(n.div_euclid(9)))
}

/// Encode a float vector by sign projection, missing axes Zero
pub fn from_vector(vec: &[f64]) -> Triple {
    let axis = |i: usize| match vec.get(i) {
        Some(&v) if v > 0.0 => Polarity::Plus,
        Some(&v) if v < 0.0 => Polarity::Minus,
        _ => Polarity::Zero,
    };
    Triple::new(axis(0), axis(1), axis(2))
}
