//! Geometric classification of triples
//!
//! Two pure total functions over the 27-element triple space: the k-class
//! (count of non-zero axes) and the six-way N-class partition.

use super::polarity::Triple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometric classification of a triple
///
/// The six classes partition the 27-element triple space:
/// 1×N0 + 6×N1 + 6×N2 + 6×N3 + 6×N4 + 2×N5 = 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullClass {
    /// All three axes neutral
    N0,
    /// Exactly one non-zero axis
    N1,
    /// Two non-zero axes of opposite sign
    N2,
    /// Three non-zero axes of mixed sign
    N3,
    /// Two non-zero axes of the same sign
    N4,
    /// Three non-zero axes of the same sign
    N5,
}

impl NullClass {
    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            NullClass::N0 => "Stillpoint",
            NullClass::N1 => "Single-Bias",
            NullClass::N2 => "Balanced-Pair",
            NullClass::N3 => "Triple-Mixed",
            NullClass::N4 => "Unbalanced-Pair",
            NullClass::N5 => "All-Same",
        }
    }
}

impl fmt::Display for NullClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self, self.label())
    }
}

/// Count of non-zero axes, range 0..=3
pub fn k_class(triple: Triple) -> u8 {
    triple.values().iter().filter(|&&v| v != 0).count() as u8
}

/// Classify a triple into its N-class
///
/// Total over all 27 triples; the three size-based branches leave no
/// fallback case reachable.
pub fn classify(triple: Triple) -> NullClass {
    let non_zeros: Vec<i8> = triple.values().into_iter().filter(|&v| v != 0).collect();

    match non_zeros.len() {
        0 => NullClass::N0,
        1 => NullClass::N1,
        2 => {
            if non_zeros[0] * non_zeros[1] < 0 {
                NullClass::N2
            } else {
                NullClass::N4
            }
        }
        _ => {
            if non_zeros.iter().all(|&v| v > 0) || non_zeros.iter().all(|&v| v < 0) {
                NullClass::N5
            } else {
                NullClass::N3
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::polarity::Polarity;
    use std::collections::HashMap;

    #[test]
    fn test_k_class_range() {
        for t in Triple::enumerate() {
            assert!(k_class(t) <= 3);
        }
        assert_eq!(k_class(Triple::zero()), 0);
        let full = Triple::new(Polarity::Plus, Polarity::Minus, Polarity::Plus);
        assert_eq!(k_class(full), 3);
    }

    #[test]
    fn test_partition_histogram() {
        let mut counts: HashMap<NullClass, usize> = HashMap::new();
        for t in Triple::enumerate() {
            *counts.entry(classify(t)).or_default() += 1;
        }

        assert_eq!(counts[&NullClass::N0], 1);
        assert_eq!(counts[&NullClass::N1], 6);
        assert_eq!(counts[&NullClass::N2], 6);
        assert_eq!(counts[&NullClass::N3], 6);
        assert_eq!(counts[&NullClass::N4], 6);
        assert_eq!(counts[&NullClass::N5], 2);
        assert_eq!(counts.values().sum::<usize>(), 27);
    }

    #[test]
    fn test_pair_sign_split() {
        let balanced = Triple::new(Polarity::Plus, Polarity::Minus, Polarity::Zero);
        assert_eq!(classify(balanced), NullClass::N2);

        let unbalanced = Triple::new(Polarity::Plus, Polarity::Plus, Polarity::Zero);
        assert_eq!(classify(unbalanced), NullClass::N4);
    }

    #[test]
    fn test_triple_sign_split() {
        let mixed = Triple::new(Polarity::Plus, Polarity::Minus, Polarity::Plus);
        assert_eq!(classify(mixed), NullClass::N3);

        let all_plus = Triple::new(Polarity::Plus, Polarity::Plus, Polarity::Plus);
        assert_eq!(classify(all_plus), NullClass::N5);
        let all_minus = Triple::new(Polarity::Minus, Polarity::Minus, Polarity::Minus);
        assert_eq!(classify(all_minus), NullClass::N5);
    }

    #[test]
    fn test_classification_matches_k_class() {
        for t in Triple::enumerate() {
            let k = k_class(t);
            let class = classify(t);
            match k {
                0 => assert_eq!(class, NullClass::N0),
                1 => assert_eq!(class, NullClass::N1),
                2 => assert!(matches!(class, NullClass::N2 | NullClass::N4)),
                _ => assert!(matches!(class, NullClass::N3 | NullClass::N5)),
            }
        }
    }
}
