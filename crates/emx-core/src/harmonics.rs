//! The harmonics estimator
//!
//! Five observables (α, β, γ, Ω, ∅) describing the current trajectory:
//! structural alignment, drift, closure coherence, lineage uniqueness and
//! null occupancy. Harmonics are MEASURED from the trailing history
//! window once enough trajectory exists; short trajectories bootstrap
//! from a fixed lookup table keyed by k-class, because the measured
//! formulas are unstable on thin data.
//!
//! Harmonics are recomputed fresh on every state rebuild and never cached
//! across ticks.

use crate::algebra::{k_class, Triple};
use crate::config::KernelConfig;
use crate::kernel::StateProperties;
use serde::{Deserialize, Serialize};

/// Bootstrap α per k-class (structural alignment)
const BOOTSTRAP_ALPHA: [f64; 4] = [0.000, 0.333, 0.667, 1.000];
/// Bootstrap β per k-class (drift magnitude)
const BOOTSTRAP_BETA: [f64; 4] = [0.000, 0.180, 0.420, 0.720];
/// Bootstrap γ per k-class (closure coherence)
const BOOTSTRAP_GAMMA: [f64; 4] = [1.000, 0.999, 0.996, 0.992];

/// Normalization ceiling for the k-class variance feeding α
const MAX_K_VARIANCE: f64 = 1.5;

/// The five observables: α, β, γ, Ω, ∅
///
/// A derived snapshot — never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonics {
    /// Structural alignment in [0, 1]: low k-class variance over the
    /// window means high alignment
    pub alpha: f64,

    /// Drift magnitude: mean per-step elementwise change, normalized and
    /// clamped to [0, 1]
    pub beta: f64,

    /// Closure coherence in [0, 1]: closeness of the current triple to
    /// the window's dominant state
    pub gamma: f64,

    /// Lineage uniqueness: true iff the current triple occurs at most
    /// once in history
    pub omega: bool,

    /// Copy of the NULL-load at measurement time
    pub null_share: f64,
}

/// Measure harmonics for the current triple against its trajectory
///
/// With fewer than `config.min_history` history entries the bootstrap
/// table anchors α/β/γ; at or past the threshold all three are measured
/// from the trailing `min_history`-length window. Ω and ∅ are computed
/// the same way in both modes.
pub fn measure(
    triple: Triple,
    props: &StateProperties,
    history: &[Triple],
    config: &KernelConfig,
) -> Harmonics {
    let k = k_class(triple) as usize;
    let omega = history.iter().filter(|&&t| t == triple).count() <= 1;

    // min_history of 0 would leave the measurement window empty; treat
    // it as 1 so the measured path always has data.
    let window_len = config.min_history.max(1);

    if history.len() < window_len {
        return Harmonics {
            alpha: BOOTSTRAP_ALPHA[k],
            beta: BOOTSTRAP_BETA[k],
            gamma: BOOTSTRAP_GAMMA[k],
            omega,
            null_share: props.null_load,
        };
    }

    let recent = &history[history.len() - window_len..];

    // α: 1 − normalized variance of the k-class distribution
    let k_values: Vec<f64> = recent.iter().map(|&t| f64::from(k_class(t))).collect();
    let k_mean = k_values.iter().sum::<f64>() / k_values.len() as f64;
    let k_variance =
        k_values.iter().map(|k| (k - k_mean).powi(2)).sum::<f64>() / k_values.len() as f64;
    let alpha = 1.0 - (k_variance / MAX_K_VARIANCE).min(1.0);

    // β: mean consecutive L1 distance across the window, scaled by the
    // per-step maximum of 3
    let beta = if recent.len() >= 2 {
        let total: f64 = recent
            .windows(2)
            .map(|pair| f64::from(pair[0].l1_distance(pair[1])))
            .sum();
        (total / (recent.len() - 1) as f64 / 3.0).min(1.0)
    } else {
        0.0
    };

    // γ: distance of the current triple from the window's most frequent
    // state, against the maximum possible distance of 6. Frequency ties
    // go to the first-encountered triple.
    let modal = most_frequent(recent);
    let gamma = (1.0 - f64::from(triple.l1_distance(modal)) / 6.0).clamp(0.0, 1.0);

    Harmonics {
        alpha,
        beta,
        gamma,
        omega,
        null_share: props.null_load,
    }
}

/// Most frequent triple in the window, ties broken by first encounter
///
/// The window is never empty when called: `measure` only reaches it past
/// the bootstrap threshold.
fn most_frequent(window: &[Triple]) -> Triple {
    let mut best = window[0];
    let mut best_count = 0usize;
    let mut seen: Vec<Triple> = Vec::new();
    for &candidate in window {
        if seen.contains(&candidate) {
            continue;
        }
        seen.push(candidate);
        let count = window.iter().filter(|&&t| t == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Polarity;

    fn t(x: i8, y: i8, z: i8) -> Triple {
        Triple::new(
            Polarity::from_value(x).unwrap(),
            Polarity::from_value(y).unwrap(),
            Polarity::from_value(z).unwrap(),
        )
    }

    fn props(null_load: f64) -> StateProperties {
        StateProperties {
            null_load,
            phase: 0.0,
            tick: 0,
        }
    }

    #[test]
    fn test_bootstrap_below_threshold() {
        let config = KernelConfig::default();
        let history = vec![Triple::zero(); 9];

        let h = measure(t(1, 0, 0), &props(0.3), &history, &config);
        assert_eq!(h.alpha, 0.333);
        assert_eq!(h.beta, 0.180);
        assert_eq!(h.gamma, 0.999);
        assert_eq!(h.null_share, 0.3);

        let h = measure(t(1, -1, 1), &props(0.0), &history, &config);
        assert_eq!(h.alpha, 1.000);
        assert_eq!(h.beta, 0.720);
        assert_eq!(h.gamma, 0.992);
    }

    #[test]
    fn test_measured_at_threshold() {
        let config = KernelConfig::default();
        // Constant history: zero variance, zero drift, modal state is the
        // current state.
        let history = vec![t(1, 0, 0); 10];

        let h = measure(t(1, 0, 0), &props(0.22), &history, &config);
        assert_eq!(h.alpha, 1.0);
        assert_eq!(h.beta, 0.0);
        assert_eq!(h.gamma, 1.0);
        assert_eq!(h.null_share, 0.22);
    }

    #[test]
    fn test_bootstrap_and_measured_disagree_on_erratic_trajectory() {
        let config = KernelConfig::default();
        // Erratic k-class oscillation between 0 and 3
        let erratic: Vec<Triple> = (0..10)
            .map(|i| if i % 2 == 0 { Triple::zero() } else { t(1, -1, 1) })
            .collect();

        let short = &erratic[..9];
        let bootstrap = measure(t(1, -1, 1), &props(0.22), short, &config);
        let measured = measure(t(1, -1, 1), &props(0.22), &erratic, &config);

        // Bootstrap says full alignment for k=3; measurement sees the
        // oscillation and disagrees on all three scalars.
        assert_eq!(bootstrap.alpha, 1.000);
        assert!(measured.alpha < bootstrap.alpha);
        assert!(measured.beta > bootstrap.beta);
        assert!(measured.gamma < bootstrap.gamma);
    }

    #[test]
    fn test_alpha_variance_floor() {
        let config = KernelConfig::default();
        // Max oscillation: k alternates 0/3, variance 2.25 > 1.5 ceiling
        let erratic: Vec<Triple> = (0..10)
            .map(|i| if i % 2 == 0 { Triple::zero() } else { t(1, -1, 1) })
            .collect();
        let h = measure(Triple::zero(), &props(0.0), &erratic, &config);
        assert_eq!(h.alpha, 0.0);
        assert_eq!(h.beta, 1.0);
    }

    #[test]
    fn test_omega_counts_occurrences() {
        let config = KernelConfig::default();
        let unique = vec![t(1, 0, 0), t(0, 1, 0)];
        assert!(measure(t(0, 0, 1), &props(0.0), &unique, &config).omega);
        assert!(measure(t(1, 0, 0), &props(0.0), &unique, &config).omega);

        let repeated = vec![t(1, 0, 0), t(1, 0, 0), t(0, 1, 0)];
        assert!(!measure(t(1, 0, 0), &props(0.0), &repeated, &config).omega);
    }

    #[test]
    fn test_modal_tie_breaks_first_encountered() {
        // Two states with equal counts: first encountered wins
        let window = vec![t(1, 0, 0), t(0, 1, 0), t(1, 0, 0), t(0, 1, 0)];
        assert_eq!(most_frequent(&window), t(1, 0, 0));

        let window = vec![t(0, 1, 0), t(1, 0, 0)];
        assert_eq!(most_frequent(&window), t(0, 1, 0));
    }

    #[test]
    fn test_custom_min_history() {
        let config = KernelConfig {
            min_history: 3,
            ..KernelConfig::default()
        };
        let history = vec![t(1, 0, 0); 3];
        let h = measure(t(1, 0, 0), &props(0.1), &history, &config);
        // Measured path with a 3-entry window
        assert_eq!(h.alpha, 1.0);
        assert_eq!(h.beta, 0.0);
    }
}
