//! Kernel configuration
//!
//! All ambient constants of the NULL-load feedback rule, the gate and the
//! harmonics estimator live here as named fields rather than scattered
//! literals, so tests can vary them without touching logic.

use serde::{Deserialize, Serialize};

/// Configuration for an [`EmxKernel`](crate::kernel::EmxKernel)
///
/// The defaults reproduce the reference dynamics exactly; every constant
/// is injected at kernel construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Baseline the NULL-load relaxes toward each tick
    ///
    /// Typical: 0.22
    pub target_null: f64,

    /// NULL-load ceiling above which the gate reports capacity exhaustion
    ///
    /// Typical: 0.78
    pub capacity_ceiling: f64,

    /// Fraction of the gap to `target_null` closed per tick
    pub decay_rate: f64,

    /// NULL-load contribution per unit of k-class change
    pub activity_scale: f64,

    /// History length at which harmonics switch from the bootstrap
    /// lookup table to trajectory measurement
    pub min_history: usize,

    /// Number of trailing history entries the closure check sums over
    pub closure_window: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            target_null: 0.22,
            capacity_ceiling: 0.78,
            decay_rate: 0.1,
            activity_scale: 0.05,
            min_history: 10,
            closure_window: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = KernelConfig::default();
        assert_eq!(config.target_null, 0.22);
        assert_eq!(config.capacity_ceiling, 0.78);
        assert_eq!(config.decay_rate, 0.1);
        assert_eq!(config.activity_scale, 0.05);
        assert_eq!(config.min_history, 10);
        assert_eq!(config.closure_window, 10);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = KernelConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: KernelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
