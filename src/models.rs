use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Input parameters for one M/M/c analysis or simulation run.
///
/// `arrival_rate` and `service_rate` share a caller-chosen time unit
/// (per-hour in the examples). Wait-time outputs are multiplied by
/// `time_scale`, so the default of 60 reports per-hour rates as minutes.
/// `horizon` is expressed in the same unit as the rates.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct QueueConfig {
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub servers: u32,
    #[serde(default = "default_horizon")]
    pub horizon: f64,
    #[serde(default = "default_max_states")]
    pub max_states: usize,
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl QueueConfig {
    pub fn validate(&self) -> Result<()> {
        if self.arrival_rate <= 0.0 {
            return Err(Error::InvalidArrivalRate(self.arrival_rate));
        }
        if self.service_rate <= 0.0 {
            return Err(Error::InvalidServiceRate(self.service_rate));
        }
        if self.servers == 0 {
            return Err(Error::InvalidServerCount);
        }
        if self.horizon <= 0.0 {
            return Err(Error::InvalidHorizon(self.horizon));
        }
        if self.time_scale <= 0.0 {
            return Err(Error::InvalidTimeScale(self.time_scale));
        }
        Ok(())
    }

    /// Per-server utilization rho = lambda / (c * mu).
    pub fn rho(&self) -> f64 {
        self.arrival_rate / (self.servers as f64 * self.service_rate)
    }

    /// Offered load a = lambda / mu, in units of one server's capacity.
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }
}

fn default_horizon() -> f64 {
    100.0
}

fn default_max_states() -> usize {
    20
}

fn default_time_scale() -> f64 {
    60.0
}

/// Steady-state view of the queue. `rho`, `offered_load`, and the
/// utilization percentage are defined for any valid parameters; the
/// wait metrics only exist when the system is stable, which the
/// `outcome` variant encodes instead of infinity sentinels.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SteadyState {
    pub rho: f64,
    pub offered_load: f64,
    pub utilization_pct: f64,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "stability", rename_all = "kebab-case")]
pub enum Outcome {
    Stable(WaitMetrics),
    Saturated,
}

impl SteadyState {
    pub fn is_stable(&self) -> bool {
        matches!(self.outcome, Outcome::Stable(_))
    }

    pub fn metrics(&self) -> Option<&WaitMetrics> {
        match &self.outcome {
            Outcome::Stable(metrics) => Some(metrics),
            Outcome::Saturated => None,
        }
    }
}

/// Closed-form metrics for a stable system. `wq` and `w` are scaled by
/// the configured `time_scale`; `lq` and `l` are customer counts.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WaitMetrics {
    pub p0: f64,
    pub erlang_c: f64,
    pub lq: f64,
    pub wq: f64,
    pub l: f64,
    pub w: f64,
}

/// Truncated stationary distribution over queue-length states.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StateDistribution {
    pub rho: f64,
    pub offered_load: f64,
    pub p0: f64,
    pub states: Vec<StateProbability>,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct StateProbability {
    pub state: usize,
    pub probability: f64,
    pub waiting: usize,
}

impl StateDistribution {
    /// Probability mass covered by the truncation; <= 1 and approaches
    /// 1 as the caller raises `max_states`.
    pub fn partial_sum(&self) -> f64 {
        self.states.iter().map(|entry| entry.probability).sum()
    }
}

/// Empirical wait statistics from one simulation run. Waits carry the
/// same `time_scale` factor as the analytic metrics so the two views
/// are directly comparable.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SimulationReport {
    pub total_arrivals: usize,
    pub total_served: usize,
    pub avg_wait: f64,
    pub max_wait: f64,
    pub wait_sample: Vec<f64>,
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> QueueConfig {
        QueueConfig {
            arrival_rate: 2.0,
            service_rate: 3.0,
            servers: 1,
            horizon: 100.0,
            max_states: 20,
            time_scale: 60.0,
            seed: None,
        }
    }

    #[test]
    fn validate_accepts_positive_parameters() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_nonpositive_rates() {
        let mut config = base_config();
        config.arrival_rate = 0.0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.service_rate = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_servers() {
        let mut config = base_config();
        config.servers = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidServerCount)
        ));
    }

    #[test]
    fn validate_rejects_nonpositive_horizon_and_scale() {
        let mut config = base_config();
        config.horizon = 0.0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.time_scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rho_and_offered_load_follow_definitions() {
        let mut config = base_config();
        config.servers = 4;
        assert!((config.rho() - 2.0 / 12.0).abs() < 1e-12);
        assert!((config.offered_load() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn toml_defaults_fill_optional_fields() {
        let config: QueueConfig =
            toml::from_str("arrival_rate = 2.0\nservice_rate = 3.0\nservers = 1\n")
                .expect("config should parse");
        assert_eq!(config.horizon, 100.0);
        assert_eq!(config.max_states, 20);
        assert_eq!(config.time_scale, 60.0);
        assert_eq!(config.seed, None);
    }
}
