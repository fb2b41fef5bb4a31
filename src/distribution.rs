use crate::analytic::empty_state_probability;
use crate::error::{Error, Result};
use crate::models::{QueueConfig, StateDistribution, StateProbability};

/// Truncated stationary distribution p0..p_max_states.
///
/// Unlike `analyze`, an unstable system is a hard error here: for
/// rho >= 1 no stationary distribution exists, so there is nothing
/// meaningful to truncate.
///
/// No convergence detection is attempted; the caller picks a
/// `max_states` deep enough that the tail beyond it is negligible.
pub fn state_distribution(config: &QueueConfig, max_states: usize) -> Result<StateDistribution> {
    config.validate()?;

    let rho = config.rho();
    if rho >= 1.0 {
        return Err(Error::Unstable { rho });
    }

    let a = config.offered_load();
    let c = config.servers;
    let p0 = empty_state_probability(a, c);

    // p_n / p_{n-1} is a/n while servers remain idle and a/c (= rho)
    // once the queue forms, so each row is one multiply.
    let mut states = Vec::with_capacity(max_states + 1);
    let mut pn = p0;
    for n in 0..=max_states {
        if n > 0 {
            pn *= a / (n.min(c as usize)) as f64;
        }
        states.push(StateProbability {
            state: n,
            probability: pn,
            waiting: n.saturating_sub(c as usize),
        });
    }

    Ok(StateDistribution {
        rho,
        offered_load: a,
        p0,
        states,
    })
}
