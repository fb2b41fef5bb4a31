use crate::error::Result;
use crate::models::{Outcome, QueueConfig, SteadyState, WaitMetrics};

/// Running-product evaluation of the Erlang denominator terms:
/// returns (sum of a^k/k! for k in 0..c, a^c/c!).
///
/// Multiplying by a/k at each step keeps both values finite for server
/// counts in the hundreds, where separate factorial and power calls
/// overflow long before the ratio does.
fn erlang_terms(a: f64, c: u32) -> (f64, f64) {
    let mut term = 1.0;
    let mut sum = 0.0;
    for k in 0..c {
        sum += term;
        term *= a / (k + 1) as f64;
    }
    (sum, term)
}

/// p0, the probability of an empty system. Requires a < c; the caller
/// checks stability first.
pub fn empty_state_probability(a: f64, c: u32) -> f64 {
    let (sum, tail) = erlang_terms(a, c);
    1.0 / (sum + tail * (c as f64 / (c as f64 - a)))
}

/// Erlang-C: the probability an arrival finds every server busy. For
/// rho >= 1 queueing is certain and the convention is to return 1.0.
pub fn erlang_c(a: f64, c: u32, rho: f64) -> f64 {
    if rho >= 1.0 {
        return 1.0;
    }
    let (_, tail) = erlang_terms(a, c);
    (tail * empty_state_probability(a, c)) / (1.0 - rho)
}

/// Closed-form steady-state analysis. A saturated system (rho >= 1) is
/// a valid answer, reported as `Outcome::Saturated`; only nonpositive
/// parameters are errors.
pub fn analyze(config: &QueueConfig) -> Result<SteadyState> {
    config.validate()?;

    let rho = config.rho();
    let a = config.offered_load();

    if rho >= 1.0 {
        return Ok(SteadyState {
            rho,
            offered_load: a,
            utilization_pct: rho * 100.0,
            outcome: Outcome::Saturated,
        });
    }

    let lambda = config.arrival_rate;
    let mu = config.service_rate;
    let c = config.servers;

    let p0 = empty_state_probability(a, c);
    let erlang = erlang_c(a, c, rho);

    // Wait times in the rate unit first, then scaled for presentation.
    let wq = erlang / (c as f64 * mu - lambda);
    let w = wq + 1.0 / mu;

    Ok(SteadyState {
        rho,
        offered_load: a,
        utilization_pct: rho * 100.0,
        outcome: Outcome::Stable(WaitMetrics {
            p0,
            erlang_c: erlang,
            lq: lambda * wq,
            wq: wq * config.time_scale,
            l: lambda * w,
            w: w * config.time_scale,
        }),
    })
}
