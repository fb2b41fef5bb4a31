use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::error::{Error, Result};
use crate::models::{QueueConfig, SimulationReport};

const WAIT_SAMPLE_LEN: usize = 10;

/// Runs one simulation seeded from the config (`seed` defaults to 0,
/// so unseeded runs are still repeatable).
pub fn run_simulation(config: &QueueConfig) -> Result<SimulationReport> {
    let seed = config.seed.unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    simulate_with_rng(config, &mut rng)
}

/// Discrete-event simulation of an M/M/c queue against an injected
/// random source. Two calls with identically seeded generators produce
/// identical reports.
///
/// Arrivals are drawn as exponential(lambda) gaps until the clock
/// crosses the horizon; the crossing arrival is discarded. Each arrival
/// goes to the earliest-free server (lowest index on ties), waiting if
/// that server is still busy. All state is local to this call, so
/// independent runs can execute in parallel freely.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    config: &QueueConfig,
    rng: &mut R,
) -> Result<SimulationReport> {
    config.validate()?;

    let interarrival = Exp::new(config.arrival_rate)
        .map_err(|_| Error::InvalidArrivalRate(config.arrival_rate))?;
    let service =
        Exp::new(config.service_rate).map_err(|_| Error::InvalidServiceRate(config.service_rate))?;

    let mut arrivals = Vec::new();
    let mut clock = 0.0;
    loop {
        clock += interarrival.sample(rng);
        if clock >= config.horizon {
            break;
        }
        arrivals.push(clock);
    }

    let mut free_at = vec![0.0_f64; config.servers as usize];
    let mut waits = Vec::with_capacity(arrivals.len());
    for &arrival in &arrivals {
        let idx = earliest_free(&free_at);
        let start = arrival.max(free_at[idx]);
        waits.push(start - arrival);
        free_at[idx] = start + service.sample(rng);
    }

    Ok(summarize(
        &waits,
        config.time_scale,
        config.seed.unwrap_or(0),
    ))
}

/// Index of the server that frees up first; strict comparison keeps
/// the lowest index on ties.
fn earliest_free(free_at: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &at) in free_at.iter().enumerate().skip(1) {
        if at < free_at[best] {
            best = idx;
        }
    }
    best
}

fn summarize(waits: &[f64], time_scale: f64, seed: u64) -> SimulationReport {
    let avg_wait = if waits.is_empty() {
        0.0
    } else {
        waits.iter().sum::<f64>() / waits.len() as f64
    };
    let max_wait = waits.iter().copied().fold(0.0_f64, f64::max);

    SimulationReport {
        total_arrivals: waits.len(),
        total_served: waits.len(),
        avg_wait: avg_wait * time_scale,
        max_wait: max_wait * time_scale,
        wait_sample: waits
            .iter()
            .take(WAIT_SAMPLE_LEN)
            .map(|wait| wait * time_scale)
            .collect(),
        seed,
    }
}
