use serde::Serialize;
use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::models::{SimulationReport, StateDistribution, SteadyState};

#[derive(Clone, Debug)]
pub enum Report {
    SteadyState(SteadyState),
    Simulation(SimulationReport),
    Distribution(StateDistribution),
}

pub trait Formatter {
    fn write(&self, report: &Report) -> Result<String>;
}

pub struct HumanFormatter;
pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        match report {
            Report::SteadyState(steady) => {
                let _ = writeln!(out, "Steady state:");
                let _ = writeln!(out, "rho: {:.4}", steady.rho);
                let _ = writeln!(out, "offered load: {:.4}", steady.offered_load);
                let _ = writeln!(out, "utilization: {:.2}%", steady.utilization_pct);
                match steady.metrics() {
                    Some(metrics) => {
                        let _ = writeln!(out, "p0: {:.4}", metrics.p0);
                        let _ = writeln!(out, "erlang_c: {:.4}", metrics.erlang_c);
                        let _ = writeln!(out, "Lq: {:.4}", metrics.lq);
                        let _ = writeln!(out, "Wq: {:.4}", metrics.wq);
                        let _ = writeln!(out, "L: {:.4}", metrics.l);
                        let _ = writeln!(out, "W: {:.4}", metrics.w);
                    }
                    None => {
                        let _ = writeln!(out, "saturated: waits grow without bound (rho >= 1)");
                    }
                }
            }
            Report::Simulation(report) => {
                let _ = writeln!(out, "Simulation:");
                let _ = writeln!(out, "arrivals: {}", report.total_arrivals);
                let _ = writeln!(out, "served: {}", report.total_served);
                let _ = writeln!(out, "avg wait: {:.4}", report.avg_wait);
                let _ = writeln!(out, "max wait: {:.4}", report.max_wait);
                let sample = report
                    .wait_sample
                    .iter()
                    .map(|wait| format!("{:.4}", wait))
                    .collect::<Vec<_>>()
                    .join(", ");
                if sample.is_empty() {
                    let _ = writeln!(out, "sample: -");
                } else {
                    let _ = writeln!(out, "sample: {}", sample);
                }
                let _ = writeln!(out, "seed: {}", report.seed);
            }
            Report::Distribution(distribution) => {
                let _ = writeln!(out, "Distribution:");
                let _ = writeln!(out, "rho: {:.4}", distribution.rho);
                let _ = writeln!(out, "offered load: {:.4}", distribution.offered_load);
                let _ = writeln!(out, "p0: {:.4}", distribution.p0);
                for entry in &distribution.states {
                    let _ = writeln!(
                        out,
                        "state {}: p = {:.6} (waiting: {})",
                        entry.state, entry.probability, entry.waiting
                    );
                }
                let _ = writeln!(out, "partial sum: {:.4}", distribution.partial_sum());
            }
        }
        Ok(out)
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, report: &Report) -> Result<String> {
        let json = match report {
            Report::SteadyState(steady) => to_pretty(steady),
            Report::Simulation(report) => to_pretty(report),
            Report::Distribution(distribution) => to_pretty(distribution),
        }?;
        Ok(format!("{}\n", json))
    }
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|err| Error::Output(err.to_string()))
}
