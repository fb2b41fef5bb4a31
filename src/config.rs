use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::QueueConfig;

#[derive(Parser, Debug)]
#[command(name = "mmc-sim", about = "M/M/c queue analyzer and simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(long, value_enum, global = true, default_value = "human")]
    pub format: FormatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Closed-form steady-state metrics (Erlang-C, Lq, Wq, L, W)
    Analyze(QueueArgs),
    /// Discrete-event simulation of arrivals and waits
    Simulate {
        #[command(flatten)]
        queue: QueueArgs,
        /// Simulated time span, in the same unit as the rates
        #[arg(long)]
        horizon: Option<f64>,
        /// Seed for the arrival and service draws (0 when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Truncated stationary distribution over queue-length states
    States {
        #[command(flatten)]
        queue: QueueArgs,
        /// Highest state n to report (p0..pn)
        #[arg(long)]
        max_states: Option<usize>,
    },
}

#[derive(Args, Debug)]
pub struct QueueArgs {
    /// Arrival rate lambda, e.g. customers per hour
    #[arg(long)]
    pub arrival_rate: Option<f64>,
    /// Service rate mu per server, in the same unit as lambda
    #[arg(long)]
    pub service_rate: Option<f64>,
    /// Number of identical servers
    #[arg(long)]
    pub servers: Option<u32>,
    /// Factor applied to reported waits (60 turns per-hour rates into minutes)
    #[arg(long)]
    pub time_scale: Option<f64>,
    /// TOML or JSON file with the same parameters; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum FormatArg {
    Human,
    Json,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

pub fn load_config(path: &Path) -> Result<QueueConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!("failed to read config '{}': {}", path.display(), err))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}

impl QueueArgs {
    /// Resolves flags against an optional config file. A file supplies
    /// defaults; any explicit flag wins over it.
    pub fn build_config(&self) -> Result<QueueConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => QueueConfig {
                arrival_rate: self
                    .arrival_rate
                    .ok_or(Error::MissingParameter("arrival-rate"))?,
                service_rate: self
                    .service_rate
                    .ok_or(Error::MissingParameter("service-rate"))?,
                servers: self.servers.ok_or(Error::MissingParameter("servers"))?,
                horizon: 100.0,
                max_states: 20,
                time_scale: 60.0,
                seed: None,
            },
        };

        if let Some(arrival_rate) = self.arrival_rate {
            config.arrival_rate = arrival_rate;
        }
        if let Some(service_rate) = self.service_rate {
            config.service_rate = service_rate;
        }
        if let Some(servers) = self.servers {
            config.servers = servers;
        }
        if let Some(time_scale) = self.time_scale {
            config.time_scale = time_scale;
        }

        Ok(config)
    }
}
