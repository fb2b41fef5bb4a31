use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("arrival rate must be > 0 (got {0})")]
    InvalidArrivalRate(f64),
    #[error("service rate must be > 0 (got {0})")]
    InvalidServiceRate(f64),
    #[error("server count must be > 0")]
    InvalidServerCount,
    #[error("simulation horizon must be > 0 (got {0})")]
    InvalidHorizon(f64),
    #[error("time scale must be > 0 (got {0})")]
    InvalidTimeScale(f64),
    #[error("system is unstable (rho = {rho:.4} >= 1): no stationary distribution exists")]
    Unstable { rho: f64 },
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("failed to serialize output: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, Error>;
