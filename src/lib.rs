pub mod analytic;
pub mod config;
pub mod distribution;
pub mod error;
pub mod models;
pub mod output;
pub mod sim;
