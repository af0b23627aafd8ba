#![warn(rust_2018_idioms)]

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod handler;
pub mod healthcheck;

pub use domain::{ConfigurationPayload, Rejection, RejectionKind, ValidationResult};
pub use gate::{GateRegistry, ValidationGate};
pub use healthcheck::healthcheck_with_port;
