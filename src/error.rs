use std::path::PathBuf;

use crate::gate::policy::PolicyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Unknown configuration profile: {0}")]
    UnknownProfile(String),

    #[error("Failed to read document {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
