use crate::domain::{Rejection, RejectionKind};
use thiserror::Error;

/// Every way a candidate document can fail the gate.
///
/// None of these are system faults; they are converted to
/// [`ValidationResult::Rejected`](crate::domain::ValidationResult) before
/// leaving the gate.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Content is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Payload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("Content is not a valid YAML or JSON document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing {0}")]
    MissingSection(String),

    #[error("Missing {0} config")]
    MissingField(String),

    #[error("Allowed values are {allowed}")]
    InvalidValue { allowed: String },
}

impl GateError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Decode(_) => RejectionKind::Decode,
            Self::TooLarge { .. } => RejectionKind::TooLarge,
            Self::Parse(_) => RejectionKind::Parse,
            Self::MissingSection(_) => RejectionKind::MissingSection,
            Self::MissingField(_) => RejectionKind::MissingField,
            Self::InvalidValue { .. } => RejectionKind::InvalidValue,
        }
    }
}

impl From<GateError> for Rejection {
    fn from(error: GateError) -> Self {
        Rejection::new(error.kind(), error.to_string())
    }
}
