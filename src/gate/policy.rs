//! Externalized gate policy.
//!
//! Loaded from the YAML file named by `GATE_POLICY_FILE`; every field falls
//! back to the built-in default when absent.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Decoded documents larger than this are rejected without parsing.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct GatePolicy {
    /// Values accepted for `application.logging.level`, matched exactly.
    pub allowed_levels: Vec<String>,
    pub max_payload_bytes: usize,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            allowed_levels: vec!["INFO".into(), "TRACE".into(), "DEBUG".into()],
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl GatePolicy {
    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, PolicyError> {
        let policy = match path {
            Some(path) => {
                let policy = Self::load_from_path(path)?;
                tracing::info!(path = %path.display(), "loaded gate policy");
                policy
            }
            None => {
                tracing::debug!("no gate policy file configured, using defaults");
                Self::default()
            }
        };
        policy.validate()?;
        Ok(policy)
    }

    fn load_from_path(path: &Path) -> Result<Self, PolicyError> {
        let contents = fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| PolicyError::Deserialize {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.allowed_levels.is_empty() {
            return Err(PolicyError::Invalid("allowed_levels must not be empty".into()));
        }
        if self.allowed_levels.iter().any(|level| level.trim().is_empty()) {
            return Err(PolicyError::Invalid(
                "allowed_levels must not contain blank values".into(),
            ));
        }
        if self.max_payload_bytes == 0 {
            return Err(PolicyError::Invalid("max_payload_bytes must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn permits(&self, level: &str) -> bool {
        self.allowed_levels.iter().any(|allowed| allowed == level)
    }

    /// Human-readable list of allowed levels: `INFO, TRACE or DEBUG`.
    pub fn allowed_levels_phrase(&self) -> String {
        match self.allowed_levels.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
        }
    }

    /// Longest padded base64 string that can decode within the size bound.
    pub fn max_encoded_len(&self) -> usize {
        base64::encoded_len(self.max_payload_bytes, true).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read gate policy at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse gate policy at {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid gate policy: {0}")]
    Invalid(String),
}
