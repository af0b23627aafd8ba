use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_HTTP_PORT;
use crate::gate::LOGGING_PROFILE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the validation service (default)
    Serve,

    /// Probe the local health endpoint; exits non-zero when unhealthy
    Healthcheck {
        #[arg(long, env = "HTTP_PORT", default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
    },

    /// Validate a local configuration document before committing it
    Check {
        /// Path to the YAML or JSON document, e.g. logging.yaml
        path: PathBuf,

        /// Configuration profile to validate against
        #[arg(long, default_value = LOGGING_PROFILE)]
        profile: String,

        /// Gate policy file overriding the built-in defaults
        #[arg(long, env = "GATE_POLICY_FILE")]
        policy: Option<PathBuf>,
    },
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
