use anyhow::Context;
use appconfig_validator::app;
use appconfig_validator::cli::{Cli, Command};
use appconfig_validator::domain::ValidationResult;
use appconfig_validator::gate::SUCCESS;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match Cli::parse().into_command() {
        Command::Serve => app::run().await.context("validator service failed")?,
        // Docker healthcheck in the distroless image
        Command::Healthcheck { port } => {
            if let Err(e) = appconfig_validator::healthcheck_with_port(port).await {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
        Command::Check {
            path,
            profile,
            policy,
        } => {
            let result = app::check_document(&path, &profile, policy.as_deref())
                .with_context(|| format!("could not validate {}", path.display()))?;
            match result {
                ValidationResult::Accepted => println!("{SUCCESS}"),
                ValidationResult::Rejected(rejection) => {
                    eprintln!("{}: {}", rejection.kind, rejection.reason);
                    std::process::exit(1)
                }
            }
        }
    }
    Ok(())
}
