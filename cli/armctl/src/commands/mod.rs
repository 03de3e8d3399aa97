//! CLI commands.

mod context;
mod fluid_relay;
mod ids;

use anyhow::Result;
use armkit_sdk::{ArmClient, ClientOptions};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// armctl - inspect Azure resource IDs and manage Fluid Relay resources.
#[derive(Debug, Parser)]
#[command(name = "armctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Subscription ID.
    #[arg(long, global = true, env = "ARM_SUBSCRIPTION_ID")]
    subscription: Option<String>,

    /// Resource group name.
    #[arg(long, global = true, env = "ARM_RESOURCE_GROUP")]
    resource_group: Option<String>,

    /// Resource Manager endpoint URL, overriding the saved one.
    #[arg(long, global = true, env = "ARM_ENDPOINT")]
    endpoint: Option<String>,

    /// Bearer token for the Resource Manager API.
    #[arg(long, global = true, env = "ARM_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse, validate, and render resource IDs.
    Ids(ids::IdsCommand),

    /// Manage Fluid Relay servers and containers.
    FluidRelay(fluid_relay::FluidRelayCommand),

    /// Show or change saved defaults.
    Context(context::ContextCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        let ctx = CommandContext {
            config,
            format: self.format,
            endpoint: self.endpoint,
            subscription: self.subscription,
            resource_group: self.resource_group,
            token: self.token,
        };

        match self.command {
            Commands::Ids(cmd) => cmd.run(ctx),
            Commands::FluidRelay(cmd) => cmd.run(ctx).await,
            Commands::Context(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("armctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub endpoint: Option<String>,
    pub subscription: Option<String>,
    pub resource_group: Option<String>,
    pub token: Option<String>,
}

impl CommandContext {
    /// Get an authenticated API client.
    pub fn client(&self) -> Result<ArmClient, CliError> {
        let token = self.token.clone().ok_or(CliError::NotAuthenticated)?;
        let endpoint = self.resolve_endpoint();
        debug!(endpoint, "Creating Resource Manager client");
        let client = ArmClient::new(ClientOptions {
            endpoint: endpoint.to_string(),
            token: Some(token),
            ..ClientOptions::default()
        })?;
        Ok(client)
    }

    /// Resolve the endpoint, preferring flag (or `ARM_ENDPOINT`) over saved config.
    pub fn resolve_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(&self.config.endpoint)
    }

    /// Resolve the subscription, preferring flag over saved default.
    pub fn resolve_subscription(&self) -> Option<&str> {
        self.subscription
            .as_deref()
            .or(self.config.subscription_id.as_deref())
    }

    /// Resolve the resource group, preferring flag over saved default.
    pub fn resolve_resource_group(&self) -> Option<&str> {
        self.resource_group
            .as_deref()
            .or(self.config.resource_group.as_deref())
    }

    /// Require a subscription to be specified.
    pub fn require_subscription(&self) -> Result<&str, CliError> {
        self.resolve_subscription()
            .ok_or(CliError::MissingDefault("subscription"))
    }

    /// Require a resource group to be specified.
    pub fn require_resource_group(&self) -> Result<&str, CliError> {
        self.resolve_resource_group()
            .ok_or(CliError::MissingDefault("resource group"))
    }
}
