//! Context commands (saved endpoint, subscription, and resource group).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI defaults.
#[derive(Debug, Args)]
pub struct ContextCommand {
    #[command(subcommand)]
    command: ContextSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContextSubcommand {
    /// Show the saved context.
    Show,

    /// Save new defaults.
    Set(SetArgs),

    /// Clear the saved subscription and resource group.
    Clear,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Resource Manager endpoint URL to save.
    #[arg(long)]
    default_endpoint: Option<String>,

    /// Default subscription ID.
    #[arg(long)]
    default_subscription: Option<String>,

    /// Default resource group name.
    #[arg(long)]
    default_resource_group: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContextView {
    endpoint: String,
    subscription_id: Option<String>,
    resource_group: Option<String>,
}

impl From<&Config> for ContextView {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            subscription_id: config.subscription_id.clone(),
            resource_group: config.resource_group.clone(),
        }
    }
}

impl ContextCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ContextSubcommand::Show => show(ctx),
            ContextSubcommand::Set(args) => set(ctx, args),
            ContextSubcommand::Clear => clear(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ContextView::from(&ctx.config);

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("endpoint: {}", view.endpoint);
            println!("subscription: {}", view.subscription_id.as_deref().unwrap_or("-"));
            println!("resource_group: {}", view.resource_group.as_deref().unwrap_or("-"));
            if let Ok(path) = Config::path() {
                print_info(&format!("Saved at {}", path.display()));
            }
        }
    }

    Ok(())
}

fn apply(config: &mut Config, args: SetArgs) -> bool {
    let mut changed = false;
    if let Some(endpoint) = args.default_endpoint {
        config.endpoint = endpoint.trim_end_matches('/').to_string();
        changed = true;
    }
    if let Some(subscription) = args.default_subscription {
        config.subscription_id = Some(subscription);
        changed = true;
    }
    if let Some(resource_group) = args.default_resource_group {
        config.resource_group = Some(resource_group);
        changed = true;
    }
    changed
}

fn set(mut ctx: CommandContext, args: SetArgs) -> Result<()> {
    if !apply(&mut ctx.config, args) {
        anyhow::bail!("Nothing to set. Pass --default-endpoint, --default-subscription, or --default-resource-group.");
    }
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&ContextView::from(&ctx.config)),
        OutputFormat::Table => print_success("Saved context"),
    }

    Ok(())
}

fn clear(mut ctx: CommandContext) -> Result<()> {
    ctx.config.subscription_id = None;
    ctx.config.resource_group = None;
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved context"),
    }

    Ok(())
}
