//! Fluid Relay commands.

use anyhow::Result;
use armkit_resourceids::{ResourceGroupId, SubscriptionId};
use armkit_sdk::fluidrelay::{
    FluidRelayContainer, FluidRelayContainersClient, FluidRelayId, FluidRelayServer,
    FluidRelayServersClient, KeyName, RegenerateKeyRequest,
};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{display_option, print_output, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Fluid Relay commands.
#[derive(Debug, Args)]
pub struct FluidRelayCommand {
    #[command(subcommand)]
    command: FluidRelaySubcommand,
}

#[derive(Debug, Subcommand)]
enum FluidRelaySubcommand {
    /// List servers in the resource group (or the whole subscription).
    List(ListArgs),

    /// Get server details.
    Get(ServerArgs),

    /// Delete a server.
    Delete(ServerArgs),

    /// Show the server's access keys.
    Keys(ServerArgs),

    /// Regenerate one of the server's access keys.
    RegenerateKey(RegenerateKeyArgs),

    /// List containers in a server.
    Containers(ServerArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// List across the whole subscription instead of one resource group.
    #[arg(long)]
    all: bool,
}

#[derive(Debug, Args)]
struct ServerArgs {
    /// Server name.
    name: String,
}

#[derive(Debug, Args)]
struct RegenerateKeyArgs {
    /// Server name.
    name: String,

    /// Key to regenerate.
    #[arg(long, value_enum, default_value_t = KeyArg::Key1)]
    key: KeyArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KeyArg {
    Key1,
    Key2,
}

impl From<KeyArg> for KeyName {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Key1 => KeyName::KeyOne,
            KeyArg::Key2 => KeyName::KeyTwo,
        }
    }
}

impl FluidRelayCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            FluidRelaySubcommand::List(args) => list_servers(ctx, args).await,
            FluidRelaySubcommand::Get(args) => get_server(ctx, args).await,
            FluidRelaySubcommand::Delete(args) => delete_server(ctx, args).await,
            FluidRelaySubcommand::Keys(args) => list_keys(ctx, args).await,
            FluidRelaySubcommand::RegenerateKey(args) => regenerate_key(ctx, args).await,
            FluidRelaySubcommand::Containers(args) => list_containers(ctx, args).await,
        }
    }
}

/// Server row for table output.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ServerRow {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Resource Group")]
    resource_group: String,

    #[tabled(rename = "Location")]
    location: String,

    #[tabled(rename = "State", display = "display_option")]
    provisioning_state: Option<String>,

    #[tabled(rename = "SKU", display = "display_option")]
    storage_sku: Option<String>,
}

impl From<&FluidRelayServer> for ServerRow {
    fn from(server: &FluidRelayServer) -> Self {
        let parsed = server.parsed_id().ok().flatten();
        Self {
            name: server
                .name
                .clone()
                .or_else(|| parsed.as_ref().map(|id| id.fluid_relay_server_name.clone()))
                .unwrap_or_else(|| "-".to_string()),
            resource_group: parsed
                .map(|id| id.resource_group)
                .unwrap_or_else(|| "-".to_string()),
            location: server.location.clone(),
            provisioning_state: server.provisioning_state().map(|s| s.to_string()),
            storage_sku: server
                .properties
                .as_ref()
                .and_then(|p| p.storagesku.as_ref())
                .map(|s| s.to_string()),
        }
    }
}

/// Container row for table output.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ContainerRow {
    #[tabled(rename = "Name", display = "display_option")]
    name: Option<String>,

    #[tabled(rename = "Container ID", display = "display_option")]
    frs_container_id: Option<String>,

    #[tabled(rename = "State", display = "display_option")]
    provisioning_state: Option<String>,

    #[tabled(rename = "Created", display = "display_option")]
    creation_time: Option<String>,
}

impl From<&FluidRelayContainer> for ContainerRow {
    fn from(container: &FluidRelayContainer) -> Self {
        let properties = container.properties.as_ref();
        Self {
            name: container.name.clone(),
            frs_container_id: properties.and_then(|p| p.frs_container_id.clone()),
            provisioning_state: properties
                .and_then(|p| p.provisioning_state.as_ref())
                .map(|s| s.to_string()),
            creation_time: properties
                .and_then(|p| p.creation_time)
                .map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct KeyRow {
    #[tabled(rename = "Key")]
    name: &'static str,

    #[tabled(rename = "Value", display = "display_option")]
    value: Option<String>,
}

fn server_id(ctx: &CommandContext, name: &str) -> Result<FluidRelayId, CliError> {
    Ok(FluidRelayId::new(
        ctx.require_subscription()?,
        ctx.require_resource_group()?,
        name,
    ))
}

async fn list_servers(ctx: CommandContext, args: ListArgs) -> Result<()> {
    let servers = FluidRelayServersClient::new(ctx.client()?);
    let subscription = SubscriptionId::new(ctx.require_subscription()?);

    let items = if args.all {
        servers.list_by_subscription(&subscription).await
    } else {
        let group = ResourceGroupId::new(subscription.subscription_id, ctx.require_resource_group()?);
        servers.list_by_resource_group(&group).await
    }
    .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<ServerRow> = items.iter().map(ServerRow::from).collect();
            print_output(&rows, ctx.format);
        }
        OutputFormat::Json => print_single(&items),
    }
    Ok(())
}

async fn get_server(ctx: CommandContext, args: ServerArgs) -> Result<()> {
    let id = server_id(&ctx, &args.name)?;
    let server = FluidRelayServersClient::new(ctx.client()?)
        .get(&id)
        .await
        .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Table => print_output(&[ServerRow::from(&server)], ctx.format),
        OutputFormat::Json => print_single(&server),
    }
    Ok(())
}

async fn delete_server(ctx: CommandContext, args: ServerArgs) -> Result<()> {
    let id = server_id(&ctx, &args.name)?;
    FluidRelayServersClient::new(ctx.client()?)
        .delete(&id)
        .await
        .map_err(CliError::from)?;

    print_success(&format!("Deleted {}", id.id()));
    Ok(())
}

async fn list_keys(ctx: CommandContext, args: ServerArgs) -> Result<()> {
    let id = server_id(&ctx, &args.name)?;
    let keys = FluidRelayServersClient::new(ctx.client()?)
        .list_keys(&id)
        .await
        .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Table => {
            let rows = [
                KeyRow {
                    name: "key1",
                    value: keys.key1,
                },
                KeyRow {
                    name: "key2",
                    value: keys.key2,
                },
            ];
            print_output(&rows, ctx.format);
        }
        OutputFormat::Json => print_single(&keys),
    }
    Ok(())
}

async fn regenerate_key(ctx: CommandContext, args: RegenerateKeyArgs) -> Result<()> {
    let id = server_id(&ctx, &args.name)?;
    let request = RegenerateKeyRequest {
        key_name: args.key.into(),
    };
    let keys = FluidRelayServersClient::new(ctx.client()?)
        .regenerate_key(&id, &request)
        .await
        .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Table => {
            print_success(&format!("Regenerated {} for {}", request.key_name, id.id()))
        }
        OutputFormat::Json => print_single(&keys),
    }
    Ok(())
}

async fn list_containers(ctx: CommandContext, args: ServerArgs) -> Result<()> {
    let id = server_id(&ctx, &args.name)?;
    let containers = FluidRelayContainersClient::new(ctx.client()?)
        .list_by_fluid_relay_servers(&id)
        .await
        .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<ContainerRow> = containers.iter().map(ContainerRow::from).collect();
            print_output(&rows, ctx.format);
        }
        OutputFormat::Json => print_single(&containers),
    }
    Ok(())
}
