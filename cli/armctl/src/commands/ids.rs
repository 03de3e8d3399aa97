//! Resource ID commands (offline; no API calls).

use std::fmt::Display;

use anyhow::Result;
use armkit_resourceids::{
    validate_resource_id_str, ManagementGroupId, ResourceGroupId, ResourceId, ResourceIdError,
    ScopeId, Segment, SegmentKind, SubscriptionId,
};
use armkit_sdk::fluidrelay::{FluidRelayContainerId, FluidRelayId};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Resource ID commands.
#[derive(Debug, Args)]
pub struct IdsCommand {
    #[command(subcommand)]
    command: IdsSubcommand,
}

#[derive(Debug, Subcommand)]
enum IdsSubcommand {
    /// Parse an ID and show its segment values.
    Parse(ParseArgs),

    /// Check that a value is a valid ID of the given kind.
    Validate(ValidateArgs),

    /// Show an example ID of the given kind.
    Example(KindArgs),

    /// Show the segment template of the given kind.
    Segments(KindArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Kind of resource ID.
    #[arg(value_enum)]
    kind: IdKind,

    /// The resource ID.
    input: String,

    /// Match literal segments case-insensitively (for IDs returned by the API).
    #[arg(long)]
    insensitive: bool,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Kind of resource ID.
    #[arg(value_enum)]
    kind: IdKind,

    /// The resource ID.
    input: String,

    /// Key to report errors against.
    #[arg(long, default_value = "id")]
    key: String,
}

#[derive(Debug, Args)]
struct KindArgs {
    /// Kind of resource ID.
    #[arg(value_enum)]
    kind: IdKind,
}

/// The resource ID types known to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdKind {
    Subscription,
    ResourceGroup,
    ManagementGroup,
    Scope,
    FluidRelay,
    FluidRelayContainer,
}

/// A parsed ID, independent of its concrete type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedId {
    pub kind: &'static str,
    pub id: String,
    pub segments: Vec<SegmentValue>,
    #[serde(skip)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct SegmentValue {
    #[tabled(rename = "Segment")]
    pub name: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct SegmentRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Value")]
    value: &'static str,
}

impl IdKind {
    fn parse(self, input: &str, insensitive: bool) -> Result<ParsedId, ResourceIdError> {
        match self {
            IdKind::Subscription => parse_as::<SubscriptionId>(input, insensitive),
            IdKind::ResourceGroup => parse_as::<ResourceGroupId>(input, insensitive),
            IdKind::ManagementGroup => parse_as::<ManagementGroupId>(input, insensitive),
            IdKind::Scope => parse_as::<ScopeId>(input, insensitive),
            IdKind::FluidRelay => parse_as::<FluidRelayId>(input, insensitive),
            IdKind::FluidRelayContainer => parse_as::<FluidRelayContainerId>(input, insensitive),
        }
    }

    fn validate(self, input: &str, key: &str) -> Vec<armkit_resourceids::ValidationError> {
        let (_, errors) = match self {
            IdKind::Subscription => validate_resource_id_str::<SubscriptionId>(input, key),
            IdKind::ResourceGroup => validate_resource_id_str::<ResourceGroupId>(input, key),
            IdKind::ManagementGroup => validate_resource_id_str::<ManagementGroupId>(input, key),
            IdKind::Scope => validate_resource_id_str::<ScopeId>(input, key),
            IdKind::FluidRelay => validate_resource_id_str::<FluidRelayId>(input, key),
            IdKind::FluidRelayContainer => {
                validate_resource_id_str::<FluidRelayContainerId>(input, key)
            }
        };
        errors
    }

    fn segments(self) -> &'static [Segment] {
        match self {
            IdKind::Subscription => <SubscriptionId as ResourceId>::segments(),
            IdKind::ResourceGroup => <ResourceGroupId as ResourceId>::segments(),
            IdKind::ManagementGroup => <ManagementGroupId as ResourceId>::segments(),
            IdKind::Scope => <ScopeId as ResourceId>::segments(),
            IdKind::FluidRelay => <FluidRelayId as ResourceId>::segments(),
            IdKind::FluidRelayContainer => <FluidRelayContainerId as ResourceId>::segments(),
        }
    }

    fn example(self) -> String {
        match self {
            IdKind::Subscription => SubscriptionId::example(),
            IdKind::ResourceGroup => ResourceGroupId::example(),
            IdKind::ManagementGroup => ManagementGroupId::example(),
            IdKind::Scope => ScopeId::example(),
            IdKind::FluidRelay => FluidRelayId::example(),
            IdKind::FluidRelayContainer => FluidRelayContainerId::example(),
        }
    }
}

fn parse_as<T: ResourceId + Display>(
    input: &str,
    insensitive: bool,
) -> Result<ParsedId, ResourceIdError> {
    let id = if insensitive {
        T::parse_insensitively(input)?
    } else {
        T::parse(input)?
    };

    let segments = T::segments()
        .iter()
        .filter(|segment| segment.kind.is_dynamic())
        .map(|segment| SegmentValue {
            name: segment.name,
            value: id.segment_value(segment.name).unwrap_or_default().to_string(),
        })
        .collect();

    Ok(ParsedId {
        kind: T::NAME,
        id: id.id(),
        segments,
        description: id.to_string(),
    })
}

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Static => "static",
        SegmentKind::ResourceProvider => "resource provider",
        SegmentKind::UserSpecified => "user specified",
        SegmentKind::SubscriptionId => "subscription",
        SegmentKind::ResourceGroup => "resource group",
        SegmentKind::Scope => "scope",
    }
}

impl IdsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            IdsSubcommand::Parse(args) => parse(ctx, args),
            IdsSubcommand::Validate(args) => validate(ctx, args),
            IdsSubcommand::Example(args) => example(ctx, args),
            IdsSubcommand::Segments(args) => segments(ctx, args),
        }
    }
}

fn parse(ctx: CommandContext, args: ParseArgs) -> Result<()> {
    let parsed = args
        .kind
        .parse(&args.input, args.insensitive)
        .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}\n", parsed.description);
            print_output(&parsed.segments, ctx.format);
        }
        OutputFormat::Json => print_single(&parsed),
    }
    Ok(())
}

fn validate(ctx: CommandContext, args: ValidateArgs) -> Result<()> {
    let errors = args.kind.validate(&args.input, &args.key);

    match ctx.format {
        OutputFormat::Table if errors.is_empty() => print_success("valid"),
        OutputFormat::Table => {}
        OutputFormat::Json => {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            print_single(&serde_json::json!({
                "valid": errors.is_empty(),
                "errors": messages,
            }));
        }
    }

    if let Some(first) = errors.into_iter().next() {
        return Err(anyhow::Error::new(first));
    }
    Ok(())
}

fn example(ctx: CommandContext, args: KindArgs) -> Result<()> {
    let example = args.kind.example();
    match ctx.format {
        OutputFormat::Table => println!("{example}"),
        OutputFormat::Json => print_single(&serde_json::json!({ "example": example })),
    }
    Ok(())
}

fn segments(ctx: CommandContext, args: KindArgs) -> Result<()> {
    let rows: Vec<SegmentRow> = args
        .kind
        .segments()
        .iter()
        .map(|segment| SegmentRow {
            name: segment.name,
            kind: kind_label(segment.kind).to_string(),
            value: segment.fixed_value.unwrap_or(segment.example_value),
        })
        .collect();
    print_output(&rows, ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLUID_RELAY: &str = "/subscriptions/67a9759d-d099-4aa8-8675-e6cfd669c3f4/resourceGroups/myrg/providers/Microsoft.FluidRelay/fluidRelayServers/myFluid";

    #[test]
    fn test_parse_fluid_relay() {
        let parsed = IdKind::FluidRelay.parse(FLUID_RELAY, false).unwrap();
        assert_eq!(parsed.kind, "Fluid Relay");
        assert_eq!(parsed.id, FLUID_RELAY);
        assert_eq!(
            parsed.segments,
            vec![
                SegmentValue {
                    name: "subscriptionId",
                    value: "67a9759d-d099-4aa8-8675-e6cfd669c3f4".to_string(),
                },
                SegmentValue {
                    name: "resourceGroupName",
                    value: "myrg".to_string(),
                },
                SegmentValue {
                    name: "fluidRelayServerName",
                    value: "myFluid".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_insensitive_normalises_literals() {
        let input = FLUID_RELAY.replace("resourceGroups", "resourcegroups");
        assert!(IdKind::FluidRelay.parse(&input, false).is_err());
        let parsed = IdKind::FluidRelay.parse(&input, true).unwrap();
        assert_eq!(parsed.id, FLUID_RELAY);
    }

    #[test]
    fn test_validate_matches_parse() {
        for kind in IdKind::value_variants() {
            for input in [FLUID_RELAY, "/subscriptions/sub", ""] {
                let errors = kind.validate(input, "id");
                assert_eq!(errors.is_empty(), kind.parse(input, false).is_ok());
            }
        }
    }

    #[test]
    fn test_examples_parse_as_their_kind() {
        for kind in IdKind::value_variants() {
            let example = kind.example();
            assert!(kind.parse(&example, false).is_ok(), "{kind:?}: {example}");
        }
    }

    #[test]
    fn test_segment_templates() {
        let segments = IdKind::ResourceGroup.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(kind_label(segments[3].kind), "resource group");
    }
}
