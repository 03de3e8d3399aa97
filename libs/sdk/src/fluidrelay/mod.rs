//! Microsoft.FluidRelay, API version 2022-06-01.

mod containers;
mod enums;
mod ids;
mod models;
mod servers;

pub use containers::FluidRelayContainersClient;
pub use enums::*;
pub use ids::{FluidRelayContainerId, FluidRelayId};
pub use models::*;
pub use servers::FluidRelayServersClient;

/// The API version every Fluid Relay operation is sent with.
pub const API_VERSION: &str = "2022-06-01";

/// Path suffix for listing servers under a subscription or resource group.
const PROVIDER_PATH: &str = "/providers/Microsoft.FluidRelay/fluidRelayServers";
