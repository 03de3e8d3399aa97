//! # armkit-sdk
//!
//! Typed clients, models, and enums for the Azure Resource Manager API.
//!
//! ## Layers
//!
//! - Resource IDs come from `armkit-resourceids`; operation clients build
//!   request paths with `id()` and read response IDs back with
//!   `parse_insensitively`
//! - Enums are open-world: unknown values are carried, never rejected
//! - Models map one-to-one to the API's JSON schemas
//! - List operations follow `nextLink` until the collection is exhausted
//!
//! ## Services
//!
//! - [`fluidrelay`] - `Microsoft.FluidRelay` servers and containers

mod client;
mod error;
mod macros;

pub mod fluidrelay;

pub use client::{ArmClient, ClientOptions, Page, DEFAULT_ENDPOINT};
pub use error::SdkError;

/// Re-export the resource ID crate for consumers declaring their own IDs.
pub use armkit_resourceids as resourceids;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
