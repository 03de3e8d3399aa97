//! # armkit-resourceids
//!
//! Typed Azure Resource Manager resource IDs: parsing, formatting, and
//! validation.
//!
//! ## Design Principles
//!
//! - One generic engine, parameterised by a declarative segment template
//! - Per-type declarations are thin: a field list plus a segment list
//! - The template is the single source of truth for parsing and formatting
//! - Strict parsing for user input, case-insensitive parsing for API output
//! - Dynamic segments are never empty
//!
//! ## ID Format
//!
//! Resource IDs are slash-delimited paths:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{namespace}/{type}/{name}
//! /{scope}/providers/{namespace}/{type}/{name}
//! ```
//!
//! where `{scope}` may be a subscription, resource group, or management
//! group path.

mod error;
mod macros;
mod segment;
mod parser;
mod resource_id;
mod validate;
mod common;

pub use common::{ManagementGroupId, ResourceGroupId, ScopeId, SubscriptionId};
pub use error::{ResourceIdError, ValidationError};
pub use parser::{ParseResult, Parser};
pub use resource_id::ResourceId;
pub use segment::{
    Segment, SegmentKind, EXAMPLE_RESOURCE_GROUP, EXAMPLE_SCOPE, EXAMPLE_SUBSCRIPTION_ID,
};
pub use validate::{validate_resource_id, validate_resource_id_str};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
