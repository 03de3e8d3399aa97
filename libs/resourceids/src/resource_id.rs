//! The trait every typed resource ID implements.

use serde_json::Value;

use crate::error::{ResourceIdError, ValidationError};
use crate::parser::{ParseResult, Parser};
use crate::segment::Segment;

/// A typed resource ID backed by a declarative segment template.
///
/// Implementations are normally generated by [`define_resource_id!`](crate::define_resource_id).
/// The segment list is the single source of truth for both parsing and
/// formatting, so `parse(x.id())` reconstructs `x` for any value whose
/// dynamic segments are non-empty.
pub trait ResourceId: Sized {
    /// Human-readable type name, e.g. `"Fluid Relay"`.
    const NAME: &'static str;

    /// The ordered segment template for this type.
    fn segments() -> &'static [Segment];

    /// Builds the typed value from a successful parse.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError>;

    /// Returns the value of the dynamic segment called `name`.
    fn segment_value(&self, name: &str) -> Option<&str>;

    fn parser() -> Parser {
        Parser::new(Self::NAME, Self::segments())
    }

    /// Parses `input`, matching literal segments case-sensitively.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let result = Self::parser().parse(input, false)?;
        Self::from_parse_result(&result)
    }

    /// Parses `input`, matching literal segments case-insensitively.
    ///
    /// Only for normalising IDs returned by the API, never for user input.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        let result = Self::parser().parse(input, true)?;
        Self::from_parse_result(&result)
    }

    /// Renders the canonical resource ID string.
    fn id(&self) -> String {
        Self::parser().format(|name| self.segment_value(name))
    }

    /// Checks that `input` is a string holding a valid ID of this type.
    fn validate(input: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        crate::validate::validate_resource_id::<Self>(input, key)
    }

    /// An example ID, as used in documentation and error messages.
    fn example() -> String {
        Self::parser().example_id()
    }
}
