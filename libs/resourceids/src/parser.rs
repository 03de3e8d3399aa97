//! The generic engine that walks an input string against a segment template.

use std::collections::BTreeMap;

use crate::error::ResourceIdError;
use crate::segment::{Segment, SegmentKind};

/// Parses and formats resource IDs for one segment template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    resource: &'static str,
    segments: &'static [Segment],
}

/// The dynamic segment values captured from an input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// The string that was parsed.
    pub raw_input: String,
    /// Captured values keyed by segment name.
    pub parsed: BTreeMap<&'static str, String>,
    parser: Parser,
}

impl ParseResult {
    /// Returns the value captured for `name`.
    pub fn value(&self, name: &'static str) -> Result<&str, ResourceIdError> {
        match self.parsed.get(name) {
            Some(value) if !value.is_empty() => Ok(value.as_str()),
            Some(_) => Err(ResourceIdError::EmptySegment {
                resource: self.parser.resource,
                segment: name,
                input: self.raw_input.clone(),
                example: self.parser.example_id(),
            }),
            None => Err(ResourceIdError::MissingSegment {
                resource: self.parser.resource,
                segment: name,
                expected: format!("a value for {name:?}"),
                input: self.raw_input.clone(),
                example: self.parser.example_id(),
            }),
        }
    }
}

impl Parser {
    /// Creates a parser for `segments`, using `resource` as the human-readable
    /// type name in error messages.
    pub const fn new(resource: &'static str, segments: &'static [Segment]) -> Self {
        Self { resource, segments }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Walks `input` against the template left to right.
    ///
    /// Literal segments must match exactly, or ASCII case-insensitively when
    /// `insensitively` is set. Dynamic segments consume one non-empty
    /// component. A scope segment consumes every component except one for
    /// each segment that follows it.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ResourceIdError> {
        let trimmed = input.strip_prefix('/').unwrap_or(input);
        let components: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let mut parsed = BTreeMap::new();
        let mut pos = 0;

        for (idx, segment) in self.segments.iter().enumerate() {
            if segment.kind == SegmentKind::Scope {
                let segments_after = self.segments.len() - idx - 1;
                let take = components
                    .len()
                    .saturating_sub(pos)
                    .saturating_sub(segments_after);
                if take == 0 {
                    return Err(self.missing(segment, input));
                }

                let scope = &components[pos..pos + take];
                if scope.iter().any(|c| c.is_empty()) {
                    return Err(self.empty(segment, input));
                }
                parsed.insert(segment.name, format!("/{}", scope.join("/")));
                pos += take;
                continue;
            }

            let Some(component) = components.get(pos) else {
                return Err(self.missing(segment, input));
            };

            if segment.kind.is_literal() {
                if !segment.matches_literal(component, insensitively) {
                    return Err(self.missing(segment, input));
                }
            } else {
                if component.is_empty() {
                    return Err(self.empty(segment, input));
                }
                parsed.insert(segment.name, (*component).to_string());
            }
            pos += 1;
        }

        if pos < components.len() {
            return Err(ResourceIdError::UnexpectedSegments {
                resource: self.resource,
                remainder: components[pos..].join("/"),
                input: input.to_string(),
                example: self.example_id(),
            });
        }

        Ok(ParseResult {
            raw_input: input.to_string(),
            parsed,
            parser: *self,
        })
    }

    /// Renders the template, pulling dynamic values from `lookup`.
    ///
    /// Scope values have any leading `/` trimmed before substitution.
    /// Missing values render as empty segments.
    pub fn format<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut out = String::new();
        for segment in self.segments {
            let value = match segment.fixed_value {
                Some(literal) => literal,
                None => lookup(segment.name).unwrap_or_default(),
            };
            let value = if segment.kind == SegmentKind::Scope {
                value.trim_start_matches('/')
            } else {
                value
            };
            out.push('/');
            out.push_str(value);
        }
        out
    }

    /// Renders an example ID using each segment's example value.
    pub fn example_id(&self) -> String {
        self.format(|name| {
            self.segments
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.example_value)
        })
    }

    fn missing(&self, segment: &Segment, input: &str) -> ResourceIdError {
        ResourceIdError::MissingSegment {
            resource: self.resource,
            segment: segment.name,
            expected: segment.describe_expected(),
            input: input.to_string(),
            example: self.example_id(),
        }
    }

    fn empty(&self, segment: &Segment, input: &str) -> ResourceIdError {
        ResourceIdError::EmptySegment {
            resource: self.resource,
            segment: segment.name,
            input: input.to_string(),
            example: self.example_id(),
        }
    }
}
