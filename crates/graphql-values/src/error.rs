//! Error types with the shape of the `errors` entry of a GraphQL response.

use crate::Name;
use crate::NodeLocation;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// A serializable [error](https://spec.graphql.org/October2021/#sec-Errors.Error-result-format),
/// as found in a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLError {
    /// The error message.
    pub message: String,

    /// Locations relevant to the error, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub locations: Vec<GraphQLLocation>,

    /// If non-empty, the error applies to the response field found at this
    /// path. Binding errors abort the request before any field executes, so
    /// they leave it empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub path: Vec<PathElement>,
}

/// A source location (line and column numbers) for a [`GraphQLError`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLLocation {
    /// The line number for this location, starting at 1 for the first line.
    pub line: usize,
    /// The column number for this location, starting at 1.
    pub column: usize,
}

/// An element of [`GraphQLError::path`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathElement {
    /// The relevant key in an object value
    Field(Name),

    /// The index of the relevant item in a list value
    ListIndex(usize),
}

/// A [request error] that aborted the handling of a request before execution
/// started.
///
/// [request error]: https://spec.graphql.org/October2021/#sec-Errors.Request-errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestError(pub GraphQLError);

impl GraphQLError {
    pub fn new(
        message: impl ToString,
        locations: impl IntoIterator<Item = GraphQLLocation>,
    ) -> Self {
        Self {
            message: message.to_string(),
            locations: locations.into_iter().collect(),
            path: Vec::new(),
        }
    }
}

impl GraphQLLocation {
    /// Convert a node's location, when it has one
    pub fn from_node(location: Option<NodeLocation>) -> Option<Self> {
        location.map(|loc| GraphQLLocation {
            line: loc.line,
            column: loc.column,
        })
    }
}

impl RequestError {
    pub fn new(
        message: impl ToString,
        locations: impl IntoIterator<Item = GraphQLLocation>,
    ) -> Self {
        Self(GraphQLError::new(message, locations))
    }

    pub fn message(&self) -> &str {
        &self.0.message
    }
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for GraphQLError {}

impl std::error::Error for RequestError {}
