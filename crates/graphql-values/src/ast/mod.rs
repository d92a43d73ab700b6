//! *Abstract Syntax Tree* for the value sublanguage of GraphQL documents:
//! literal values, type references, variable definitions, and field arguments.
//!
//! This crate does not parse GraphQL source text; these nodes are produced by
//! a parser collaborator (or programmatically) and consumed by the binding
//! operations in [`crate::values`].
//!
//! ## Structural sharing
//!
//! Nodes are wrapped in [`Node`], a reference-counted smart pointer, so that
//! subtrees can be shared between documents without cloning.
//!
//! ## Serialization
//!
//! [`Value`] and [`Type`] implement [`Display`][std::fmt::Display] by
//! serializing to canonical GraphQL syntax, e.g. `[String!]!` for a type
//! reference. This is the form used in diagnostics.

use crate::Name;
use crate::Node;

pub use crate::name::NamedType;

mod impls;
pub(crate) mod serialize;

/// A GraphQL [input value literal], possibly containing variable references.
///
/// There is no null literal: absence of a value is represented by the node
/// being absent.
///
/// [input value literal]: https://spec.graphql.org/October2021/#sec-Input-Values
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Value {
    Variable(Name),
    Int(IntValue),
    Float(FloatValue),
    String(String),
    Boolean(bool),
    Enum(Name),
    List(Vec<Node<Value>>),
    Object(Vec<(Name, Node<Value>)>),
}

/// An integer literal, kept as its source token text.
///
/// Conversion is checked at coercion time so that precision is only lost
/// where a type demands it.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct IntValue(String);

/// A float literal, kept as its source token text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct FloatValue(String);

/// A reference to a named type, possibly wrapped in list or non-null markers.
///
/// The base case is always [`Named`][Self::Named]; wrappers nest strictly
/// inward, and a non-null wrapper never directly wraps another non-null
/// wrapper.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    Named(NamedType),
    List(Box<Type>),
    NonNull(Box<Type>),
}

/// A [variable definition](https://spec.graphql.org/October2021/#sec-Language.Variables)
/// in an operation: `$name: Type = defaultValue`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VariableDefinition {
    pub name: Name,
    pub ty: Node<Type>,
    pub default_value: Option<Node<Value>>,
}

/// A field or directive [argument](https://spec.graphql.org/October2021/#sec-Language.Arguments):
/// `name: value`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Argument {
    pub name: Name,
    pub value: Node<Value>,
}
