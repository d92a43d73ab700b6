//! High-level representation of a GraphQL schema's type system, as consumed
//! by the binding operations in [`crate::values`].
//!
//! Schema *validation* is not performed here: a [`Schema`] is presumed to
//! have been checked (or constructed correctly) before requests are bound
//! against it. Once built, a schema is immutable and can be shared freely
//! across threads and requests.

use crate::ast;
use crate::input_value::InputValue;
use crate::Name;
use crate::Node;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub use crate::name::NamedType;

mod built_in;

/// A schema type: a named type definition, or a list / non-null wrapper
/// around another type.
///
/// Wrappers nest strictly inward and a non-null wrapper never directly wraps
/// another non-null wrapper. The *input types* — those usable for variables
/// and arguments — are [`Scalar`][Self::Scalar], [`Enum`][Self::Enum],
/// [`InputObject`][Self::InputObject], and wrappers around input types.
#[derive(Debug, Clone)]
pub enum Type {
    Scalar(Node<ScalarType>),
    Object(Node<ObjectType>),
    Interface(Node<InterfaceType>),
    Union(Node<UnionType>),
    Enum(Node<EnumType>),
    InputObject(Node<InputObjectType>),
    List(Box<Type>),
    NonNull(Box<Type>),
}

/// Converts a runtime value to the canonical representation a scalar demands,
/// returning `None` for non-coercible input. Must be pure and total.
pub type ParseValueFn = Arc<dyn Fn(&InputValue) -> Option<InputValue> + Send + Sync>;

/// Converts a literal value AST node to a runtime value, returning `None`
/// for non-coercible input. Must be pure and total.
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Option<InputValue> + Send + Sync>;

/// A scalar type definition carrying its two input-coercion callbacks.
#[derive(Clone)]
pub struct ScalarType {
    pub name: NamedType,
    pub description: Option<String>,
    parse_value: ParseValueFn,
    parse_literal: ParseLiteralFn,
}

/// An object type definition. Objects are output types; the binding core
/// only ever sees them as the non-input leaves of type references, and as
/// the place where field argument definitions live.
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: NamedType,
    pub description: Option<String>,
    pub fields: IndexMap<Name, Node<FieldDefinition>>,
}

#[derive(Debug, Clone)]
pub struct InterfaceType {
    pub name: NamedType,
    pub description: Option<String>,
    pub fields: IndexMap<Name, Node<FieldDefinition>>,
}

#[derive(Debug, Clone)]
pub struct UnionType {
    pub name: NamedType,
    pub description: Option<String>,
    pub members: Vec<NamedType>,
}

/// An enum type definition with its ordered values.
#[derive(Debug, Clone)]
pub struct EnumType {
    pub name: NamedType,
    pub description: Option<String>,
    pub values: IndexMap<Name, EnumValueDefinition>,
}

/// A single value of an [`EnumType`].
#[derive(Debug, Clone)]
pub struct EnumValueDefinition {
    /// The internal runtime value this enum value binds to.
    /// Defaults to the value's name as a string.
    pub value: InputValue,
    pub description: Option<String>,
    /// Introspection metadata only: a deprecated value still binds normally.
    pub deprecation_reason: Option<String>,
}

/// An input object type definition with its ordered fields.
#[derive(Debug, Clone)]
pub struct InputObjectType {
    pub name: NamedType,
    pub description: Option<String>,
    pub fields: IndexMap<Name, Node<InputValueDefinition>>,
}

/// A field of an [`InputObjectType`].
///
/// The field type is a *reference*, resolved against the schema when values
/// are validated or coerced; this is what allows input object types to
/// reference themselves.
#[derive(Debug, Clone)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub ty: ast::Type,
    pub default_value: Option<InputValue>,
}

/// An output field of an [`ObjectType`] or [`InterfaceType`].
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<Node<ArgumentDefinition>>,
    pub ty: ast::Type,
}

/// An argument accepted by a field.
///
/// Argument types are input types, which cannot refer back to argument
/// definitions, so the type here is fully resolved at construction time.
#[derive(Debug, Clone)]
pub struct ArgumentDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<InputValue>,
}

/// An immutable registry of named types.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Built-in scalars and explicitly registered types, in registration
    /// order. Values are always named-type variants, never wrappers.
    pub types: IndexMap<NamedType, Type>,
}

/// Builds a [`Schema`], starting from the five built-in scalars.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    types: IndexMap<NamedType, Type>,
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Schema>();
    assert_sync::<Schema>();
};

impl Type {
    /// Returns the name of a named type, or `None` for list and non-null
    /// wrappers.
    pub fn name(&self) -> Option<&NamedType> {
        match self {
            Type::Scalar(def) => Some(&def.name),
            Type::Object(def) => Some(&def.name),
            Type::Interface(def) => Some(&def.name),
            Type::Union(def) => Some(&def.name),
            Type::Enum(def) => Some(&def.name),
            Type::InputObject(def) => Some(&def.name),
            Type::List(_) | Type::NonNull(_) => None,
        }
    }

    /// For list and non-null wrappers, the wrapped type.
    pub fn of_type(&self) -> Option<&Type> {
        match self {
            Type::List(inner) | Type::NonNull(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns a list type whose items are this type.
    pub fn list(self) -> Self {
        Type::List(Box::new(self))
    }

    /// Returns this type made non-null, if it isn't already.
    pub fn non_null(self) -> Self {
        if let Type::NonNull(_) = self {
            self
        } else {
            Type::NonNull(Box::new(self))
        }
    }

    /// Returns whether this type can be used for variables and arguments:
    /// a scalar, enum, or input object, possibly wrapped.
    pub fn is_input_type(&self) -> bool {
        match self {
            Type::Scalar(_) | Type::Enum(_) | Type::InputObject(_) => true,
            Type::List(inner) | Type::NonNull(inner) => inner.is_input_type(),
            Type::Object(_) | Type::Interface(_) | Type::Union(_) => false,
        }
    }
}

impl ScalarType {
    pub fn new(
        name: NamedType,
        parse_value: impl Fn(&InputValue) -> Option<InputValue> + Send + Sync + 'static,
        parse_literal: impl Fn(&ast::Value) -> Option<InputValue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            description: None,
            parse_value: Arc::new(parse_value),
            parse_literal: Arc::new(parse_literal),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Coerces a runtime value, returning `None` if it is not coercible.
    pub fn parse_value(&self, value: &InputValue) -> Option<InputValue> {
        (self.parse_value)(value)
    }

    /// Coerces a literal value AST node, returning `None` if it is not coercible.
    pub fn parse_literal(&self, value: &ast::Value) -> Option<InputValue> {
        (self.parse_literal)(value)
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl EnumType {
    pub fn new(name: NamedType) -> Self {
        Self {
            name,
            description: None,
            values: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a value whose internal representation is its own name.
    pub fn with_value(mut self, name: Name) -> Self {
        let value = InputValue::String(name.as_str().to_owned());
        self.values.insert(
            name,
            EnumValueDefinition {
                value,
                description: None,
                deprecation_reason: None,
            },
        );
        self
    }

    /// Adds a value with a custom internal representation.
    pub fn with_value_as(mut self, name: Name, value: InputValue) -> Self {
        self.values.insert(
            name,
            EnumValueDefinition {
                value,
                description: None,
                deprecation_reason: None,
            },
        );
        self
    }

    /// Adds a deprecated value. Deprecation is introspection metadata;
    /// the value binds like any other.
    pub fn with_deprecated_value(mut self, name: Name, reason: impl Into<String>) -> Self {
        let value = InputValue::String(name.as_str().to_owned());
        self.values.insert(
            name,
            EnumValueDefinition {
                value,
                description: None,
                deprecation_reason: Some(reason.into()),
            },
        );
        self
    }

    /// Coerces the external name form of an enum value to its internal value,
    /// returning `None` for anything else.
    pub fn parse_value(&self, value: &InputValue) -> Option<InputValue> {
        let name = value.as_str()?;
        Some(self.values.get(name)?.value.clone())
    }

    /// Coerces an `Enum` AST node to its internal value, returning `None`
    /// for other node kinds and unknown values.
    pub fn parse_literal(&self, value: &ast::Value) -> Option<InputValue> {
        let name = value.as_enum()?;
        Some(self.values.get(name.as_str())?.value.clone())
    }
}

impl InputObjectType {
    pub fn new(name: NamedType) -> Self {
        Self {
            name,
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: InputValueDefinition) -> Self {
        self.fields.insert(field.name.clone(), field.into());
        self
    }
}

impl InputValueDefinition {
    pub fn new(name: Name, ty: ast::Type) -> Self {
        Self {
            description: None,
            name,
            ty,
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<InputValue>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

impl ObjectType {
    pub fn new(name: NamedType) -> Self {
        Self {
            name,
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field.into());
        self
    }
}

impl InterfaceType {
    pub fn new(name: NamedType) -> Self {
        Self {
            name,
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field.into());
        self
    }
}

impl UnionType {
    pub fn new(name: NamedType, members: impl IntoIterator<Item = NamedType>) -> Self {
        Self {
            name,
            description: None,
            members: members.into_iter().collect(),
        }
    }
}

impl FieldDefinition {
    pub fn new(name: Name, ty: ast::Type) -> Self {
        Self {
            description: None,
            name,
            arguments: Vec::new(),
            ty,
        }
    }

    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Returns the definition of the argument with the given name.
    pub fn argument(&self, name: &str) -> Option<&Node<ArgumentDefinition>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

impl ArgumentDefinition {
    pub fn new(name: Name, ty: Type) -> Self {
        Self {
            description: None,
            name,
            ty,
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<InputValue>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

impl Schema {
    /// Returns a schema containing only the built-in scalars.
    pub fn new() -> Self {
        SchemaBuilder::new().build()
    }

    /// Returns a new builder, initialized with the built-in scalars.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Returns the named type with the given name.
    pub fn get_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Returns the type with the given name, if it is a scalar type.
    pub fn get_scalar(&self, name: &str) -> Option<&Node<ScalarType>> {
        if let Some(Type::Scalar(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an enum type.
    pub fn get_enum(&self, name: &str) -> Option<&Node<EnumType>> {
        if let Some(Type::Enum(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an object type.
    pub fn get_object(&self, name: &str) -> Option<&Node<ObjectType>> {
        if let Some(Type::Object(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }

    /// Returns the type with the given name, if it is an input object type.
    pub fn get_input_object(&self, name: &str) -> Option<&Node<InputObjectType>> {
        if let Some(Type::InputObject(ty)) = self.types.get(name) {
            Some(ty)
        } else {
            None
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    fn new() -> Self {
        let mut types = IndexMap::new();
        built_in::register(&mut types);
        Self { types }
    }

    /// Registers a named type. A later definition with the same name
    /// replaces an earlier one.
    fn insert(mut self, name: NamedType, ty: Type) -> Self {
        self.types.insert(name, ty);
        self
    }

    pub fn scalar(self, def: ScalarType) -> Self {
        let name = def.name.clone();
        self.insert(name, Type::Scalar(def.into()))
    }

    pub fn enum_type(self, def: EnumType) -> Self {
        let name = def.name.clone();
        self.insert(name, Type::Enum(def.into()))
    }

    pub fn input_object(self, def: InputObjectType) -> Self {
        let name = def.name.clone();
        self.insert(name, Type::InputObject(def.into()))
    }

    pub fn object(self, def: ObjectType) -> Self {
        let name = def.name.clone();
        self.insert(name, Type::Object(def.into()))
    }

    pub fn interface(self, def: InterfaceType) -> Self {
        let name = def.name.clone();
        self.insert(name, Type::Interface(def.into()))
    }

    pub fn union_type(self, def: UnionType) -> Self {
        let name = def.name.clone();
        self.insert(name, Type::Union(def.into()))
    }

    pub fn build(self) -> Schema {
        Schema { types: self.types }
    }
}
