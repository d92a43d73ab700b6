use super::*;
use std::fmt;
use std::num::ParseFloatError;
use std::num::ParseIntError;

impl Value {
    pub fn as_variable(&self) -> Option<&Name> {
        if let Value::Variable(name) = self {
            Some(name)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&Name> {
        if let Value::Enum(name) = self {
            Some(name)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<&IntValue> {
        if let Value::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<&FloatValue> {
        if let Value::Float(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn to_bool(&self) -> Option<bool> {
        if let Value::Boolean(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Node<Value>]> {
        if let Value::List(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&[(Name, Node<Value>)]> {
        if let Value::Object(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

impl IntValue {
    /// Constructs from the raw token text. The caller is responsible for it
    /// being in [IntValue](https://spec.graphql.org/October2021/#IntValue) syntax.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the source token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn try_to_i32(&self) -> Result<i32, ParseIntError> {
        self.0.parse()
    }

    pub fn try_to_f64(&self) -> Result<f64, ParseFloatError> {
        self.0.parse()
    }
}

impl FloatValue {
    /// Constructs from the raw token text. The caller is responsible for it
    /// being in [FloatValue](https://spec.graphql.org/October2021/#FloatValue) syntax.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the source token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn try_to_f64(&self) -> Result<f64, ParseFloatError> {
        self.0.parse()
    }
}

impl From<i32> for IntValue {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<f64> for FloatValue {
    fn from(value: f64) -> Self {
        // `{:?}` keeps a fractional part for integral floats, as FloatValue
        // syntax requires
        Self(format!("{value:?}"))
    }
}

impl fmt::Debug for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl Type {
    /// Returns a new `Type::Named` for the given type name
    pub fn named(name: NamedType) -> Self {
        Type::Named(name)
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

    /// Returns the inner named type, after unwrapping any non-null or list markers.
    pub fn inner_named_type(&self) -> &NamedType {
        match self {
            Type::Named(name) => name,
            Type::List(inner) | Type::NonNull(inner) => inner.inner_named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }
}

impl VariableDefinition {
    pub fn new(name: Name, ty: Type) -> Self {
        Self {
            name,
            ty: ty.into(),
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<Node<Value>>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

impl Argument {
    pub fn new(name: Name, value: impl Into<Node<Value>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}
