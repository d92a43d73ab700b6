//! Runtime input values: the dynamically-typed values supplied by clients
//! for variables, and produced by coercion for resolvers.

use crate::ast::serialize::write_string_value;
use indexmap::IndexMap;
use std::fmt;

/// An ordered map of field or variable names to runtime values.
pub type InputValueMap = IndexMap<String, InputValue>;

/// A runtime input value, as found in a GraphQL request's `variables` map
/// and in coerced variable and argument maps.
///
/// This is a JSON-like tagged union, with one deviation from JSON proper:
/// [`Float`][Self::Float] can hold any `f64`, including NaN, which the
/// nullishness predicate classifies as absent. Object fields keep their
/// insertion order.
///
/// Use the `From` conversions to construct values from the host JSON
/// representation:
///
/// ```
/// use graphql_values::InputValue;
///
/// let value = InputValue::from(serde_json::json!({"a": [1, "two"]}));
/// assert_eq!(value.to_string(), r#"{"a":[1,"two"]}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InputValue {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<InputValue>),
    Object(InputValueMap),
}

/// Returns whether a possibly-absent value is semantically absent:
/// missing, null, or NaN.
///
/// Every component of the binding core consults this predicate to
/// distinguish "not provided" from "provided with a falsy value"; empty
/// strings and zero are *not* nullish. Integers are never nullish.
pub fn is_nullish(value: Option<&InputValue>) -> bool {
    match value {
        None => true,
        Some(value) => value.is_nullish(),
    }
}

impl InputValue {
    /// Returns whether this value is semantically absent: null or NaN.
    ///
    /// See the free function [`is_nullish`] for the variant that also covers
    /// a missing value.
    pub fn is_nullish(&self) -> bool {
        match self {
            InputValue::Null => true,
            InputValue::Float(value) => value.is_nan(),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, InputValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let InputValue::Boolean(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let InputValue::Int(value) = *self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            InputValue::Int(value) => Some(value as f64),
            InputValue::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let InputValue::String(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[InputValue]> {
        if let InputValue::List(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&InputValueMap> {
        if let InputValue::Object(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Boolean(value)
    }
}

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Int(value.into())
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Int(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Float(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::String(value.into())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::String(value)
    }
}

impl From<Vec<InputValue>> for InputValue {
    fn from(value: Vec<InputValue>) -> Self {
        InputValue::List(value)
    }
}

impl From<InputValueMap> for InputValue {
    fn from(value: InputValueMap) -> Self {
        InputValue::Object(value)
    }
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => InputValue::Null,
            serde_json::Value::Bool(value) => InputValue::Boolean(value),
            serde_json::Value::Number(value) => {
                if let Some(value) = value.as_i64() {
                    InputValue::Int(value)
                } else {
                    // u64 beyond i64::MAX, or a fraction
                    InputValue::Float(value.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(value) => InputValue::String(value),
            serde_json::Value::Array(items) => {
                InputValue::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => InputValue::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<InputValue> for serde_json::Value {
    fn from(value: InputValue) -> Self {
        match value {
            InputValue::Null => serde_json::Value::Null,
            InputValue::Boolean(value) => value.into(),
            InputValue::Int(value) => value.into(),
            // Non-finite floats have no JSON representation
            InputValue::Float(value) => serde_json::Number::from_f64(value)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            InputValue::String(value) => value.into(),
            InputValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Self::from).collect())
            }
            InputValue::Object(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Writes the value as compact JSON, the form diagnostics embed.
impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Null => f.write_str("null"),
            InputValue::Boolean(true) => f.write_str("true"),
            InputValue::Boolean(false) => f.write_str("false"),
            InputValue::Int(value) => write!(f, "{value}"),
            InputValue::Float(value) => {
                if value.is_finite() {
                    write!(f, "{value}")
                } else {
                    f.write_str("null")
                }
            }
            InputValue::String(value) => write_string_value(f, value),
            InputValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            InputValue::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_string_value(f, key)?;
                    f.write_str(":")?;
                    write!(f, "{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl serde::Serialize for InputValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        use serde::ser::SerializeSeq;
        match self {
            InputValue::Null => serializer.serialize_unit(),
            InputValue::Boolean(value) => serializer.serialize_bool(*value),
            InputValue::Int(value) => serializer.serialize_i64(*value),
            InputValue::Float(value) => {
                if value.is_finite() {
                    serializer.serialize_f64(*value)
                } else {
                    serializer.serialize_unit()
                }
            }
            InputValue::String(value) => serializer.serialize_str(value),
            InputValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            InputValue::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
