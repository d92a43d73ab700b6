//! The five built-in scalars and their input-coercion rules.
//!
//! <https://spec.graphql.org/October2021/#sec-Scalars>

use super::NamedType;
use super::ScalarType;
use super::Type;
use crate::ast;
use crate::name;
use crate::InputValue;
use indexmap::IndexMap;

pub(crate) fn register(types: &mut IndexMap<NamedType, Type>) {
    for scalar in [int(), float(), string(), boolean(), id()] {
        types.insert(scalar.name.clone(), Type::Scalar(scalar.into()));
    }
}

fn in_i32_range(value: i64) -> bool {
    i32::try_from(value).is_ok()
}

/// <https://spec.graphql.org/October2021/#sec-Int.Input-Coercion>
fn int() -> ScalarType {
    ScalarType::new(
        name!("Int"),
        |value| match *value {
            InputValue::Int(value) if in_i32_range(value) => Some(InputValue::Int(value)),
            // Integral floats are accepted: a JSON `1.0` is the integer 1
            InputValue::Float(value)
                if value.fract() == 0.0
                    && value >= i32::MIN as f64
                    && value <= i32::MAX as f64 =>
            {
                Some(InputValue::Int(value as i64))
            }
            _ => None,
        },
        |value| {
            let parsed = value.as_int()?.try_to_i32().ok()?;
            Some(InputValue::Int(parsed.into()))
        },
    )
    .with_description("The `Int` scalar type represents non-fractional signed whole numeric values. Int can represent values between -(2^31) and 2^31 - 1.")
}

/// <https://spec.graphql.org/October2021/#sec-Float.Input-Coercion>
fn float() -> ScalarType {
    ScalarType::new(
        name!("Float"),
        |value| {
            let parsed = value.as_f64()?;
            parsed.is_finite().then_some(InputValue::Float(parsed))
        },
        |value| {
            let parsed = match value {
                ast::Value::Int(value) => value.try_to_f64().ok()?,
                ast::Value::Float(value) => value.try_to_f64().ok()?,
                _ => return None,
            };
            parsed.is_finite().then_some(InputValue::Float(parsed))
        },
    )
    .with_description("The `Float` scalar type represents signed double-precision fractional values as specified by IEEE 754.")
}

/// <https://spec.graphql.org/October2021/#sec-String.Input-Coercion>
fn string() -> ScalarType {
    ScalarType::new(
        name!("String"),
        |value| Some(InputValue::String(value.as_str()?.to_owned())),
        |value| Some(InputValue::String(value.as_str()?.to_owned())),
    )
    .with_description("The `String` scalar type represents textual data, represented as UTF-8 character sequences.")
}

/// <https://spec.graphql.org/October2021/#sec-Boolean.Input-Coercion>
fn boolean() -> ScalarType {
    ScalarType::new(
        name!("Boolean"),
        |value| Some(InputValue::Boolean(value.as_bool()?)),
        |value| Some(InputValue::Boolean(value.to_bool()?)),
    )
    .with_description("The `Boolean` scalar type represents `true` or `false`.")
}

/// <https://spec.graphql.org/October2021/#sec-ID.Input-Coercion>
///
/// IDs serialize as strings but accept both string and integer input.
fn id() -> ScalarType {
    ScalarType::new(
        name!("ID"),
        |value| match value {
            InputValue::String(value) => Some(InputValue::String(value.clone())),
            InputValue::Int(value) => Some(InputValue::String(value.to_string())),
            _ => None,
        },
        |value| match value {
            ast::Value::String(value) => Some(InputValue::String(value.clone())),
            ast::Value::Int(value) => Some(InputValue::String(value.as_str().to_owned())),
            _ => None,
        },
    )
    .with_description("The `ID` scalar type represents a unique identifier, often used to refetch an object or as the key for a cache.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_rejects_out_of_range_and_fractional() {
        let int = int();
        assert_eq!(int.parse_value(&InputValue::from(7)), Some(InputValue::Int(7)));
        assert_eq!(int.parse_value(&InputValue::from(3.0)), Some(InputValue::Int(3)));
        assert_eq!(int.parse_value(&InputValue::from(3.5)), None);
        assert_eq!(int.parse_value(&InputValue::from(i64::from(i32::MAX) + 1)), None);
        assert_eq!(int.parse_value(&InputValue::from("7")), None);
        assert_eq!(
            int.parse_literal(&ast::Value::Int(ast::IntValue::new("2147483648"))),
            None
        );
    }

    #[test]
    fn id_accepts_strings_and_integers() {
        let id = id();
        assert_eq!(
            id.parse_value(&InputValue::from(42)),
            Some(InputValue::String("42".into()))
        );
        assert_eq!(
            id.parse_literal(&ast::Value::Int(ast::IntValue::new("42"))),
            Some(InputValue::String("42".into()))
        );
        assert_eq!(id.parse_value(&InputValue::from(true)), None);
    }
}
