//! Binding of request values to schema types: resolving type references,
//! validating and coercing variable values, and materializing field argument
//! values.
//!
//! The entry points are [`get_variable_values`] (fallible, run once per
//! request before execution) and [`get_argument_values`] (infallible, run per
//! field). Both are pure: they read the schema and their inputs, and return
//! fresh maps.

use crate::ast;
use crate::error::GraphQLLocation;
use crate::error::RequestError;
use crate::input_value::is_nullish;
use crate::input_value::InputValue;
use crate::input_value::InputValueMap;
use crate::schema::ArgumentDefinition;
use crate::schema::Schema;
use crate::schema::Type;
use crate::Name;
use crate::Node;
use indexmap::IndexMap;

/// Values of variables from a GraphQL request, after coercion to the types
/// declared by the operation's variable definitions.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct VariableValues(IndexMap<Name, InputValue>);

impl VariableValues {
    pub fn into_inner(self) -> IndexMap<Name, InputValue> {
        self.0
    }
}

impl std::ops::Deref for VariableValues {
    type Target = IndexMap<Name, InputValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(Name, InputValue)> for VariableValues {
    fn from_iter<I: IntoIterator<Item = (Name, InputValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolves a type-reference AST against the schema, preserving list and
/// non-null wrappers.
///
/// Returns `None` when the innermost name is not registered in the schema.
pub fn type_from_ast(schema: &Schema, ty: &ast::Type) -> Option<Type> {
    match ty {
        ast::Type::Named(name) => schema.get_type(name.as_str()).cloned(),
        ast::Type::List(inner) => Some(type_from_ast(schema, inner)?.list()),
        ast::Type::NonNull(inner) => Some(type_from_ast(schema, inner)?.non_null()),
    }
}

/// Checks whether a runtime value will be accepted for the given type.
///
/// Returns path-qualified messages describing every violation; an empty list
/// means the value is acceptable. Input-object diagnostics are emitted in a
/// deterministic order regardless of the input map's key order: unknown
/// fields first, then per-field violations, each group sorted by field name.
pub fn is_valid_input_value(schema: &Schema, value: Option<&InputValue>, ty: &Type) -> Vec<String> {
    if let Type::NonNull(inner) = ty {
        if is_nullish(value) {
            return match inner.name() {
                Some(name) => vec![format!("Expected \"{name}!\", found null.")],
                None => vec!["Expected non-null value, found null.".to_owned()],
            };
        }
        return is_valid_input_value(schema, value, inner);
    }
    let Some(value) = value.filter(|value| !value.is_nullish()) else {
        // null is acceptable for any nullable type
        return Vec::new();
    };
    match ty {
        Type::List(item_ty) => {
            if let Some(items) = value.as_list() {
                let mut messages = Vec::new();
                for (index, item) in items.iter().enumerate() {
                    for message in is_valid_input_value(schema, Some(item), item_ty) {
                        messages.push(format!("In element #{}: {message}", index + 1));
                    }
                }
                messages
            } else {
                // single-element wrapping rule
                is_valid_input_value(schema, Some(value), item_ty)
            }
        }
        Type::InputObject(def) => {
            let Some(value_map) = value.as_object() else {
                return vec![format!("Expected \"{}\", found not an object.", def.name)];
            };
            let mut messages = Vec::new();

            let mut provided_names: Vec<&str> = value_map.keys().map(String::as_str).collect();
            provided_names.sort_unstable();
            let mut field_names: Vec<&Name> = def.fields.keys().collect();
            field_names.sort_unstable();

            // Every provided field must be defined.
            for provided_name in provided_names {
                if !def.fields.contains_key(provided_name) {
                    messages.push(format!("In field \"{provided_name}\": Unknown field."));
                }
            }

            // Every defined field must be valid.
            for field_name in field_names {
                let Some(field) = def.fields.get(field_name.as_str()) else {
                    continue;
                };
                let Some(field_ty) = type_from_ast(schema, &field.ty) else {
                    // schema is presumed valid
                    continue;
                };
                let field_value = value_map.get(field_name.as_str());
                for message in is_valid_input_value(schema, field_value, &field_ty) {
                    messages.push(format!("In field \"{field_name}\": {message}"));
                }
            }
            messages
        }
        Type::Scalar(def) => match def.parse_value(value) {
            Some(parsed) if !parsed.is_nullish() => Vec::new(),
            _ => vec![format!(
                "Expected type \"{}\", found \"{}\".",
                def.name,
                value_repr(value)
            )],
        },
        Type::Enum(def) => match def.parse_value(value) {
            Some(parsed) if !parsed.is_nullish() => Vec::new(),
            _ => vec![format!(
                "Expected type \"{}\", found \"{}\".",
                def.name,
                value_repr(value)
            )],
        },
        // Output types never reach the validator for validated requests
        _ => Vec::new(),
    }
}

/// How a raw value is rendered inside `Expected type …, found …` messages:
/// strings bare, everything else as JSON.
fn value_repr(value: &InputValue) -> String {
    match value {
        InputValue::String(value) => value.clone(),
        _ => value.to_string(),
    }
}

/// Produces a runtime value from a literal value AST, guided by a type.
///
/// Variable references are substituted from `variables` without being
/// re-checked against the variable's declared type: query validation is
/// trusted to have ensured every usage site is compatible.
///
/// Returns `None` when there is no value node, when a referenced variable is
/// not bound, or when the literal is not coercible to the type.
pub fn value_from_ast(
    schema: &Schema,
    value: Option<&ast::Value>,
    ty: &Type,
    variables: Option<&VariableValues>,
) -> Option<InputValue> {
    let value = value?;
    // The value node kind outranks the type
    if let Some(name) = value.as_variable() {
        return variables?.get(name.as_str()).cloned();
    }
    match ty {
        Type::NonNull(inner) => value_from_ast(schema, Some(value), inner, variables),
        Type::List(item_ty) => {
            let items = match value.as_list() {
                Some(items) => items
                    .iter()
                    .map(|item| {
                        value_from_ast(schema, Some(item), item_ty, variables)
                            .unwrap_or(InputValue::Null)
                    })
                    .collect(),
                // single-element wrapping rule
                None => vec![value_from_ast(schema, Some(value), item_ty, variables)
                    .unwrap_or(InputValue::Null)],
            };
            Some(InputValue::List(items))
        }
        Type::InputObject(def) => {
            let object = value.as_object()?;
            let field_asts: IndexMap<&str, &Node<ast::Value>> = object
                .iter()
                .map(|(name, value)| (name.as_str(), value))
                .collect();
            let mut result = InputValueMap::new();
            for (field_name, field) in &def.fields {
                let field_value = match field_asts.get(field_name.as_str()).copied() {
                    Some(field_ast) => type_from_ast(schema, &field.ty).and_then(|field_ty| {
                        value_from_ast(schema, Some(field_ast), &field_ty, variables)
                    }),
                    None => field.default_value.clone(),
                };
                if let Some(field_value) = field_value {
                    if !field_value.is_nullish() {
                        result.insert(field_name.as_str().to_owned(), field_value);
                    }
                }
            }
            Some(InputValue::Object(result))
        }
        Type::Scalar(def) => def.parse_literal(value),
        Type::Enum(def) => def.parse_literal(value),
        _ => None,
    }
}

/// Coerces a runtime value to the canonical representation the type demands.
///
/// The non-null constraint is assumed to have been validated already;
/// coercion unwraps it. Returns `None` for absent and non-coercible values.
pub fn coerce_value(schema: &Schema, ty: &Type, value: Option<&InputValue>) -> Option<InputValue> {
    if let Type::NonNull(inner) = ty {
        return coerce_value(schema, inner, value);
    }
    let value = value.filter(|value| !value.is_nullish())?;
    match ty {
        Type::List(item_ty) => {
            let items = match value.as_list() {
                Some(items) => items
                    .iter()
                    .map(|item| {
                        coerce_value(schema, item_ty, Some(item)).unwrap_or(InputValue::Null)
                    })
                    .collect(),
                // single-element wrapping rule
                None => vec![coerce_value(schema, item_ty, Some(value)).unwrap_or(InputValue::Null)],
            };
            Some(InputValue::List(items))
        }
        Type::InputObject(def) => {
            let empty;
            let value_map = match value.as_object() {
                Some(value_map) => value_map,
                // anything that isn't an object coerces as an empty one
                None => {
                    empty = InputValueMap::new();
                    &empty
                }
            };
            let mut result = InputValueMap::new();
            for (field_name, field) in &def.fields {
                let Some(field_ty) = type_from_ast(schema, &field.ty) else {
                    // schema is presumed valid
                    continue;
                };
                let mut field_value =
                    coerce_value(schema, &field_ty, value_map.get(field_name.as_str()));
                if is_nullish(field_value.as_ref()) {
                    field_value = field.default_value.clone();
                }
                if let Some(field_value) = field_value {
                    if !field_value.is_nullish() {
                        result.insert(field_name.as_str().to_owned(), field_value);
                    }
                }
            }
            Some(InputValue::Object(result))
        }
        Type::Scalar(def) => def.parse_value(value).filter(|parsed| !parsed.is_nullish()),
        Type::Enum(def) => def.parse_value(value).filter(|parsed| !parsed.is_nullish()),
        _ => None,
    }
}

/// Prepares a map of variable values for a request, given the operation's
/// variable definitions and the client-supplied input map.
///
/// Keys of `inputs` that do not correspond to a declared variable are
/// ignored. Processing stops at the first variable that fails to bind; the
/// error carries the offending variable definition's source location.
pub fn get_variable_values(
    schema: &Schema,
    definitions: &[Node<ast::VariableDefinition>],
    inputs: &InputValueMap,
) -> Result<VariableValues, RequestError> {
    let mut values = IndexMap::new();
    for definition in definitions {
        let name = &definition.name;
        let value = get_variable_value(schema, definition, inputs.get(name.as_str()))?;
        values.insert(name.clone(), value);
    }
    Ok(VariableValues(values))
}

/// Given one variable definition and the raw input for it, returns a value
/// adhering to the definition, or the request error to abort with.
fn get_variable_value(
    schema: &Schema,
    definition: &Node<ast::VariableDefinition>,
    input: Option<&InputValue>,
) -> Result<InputValue, RequestError> {
    let ty = match type_from_ast(schema, &definition.ty) {
        Some(ty) if ty.is_input_type() => ty,
        _ => {
            return Err(binding_error(
                definition,
                format!(
                    "Variable \"${}\" expected value of type \"{}\" \
                     which cannot be used as an input type.",
                    definition.name, definition.ty,
                ),
            ))
        }
    };

    let messages = is_valid_input_value(schema, input, &ty);
    if messages.is_empty() {
        if is_nullish(input) {
            if let Some(default_value) = &definition.default_value {
                let no_variables = VariableValues::default();
                let value =
                    value_from_ast(schema, Some(default_value), &ty, Some(&no_variables));
                return Ok(value.unwrap_or(InputValue::Null));
            }
        }
        return Ok(coerce_value(schema, &ty, input).unwrap_or(InputValue::Null));
    }

    if is_nullish(input) {
        return Err(binding_error(
            definition,
            format!(
                "Variable \"${}\" of required type \"{}\" was not provided.",
                definition.name, definition.ty,
            ),
        ));
    }
    let input_json = input.map(ToString::to_string).unwrap_or_default();
    Err(binding_error(
        definition,
        format!(
            "Variable \"${}\" got invalid value {}.\n{}",
            definition.name,
            input_json,
            messages.join("\n"),
        ),
    ))
}

fn binding_error(definition: &Node<ast::VariableDefinition>, message: String) -> RequestError {
    RequestError::new(message, GraphQLLocation::from_node(definition.location()))
}

/// Prepares a map of argument values given a list of argument definitions,
/// the argument AST nodes of a field, and the request's bound variables.
///
/// Argument validity is assumed to have been checked by query validation, so
/// this never fails: an argument whose value comes out absent (and that has
/// no usable default) is simply left out of the map.
pub fn get_argument_values(
    schema: &Schema,
    argument_definitions: &[Node<ArgumentDefinition>],
    arguments: &[Node<ast::Argument>],
    variables: &VariableValues,
) -> IndexMap<Name, InputValue> {
    let argument_asts: IndexMap<&str, &Node<ast::Argument>> = arguments
        .iter()
        .map(|argument| (argument.name.as_str(), argument))
        .collect();
    let mut values = IndexMap::new();
    for definition in argument_definitions {
        let value_ast = argument_asts
            .get(definition.name.as_str())
            .map(|argument| &*argument.value);
        let mut value = value_from_ast(schema, value_ast, &definition.ty, Some(variables));
        if is_nullish(value.as_ref()) {
            value = definition.default_value.clone();
        }
        if let Some(value) = value {
            if !value.is_nullish() {
                values.insert(definition.name.clone(), value);
            }
        }
    }
    values
}
