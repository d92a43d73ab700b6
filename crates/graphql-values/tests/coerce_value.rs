use graphql_values::ast;
use graphql_values::coerce_value;
use graphql_values::name;
use graphql_values::schema::EnumType;
use graphql_values::schema::InputObjectType;
use graphql_values::schema::InputValueDefinition;
use graphql_values::type_from_ast;
use graphql_values::InputValue;
use graphql_values::Schema;

fn test_schema() -> Schema {
    Schema::builder()
        .input_object(
            InputObjectType::new(name!("Complex"))
                .with_field(
                    InputValueDefinition::new(name!("a"), ast::Type::named(name!("String")))
                        .with_default_value("foo"),
                )
                .with_field(InputValueDefinition::new(
                    name!("b"),
                    ast::Type::named(name!("String")).list(),
                )),
        )
        .enum_type(
            EnumType::new(name!("Episode"))
                .with_value(name!("NEWHOPE"))
                .with_value(name!("EMPIRE")),
        )
        .build()
}

fn coerce(schema: &Schema, ty: ast::Type, value: Option<InputValue>) -> Option<InputValue> {
    let ty = type_from_ast(schema, &ty).expect("test type should resolve");
    coerce_value(schema, &ty, value.as_ref())
}

#[test]
fn nullish_values_coerce_to_absent() {
    let schema = test_schema();
    let ty = ast::Type::named(name!("String"));
    assert_eq!(coerce(&schema, ty.clone(), None), None);
    assert_eq!(coerce(&schema, ty.clone(), Some(InputValue::Null)), None);
    assert_eq!(
        coerce(&schema, ty, Some(InputValue::Float(f64::NAN))),
        None
    );
}

#[test]
fn non_null_unwraps_for_valid_input() {
    // The non-null constraint was validated earlier; coercion just unwraps
    let schema = test_schema();
    let value = Some(InputValue::from("x"));
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("String")).non_null(), value.clone()),
        coerce(&schema, ast::Type::named(name!("String")), value),
    );
    assert_eq!(
        coerce(
            &schema,
            ast::Type::named(name!("String")).non_null(),
            Some(InputValue::Null)
        ),
        None
    );
}

#[test]
fn scalars_coerce_to_canonical_representations() {
    let schema = test_schema();
    // An integral float is an Int
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("Int")), Some(InputValue::from(3.0))),
        Some(InputValue::Int(3))
    );
    // An integer widens to Float
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("Float")), Some(InputValue::from(3))),
        Some(InputValue::Float(3.0))
    );
    // An integer stringifies as an ID
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("ID")), Some(InputValue::from(42))),
        Some(InputValue::String("42".into()))
    );
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("Int")), Some(InputValue::from("3"))),
        None
    );
}

#[test]
fn lists_coerce_elementwise() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!([1.0, 2]));
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("Int")).list(), Some(value)),
        Some(InputValue::List(vec![InputValue::Int(1), InputValue::Int(2)]))
    );
}

#[test]
fn single_value_wraps_into_a_list() {
    // The wrapping rule applies to runtime values like it does to literals
    let schema = test_schema();
    assert_eq!(
        coerce(
            &schema,
            ast::Type::named(name!("String")).list(),
            Some(InputValue::from("x"))
        ),
        Some(InputValue::List(vec![InputValue::String("x".into())]))
    );
}

#[test]
fn list_coercion_is_idempotent() {
    // Coercing an already-coerced list changes nothing
    let schema = test_schema();
    let ty = ast::Type::named(name!("String")).list();
    let value = InputValue::from(serde_json::json!(["a", "b"]));
    let once = coerce(&schema, ty.clone(), Some(value)).expect("coercible");
    let twice = coerce(&schema, ty, Some(once.clone())).expect("coercible");
    assert_eq!(once, twice);
}

#[test]
fn failing_list_element_becomes_null() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!([1, "x"]));
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("Int")).list(), Some(value)),
        Some(InputValue::List(vec![InputValue::Int(1), InputValue::Null]))
    );
}

#[test]
fn object_fields_layer_defaults() {
    let schema = test_schema();
    let ty = ast::Type::named(name!("Complex"));

    // Absent and explicitly-null inputs both take the field default
    let value = InputValue::from(serde_json::json!({}));
    assert_eq!(
        coerce(&schema, ty.clone(), Some(value)),
        Some(InputValue::from(serde_json::json!({"a": "foo"})))
    );
    let value = InputValue::from(serde_json::json!({"a": null}));
    assert_eq!(
        coerce(&schema, ty.clone(), Some(value)),
        Some(InputValue::from(serde_json::json!({"a": "foo"})))
    );
    // while a present value wins over the default
    let value = InputValue::from(serde_json::json!({"a": "bar", "b": ["x"]}));
    assert_eq!(
        coerce(&schema, ty, Some(value)),
        Some(InputValue::from(serde_json::json!({"a": "bar", "b": ["x"]})))
    );
}

#[test]
fn non_object_value_coerces_as_empty_object() {
    let schema = test_schema();
    assert_eq!(
        coerce(
            &schema,
            ast::Type::named(name!("Complex")),
            Some(InputValue::from(true))
        ),
        Some(InputValue::from(serde_json::json!({"a": "foo"})))
    );
}

#[test]
fn unknown_object_keys_are_dropped() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!({"a": "bar", "zzz": 1}));
    assert_eq!(
        coerce(&schema, ast::Type::named(name!("Complex")), Some(value)),
        Some(InputValue::from(serde_json::json!({"a": "bar"})))
    );
}

#[test]
fn enums_coerce_names_to_internal_values() {
    let schema = test_schema();
    let ty = ast::Type::named(name!("Episode"));
    assert_eq!(
        coerce(&schema, ty.clone(), Some(InputValue::from("EMPIRE"))),
        Some(InputValue::String("EMPIRE".into()))
    );
    assert_eq!(coerce(&schema, ty, Some(InputValue::from("WRONG"))), None);
}
