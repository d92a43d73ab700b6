use graphql_values::ast;
use graphql_values::is_valid_input_value;
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
            // input Complex { a: String = "foo", b: [String] }
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
        .input_object(
            InputObjectType::new(name!("Point"))
                .with_field(InputValueDefinition::new(
                    name!("x"),
                    ast::Type::named(name!("Int")).non_null(),
                ))
                .with_field(InputValueDefinition::new(
                    name!("y"),
                    ast::Type::named(name!("Int")).non_null(),
                )),
        )
        .enum_type(
            EnumType::new(name!("Episode"))
                .with_value(name!("NEWHOPE"))
                .with_value(name!("EMPIRE"))
                .with_value(name!("JEDI")),
        )
        .build()
}

fn validate(schema: &Schema, value: Option<InputValue>, ty: ast::Type) -> Vec<String> {
    let ty = type_from_ast(schema, &ty).expect("test type should resolve");
    is_valid_input_value(schema, value.as_ref(), &ty)
}

#[test]
fn null_is_valid_for_nullable_types() {
    let schema = test_schema();
    let string = ast::Type::named(name!("String"));
    assert_eq!(validate(&schema, None, string.clone()), Vec::<String>::new());
    assert_eq!(
        validate(&schema, Some(InputValue::Null), string.clone()),
        Vec::<String>::new()
    );
    assert_eq!(
        validate(&schema, Some(InputValue::Float(f64::NAN)), string),
        Vec::<String>::new()
    );
}

#[test]
fn null_for_non_null_named_type() {
    let schema = test_schema();
    assert_eq!(
        validate(&schema, None, ast::Type::named(name!("String")).non_null()),
        ["Expected \"String!\", found null."]
    );
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::Null),
            ast::Type::named(name!("Int")).non_null()
        ),
        ["Expected \"Int!\", found null."]
    );
}

#[test]
fn null_for_non_null_wrapped_type() {
    // The inner type of `[String]!` is anonymous, so the generic message is used
    let schema = test_schema();
    assert_eq!(
        validate(
            &schema,
            None,
            ast::Type::named(name!("String")).list().non_null()
        ),
        ["Expected non-null value, found null."]
    );
}

#[test]
fn scalar_mismatch_reports_value() {
    let schema = test_schema();
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from("abc")),
            ast::Type::named(name!("Boolean"))
        ),
        ["Expected type \"Boolean\", found \"abc\"."]
    );
    // Int-ish strings are not integers
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from("3")),
            ast::Type::named(name!("Int"))
        ),
        ["Expected type \"Int\", found \"3\"."]
    );
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from(true)),
            ast::Type::named(name!("String"))
        ),
        ["Expected type \"String\", found \"true\"."]
    );
}

#[test]
fn empty_string_and_zero_are_present_values() {
    let schema = test_schema();
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from("")),
            ast::Type::named(name!("String")).non_null()
        ),
        Vec::<String>::new()
    );
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from(0)),
            ast::Type::named(name!("Int")).non_null()
        ),
        Vec::<String>::new()
    );
}

#[test]
fn list_elements_are_validated_with_positions() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!([1, "x", 2]));
    assert_eq!(
        validate(
            &schema,
            Some(value),
            ast::Type::named(name!("String")).list()
        ),
        [
            "In element #1: Expected type \"String\", found \"1\".",
            "In element #3: Expected type \"String\", found \"2\".",
        ]
    );
}

#[test]
fn non_list_value_validates_as_single_element() {
    let schema = test_schema();
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from("x")),
            ast::Type::named(name!("String")).list()
        ),
        Vec::<String>::new()
    );
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from("x")),
            ast::Type::named(name!("Int")).list()
        ),
        ["Expected type \"Int\", found \"x\"."]
    );
}

#[test]
fn input_object_requires_an_object() {
    let schema = test_schema();
    assert_eq!(
        validate(
            &schema,
            Some(InputValue::from(5)),
            ast::Type::named(name!("Complex"))
        ),
        ["Expected \"Complex\", found not an object."]
    );
}

#[test]
fn unknown_fields_then_field_errors_each_sorted() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!({"z": true, "c": true, "a": 1}));
    assert_eq!(
        validate(&schema, Some(value), ast::Type::named(name!("Complex"))),
        [
            "In field \"c\": Unknown field.",
            "In field \"z\": Unknown field.",
            "In field \"a\": Expected type \"String\", found \"1\".",
        ]
    );
}

#[test]
fn diagnostics_do_not_depend_on_input_key_order() {
    let schema = test_schema();
    let forwards = InputValue::from(serde_json::json!({"a": 1, "b": 2, "c": 3}));
    let backwards = InputValue::from(serde_json::json!({"c": 3, "b": 2, "a": 1}));
    let ty = ast::Type::named(name!("Complex"));
    assert_eq!(
        validate(&schema, Some(forwards), ty.clone()),
        validate(&schema, Some(backwards), ty),
    );
}

#[test]
fn missing_non_null_fields_are_reported() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!({"x": 1}));
    assert_eq!(
        validate(&schema, Some(value), ast::Type::named(name!("Point"))),
        ["In field \"y\": Expected \"Int!\", found null."]
    );
}

#[test]
fn nested_paths_compose() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!({"b": ["ok", true]}));
    assert_eq!(
        validate(&schema, Some(value), ast::Type::named(name!("Complex"))),
        ["In field \"b\": In element #2: Expected type \"String\", found \"true\"."]
    );
}

#[test]
fn explicit_null_is_valid_for_nullable_field() {
    let schema = test_schema();
    let value = InputValue::from(serde_json::json!({"a": null}));
    assert_eq!(
        validate(&schema, Some(value), ast::Type::named(name!("Complex"))),
        Vec::<String>::new()
    );
}

#[test]
fn enum_accepts_known_names_only() {
    let schema = test_schema();
    let ty = ast::Type::named(name!("Episode"));
    assert_eq!(
        validate(&schema, Some(InputValue::from("EMPIRE")), ty.clone()),
        Vec::<String>::new()
    );
    assert_eq!(
        validate(&schema, Some(InputValue::from("WRONG")), ty),
        ["Expected type \"Episode\", found \"WRONG\"."]
    );
}
