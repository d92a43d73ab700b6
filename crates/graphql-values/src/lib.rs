#![doc = include_str!("../README.md")]

pub mod ast;
mod error;
mod input_value;
mod name;
mod node;
pub mod schema;
pub mod values;

pub use crate::error::GraphQLError;
pub use crate::error::GraphQLLocation;
pub use crate::error::PathElement;
pub use crate::error::RequestError;
pub use crate::input_value::is_nullish;
pub use crate::input_value::InputValue;
pub use crate::input_value::InputValueMap;
pub use crate::name::InvalidNameError;
pub use crate::name::Name;
pub use crate::node::Node;
pub use crate::node::NodeLocation;
pub use crate::schema::Schema;
pub use crate::values::coerce_value;
pub use crate::values::get_argument_values;
pub use crate::values::get_variable_values;
pub use crate::values::is_valid_input_value;
pub use crate::values::type_from_ast;
pub use crate::values::value_from_ast;
pub use crate::values::VariableValues;
