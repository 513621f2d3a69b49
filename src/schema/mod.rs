mod hello;

pub use hello::{FieldError, HelloInput, HelloResponse, ValidationError, validate_hello_input};
