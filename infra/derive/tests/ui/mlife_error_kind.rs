use mlife_derive::mlife_error;
use std::borrow::Cow;

#[mlife_error]
pub enum ProbeError {
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Not found: {message}")]
    NotFound { message: Cow<'static, str> },
}

fn main() {
    let err = ProbeError::InvalidInput { message: "negative".into(), context: None };
    assert_eq!(err.kind(), "InvalidInputError");
    assert_eq!(err.to_string(), "Invalid input: negative");
}
