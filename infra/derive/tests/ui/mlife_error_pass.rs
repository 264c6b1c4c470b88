use mlife_derive::mlife_error;
use std::borrow::Cow;

#[mlife_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk"))?
}

fn main() {
    let err = read().context("reading profile").unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading profile): disk");

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");
}
