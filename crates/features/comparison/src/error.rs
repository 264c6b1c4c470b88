use std::borrow::Cow;

/// Errors of the comparison slice.
#[mlife_derive::mlife_error]
pub enum ComparisonError {
    /// The requested parameter is not part of the configured dataset.
    #[error("Unknown parameter{}: {message}", format_context(.context))]
    UnknownParameter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The configured dataset cannot be served.
    #[error("Invalid dataset{}: {message}", format_context(.context))]
    InvalidDataset { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
