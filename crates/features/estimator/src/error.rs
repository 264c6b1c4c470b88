use std::borrow::Cow;

/// Errors of the life-estimation engine.
#[mlife_derive::mlife_error]
pub enum EstimatorError {
    /// An input would make the formula divide by zero, take a non-positive
    /// absolute temperature, or produce a non-finite result.
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The configured model constants cannot produce a meaningful estimate.
    #[error("Invalid life model{}: {message}", format_context(.context))]
    InvalidModel { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl EstimatorError {
    pub(crate) fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput { message: message.into(), context: None }
    }
}
