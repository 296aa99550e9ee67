//! Errors raised while rendering a statement.

/// A rendering failure.
///
/// Rendering is all-or-nothing: the first failing node aborts the whole
/// statement and no partial SQL is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("Constant has no textual representation: {0}")]
    UnrepresentableConstant(&'static str),

    #[error("Cannot render non-finite float constant: {0}")]
    NonFiniteFloat(f64),
}

/// Result alias for dialect operations.
pub type RenderResult = Result<String, RenderError>;
