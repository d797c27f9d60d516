// src/backends/aws/error.rs
//! Mapping of AWS SDK failures onto console errors

use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::ConsoleError;

/// Converts an SDK error into [`ConsoleError::Api`], keeping the full source chain.
///
/// The plain `Display` of an `SdkError` is only "service error"; the context
/// wrapper walks the sources down to the service's own message.
pub(crate) fn sdk_error<E>(operation: &str, err: E) -> ConsoleError
where
    E: std::error::Error,
{
    ConsoleError::api(operation, DisplayErrorContext(err).to_string())
}

/// Converts a request-builder failure (missing required member).
pub(crate) fn build_error(err: impl std::fmt::Display) -> ConsoleError {
    ConsoleError::InvalidRequest(err.to_string())
}
