//! Defines application-specific error types.
//!
//! The filter itself is total over arbitrary line input and never raises
//! semantic errors; the only failure category is I/O on the input or output
//! stream. The variant here carries which stream failed so the message is
//! useful when the process exits non-zero.

use thiserror::Error;

/// Application-specific errors used throughout `panescrub`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error reading from or writing to one of the two streams.
    #[error("I/O error on {stream} stream: {source}")]
    IoError {
        /// Which stream failed ("input" or "output").
        stream: &'static str,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Helper to create an `AppError::IoError` with stream context.
pub fn io_error_on(stream: &'static str, source: std::io::Error) -> AppError {
    AppError::IoError { stream, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_on_helper() {
        let source_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let app_error = io_error_on("output", source_error);

        match app_error {
            AppError::IoError { stream, source } => {
                assert_eq!(stream, "output");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
                assert!(source.to_string().contains("pipe closed"));
            }
        }
    }

    #[test]
    fn test_io_error_display_includes_stream() {
        let source_error = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let app_error = io_error_on("input", source_error);
        let message = app_error.to_string();
        assert!(message.contains("input"));
        assert!(message.contains("I/O error"));
    }
}
