//! Error types for Folio.
//!
//! The content parsers are total and never produce these errors. They come
//! from the layers around them: loading files, reading configuration,
//! deserializing metadata into caller types, and enforcing required fields
//! during assembly.

use std::path::{Path, PathBuf};

/// Errors that can occur in Folio.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Structured data could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A required field was absent or empty after defaults were applied.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the field
        field: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error that remembers which file it concerns.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a missing-field error.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("bad metadata");
        assert_eq!(err.to_string(), "Parse error: bad metadata");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("unknown key");
        assert_eq!(err.to_string(), "Configuration error: unknown key");
    }

    #[test]
    fn test_missing_field_display() {
        let err = Error::missing_field("sourceCodeUrl");
        assert_eq!(err.to_string(), "Missing required field: sourceCodeUrl");
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(source, "content/footer.md");
        let Error::Io { path, .. } = &err else {
            unreachable!("Expected Io error variant");
        };
        assert_eq!(path, Path::new("content/footer.md"));
        assert!(err.to_string().contains("content/footer.md"));
    }

    #[test]
    fn test_serde_error_converts() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{nope}").unwrap_err();
        let err: Error = serde_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
