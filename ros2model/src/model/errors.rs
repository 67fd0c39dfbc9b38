/// Error types for interface model extraction
use thiserror::Error;

/// Main error type for interface model extraction
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum ModelError {
    #[error("Invalid interface file name: {path}")]
    InvalidFileName { path: String },

    #[error("Unsupported interface extension: '{extension}' - expected .msg, .srv, or .action")]
    UnsupportedExtension { extension: String },

    #[error("Unknown parameter type id: {0}")]
    UnknownParameterType(u8),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for model extraction operations
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let model_err: ModelError = io_err.into();
        assert!(matches!(model_err, ModelError::Io(..)));
        assert!(model_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display_messages() {
        let err = ModelError::InvalidFileName {
            path: "/tmp/..".to_string(),
        };
        assert!(err.to_string().contains("/tmp/.."));

        let err = ModelError::UnsupportedExtension {
            extension: "txt".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("txt"));
        assert!(msg.contains(".action"));

        let err = ModelError::UnknownParameterType(42);
        assert!(err.to_string().contains("42"));
    }
}
