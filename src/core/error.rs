//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// File writer error with path
    #[error("File writer error for '{path}': {message}")]
    FileWriterError { path: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Termination-signal handler registration failed
    #[error("Failed to register termination signal handler")]
    SignalRegistration(#[source] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file writer error
    pub fn file_writer(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileWriterError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerBuilder", "a base writer is required");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_writer("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileWriterError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("LoggerBuilder", "channel capacity must be non-zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerBuilder: channel capacity must be non-zero"
        );

        let err = LoggerError::file_writer("/var/log/app.log", "Disk full");
        assert_eq!(
            err.to_string(),
            "File writer error for '/var/log/app.log': Disk full"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log line", "cannot write to sink", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log line"));
        assert!(err.to_string().contains("cannot write to sink"));
    }
}
