use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The diff engine itself is total; these kinds classify failures at its
/// edges: the deadline wrapper, configuration and file input. Each kind
/// maps to a stable error code for programmatic handling and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Diff options document could not be parsed or holds an unknown value
    InvalidConfig,
    /// Reading a snapshot side from disk failed
    Io,
    /// Diff output could not be serialized
    Serialization,
    /// A deadline-bounded diff ran out of budget
    Timeout,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for shutter operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShutterError {
    /// Deadline-bounded diff did not finish in time
    #[error("Diff exceeded its time budget of {budget_ms} ms")]
    DeadlineExceeded { budget_ms: u128 },

    /// Diff options could not be parsed
    #[error("Invalid diff options: {reason}")]
    InvalidOptions { reason: String },

    /// A snapshot side could not be read
    #[error("Failed to read {}: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    /// Diff output could not be encoded
    #[error("Failed to encode diff output: {reason}")]
    EncodeFailed { reason: String },
}

impl From<ShutterError> for ExError {
    fn from(err: ShutterError) -> Self {
        let message = err.to_string();
        match err {
            ShutterError::DeadlineExceeded { .. } => {
                ExError::new(ExErrorKind::Timeout).with_message(message)
            }
            ShutterError::InvalidOptions { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            ShutterError::ReadFailed { path, .. } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),
            ShutterError::EncodeFailed { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
