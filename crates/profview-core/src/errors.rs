use profview_core_types::ThreadIndex;
use thiserror::Error;

/// Result type alias using ProfviewError
pub type Result<T> = std::result::Result<T, ProfviewError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A serialized range-filter value could not be decoded
    InvalidRangeFilter,
    /// Positionally paired sequences differ in length
    MismatchedLengths,
    /// JSON encoding or decoding failed
    Serialization,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRangeFilter => "ERR_INVALID_RANGE_FILTER",
            ErrorKind::MismatchedLengths => "ERR_MISMATCHED_LENGTHS",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification of a [`ProfviewError`] plus the operation it
/// surfaced in, for reporting at process boundaries (CLI, logs).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ErrorKind,
    op: Option<String>,
    thread_index: Option<ThreadIndex>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            thread_index: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add thread context
    pub fn with_thread_index(mut self, thread_index: ThreadIndex) -> Self {
        self.thread_index = Some(thread_index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the thread context, if any
    pub fn thread_index(&self) -> Option<ThreadIndex> {
        self.thread_index
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(thread_index) = self.thread_index {
            write!(f, " (thread_index: {})", thread_index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the profview action layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfviewError {
    /// A `start_end` segment of a serialized range-filter list is malformed
    #[error("Malformed range filter segment '{segment}': {reason}")]
    MalformedRangeFilter { segment: String, reason: String },

    /// Function-name assignment with index and name lists of different lengths
    #[error(
        "Function name assignment for thread {thread_index} pairs {func_indices} indices with {func_names} names"
    )]
    MismatchedFunctionNames {
        thread_index: ThreadIndex,
        func_indices: usize,
        func_names: usize,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ProfviewError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfviewError::MalformedRangeFilter { .. } => ErrorKind::InvalidRangeFilter,
            ProfviewError::MismatchedFunctionNames { .. } => ErrorKind::MismatchedLengths,
            ProfviewError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

impl From<ProfviewError> for ExError {
    fn from(err: ProfviewError) -> Self {
        let ex = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            ProfviewError::MismatchedFunctionNames { thread_index, .. } => {
                ex.with_thread_index(thread_index)
            }
            _ => ex,
        }
    }
}

impl From<serde_json::Error> for ProfviewError {
    fn from(err: serde_json::Error) -> Self {
        ProfviewError::Serialization {
            message: err.to_string(),
        }
    }
}
