use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A filter select produced a value no filter understands
    #[error("Unknown {kind} filter: {value}")]
    UnknownFilter { kind: &'static str, value: String },
}

impl ComputeError {
    pub fn unknown_filter(kind: &'static str, value: impl Into<String>) -> Self {
        ComputeError::UnknownFilter {
            kind,
            value: value.into(),
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
