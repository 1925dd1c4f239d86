use thiserror::Error;

/// Error types for the model crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// One or more required form fields were left empty
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A comment with no text was posted
    #[error("Please write something before posting a comment.")]
    EmptyComment,

    /// Removing the only remaining ingredient or step
    #[error("At least one {0} is required")]
    LastEntry(&'static str),

    /// Editing a list position that does not exist
    #[error("No {kind} at position {index}")]
    IndexOutOfRange { kind: &'static str, index: usize },

    /// A select value that maps to no known option
    #[error("Unknown {field}: {value}")]
    UnknownValue { field: &'static str, value: String },

    /// Lookup of a record that the store does not hold
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Acting on a record owned by someone else
    #[error("Only the author can {0}")]
    NotOwner(&'static str),
}

impl ModelError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        ModelError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_missing_fields(&self) -> bool {
        matches!(self, ModelError::MissingFields(_))
    }
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
