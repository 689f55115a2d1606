use crate::types::{DbId, EntityKind};

/// Domain-level error taxonomy.
///
/// Every variant carries a stable machine-readable code (see [`CoreError::code`])
/// that the API layer forwards to clients next to the human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested record does not exist (404).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: EntityKind, id: DbId },

    /// A required field was absent or blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A field failed a format or range check. `code` is one of the
    /// `INVALID_*` constants in [`codes`].
    #[error("{message}")]
    Invalid { code: &'static str, message: String },

    /// A referenced record (foreign key) does not exist. Reported as a
    /// client error even though it originates from a lookup miss.
    #[error("{entity} with id {id} not found")]
    ReferenceNotFound { entity: EntityKind, id: DbId },

    /// A uniqueness constraint would be violated.
    #[error("{field} already exists: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::Invalid`].
    pub fn invalid(code: &'static str, message: impl Into<String>) -> Self {
        CoreError::Invalid {
            code,
            message: message.into(),
        }
    }

    /// Stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { entity, .. } | CoreError::ReferenceNotFound { entity, .. } => {
                entity.not_found_code()
            }
            CoreError::MissingField { .. } => codes::MISSING_FIELD,
            CoreError::Invalid { code, .. } => code,
            CoreError::Duplicate { field, .. } => match *field {
                "email" => codes::DUPLICATE_EMAIL,
                _ => codes::DUPLICATE_VALUE,
            },
            CoreError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }
}

/// Stable error codes returned in the `code` field of error bodies.
pub mod codes {
    pub const MISSING_FIELD: &str = "MISSING_FIELD";
    pub const MISSING_CONTENT: &str = "MISSING_CONTENT";

    pub const INVALID_ID: &str = "INVALID_ID";
    pub const INVALID_NAME: &str = "INVALID_NAME";
    pub const INVALID_STATUS: &str = "INVALID_STATUS";
    pub const INVALID_PROGRESS: &str = "INVALID_PROGRESS";
    pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
    pub const INVALID_PROJECT_ID: &str = "INVALID_PROJECT_ID";
    pub const INVALID_ASSIGNED_TO: &str = "INVALID_ASSIGNED_TO";
    pub const INVALID_QUERY: &str = "INVALID_QUERY";
    pub const INVALID_BODY: &str = "INVALID_BODY";

    pub const DUPLICATE_EMAIL: &str = "DUPLICATE_EMAIL";
    pub const DUPLICATE_VALUE: &str = "DUPLICATE_VALUE";

    pub const INSIGHTS_NOT_CONFIGURED: &str = "INSIGHTS_NOT_CONFIGURED";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const EMPTY_COMPLETION: &str = "EMPTY_COMPLETION";

    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
