use thiserror::Error;

/// Main error type for the planner crate
///
/// Itinerary selection itself never fails; these variants cover the edges
/// around it (configuration, catalog loading, CLI input, output).
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Activity not found: day {day}, activity {index}")]
    ActivityNotFound { day: u32, index: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Catalog(_) => "CATALOG_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
            PlannerError::InvalidInput(_) => "INVALID_INPUT",
            PlannerError::Clipboard(_) => "CLIPBOARD_ERROR",
            PlannerError::ActivityNotFound { .. } => "ACTIVITY_NOT_FOUND",
        }
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PlannerError::Config(_)
                | PlannerError::InvalidInput(_)
                | PlannerError::ActivityNotFound { .. }
        )
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "user_error": self.is_user_error()
            }
        })
    }
}
