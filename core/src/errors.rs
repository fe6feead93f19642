use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid event: {0}")]
    Event(#[from] EventError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to load configuration from {origin}: {error}")]
    LoadFailed {
        origin: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The event did not have the shape the handler reads from.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventError {
    #[error("event must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },
}

pub type Result<T> = std::result::Result<T, GreetingError>;

impl From<serde_json::Error> for GreetingError {
    fn from(err: serde_json::Error) -> Self {
        GreetingError::Serialization(SerializationError::Json {
            reason: err.to_string(),
        })
    }
}

impl GreetingError {
    /// True when the invocation failed because of what the caller sent,
    /// as opposed to how the function was deployed.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, GreetingError::Event(_))
    }
}
