use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Relay request failed: {0}")]
    RelayError(#[from] reqwest::Error),

    #[error("Relay rejected template {template_id} with status {status}: {body}")]
    RelayRejected {
        template_id: String,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Please fill out the {field} field")]
    MissingField { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown category '{value}' (expected all, games, art or music)")]
    UnknownCategory { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Validation,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::RelayError(_) | SiteError::RelayRejected { .. } => ErrorCategory::Network,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::MissingField { .. }
            | SiteError::ValidationError { .. }
            | SiteError::UnknownCategory { .. } => ErrorCategory::Validation,
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::RelayError(_) | SiteError::RelayRejected { .. } => {
                "Failed to send message. Try again later.".to_string()
            }
            SiteError::MissingField { .. }
            | SiteError::ValidationError { .. }
            | SiteError::UnknownCategory { .. } => self.to_string(),
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            _ => format!("Site configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and the relay service/template identifiers",
            ErrorCategory::Configuration => "Review site.toml and any ${VAR} environment variables it uses",
            ErrorCategory::Validation => "Correct the highlighted input and submit again",
            ErrorCategory::Io => "Make sure the output directory exists and is writable",
            ErrorCategory::Data => "Report the malformed data; it should never come from the registries",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
