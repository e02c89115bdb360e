use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {endpoint}")]
    UpstreamStatus { status: u16, endpoint: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid year '{value}'")]
    InvalidYear { value: String },

    #[error("No movies found for year {year}")]
    NoMoviesFound { year: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MovieError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MovieError::ApiError(_) | MovieError::UpstreamStatus { .. } => ErrorCategory::Network,
            MovieError::ConfigError { .. }
            | MovieError::MissingConfigError { .. }
            | MovieError::InvalidConfigValueError { .. }
            | MovieError::TomlError(_) => ErrorCategory::Configuration,
            MovieError::IoError(_) | MovieError::SerializationError(_) => ErrorCategory::Data,
            MovieError::InvalidYear { .. } | MovieError::NoMoviesFound { .. } => {
                ErrorCategory::Request
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Message safe to show to a person; never includes upstream payloads or keys.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MovieError::ApiError(_) | MovieError::UpstreamStatus { .. } => {
                "The movie database could not be reached".to_string()
            }
            MovieError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            MovieError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            MovieError::ConfigError { message } => message.clone(),
            MovieError::TomlError(_) => "The configuration file could not be parsed".to_string(),
            MovieError::IoError(_) => "A file could not be read".to_string(),
            MovieError::SerializationError(_) => "Unexpected data format".to_string(),
            MovieError::InvalidYear { .. } => "Invalid year format. Use YYYY format.".to_string(),
            MovieError::NoMoviesFound { .. } => {
                "No movies found for the specified year.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MovieError::ApiError(_) | MovieError::UpstreamStatus { .. } => {
                "Check network connectivity and that the TMDB API key is valid"
            }
            MovieError::MissingConfigError { .. } => {
                "Set TMDB_API_KEY in the environment, a .env file, or the [tmdb] section of the config file"
            }
            MovieError::InvalidConfigValueError { .. } | MovieError::ConfigError { .. } => {
                "Correct the setting and restart the service"
            }
            MovieError::TomlError(_) => "Check the config file for TOML syntax errors",
            MovieError::IoError(_) => "Check that the file exists and is readable",
            MovieError::SerializationError(_) => "Check that the upstream API version is supported",
            MovieError::InvalidYear { .. } => "Use a four digit year such as 2019",
            MovieError::NoMoviesFound { .. } => "Try a different year",
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieError>;
