use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request to {url} failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog returned HTTP {status} for {url}")]
    UpstreamStatusError { url: String, status: u16 },

    #[error("Could not decode catalog response from {url}: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Aggregation failed: {0}")]
    AggregationError(#[source] Box<CatalogError>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    /// 包裝為編排層錯誤；已包裝者不重複包裝
    pub fn into_aggregation(self) -> Self {
        match self {
            wrapped @ CatalogError::AggregationError(_) => wrapped,
            other => CatalogError::AggregationError(Box::new(other)),
        }
    }

    /// Innermost error, skipping any aggregation wrapper.
    pub fn root(&self) -> &CatalogError {
        match self {
            CatalogError::AggregationError(inner) => inner.root(),
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.root() {
            CatalogError::TransportError { .. } | CatalogError::UpstreamStatusError { .. } => {
                ErrorCategory::Network
            }
            CatalogError::DecodeError { .. } => ErrorCategory::Data,
            CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::IoError(_) | CatalogError::AggregationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    pub fn user_friendly_message(&self) -> String {
        match self.root() {
            CatalogError::TransportError { url, .. } => {
                format!("Could not reach the catalog API at {}", url)
            }
            CatalogError::UpstreamStatusError { status, .. } => {
                format!("The catalog API answered with HTTP {}", status)
            }
            CatalogError::DecodeError { .. } => {
                "The catalog API returned data in an unexpected format".to_string()
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the catalog URL is reachable and try again",
            ErrorCategory::Data => "Verify the catalog URL points at a compatible API version",
            ErrorCategory::Configuration => "Fix the flag or TOML value named above and restart",
            ErrorCategory::System => "Check file permissions and that the bind address is free",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
