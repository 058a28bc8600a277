use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Request to {endpoint} failed: {source}")]
    TransportError {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with HTTP {status}")]
    HttpStatusError {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponseError { endpoint: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    HttpStatus,
    MalformedResponse,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The source misbehaved; rerunning later may succeed.
    Medium,
    /// Bad input or configuration; rerunning as-is will fail again.
    High,
    /// The local filesystem refused the write.
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::TransportError { .. } => ErrorCategory::Transport,
            EtlError::HttpStatusError { .. } => ErrorCategory::HttpStatus,
            EtlError::MalformedResponseError { .. } => ErrorCategory::MalformedResponse,
            EtlError::IoError(_) | EtlError::CsvError(_) => ErrorCategory::Io,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Transport | ErrorCategory::HttpStatus => ErrorSeverity::Medium,
            ErrorCategory::MalformedResponse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, EtlError::TransportError { source, .. } if source.is_timeout())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::TransportError { endpoint, .. } if self.is_timeout() => {
                format!("Timed out waiting for {}", endpoint)
            }
            EtlError::TransportError { endpoint, .. } => {
                format!("Could not reach {}", endpoint)
            }
            EtlError::HttpStatusError { endpoint, status } => {
                format!("{} returned {}", endpoint, status)
            }
            EtlError::MalformedResponseError { endpoint, reason } => {
                format!("Unexpected data from {}: {}", endpoint, reason)
            }
            EtlError::IoError(e) => format!("Could not write the output file: {}", e),
            EtlError::CsvError(e) => format!("Could not encode the output file: {}", e),
            EtlError::ConfigError { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => {
                "Check network connectivity, API_URL, or raise REQUEST_TIMEOUT_SECS"
            }
            ErrorCategory::HttpStatus => "Verify API_URL points at a reachable listing endpoint",
            ErrorCategory::MalformedResponse => "The endpoint must return a JSON array of records",
            ErrorCategory::Io => "Check that OUTPUT_DIR is writable and has free space",
            ErrorCategory::Configuration => {
                "Review API_URL, OUTPUT_DIR, OUTPUT_FILE and REQUEST_TIMEOUT_SECS"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
