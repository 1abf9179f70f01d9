use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeError {
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed input for {field}: {input:?} is not an integer")]
    MalformedInputError { field: String, input: String },

    #[error("Missing input for {field}: input stream ended")]
    MissingInputError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AgeError::InvalidInputError { .. }
            | AgeError::MalformedInputError { .. }
            | AgeError::MissingInputError { .. } => ErrorCategory::Input,
            AgeError::ConfigValidationError { .. } | AgeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AgeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Input errors are all reported to the user the same way.
    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AgeError::InvalidInputError { .. }
            | AgeError::MalformedInputError { .. }
            | AgeError::MissingInputError { .. } => "Invalid input".to_string(),
            AgeError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AgeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration value '{}' for '{}' rejected: {}", value, field, reason),
            AgeError::IoError(e) => format!("Could not access the console: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgeError::InvalidInputError { .. } => {
                "Enter a year no later than the current one, a month from 1 to 12 and a day from 1 to 31"
            }
            AgeError::MalformedInputError { .. } => "Enter whole numbers only, one per prompt",
            AgeError::MissingInputError { .. } => "Provide all three values before closing the input",
            AgeError::ConfigValidationError { .. } => "Check that the configuration file is valid TOML",
            AgeError::InvalidConfigValueError { .. } => {
                "Dates must be written as YYYY-MM-DD and log levels must not be empty"
            }
            AgeError::IoError(_) => "Make sure standard input and output are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, AgeError>;
