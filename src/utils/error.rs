use thiserror::Error;

/// Failures of the conversion core. Every variant is terminal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid source system: '{name}'")]
    InvalidSourceBase { name: String },

    #[error("Invalid number: the {base} system only accepts the digits {allowed}")]
    InvalidDigits { base: String, allowed: String },

    #[error("Invalid number: '{digits}' is not a representable {base} value")]
    InvalidNumber { base: String, digits: String },

    #[error("Unsupported conversion: {source_name} to {target_name}")]
    UnsupportedPair {
        source_name: String,
        target_name: String,
    },
}

/// Rejections raised at the input boundary, before the converter runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a source and a target system.")]
    MissingSelection,

    #[error("Please enter a valid number.")]
    EmptyInput,
}

impl ConversionError {
    /// Stable machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::InvalidSourceBase { .. } => "invalid_source_base",
            ConversionError::InvalidDigits { .. } => "invalid_digits",
            ConversionError::InvalidNumber { .. } => "invalid_number",
            ConversionError::UnsupportedPair { .. } => "unsupported_pair",
        }
    }
}

impl FormError {
    pub fn kind(&self) -> &'static str {
        match self {
            FormError::MissingSelection => "missing_selection",
            FormError::EmptyInput => "empty_input",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl AppError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Conversion(e) => e.kind(),
            AppError::Form(e) => e.kind(),
            AppError::Io(_) => "io",
            AppError::Serialization(_) => "serialization",
            AppError::Config { .. } => "config",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Conversion(_) | AppError::Form(_) => ErrorCategory::Input,
            AppError::Config { .. } => ErrorCategory::Configuration,
            AppError::Io(_) | AppError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Conversion(e) => e.to_string(),
            AppError::Form(e) => e.to_string(),
            AppError::Config { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            AppError::Io(e) => format!("Could not read or write data: {}", e),
            AppError::Serialization(e) => format!("Could not encode the report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Conversion(ConversionError::InvalidSourceBase { .. }) => {
                "Use one of: binary, octal, decimal, hexadecimal"
            }
            AppError::Conversion(ConversionError::InvalidDigits { .. }) => {
                "Check that every digit belongs to the source system"
            }
            AppError::Conversion(ConversionError::InvalidNumber { .. }) => {
                "Enter a non-empty, non-negative integer that fits in 64 bits"
            }
            AppError::Conversion(ConversionError::UnsupportedPair { .. }) => {
                "Pick two different systems from: binary, octal, decimal, hexadecimal"
            }
            AppError::Form(_) => "Pass --from, --to and at least one number",
            AppError::Config { .. } => "Fix the configuration file or command-line flags",
            AppError::Io(_) | AppError::Serialization(_) => {
                "Check file permissions and available disk space"
            }
        }
    }

    /// Process exit code for this failure when it aborts the run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
