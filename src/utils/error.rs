use thiserror::Error;

/// Failure raised by a guard clause. Carries the offending parameter name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("{param} não pode ser nulo.")]
    NullArgument { param: String },

    #[error("{param}: {reason}")]
    InvalidArgument { param: String, reason: String },

    #[error("{param} deve ser maior que zero (recebido: {value}).")]
    OutOfRange { param: String, value: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardErrorKind {
    NullArgument,
    InvalidArgument,
    OutOfRange,
}

impl GuardError {
    pub fn null_argument(param: &str) -> Self {
        GuardError::NullArgument {
            param: param.to_string(),
        }
    }

    pub fn invalid_argument(param: &str, reason: impl Into<String>) -> Self {
        GuardError::InvalidArgument {
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(param: &str, value: i32) -> Self {
        GuardError::OutOfRange {
            param: param.to_string(),
            value,
        }
    }

    pub fn kind(&self) -> GuardErrorKind {
        match self {
            GuardError::NullArgument { .. } => GuardErrorKind::NullArgument,
            GuardError::InvalidArgument { .. } => GuardErrorKind::InvalidArgument,
            GuardError::OutOfRange { .. } => GuardErrorKind::OutOfRange,
        }
    }

    /// Name of the parameter that violated the guard.
    pub fn param(&self) -> &str {
        match self {
            GuardError::NullArgument { param }
            | GuardError::InvalidArgument { param, .. }
            | GuardError::OutOfRange { param, .. } => param,
        }
    }
}

pub type GuardResult<T> = std::result::Result<T, GuardError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Guard(#[from] GuardError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    System,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Guard(_) => ErrorCategory::Validation,
            AppError::ConfigValidationError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Guard(e) => format!("Dados inválidos: {}", e),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuração inválida ({}): {}", field, message)
            }
            AppError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Valor '{}' inválido para {}: {}", value, field, reason),
            AppError::IoError(e) => format!("Falha de E/S: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the values passed to the entity constructors",
            ErrorCategory::Configuration => {
                "Check the TOML configuration file and the command-line flags"
            }
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }

    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
