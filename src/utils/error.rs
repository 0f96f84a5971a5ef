use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load primality library {path}: {source}")]
    LibraryLoad {
        path: String,
        #[source]
        source: libloading::Error,
    },
}

impl PrimeError {
    /// 對應程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            PrimeError::IoError(_) | PrimeError::ConfigReadError { .. } => 1,
            PrimeError::ConfigError { .. } | PrimeError::InvalidConfigValueError { .. } => 2,
            PrimeError::LibraryLoad { .. } => 3,
        }
    }

    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimeError::IoError(e) => format!("I/O failure: {}", e),
            PrimeError::ConfigReadError { path, source } => {
                format!("Could not read config file '{}': {}", path, source)
            }
            PrimeError::ConfigError { message } => {
                format!("Could not read configuration: {}", message)
            }
            PrimeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            PrimeError::LibraryLoad { path, source } => format!(
                "Could not load '{}': {}. Check that the file exists and exports the requested symbol.",
                path, source
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimeError>;
