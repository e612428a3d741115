//! Error types for the journey engine.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence-layer errors.
///
/// Read-side failures (missing file, corrupt JSON) are downgraded to
/// warnings by callers and never abort a session; write-side failures
/// surface through `Result`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Catalog and rule-set construction errors.
///
/// These only arise from programmer-supplied tables; the built-in tables
/// are pinned by tests.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate service id: {0}")]
    DuplicateService(String),

    #[error("Duplicate rule id: {0}")]
    DuplicateRule(String),

    #[error("Rule {rule} references unknown service {service}")]
    UnknownService { rule: String, service: String },
}

/// Session/profile errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No user is logged in")]
    NotAuthenticated,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
