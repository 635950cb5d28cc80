//! Error types for docsite-core

/// Result type for docsite-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or reading configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No fragments were supplied to the resolver
    #[error("No configuration fragments to resolve")]
    NoFragments,

    /// Two fragments claim the same priority rank
    #[error("Fragments `{first}` and `{second}` both declare priority {priority}")]
    ConflictingPriority {
        priority: i64,
        first: String,
        second: String,
    },

    /// A mandatory path has no value after the full merge
    #[error("Missing required field: {path}")]
    MissingRequiredField { path: String },

    /// A color token is not a `#RRGGBB` hex string
    #[error("Invalid color token in palette `{palette}` at level {level}: {value:?}")]
    InvalidColorToken {
        palette: String,
        level: String,
        value: String,
    },

    /// A palette key is not a canonical decimal scale level
    #[error("Invalid scale level `{level}` in palette `{palette}`")]
    InvalidScaleLevel { palette: String, level: String },

    /// A placeholder was declared but no fragment supplied a concrete value
    #[error("Unresolved placeholder at {path}")]
    UnresolvedPlaceholder { path: String },

    /// A fragment could not be built from the supplied tree
    #[error("Invalid fragment `{name}`: {reason}")]
    InvalidFragment { name: String, reason: String },

    /// No fragment ever set the requested path
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// A value exists at the path but has a different shape
    #[error("Expected {expected} at {path}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A typed section view could not be built from the merged tree
    #[error("Invalid `{section}` section: {message}")]
    InvalidSection { section: String, message: String },
}

impl Error {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingRequiredField { path: path.into() }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Whether a caller can recover by applying its own default
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
