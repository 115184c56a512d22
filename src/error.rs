//! Error handling for vksc-pipeline-json
//!
//! This module defines the crate error type and a Result alias used
//! throughout the codec, the document assembler and the tracker.

use crate::model::ObjectCategory;
use thiserror::Error;

/// Main error type for pipeline JSON operations
#[derive(Error, Debug)]
pub enum PcJsonError {
    /// Document shape errors: missing or mistyped fields, bad discriminants
    #[error("{location}: {message}")]
    Schema { location: String, message: String },

    /// A name was used before it was registered in its category
    #[error("Unknown {category} reference \"{name}\"")]
    UnknownReference {
        category: ObjectCategory,
        name: String,
    },

    /// A handle that must be named has no entry in the registry
    #[error("{category} handle {handle} has no assigned name")]
    UnnamedHandle {
        category: ObjectCategory,
        handle: u64,
    },

    /// A name is already bound to a different handle
    #[error("Duplicate {category} name \"{name}\"")]
    DuplicateName {
        category: ObjectCategory,
        name: String,
    },

    /// Content rules that a well-formed document still violates
    #[error("Content policy violation: {0}")]
    ContentPolicy(String),

    /// Errors raised while assembling a capture from recorded objects
    #[error("Capture error: {0}")]
    Capture(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON syntax errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PcJsonError>,
    },
}

impl PcJsonError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PcJsonError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a schema error at a location
    pub fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        PcJsonError::Schema {
            location: location.into(),
            message: message.into(),
        }
    }

    /// The innermost error, skipping any context wrappers
    pub fn root_cause(&self) -> &PcJsonError {
        match self {
            PcJsonError::WithContext { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for pipeline JSON operations
pub type Result<T> = std::result::Result<T, PcJsonError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PcJsonError::schema("pStages[1]->pName", "Not a string");
        assert_eq!(err.to_string(), "pStages[1]->pName: Not a string");
    }

    #[test]
    fn test_error_with_context() {
        let err = PcJsonError::ContentPolicy("test".to_string());
        let with_ctx = err.with_context("Failed to generate");
        assert!(with_ctx.to_string().contains("Failed to generate"));
        assert!(matches!(
            with_ctx.root_cause(),
            PcJsonError::ContentPolicy(_)
        ));
    }

    #[test]
    fn test_unknown_reference_error() {
        let err = PcJsonError::UnknownReference {
            category: ObjectCategory::Sampler,
            name: "ImmutableSampler7".to_string(),
        };
        assert!(err.to_string().contains("ImmutableSampler7"));
        assert!(err.to_string().contains("Sampler"));
    }
}
