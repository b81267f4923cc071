//! Error taxonomy for the catalog.
//!
//! Two layers:
//! - [`InputError`] describes how an input instance violates a template's
//!   declared schema. It is produced by the [`Scanner`](crate::scanner::Scanner)
//!   and by template-specific validation inside `parse`.
//! - [`CatalogError`] is what callers of [`Catalog`](crate::Catalog) see.
//!
//! Every variant is a caller contract violation; none is transient, so there
//! is no retry classification.

use thiserror::Error;

/// Schema violation found while reading an input instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing `{field}`: input ended early")]
    Missing { field: &'static str },

    #[error("`{field}`: cannot read {token:?}")]
    Invalid { field: &'static str, token: String },

    #[error("`{field}`: {value} is outside {expected}")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("`{field}`: {reason}")]
    Constraint { field: &'static str, reason: String },

    #[error("unexpected trailing input starting at {token:?}")]
    Trailing { token: String },

    #[error("input is {len} bytes, limit is {limit}")]
    TooLarge { len: usize, limit: usize },
}

impl InputError {
    /// Shorthand for a template-specific structural violation.
    pub fn constraint(field: &'static str, reason: impl Into<String>) -> Self {
        InputError::Constraint {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("template `{0}` not found")]
    NotFound(String),

    #[error("malformed input for template `{id}`: {source}")]
    MalformedInput {
        id: String,
        #[source]
        source: InputError,
    },

    #[error("duplicate template id `{0}`")]
    DuplicateTemplate(&'static str),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// True for the three contract errors of the public catalog API.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            CatalogError::UnknownCategory(_)
                | CatalogError::NotFound(_)
                | CatalogError::MalformedInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_keeps_source() {
        let err = CatalogError::MalformedInput {
            id: "1920".into(),
            source: InputError::Missing { field: "n" },
        };
        assert!(err.is_caller_error());
        assert_eq!(
            err.to_string(),
            "malformed input for template `1920`: missing `n`: input ended early"
        );
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("missing `n`: input ended early"));
    }

    #[test]
    fn config_errors_are_not_caller_errors() {
        let io = CatalogError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "x"));
        assert!(!io.is_caller_error());
        assert!(!CatalogError::DuplicateTemplate("1920").is_caller_error());
    }
}
