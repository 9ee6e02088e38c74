//! Error types for the XML mapping engine.

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while reading, decoding, or writing a document.
///
/// Field paths are dotted from the document root, e.g.
/// `pending_subscription.unit_amount_in_cents`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XmlError {
    /// The document is not well-formed XML.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The root element does not match the requested resource.
    #[error("unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRoot {
        /// Tag the resource type expects.
        expected: &'static str,
        /// Tag found in the document.
        found: String,
    },

    /// Element text could not be coerced to the declared type.
    #[error("cannot coerce `{value}` at {field} to {expected}")]
    TypeCoercion {
        /// Path of the offending field.
        field: String,
        /// Name of the declared type.
        expected: &'static str,
        /// The raw element text.
        value: String,
    },

    /// A closed-set field received a token outside the set.
    #[error("unknown {expected} value `{value}` at {field}")]
    UnknownEnumValue {
        /// Path of the offending field.
        field: String,
        /// Name of the enumeration.
        expected: &'static str,
        /// The unrecognised token.
        value: String,
    },

    /// A decoded record violates a structural invariant.
    #[error("invalid record at {field}: {reason}")]
    InvalidRecord {
        /// Path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The writer failed to render the document.
    #[error("failed to write document: {0}")]
    Write(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl XmlError {
    /// Prefix the field path of a field-level error with `parent`.
    ///
    /// Document-level errors are returned unchanged.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::TypeCoercion {
                field,
                expected,
                value,
            } => Self::TypeCoercion {
                field: join_path(parent, &field),
                expected,
                value,
            },
            Self::UnknownEnumValue {
                field,
                expected,
                value,
            } => Self::UnknownEnumValue {
                field: join_path(parent, &field),
                expected,
                value,
            },
            Self::InvalidRecord { field, reason } => Self::InvalidRecord {
                field: join_path(parent, &field),
                reason,
            },
            other => other,
        }
    }

    /// The dotted field path, for field-level errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::TypeCoercion { field, .. }
            | Self::UnknownEnumValue { field, .. }
            | Self::InvalidRecord { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if field.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}.{field}")
    }
}
