//! Shared vocabulary: field kinds, load outcomes, and value origins.

use std::fmt;

/// The kind of a single, non-sequence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Signed integer of the given bit width.
    Int { bits: u32 },
    /// Unsigned integer of the given bit width.
    Uint { bits: u32 },
    /// Floating point of the given precision (32 or 64).
    Float { bits: u32 },
    Bool,
    String,
    /// A span of time, written as whole nanoseconds.
    Duration,
}

/// The declared kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// Homogeneous sequence, written as `[a b c]`.
    Sequence(ScalarKind),
    /// A nested record; never assigned directly, always walked into.
    Record,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Int { bits } => write!(f, "i{bits}"),
            ScalarKind::Uint { bits } => write!(f, "u{bits}"),
            ScalarKind::Float { bits } => write!(f, "f{bits}"),
            ScalarKind::Bool => write!(f, "bool"),
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Duration => write!(f, "duration (nanoseconds)"),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(kind) => write!(f, "{kind}"),
            FieldKind::Sequence(kind) => write!(f, "sequence of {kind}"),
            FieldKind::Record => write!(f, "nested record"),
        }
    }
}

/// Outcome of asking a driver for the document at a namespace path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The document exists; its leaves can be retrieved.
    Found,
    /// Nothing stored there (or no driver configured). Not an error.
    NotFound,
}

/// Where a resolved literal came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// An environment variable, by name.
    Env(String),
    /// A remote-store leaf, by full field address.
    Remote(String),
    /// The field's declared default.
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Env(name) => write!(f, "environment variable {name}"),
            ValueSource::Remote(key) => write!(f, "remote key {key}"),
            ValueSource::Default => write!(f, "declared default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_display_like_rust_types() {
        assert_eq!(ScalarKind::Int { bits: 8 }.to_string(), "i8");
        assert_eq!(ScalarKind::Uint { bits: 64 }.to_string(), "u64");
        assert_eq!(ScalarKind::Float { bits: 32 }.to_string(), "f32");
        assert_eq!(ScalarKind::Duration.to_string(), "duration (nanoseconds)");
    }

    #[test]
    fn sequence_kind_names_its_element() {
        let kind = FieldKind::Sequence(ScalarKind::String);
        assert_eq!(kind.to_string(), "sequence of string");
    }

    #[test]
    fn value_source_names_the_origin() {
        let src = ValueSource::Env("APP_PORT".into());
        assert!(src.to_string().contains("APP_PORT"));
        assert_eq!(ValueSource::Default.to_string(), "declared default");
    }
}
