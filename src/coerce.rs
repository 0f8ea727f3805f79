//! String-to-value coercion for leaf fields.
//!
//! Every literal that reaches a field (from the environment, the remote store,
//! or a declared default) goes through [`Coerce::coerce`]. Integers are parsed
//! in base 10 and bounded by the field's own width, so `"300"` fails for a `u8`
//! field rather than wrapping.
//!
//! Booleans accept only `true` and `false`, in any ASCII case. Shorthands such
//! as `1`, `0`, `t` or `f` are rejected.
//!
//! A [`Duration`] is written as a whole number of nanoseconds, so `"300"` is
//! 300ns. Unit suffixes are not understood.
//!
//! Sequences use the bracketed, space-separated form `[a b c]`. There is no
//! quoting or escaping: an element cannot contain a space.

use std::num::{ParseFloatError, ParseIntError};
use std::time::Duration;

use thiserror::Error;

use crate::types::{FieldKind, ScalarKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoerceError {
    #[error("'{literal}' is not a valid {kind}: {source}")]
    Integer {
        literal: String,
        kind: ScalarKind,
        source: ParseIntError,
    },

    #[error("'{literal}' is not a valid {kind}: {source}")]
    Float {
        literal: String,
        kind: ScalarKind,
        source: ParseFloatError,
    },

    #[error("'{literal}' is not a valid bool (expected true or false)")]
    Bool { literal: String },

    #[error("'{literal}' is not a sequence of {kind} (expected the form [a b c])")]
    UnbracketedSequence { literal: String, kind: ScalarKind },
}

/// A single primitive value: the element type of sequences.
pub trait Scalar: Sized {
    const KIND: ScalarKind;

    fn parse_scalar(literal: &str) -> Result<Self, CoerceError>;

    fn render_scalar(&self) -> String;
}

/// A type a schema leaf can hold.
///
/// Implemented for the [`Scalar`] primitives and for `Vec<T>` of any scalar.
pub trait Coerce: Sized {
    fn kind() -> FieldKind;

    /// Parse `literal` into a value of this type.
    fn coerce(literal: &str) -> Result<Self, CoerceError>;

    /// Render the value back into the literal form `coerce` accepts.
    fn render(&self) -> String;

    /// The value as a namespace path segment. Only strings qualify.
    fn namespace_segment(&self) -> Option<&str> {
        None
    }
}

macro_rules! integer_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant { bits: <$ty>::BITS };

                fn parse_scalar(literal: &str) -> Result<Self, CoerceError> {
                    literal.parse::<$ty>().map_err(|source| CoerceError::Integer {
                        literal: literal.to_string(),
                        kind: Self::KIND,
                        source,
                    })
                }

                fn render_scalar(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_scalar!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    isize => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    usize => Uint,
);

macro_rules! float_scalar {
    ($($ty:ty => $bits:literal),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::Float { bits: $bits };

                fn parse_scalar(literal: &str) -> Result<Self, CoerceError> {
                    literal.parse::<$ty>().map_err(|source| CoerceError::Float {
                        literal: literal.to_string(),
                        kind: Self::KIND,
                        source,
                    })
                }

                fn render_scalar(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

float_scalar!(f32 => 32, f64 => 64);

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn parse_scalar(literal: &str) -> Result<Self, CoerceError> {
        if literal.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if literal.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(CoerceError::Bool {
                literal: literal.to_string(),
            })
        }
    }

    fn render_scalar(&self) -> String {
        self.to_string()
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn parse_scalar(literal: &str) -> Result<Self, CoerceError> {
        Ok(literal.to_string())
    }

    fn render_scalar(&self) -> String {
        self.clone()
    }
}

impl Scalar for Duration {
    const KIND: ScalarKind = ScalarKind::Duration;

    fn parse_scalar(literal: &str) -> Result<Self, CoerceError> {
        literal
            .parse::<u64>()
            .map(Duration::from_nanos)
            .map_err(|source| CoerceError::Integer {
                literal: literal.to_string(),
                kind: Self::KIND,
                source,
            })
    }

    fn render_scalar(&self) -> String {
        self.as_nanos().to_string()
    }
}

macro_rules! scalar_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn kind() -> FieldKind {
                    FieldKind::Scalar(<$ty as Scalar>::KIND)
                }

                fn coerce(literal: &str) -> Result<Self, CoerceError> {
                    <$ty as Scalar>::parse_scalar(literal)
                }

                fn render(&self) -> String {
                    self.render_scalar()
                }
            }
        )*
    };
}

scalar_leaf!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, Duration);

impl Coerce for String {
    fn kind() -> FieldKind {
        FieldKind::Scalar(ScalarKind::String)
    }

    fn coerce(literal: &str) -> Result<Self, CoerceError> {
        Ok(literal.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }

    fn namespace_segment(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: Scalar> Coerce for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(T::KIND)
    }

    fn coerce(literal: &str) -> Result<Self, CoerceError> {
        parse_sequence(literal)
    }

    fn render(&self) -> String {
        format_sequence(self)
    }
}

/// Parse `[a b c]` into its elements, coercing each one as `T`.
///
/// The outer bracket pair is required; `[]` is the empty sequence. The inside
/// is split on single spaces, so `[a  b]` has an empty middle element.
pub fn parse_sequence<T: Scalar>(literal: &str) -> Result<Vec<T>, CoerceError> {
    let inner = literal
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| CoerceError::UnbracketedSequence {
            literal: literal.to_string(),
            kind: T::KIND,
        })?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner.split(' ').map(T::parse_scalar).collect()
}

/// Render elements in the `[a b c]` form accepted by [`parse_sequence`].
pub fn format_sequence<T: Scalar>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(Scalar::render_scalar).collect();
    format!("[{}]", parts.join(" "))
}
