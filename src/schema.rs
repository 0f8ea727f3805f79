//! Static schema description.
//!
//! A configuration record describes itself by implementing [`Schema`]: its
//! `walk` method hands every field, in declaration order, to a [`Walker`].
//! Leaves go through [`Walker::leaf`] together with a mutable handle to the
//! value; nested records go through [`Walker::nested`] and are walked in turn.
//!
//! ```
//! use strufig::{Field, Schema, StrufigError, Walker};
//!
//! #[derive(Default)]
//! struct Database {
//!     pool_size: u32,
//! }
//!
//! #[derive(Default)]
//! struct AppConfig {
//!     environment: String,
//!     hosts: Vec<String>,
//!     database: Database,
//! }
//!
//! impl Schema for Database {
//!     fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
//!         walker.leaf(&Field::new("pool_size").with_default("5"), &mut self.pool_size)
//!     }
//! }
//!
//! impl Schema for AppConfig {
//!     fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
//!         walker.leaf(
//!             &Field::new("environment").with_default("dev").namespace(),
//!             &mut self.environment,
//!         )?;
//!         walker.leaf(&Field::new("hosts").with_default("[a:1 b:2]"), &mut self.hosts)?;
//!         walker.nested(&Field::new("database"), &mut self.database)
//!     }
//! }
//! ```

use crate::coerce::{Coerce, CoerceError};
use crate::error::StrufigError;
use crate::types::FieldKind;

/// Per-field annotations: name, default literal, namespace participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    default: Option<&'static str>,
    namespace: bool,
}

impl Field {
    /// A field with no default that does not take part in the namespace path.
    ///
    /// The name is the lookup key for all sources: it is uppercased into the
    /// environment variable name and used verbatim in remote field addresses.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            namespace: false,
        }
    }

    /// Literal applied when neither the environment nor the remote store has a value.
    pub const fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    /// Mark this field's value as a segment of the namespace path.
    /// Only valid on string leaves.
    pub const fn namespace(mut self) -> Self {
        self.namespace = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The default literal, if one was declared and is non-empty.
    pub fn default_literal(&self) -> Option<&'static str> {
        self.default.filter(|literal| !literal.is_empty())
    }

    pub fn is_namespace(&self) -> bool {
        self.namespace
    }
}

/// A configuration record whose fields can be visited in declaration order.
pub trait Schema {
    fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError>;
}

/// Visitor driven by [`Schema::walk`].
pub trait Walker {
    fn leaf(&mut self, field: &Field, value: &mut dyn Leaf) -> Result<(), StrufigError>;

    fn nested(&mut self, field: &Field, record: &mut dyn Schema) -> Result<(), StrufigError>;
}

/// Type-erased handle to a leaf value, available for every [`Coerce`] type.
pub trait Leaf {
    fn kind(&self) -> FieldKind;

    /// Coerce `literal` and store it, leaving the value untouched on error.
    fn assign(&mut self, literal: &str) -> Result<(), CoerceError>;

    fn render(&self) -> String;

    fn namespace_segment(&self) -> Option<&str>;
}

impl<T: Coerce> Leaf for T {
    fn kind(&self) -> FieldKind {
        <T as Coerce>::kind()
    }

    fn assign(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = T::coerce(literal)?;
        Ok(())
    }

    fn render(&self) -> String {
        Coerce::render(self)
    }

    fn namespace_segment(&self) -> Option<&str> {
        Coerce::namespace_segment(self)
    }
}

/// Dotted field path used in error messages and listings (`SubInfo.Timer`).
pub(crate) fn dotted(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarKind;

    #[test]
    fn field_builder_sets_annotations() {
        const ENV: Field = Field::new("Environment").with_default("developer").namespace();
        assert_eq!(ENV.name(), "Environment");
        assert_eq!(ENV.default_literal(), Some("developer"));
        assert!(ENV.is_namespace());
    }

    #[test]
    fn plain_field_has_no_annotations() {
        let field = Field::new("Timer");
        assert_eq!(field.default_literal(), None);
        assert!(!field.is_namespace());
    }

    #[test]
    fn empty_default_counts_as_none() {
        assert_eq!(Field::new("x").with_default("").default_literal(), None);
    }

    #[test]
    fn leaf_assign_coerces() {
        let mut port: u16 = 0;
        let leaf: &mut dyn Leaf = &mut port;
        leaf.assign("8080").unwrap();
        assert_eq!(leaf.render(), "8080");
        assert_eq!(leaf.kind(), FieldKind::Scalar(ScalarKind::Uint { bits: 16 }));
        assert_eq!(port, 8080);
    }

    #[test]
    fn failed_assign_keeps_previous_value() {
        let mut port: u16 = 42;
        let leaf: &mut dyn Leaf = &mut port;
        assert!(leaf.assign("70000").is_err());
        assert_eq!(port, 42);
    }

    #[test]
    fn dotted_paths() {
        assert_eq!(dotted("", "Timer"), "Timer");
        assert_eq!(dotted("SubInfo", "Timer"), "SubInfo.Timer");
    }
}
