//! Namespace path construction.
//!
//! The namespace path addresses the remote document for a configuration. It is
//! the app name followed by the value of every leaf marked with
//! [`Field::namespace`], in declaration order across the whole tree (a nested
//! record's segments land where the record is declared):
//!
//! ```text
//! /{app_name}/{segment}/{segment}
//! ```
//!
//! The path has a leading separator and no trailing one. Remote field addresses
//! extend it with [`field_address`], one `/{name}` per nesting level.
//!
//! Every namespace field must already hold a non-empty value when the path is
//! built; the resolver guarantees this by running the local pass first.

use crate::error::StrufigError;
use crate::schema::{Field, Leaf, Schema, Walker, dotted};
use crate::types::FieldKind;

pub const SEPARATOR: char = '/';

/// Build the namespace path for `target` under `app_name`.
pub fn namespace_path<S: Schema + ?Sized>(
    target: &mut S,
    app_name: &str,
) -> Result<String, StrufigError> {
    let mut collector = SegmentCollector::default();
    target.walk(&mut collector)?;

    let mut path = format!("{SEPARATOR}{app_name}");
    for segment in &collector.segments {
        path.push(SEPARATOR);
        path.push_str(segment);
    }
    Ok(path)
}

/// Remote address of `name` under `prefix`: `{prefix}/{name}`.
pub fn field_address(prefix: &str, name: &str) -> String {
    format!("{prefix}{SEPARATOR}{name}")
}

#[derive(Default)]
struct SegmentCollector {
    scope: String,
    segments: Vec<String>,
}

impl Walker for SegmentCollector {
    fn leaf(&mut self, field: &Field, value: &mut dyn Leaf) -> Result<(), StrufigError> {
        if !field.is_namespace() {
            return Ok(());
        }
        match value.namespace_segment() {
            None => Err(StrufigError::NamespaceNotString {
                field: dotted(&self.scope, field.name()),
                kind: value.kind(),
            }),
            Some("") => Err(StrufigError::EmptyNamespace {
                field: dotted(&self.scope, field.name()),
            }),
            Some(segment) => {
                self.segments.push(segment.to_string());
                Ok(())
            }
        }
    }

    fn nested(&mut self, field: &Field, record: &mut dyn Schema) -> Result<(), StrufigError> {
        let scope = dotted(&self.scope, field.name());
        if field.is_namespace() {
            return Err(StrufigError::NamespaceNotString {
                field: scope,
                kind: FieldKind::Record,
            });
        }
        let outer = std::mem::replace(&mut self.scope, scope);
        let result = record.walk(self);
        self.scope = outer;
        result
    }
}
