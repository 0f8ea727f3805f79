//! Listing: the current value of every leaf, with the variable that sets it.

use std::fmt;

use crate::env::env_var_name;
use crate::error::StrufigError;
use crate::schema::{Field, Leaf, Schema, Walker, dotted};

/// One leaf of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Dotted field path, e.g. `SubInfo.SubThingBool`.
    pub key: String,
    /// Environment variable that overrides this field.
    pub env_var: String,
    /// Current value in literal form.
    pub value: String,
}

/// All leaves of a configuration, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

/// List every leaf of `target` as resolved so far.
pub fn list_entries<S: Schema + ?Sized>(
    target: &mut S,
    app_name: &str,
) -> Result<Listing, StrufigError> {
    let mut lister = Lister {
        scope: String::new(),
        env_prefix: app_name.to_string(),
        entries: Vec::new(),
    };
    target.walk(&mut lister)?;
    Ok(Listing {
        entries: lister.entries,
    })
}

struct Lister {
    scope: String,
    env_prefix: String,
    entries: Vec<Entry>,
}

impl Walker for Lister {
    fn leaf(&mut self, field: &Field, value: &mut dyn Leaf) -> Result<(), StrufigError> {
        self.entries.push(Entry {
            key: dotted(&self.scope, field.name()),
            env_var: env_var_name(&self.env_prefix, field.name()),
            value: value.render(),
        });
        Ok(())
    }

    fn nested(&mut self, field: &Field, record: &mut dyn Schema) -> Result<(), StrufigError> {
        let scope = dotted(&self.scope, field.name());
        let env_prefix = env_var_name(&self.env_prefix, field.name());
        let outer_scope = std::mem::replace(&mut self.scope, scope);
        let outer_prefix = std::mem::replace(&mut self.env_prefix, env_prefix);
        let result = record.walk(self);
        self.scope = outer_scope;
        self.env_prefix = outer_prefix;
        result
    }
}
