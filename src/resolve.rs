//! Core resolution pass: fill every leaf from the highest-precedence source.
//!
//! One call to [`resolve_pass`] walks the whole schema once. Per leaf, the
//! first non-empty literal wins:
//!
//! 1. Environment variable `{PREFIX}_{FIELD}` (prefix accumulates through nesting)
//! 2. Remote value at `{driver_prefix}/{field}` (only when a [`Remote`] is given)
//! 3. The field's declared default
//!
//! When no source has a value the field is left as it is. A literal that does
//! not coerce to the field's kind aborts the pass.
//!
//! The orchestration (local pass, namespace path, remote load, full pass) lives
//! in [`Strufig::retrieve_config`](crate::Strufig::retrieve_config); this module
//! has no I/O of its own beyond what the environment source and driver do.

use tracing::{debug, trace};

use crate::driver::Driver;
use crate::env::{EnvSource, env_var_name};
use crate::error::StrufigError;
use crate::namespace::field_address;
use crate::schema::{Field, Leaf, Schema, Walker, dotted};
use crate::types::ValueSource;

/// A loaded remote document and the namespace path it was loaded from.
#[derive(Clone, Copy)]
pub struct Remote<'a> {
    pub driver: &'a dyn Driver,
    pub path: &'a str,
}

/// Resolve every leaf of `target` once.
///
/// Without `remote` this is the local-only pass (environment, then default).
pub fn resolve_pass<S: Schema + ?Sized>(
    target: &mut S,
    app_name: &str,
    env: &EnvSource,
    remote: Option<Remote<'_>>,
) -> Result<(), StrufigError> {
    let mut pass = Pass {
        env,
        driver: remote.map(|r| r.driver),
        env_prefix: app_name.to_string(),
        driver_prefix: remote.map(|r| r.path.to_string()).unwrap_or_default(),
        scope: String::new(),
    };
    target.walk(&mut pass)
}

struct Pass<'a> {
    env: &'a EnvSource,
    driver: Option<&'a dyn Driver>,
    env_prefix: String,
    driver_prefix: String,
    scope: String,
}

impl Pass<'_> {
    fn lookup(&self, field: &Field) -> Result<Option<(String, ValueSource)>, StrufigError> {
        let env_name = env_var_name(&self.env_prefix, field.name());
        if let Some(value) = self.env.get(&env_name)? {
            return Ok(Some((value, ValueSource::Env(env_name))));
        }

        if let Some(driver) = self.driver {
            let key = field_address(&self.driver_prefix, field.name());
            if let Some(value) = driver.retrieve(&key).filter(|v| !v.is_empty()) {
                return Ok(Some((value, ValueSource::Remote(key))));
            }
        }

        Ok(field
            .default_literal()
            .map(|literal| (literal.to_string(), ValueSource::Default)))
    }
}

impl Walker for Pass<'_> {
    fn leaf(&mut self, field: &Field, value: &mut dyn Leaf) -> Result<(), StrufigError> {
        let Some((literal, origin)) = self.lookup(field)? else {
            trace!(field = field.name(), scope = %self.scope, "no source, left unchanged");
            return Ok(());
        };

        debug!(
            field = %dotted(&self.scope, field.name()),
            source = %origin,
            "resolved field"
        );
        value
            .assign(&literal)
            .map_err(|source| StrufigError::InvalidValue {
                field: dotted(&self.scope, field.name()),
                origin,
                source,
            })
    }

    fn nested(&mut self, field: &Field, record: &mut dyn Schema) -> Result<(), StrufigError> {
        let mut inner = Pass {
            env: self.env,
            driver: self.driver,
            env_prefix: env_var_name(&self.env_prefix, field.name()),
            driver_prefix: field_address(&self.driver_prefix, field.name()),
            scope: dotted(&self.scope, field.name()),
        };
        record.walk(&mut inner)
    }
}
