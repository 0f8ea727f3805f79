use std::collections::BTreeMap;

use crate::driver::{Driver, DriverError};
use crate::namespace::SEPARATOR;
use crate::types::LoadStatus;

/// In-process store keyed by full field address (`/app/dev/SubInfo/Timer`).
///
/// A namespace path is "found" when at least one key lives under it.
#[derive(Debug, Clone, Default)]
pub struct MemoryDriver {
    entries: BTreeMap<String, String>,
    loaded: Option<String>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl Driver for MemoryDriver {
    fn set_root_path(&mut self, _location: &str) -> Result<(), DriverError> {
        Ok(())
    }

    fn load(&mut self, path: &str) -> Result<LoadStatus, DriverError> {
        let prefix = format!("{path}{SEPARATOR}");
        let found = self
            .entries
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix));

        if found {
            self.loaded = Some(prefix);
            Ok(LoadStatus::Found)
        } else {
            self.loaded = None;
            Ok(LoadStatus::NotFound)
        }
    }

    fn retrieve(&self, key: &str) -> Option<String> {
        let prefix = self.loaded.as_deref()?;
        if !key.starts_with(prefix) {
            return None;
        }
        self.entries.get(key).cloned()
    }
}
