//! Remote key/value store drivers.
//!
//! A [`Driver`] supplies the middle layer of the precedence chain. The resolver
//! asks it once for the document at the namespace path ([`Driver::load`]) and,
//! if that document exists, looks up every leaf by its full field address
//! ([`Driver::retrieve`]).
//!
//! Two drivers ship with the crate:
//!
//! - [`MemoryDriver`]: an in-process map, for tests and embedding.
//! - [`FileDriver`]: a directory of TOML documents, one per namespace path.
//!
//! Anything else (etcd, Consul, an HTTP service) plugs in by implementing the
//! trait. Drivers own their timeout and retry policy; the resolver calls them
//! synchronously and waits.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::types::LoadStatus;

pub use file::FileDriver;
pub use memory::MemoryDriver;

/// Backend failures. These are never folded into [`LoadStatus::NotFound`].
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid store path '{0}'")]
    InvalidPath(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub trait Driver {
    /// Point the driver at its backend. Called at most once, before any `load`.
    fn set_root_path(&mut self, location: &str) -> Result<(), DriverError>;

    /// Fetch and cache the document rooted at namespace `path`.
    ///
    /// `Found` unlocks [`retrieve`](Self::retrieve) for keys under `path`.
    fn load(&mut self, path: &str) -> Result<LoadStatus, DriverError>;

    /// Value of the leaf at full field address `key` within the loaded document.
    fn retrieve(&self, key: &str) -> Option<String>;
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn set_root_path(&mut self, location: &str) -> Result<(), DriverError> {
        (**self).set_root_path(location)
    }

    fn load(&mut self, path: &str) -> Result<LoadStatus, DriverError> {
        (**self).load(path)
    }

    fn retrieve(&self, key: &str) -> Option<String> {
        (**self).retrieve(key)
    }
}
