//! Driver selection by name.
//!
//! [`DriverSettings`] is itself a layered configuration, loaded with confique:
//! environment (`STRUFIG_DRIVER`, `STRUFIG_DRIVER_LOCATION`) over an optional
//! TOML file over compiled defaults. [`DriverKind::instantiate`] turns the
//! result into a ready-to-use driver handle.

use std::path::Path;
use std::str::FromStr;

use confique::Config;
use serde::Deserialize;
use tracing::debug;

use crate::driver::{Driver, FileDriver};
use crate::error::StrufigError;

/// The drivers that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// Environment and defaults only.
    #[default]
    None,
    /// A directory of TOML documents, see [`FileDriver`].
    File,
}

impl FromStr for DriverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(DriverKind::None),
            "file" => Ok(DriverKind::File),
            other => Err(format!("unknown driver '{other}' (expected none or file)")),
        }
    }
}

impl DriverKind {
    /// Build the driver, pointed at `location` when one is given.
    ///
    /// A `File` driver without a location is rooted in the platform data
    /// directory for `app_name`.
    pub fn instantiate(
        self,
        location: Option<&str>,
        app_name: &str,
    ) -> Result<Option<Box<dyn Driver>>, StrufigError> {
        match self {
            DriverKind::None => Ok(None),
            DriverKind::File => {
                let driver = match location {
                    Some(location) => {
                        let mut driver = FileDriver::default();
                        driver.set_root_path(location)?;
                        driver
                    }
                    None => {
                        let driver = FileDriver::platform(app_name)
                            .ok_or(StrufigError::NoStoreLocation)?;
                        debug!(root = ?driver.root(), "file driver rooted in platform data dir");
                        driver
                    }
                };
                Ok(Some(Box::new(driver)))
            }
        }
    }
}

/// Accept driver names case-insensitively from env vars and files alike.
fn driver_kind<'de, D>(deserializer: D) -> Result<DriverKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

#[derive(Config, Debug, Clone, PartialEq)]
pub struct DriverSettings {
    /// Remote driver to resolve from: "none" or "file".
    #[config(env = "STRUFIG_DRIVER", default = "none", deserialize_with = driver_kind)]
    pub driver: DriverKind,

    /// Location handed to the driver before loading (the store directory for "file").
    #[config(env = "STRUFIG_DRIVER_LOCATION")]
    pub location: Option<String>,
}

impl DriverSettings {
    /// Load settings from the environment, then `file` (if given), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self, StrufigError> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}
