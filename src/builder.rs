use tracing::{debug, info};

use crate::driver::Driver;
use crate::env::EnvSource;
use crate::error::StrufigError;
use crate::namespace;
use crate::ops::{self, Listing};
use crate::resolve::{self, Remote};
use crate::schema::Schema;
use crate::settings::DriverSettings;
use crate::types::LoadStatus;

/// A configured resolver: app name, environment source, optional driver.
///
/// Build one with [`Strufig::builder`], then call
/// [`retrieve_config`](Self::retrieve_config) on each target record.
pub struct Strufig {
    app_name: String,
    driver: Option<Box<dyn Driver>>,
    env: EnvSource,
}

impl Strufig {
    pub fn builder() -> StrufigBuilder {
        StrufigBuilder::new()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Resolve `target` in place.
    ///
    /// 1. Local pass: every leaf from environment, then default.
    /// 2. Build the namespace path from the now-populated namespace fields.
    /// 3. Ask the driver (if any) to load the document at that path.
    /// 4. If found, a full pass: environment, then remote, then default.
    ///
    /// Returns [`LoadStatus::Found`] when remote values were applied and
    /// [`LoadStatus::NotFound`] when only local sources were used (including
    /// when no driver is configured). Any coercion, schema, or driver failure
    /// aborts the call.
    pub fn retrieve_config<S: Schema + ?Sized>(
        &mut self,
        target: &mut S,
    ) -> Result<LoadStatus, StrufigError> {
        resolve::resolve_pass(target, &self.app_name, &self.env, None)?;

        let path = namespace::namespace_path(target, &self.app_name)?;
        debug!(app = %self.app_name, %path, "built namespace path");

        let Some(driver) = self.driver.as_mut() else {
            debug!("no driver configured, keeping local resolution");
            return Ok(LoadStatus::NotFound);
        };

        if driver.load(&path)? == LoadStatus::NotFound {
            debug!(%path, "no remote configuration, keeping local resolution");
            return Ok(LoadStatus::NotFound);
        }

        info!(%path, "applying remote configuration");
        let remote = Remote {
            driver: &**driver,
            path: &path,
        };
        resolve::resolve_pass(target, &self.app_name, &self.env, Some(remote))?;
        Ok(LoadStatus::Found)
    }

    /// The namespace path `target` currently maps to.
    pub fn namespace_path<S: Schema + ?Sized>(
        &self,
        target: &mut S,
    ) -> Result<String, StrufigError> {
        namespace::namespace_path(target, &self.app_name)
    }

    /// Every leaf of `target` with its environment variable and current value.
    pub fn list<S: Schema + ?Sized>(&self, target: &mut S) -> Result<Listing, StrufigError> {
        ops::list_entries(target, &self.app_name)
    }
}

/// Builder for [`Strufig`].
///
/// The driver comes from one of two places. An explicit
/// [`driver()`](Self::driver) handle always wins; otherwise
/// [`settings()`](Self::settings) picks one by name. With neither, only the
/// environment and declared defaults are used.
pub struct StrufigBuilder {
    app_name: Option<String>,
    driver: Option<Box<dyn Driver>>,
    settings: Option<DriverSettings>,
    location: Option<String>,
    env: EnvSource,
}

impl StrufigBuilder {
    fn new() -> Self {
        Self {
            app_name: None,
            driver: None,
            settings: None,
            location: None,
            env: EnvSource::Process,
        }
    }

    /// Set the application name: the first namespace segment and the root
    /// environment prefix (uppercased).
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Use this driver handle for the remote layer.
    pub fn driver<D: Driver + 'static>(mut self, driver: D) -> Self {
        self.driver = Some(Box::new(driver));
        self
    }

    /// Choose the driver by name from loaded settings.
    pub fn settings(mut self, settings: DriverSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Location passed to the driver's `set_root_path` at build time.
    /// Takes precedence over the location in [`settings()`](Self::settings).
    pub fn driver_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Read environment values from these pairs instead of the process.
    pub fn env_vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env = EnvSource::from_vars(vars);
        self
    }

    /// Disable the environment layer entirely.
    pub fn no_env(mut self) -> Self {
        self.env = EnvSource::Disabled;
        self
    }

    fn effective_app_name(&self) -> Result<&str, StrufigError> {
        self.app_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(StrufigError::AppNameRequired)
    }

    /// Finish configuration, pointing the driver at its location.
    pub fn build(self) -> Result<Strufig, StrufigError> {
        let app_name = self.effective_app_name()?.to_string();
        let location = self
            .location
            .or_else(|| self.settings.as_ref().and_then(|s| s.location.clone()));

        let driver = match self.driver {
            Some(mut driver) => {
                if let Some(location) = &location {
                    driver.set_root_path(location)?;
                }
                Some(driver)
            }
            None => {
                let kind = self.settings.map(|s| s.driver).unwrap_or_default();
                kind.instantiate(location.as_deref(), &app_name)?
            }
        };

        Ok(Strufig {
            app_name,
            driver,
            env: self.env,
        })
    }
}
