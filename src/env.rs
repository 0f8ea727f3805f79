use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::StrufigError;

/// Environment variable name for `field` under `prefix`: `PREFIX_FIELD`.
///
/// For nested records the prefix is the parent's own variable name, so
/// `Sub.Value` under app `app` reads `APP_SUB_VALUE`.
pub fn env_var_name(prefix: &str, field: &str) -> String {
    format!("{}_{}", prefix.to_uppercase(), field.to_uppercase())
}

/// Where environment values are read from.
///
/// `Vars` takes synthetic data so tests never touch the process environment.
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The process environment, read at lookup time.
    #[default]
    Process,
    /// A fixed set of variables.
    Vars(HashMap<String, String>),
    /// No environment layer at all.
    Disabled,
}

impl EnvSource {
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        EnvSource::Vars(vars.into_iter().collect())
    }

    /// Look up `name`. Unset and empty variables both read as `None`.
    ///
    /// A process variable that is set but not valid UTF-8 is an error.
    pub fn get(&self, name: &str) -> Result<Option<String>, StrufigError> {
        let value = match self {
            EnvSource::Process => decode(name, std::env::var_os(name))?,
            EnvSource::Vars(vars) => vars.get(name).cloned(),
            EnvSource::Disabled => None,
        };
        Ok(value.filter(|v| !v.is_empty()))
    }
}

fn decode(name: &str, raw: Option<OsString>) -> Result<Option<String>, StrufigError> {
    raw.map(|value| {
        value
            .into_string()
            .map_err(|_| StrufigError::InvalidEnvEncoding {
                var: name.to_string(),
            })
    })
    .transpose()
}
