//! Directory-backed document store.
//!
//! Each namespace path maps to one TOML document under the store root:
//!
//! | Namespace path | Document |
//! |----------------|----------|
//! | `/myapp` | `{root}/myapp.toml` |
//! | `/myapp/developer/calculator` | `{root}/myapp/developer/calculator.toml` |
//!
//! Inside a document, tables play the role of directories. The leaf for field
//! address `/myapp/developer/SubInfo/SubThingBool` is `SubThingBool` in the
//! `[SubInfo]` table of `myapp/developer.toml`. Values are handed back as the
//! literals the coercer expects: scalars via their plain text form, arrays in
//! the `[a b c]` sequence form.

use std::path::PathBuf;

use toml::{Table, Value};

use crate::driver::{Driver, DriverError};
use crate::namespace::SEPARATOR;
use crate::types::LoadStatus;

#[derive(Debug, Default)]
pub struct FileDriver {
    root: Option<PathBuf>,
    loaded: Option<(String, Table)>,
}

impl FileDriver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            loaded: None,
        }
    }

    /// A store under the platform data directory for `app_name`
    /// (e.g. `~/.local/share/{app_name}/store` on Linux).
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn platform(app_name: &str) -> Option<Self> {
        let proj = directories::ProjectDirs::from("", "", app_name)?;
        Some(Self::new(proj.data_dir().join("store")))
    }

    pub fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }

    /// The document file backing namespace `path`.
    pub fn document_path(&self, path: &str) -> Result<PathBuf, DriverError> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| DriverError::Unavailable("file driver has no root path".into()))?;

        let segments: Vec<&str> = path
            .strip_prefix(SEPARATOR)
            .unwrap_or(path)
            .split(SEPARATOR)
            .collect();
        if segments
            .iter()
            .any(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(DriverError::InvalidPath(path.to_string()));
        }

        let Some((last, parents)) = segments.split_last() else {
            return Err(DriverError::InvalidPath(path.to_string()));
        };
        let mut doc = root.clone();
        for segment in parents {
            doc.push(segment);
        }
        doc.push(format!("{last}.toml"));
        Ok(doc)
    }
}

impl Driver for FileDriver {
    fn set_root_path(&mut self, location: &str) -> Result<(), DriverError> {
        if location.is_empty() {
            return Err(DriverError::InvalidPath(location.to_string()));
        }
        self.root = Some(PathBuf::from(location));
        self.loaded = None;
        Ok(())
    }

    fn load(&mut self, path: &str) -> Result<LoadStatus, DriverError> {
        self.loaded = None;
        let doc = self.document_path(path)?;

        let content = match std::fs::read_to_string(&doc) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LoadStatus::NotFound);
            }
            Err(e) => {
                return Err(DriverError::Io {
                    path: doc,
                    source: e,
                });
            }
        };

        let table: Table = toml::from_str(&content).map_err(|e| DriverError::Parse {
            path: doc.clone(),
            source: e,
        })?;
        self.loaded = Some((path.to_string(), table));
        Ok(LoadStatus::Found)
    }

    fn retrieve(&self, key: &str) -> Option<String> {
        let (path, table) = self.loaded.as_ref()?;
        let rest = key.strip_prefix(path.as_str())?.strip_prefix(SEPARATOR)?;

        let mut segments = rest.split(SEPARATOR);
        let mut current = table.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        render_value(current)
    }
}

/// Render a TOML value as a coercer literal. Tables and nested arrays have no
/// literal form and read as absent.
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items.iter().map(render_scalar).collect();
            Some(format!("[{}]", parts?.join(" ")))
        }
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
