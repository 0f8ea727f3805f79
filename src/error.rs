use thiserror::Error;

use crate::coerce::CoerceError;
use crate::driver::DriverError;
use crate::types::{FieldKind, ValueSource};

#[derive(Debug, Error)]
pub enum StrufigError {
    #[error("Field '{field}' is marked as a namespace segment but is a {kind}; only strings can be namespace segments")]
    NamespaceNotString { field: String, kind: FieldKind },

    #[error("Field '{field}' is marked as a namespace segment but was empty when the namespace path was built")]
    EmptyNamespace { field: String },

    #[error("Environment variable '{var}' is set but is not valid UTF-8")]
    InvalidEnvEncoding { var: String },

    #[error("Invalid value for '{field}' from {origin}: {source}")]
    InvalidValue {
        field: String,
        origin: ValueSource,
        source: CoerceError,
    },

    #[error("Remote driver failed: {0}")]
    Driver(#[from] DriverError),

    #[error("Driver settings error: {0}")]
    Settings(#[from] confique::Error),

    #[error("No store location for the file driver; pass a location or make a platform data directory available")]
    NoStoreLocation,

    #[error("App name is required; call .app_name() on the builder")]
    AppNameRequired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::Coerce;
    use crate::types::ScalarKind;

    #[test]
    fn invalid_value_names_field_source_and_literal() {
        let err = StrufigError::InvalidValue {
            field: "SubInfo.Timer".into(),
            origin: ValueSource::Env("APP_SUBINFO_TIMER".into()),
            source: u8::coerce("nope").unwrap_err(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SubInfo.Timer"));
        assert!(msg.contains("APP_SUBINFO_TIMER"));
        assert!(msg.contains("'nope'"));
    }

    #[test]
    fn namespace_not_string_names_kind() {
        let err = StrufigError::NamespaceNotString {
            field: "Timer".into(),
            kind: FieldKind::Scalar(ScalarKind::Int { bits: 64 }),
        };
        let msg = err.to_string();
        assert!(msg.contains("Timer"));
        assert!(msg.contains("i64"));
    }

    #[test]
    fn empty_namespace_formats() {
        let err = StrufigError::EmptyNamespace {
            field: "Environment".into(),
        };
        assert!(err.to_string().contains("Environment"));
    }

    #[test]
    fn invalid_env_encoding_names_variable() {
        let err = StrufigError::InvalidEnvEncoding {
            var: "APP_DECODEDIR".into(),
        };
        assert!(err.to_string().contains("APP_DECODEDIR"));
    }

    #[test]
    fn app_name_required_formats() {
        let err = StrufigError::AppNameRequired;
        assert!(err.to_string().contains("app_name"));
    }
}
