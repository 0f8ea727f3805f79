//! Typed struct configuration from three layers: environment variables, an
//! optional remote key/value store, and defaults declared on the struct.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! let mut strufig = Strufig::builder().app_name("myapp").build()?;
//! strufig.retrieve_config(&mut config)?;
//! ```
//!
//! That call fills every field of `config` from `MYAPP_*` environment
//! variables and the declared defaults, then works out which remote document
//! the configuration lives in. If a driver is configured and the document
//! exists, everything is resolved again with the remote values in the middle.
//!
//! # Declaring a schema
//!
//! A configuration record implements [`Schema`] by handing each field, in
//! declaration order, to a [`Walker`]. Each field carries a [`Field`]
//! description:
//!
//! - **`Field::new("name")`**: the lookup key. Uppercased for the
//!   environment, used verbatim in remote addresses.
//! - **`.with_default("literal")`**: the lowest layer. Written as the same
//!   literal an environment variable would carry (`"8080"`, `"true"`,
//!   `"[a b c]"`).
//! - **`.namespace()`**: the field's *value* becomes a segment of the remote
//!   document address. String fields only.
//!
//! Leaves can be any integer width, `f32`/`f64`, `bool`, `String`, or a
//! `Vec` of those (see [`coerce`]). Nested records go through
//! [`Walker::nested`]. There is no `Option`: every field is either supplied by
//! some layer or keeps the value it had.
//!
//! # Layer precedence
//!
//! ```text
//! Declared defaults      Field::with_default
//!        ↑ overridden by
//! Remote store           {namespace path}/{Field}/...
//!        ↑ overridden by
//! Environment vars       {APP}_{FIELD}, {APP}_{RECORD}_{FIELD}, ...
//! ```
//!
//! Empty values count as unset in every layer.
//!
//! # Environment variables
//!
//! With app name `myapp`:
//!
//! | Field | Env var |
//! |-------|---------|
//! | `Timer` | `MYAPP_TIMER` |
//! | `SubInfo.SubThingBool` | `MYAPP_SUBINFO_SUBTHINGBOOL` |
//!
//! Each nesting level appends `_{RECORD}` to the prefix. Tests and embedders
//! can swap the process environment for a fixed set of pairs with
//! [`StrufigBuilder::env_vars`].
//!
//! # Namespace path and remote addresses
//!
//! The remote document is chosen by the values of the namespace fields:
//!
//! ```text
//! Environment = "developer" (namespace), Type = "calculator" (namespace)
//!   → /myapp/developer/calculator
//! ```
//!
//! Leaves inside it are addressed by appending field names, one per nesting
//! level: `/myapp/developer/calculator/SubInfo/SubThingBool`. Because the path
//! depends on field values, resolution runs in two passes: a local pass
//! (environment and defaults) settles the namespace fields first, then a full
//! pass applies the remote document if the driver found one.
//!
//! # Drivers
//!
//! The remote layer is a [`Driver`] handle handed to the builder. The crate
//! ships [`MemoryDriver`] and [`FileDriver`]; anything else implements the
//! trait. Drivers can also be chosen by name through [`DriverSettings`]
//! (loaded with confique from `STRUFIG_DRIVER` / `STRUFIG_DRIVER_LOCATION` or
//! a TOML file) and, with the `clap` feature, from the command line via
//! [`DriverArgs`].
//!
//! A missing document is not an error: [`Strufig::retrieve_config`] returns
//! [`LoadStatus::NotFound`] and the local resolution stands. A backend
//! failure is an error and is reported as one.
//!
//! # Error handling
//!
//! Everything fallible returns [`StrufigError`]. Resolution stops at the first
//! problem: a literal that does not parse (reported with the dotted field
//! path, the source and the literal), a namespace field that is empty or not a
//! string, or a driver failure.
//!
//! # Logging
//!
//! Resolution emits [`tracing`] events: `debug` for each field resolved and
//! for the namespace path, `info` when remote configuration is applied. No
//! subscriber is installed by the library.

pub mod coerce;
pub mod driver;
pub mod error;
pub mod namespace;
pub mod resolve;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod ops;
mod schema;
mod settings;

#[cfg(test)]
mod fixtures;

pub use builder::{Strufig, StrufigBuilder};
#[cfg(feature = "clap")]
pub use cli::DriverArgs;
pub use coerce::{Coerce, CoerceError, Scalar};
pub use driver::{Driver, DriverError, FileDriver, MemoryDriver};
pub use env::{EnvSource, env_var_name};
pub use error::StrufigError;
pub use ops::{Entry, Listing};
pub use schema::{Field, Leaf, Schema, Walker};
pub use settings::{DriverKind, DriverSettings};
pub use types::{FieldKind, LoadStatus, ScalarKind, ValueSource};
