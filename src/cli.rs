//! Clap adapter for driver selection.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`DriverArgs`] in your own parser to let users pick the remote driver on the
//! command line; the flags lay over whatever [`DriverSettings`] loaded from the
//! environment or a settings file.
//!
//! ```ignore
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     driver: DriverArgs,
//! }
//!
//! let cli = Cli::parse();
//! let mut settings = DriverSettings::load(None)?;
//! cli.driver.apply(&mut settings);
//! let strufig = Strufig::builder().app_name("myapp").settings(settings).build()?;
//! ```

use clap::Args;

use crate::settings::{DriverKind, DriverSettings};

#[derive(Debug, Clone, Default, Args)]
pub struct DriverArgs {
    /// Remote driver to resolve configuration from.
    #[arg(long = "config-driver", value_enum)]
    pub driver: Option<DriverKind>,

    /// Location handed to the driver (the store directory for `file`).
    #[arg(long = "config-location")]
    pub location: Option<String>,
}

impl DriverArgs {
    /// Override `settings` with every flag the user actually passed.
    pub fn apply(self, settings: &mut DriverSettings) {
        if let Some(driver) = self.driver {
            settings.driver = driver;
        }
        if let Some(location) = self.location {
            settings.location = Some(location);
        }
    }
}
