//! Configuration records for the strufig demo application.
//!
//! [`DemoConfig`] has two namespace fields, `Environment` and `Service`, so
//! its remote document lives at `/strufig_demo/{Environment}/{Service}`.
//!
//! | Env var | Field |
//! |---------|-------|
//! | `STRUFIG_DEMO_ENVIRONMENT` | `Environment` |
//! | `STRUFIG_DEMO_VERBOSE` | `Verbose` |
//! | `STRUFIG_DEMO_SERVER_PORT` | `Server.Port` |
//! | `STRUFIG_DEMO_SERVER_UPSTREAMS` | `Server.Upstreams` (e.g. `[a:1 b:2]`) |

use strufig::{Field, Schema, StrufigError, Walker};

#[derive(Debug, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upstreams: Vec<String>,
}

impl Schema for ServerConfig {
    fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
        walker.leaf(&Field::new("Host").with_default("127.0.0.1"), &mut self.host)?;
        walker.leaf(&Field::new("Port").with_default("8080"), &mut self.port)?;
        walker.leaf(&Field::new("Upstreams").with_default("[]"), &mut self.upstreams)
    }
}

/// Root configuration for the demo application.
#[derive(Debug, Default)]
pub struct DemoConfig {
    pub environment: String,
    pub service: String,
    pub verbose: bool,
    pub timeout_secs: f64,
    pub server: ServerConfig,
}

impl Schema for DemoConfig {
    fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
        walker.leaf(
            &Field::new("Environment").with_default("developer").namespace(),
            &mut self.environment,
        )?;
        walker.leaf(
            &Field::new("Service").with_default("calculator").namespace(),
            &mut self.service,
        )?;
        walker.leaf(&Field::new("Verbose").with_default("false"), &mut self.verbose)?;
        walker.leaf(&Field::new("TimeoutSecs").with_default("2.5"), &mut self.timeout_secs)?;
        walker.nested(&Field::new("Server"), &mut self.server)
    }
}
