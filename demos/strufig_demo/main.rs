//! # strufig demo application
//!
//! Resolves [`DemoConfig`](config::DemoConfig) from the environment, an
//! optional file store, and declared defaults, then prints the result.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example strufig_demo
//! STRUFIG_DEMO_SERVER_PORT=9999 cargo run --example strufig_demo
//! cargo run --example strufig_demo -- --config-driver file --config-location ./store
//! RUST_LOG=strufig=debug cargo run --example strufig_demo
//! ```
//!
//! With the file driver, the document for the default namespace is
//! `./store/strufig_demo/developer/calculator.toml`:
//!
//! ```toml
//! TimeoutSecs = 10.0
//!
//! [Server]
//! Port = 9090
//! Upstreams = ["10.0.0.1:80", "10.0.0.2:80"]
//! ```

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use strufig::{DriverArgs, DriverSettings, LoadStatus, Strufig, StrufigError};

use config::DemoConfig;

const APP_NAME: &str = "strufig_demo";

/// strufig demo: resolve and print a layered configuration.
#[derive(Parser, Debug)]
#[command(name = "strufig-demo")]
struct Cli {
    /// Read driver settings from this TOML file.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[command(flatten)]
    driver: DriverArgs,
}

fn run(cli: Cli) -> Result<(), StrufigError> {
    let mut settings = DriverSettings::load(cli.settings.as_deref())?;
    cli.driver.apply(&mut settings);

    let mut strufig = Strufig::builder()
        .app_name(APP_NAME)
        .settings(settings)
        .build()?;

    let mut config = DemoConfig::default();
    let status = strufig.retrieve_config(&mut config)?;

    let path = strufig.namespace_path(&mut config)?;
    match status {
        LoadStatus::Found => println!("# remote document {path}"),
        LoadStatus::NotFound => println!("# no remote document at {path}"),
    }
    println!("{}", strufig.list(&mut config)?);
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
