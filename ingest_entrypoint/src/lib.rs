#![deny(missing_docs)]
//! Standardized process initialization for the ingest binaries.
//! Every entrypoint calls [Entrypoint::init] once before doing anything else so that
//! logging looks the same in every environment.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Name of the variable which selects the [Environment]
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The environment the process is running in
#[derive(strum::Display, strum::EnumString, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    #[strum(serialize = "prod")]
    Production,
    /// Dev and or staging environment
    #[strum(serialize = "dev")]
    Develop,
    /// Running on a developer machine
    #[strum(serialize = "local")]
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// The variable could not be read
    #[error("An error occurred while reading envvar: {ENVIRONMENT_VAR}. Err: {0}")]
    Var(#[from] std::env::VarError),
    /// The value was not recognized as a valid environment
    #[error("Could not convert {0} into an environment value")]
    InvalidValue(String),
}

impl Environment {
    /// Attempt to read the [Environment] from the process environment variables
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Attempt to read the [Environment] through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvironmentErr>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let value = lookup(ENVIRONMENT_VAR)?;
        Self::from_str(&value).map_err(|_| EnvironmentErr::InvalidValue(value))
    }

    /// Read the [Environment], falling back to [Environment::Production] when it is absent or invalid
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

/// Describes how the process should be initialized
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Entrypoint {
    /// consume self, install the global subscriber and panic hook,
    /// and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                // cloudwatch adds its own ingestion timestamp
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .without_time()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment=%self.env, "initialized entrypoint");

        InitializedEntrypoint(())
    }
}
