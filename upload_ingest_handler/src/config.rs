use anyhow::Context;
use sqlx::postgres::PgConnectOptions;

/// Connection parameters for the Postgres database holding `s3_objects`.
///
/// Loaded once at startup and handed to the db client. Anything not listed here
/// (port, ssl mode, ...) keeps the driver's libpq-compatible defaults.
///
/// See `.env.sample` in the crate root for details.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Hostname or ip address of the database server
    pub host: String,

    /// Name of the database
    pub name: String,

    /// Role to connect as
    pub user: String,

    /// Password for [Self::user]
    pub password: String,
}

impl DbConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Builds the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let host = lookup("DB_HOST").context("DB_HOST must be provided")?;
        let name = lookup("DB_NAME").context("DB_NAME must be provided")?;
        let user = lookup("DB_USER").context("DB_USER must be provided")?;
        let password = lookup("DB_PASSWORD").context("DB_PASSWORD must be provided")?;
        Ok(DbConfig {
            host,
            name,
            user,
            password,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
