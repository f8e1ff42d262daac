//! Database credentials from the environment.
//!
//! The same PG* variables the original dashboards read:
//!
//! | Var        | Default     | Required |
//! |------------|-------------|----------|
//! | PGHOST     | "localhost" | no       |
//! | PGPORT     | "5432"      | no       |
//! | PGDATABASE | -           | yes      |
//! | PGUSER     | -           | yes      |
//! | PGPASSWORD | -           | yes      |
//! | PGSSLMODE  | "require"   | no       |
//!
//! A missing required variable is fatal at startup; there is no fallback
//! connection string.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing DB credentials: set {var} in the environment or a .env file")]
    Missing { var: &'static str },

    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Validated Postgres connection settings.
#[derive(Debug, Clone)]
pub struct PgConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: PgSslMode,
}

impl PgConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// Separated from [`from_env`](Self::from_env) so parsing and
    /// required-variable handling are testable without mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("PGHOST").unwrap_or_else(|| "localhost".to_owned());

        let port_raw = lookup("PGPORT").unwrap_or_else(|| "5432".to_owned());
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            var: "PGPORT",
            value: port_raw,
            reason: "expected a TCP port number",
        })?;

        let database = required(&lookup, "PGDATABASE")?;
        let user = required(&lookup, "PGUSER")?;
        let password = required(&lookup, "PGPASSWORD")?;

        let ssl_raw = lookup("PGSSLMODE").unwrap_or_else(|| "require".to_owned());
        let ssl_mode = parse_ssl_mode(&ssl_raw)?;

        Ok(Self {
            host,
            port,
            database,
            user,
            password,
            ssl_mode,
        })
    }

    /// Typed sqlx connect options for this configuration.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(self.ssl_mode)
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing { var }),
    }
}

fn parse_ssl_mode(raw: &str) -> Result<PgSslMode, ConfigError> {
    match raw {
        "disable" => Ok(PgSslMode::Disable),
        "allow" => Ok(PgSslMode::Allow),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        "verify-ca" => Ok(PgSslMode::VerifyCa),
        "verify-full" => Ok(PgSslMode::VerifyFull),
        other => Err(ConfigError::Invalid {
            var: "PGSSLMODE",
            value: other.to_owned(),
            reason: "expected disable, allow, prefer, require, verify-ca, or verify-full",
        }),
    }
}

/// Load a `.env` file from the current directory if present.
///
/// Already-set environment variables are never overridden, and a missing
/// file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("loaded .env from {}", path.display()),
        Err(err) if err.not_found() => tracing::debug!("no .env file found"),
        Err(err) => tracing::warn!("failed to load .env: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn applies_defaults() {
        let cfg = PgConfig::from_lookup(env_of(&[
            ("PGDATABASE", "haunt"),
            ("PGUSER", "casper"),
            ("PGPASSWORD", "boo"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert!(matches!(cfg.ssl_mode, PgSslMode::Require));
    }

    #[test]
    fn missing_database_is_fatal() {
        let err = PgConfig::from_lookup(env_of(&[("PGUSER", "casper"), ("PGPASSWORD", "boo")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "PGDATABASE" }));
    }

    #[test]
    fn missing_user_and_password_are_fatal() {
        let err = PgConfig::from_lookup(env_of(&[
            ("PGDATABASE", "haunt"),
            ("PGPASSWORD", "boo"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "PGUSER" }));

        let err = PgConfig::from_lookup(env_of(&[("PGDATABASE", "haunt"), ("PGUSER", "casper")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "PGPASSWORD" }));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = PgConfig::from_lookup(env_of(&[
            ("PGDATABASE", ""),
            ("PGUSER", "casper"),
            ("PGPASSWORD", "boo"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "PGDATABASE" }));
    }

    #[test]
    fn rejects_bad_port() {
        let err = PgConfig::from_lookup(env_of(&[
            ("PGDATABASE", "haunt"),
            ("PGUSER", "casper"),
            ("PGPASSWORD", "boo"),
            ("PGPORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PGPORT", .. }));
    }

    #[test]
    fn parses_ssl_modes() {
        for raw in ["disable", "allow", "prefer", "require", "verify-ca", "verify-full"] {
            let cfg = PgConfig::from_lookup(env_of(&[
                ("PGDATABASE", "haunt"),
                ("PGUSER", "casper"),
                ("PGPASSWORD", "boo"),
                ("PGSSLMODE", raw),
            ]))
            .unwrap();
            let _ = cfg.ssl_mode;
        }

        let err = PgConfig::from_lookup(env_of(&[
            ("PGDATABASE", "haunt"),
            ("PGUSER", "casper"),
            ("PGPASSWORD", "boo"),
            ("PGSSLMODE", "mystery"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PGSSLMODE", .. }));
    }
}
