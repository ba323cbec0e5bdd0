//! Process settings from the environment (after an optional `.env`).

use crate::error::ConfigError;
use sqlx::postgres::PgSslMode;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// `Require` encrypts without verifying the server certificate.
    pub ssl_mode: PgSslMode,
    /// None keeps the pool's own default.
    pub acquire_timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = match get("HOST") {
            Some(v) => parse_var("HOST", &v)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match get("PORT") {
            Some(v) => parse_var("PORT", &v)?,
            None => DEFAULT_PORT,
        };
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse_var("DATABASE_MAX_CONNECTIONS", &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let ssl_mode = match get("DATABASE_SSL_MODE") {
            Some(v) => parse_var("DATABASE_SSL_MODE", &v)?,
            None => PgSslMode::Require,
        };
        let acquire_timeout = get("DATABASE_ACQUIRE_TIMEOUT_SECS")
            .map(|v| parse_var::<u64>("DATABASE_ACQUIRE_TIMEOUT_SECS", &v))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Settings {
            host,
            port,
            database: DatabaseSettings {
                url,
                max_connections,
                ssl_mode,
                acquire_timeout,
            },
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/library")]).unwrap();
        assert_eq!(s.port, 3000);
        assert_eq!(s.listen_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(s.database.url, "postgres://localhost/library");
        assert_eq!(s.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(matches!(s.database.ssl_mode, PgSslMode::Require));
        assert!(s.database.acquire_timeout.is_none());
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(settings(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
        assert!(matches!(
            settings(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://db/library"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("DATABASE_SSL_MODE", "verify-full"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(s.listen_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(s.database.max_connections, 12);
        assert!(matches!(s.database.ssl_mode, PgSslMode::VerifyFull));
        assert_eq!(s.database.acquire_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = settings(&[("DATABASE_URL", "postgres://db/library"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

        let err = settings(&[
            ("DATABASE_URL", "postgres://db/library"),
            ("DATABASE_SSL_MODE", "sometimes"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DATABASE_SSL_MODE", .. }));
    }
}
