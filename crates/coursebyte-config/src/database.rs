//! Persistence backend selection and pool settings.
//!
//! The backend is chosen once at startup and stays fixed for the lifetime of
//! the process.
//!
//! # Environment Variables
//!
//! - `DATABASE_BACKEND`: `postgres`, `sqlite` or `memory`; inferred from the
//!   `DATABASE_URL` scheme when unset
//! - `DATABASE_URL`: connection string for the SQL backends
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `DATABASE_ACQUIRE_TIMEOUT`: seconds to wait for a pooled connection (default: 30)
//! - `DATABASE_RUN_MIGRATIONS`: apply embedded migrations on startup (default: false)

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
    Memory,
}

impl DatabaseBackend {
    /// Resolve the backend from an explicit name, falling back to the URL scheme.
    pub fn resolve(explicit: Option<&str>, url: Option<&str>) -> Self {
        if let Some(name) = explicit {
            match name.parse() {
                Ok(backend) => return backend,
                Err(()) => tracing::warn!(backend = %name, "unknown DATABASE_BACKEND, inferring from DATABASE_URL"),
            }
        }

        match url {
            Some(url) if url.starts_with("postgres://") || url.starts_with("postgresql://") => {
                Self::Postgres
            }
            Some(url) if url.starts_with("sqlite:") => Self::Sqlite,
            _ => Self::Memory,
        }
    }
}

impl FromStr for DatabaseBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            "memory" | "in-memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").ok();
        let backend = DatabaseBackend::resolve(
            env::var("DATABASE_BACKEND").ok().as_deref(),
            url.as_deref(),
        );

        Self {
            backend,
            url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            acquire_timeout: Duration::from_secs(
                env::var("DATABASE_ACQUIRE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            run_migrations: env::var("DATABASE_RUN_MIGRATIONS")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: DatabaseBackend::Memory,
            url: None,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            run_migrations: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_backend_wins() {
        let backend = DatabaseBackend::resolve(Some("sqlite"), Some("postgres://localhost/db"));
        assert_eq!(backend, DatabaseBackend::Sqlite);
    }

    #[test]
    fn test_backend_inferred_from_url() {
        assert_eq!(
            DatabaseBackend::resolve(None, Some("postgresql://u:p@h/db")),
            DatabaseBackend::Postgres
        );
        assert_eq!(
            DatabaseBackend::resolve(None, Some("sqlite://courses.db")),
            DatabaseBackend::Sqlite
        );
        assert_eq!(DatabaseBackend::resolve(None, None), DatabaseBackend::Memory);
    }

    #[test]
    fn test_unknown_backend_falls_back_to_url() {
        let backend = DatabaseBackend::resolve(Some("oracle"), Some("sqlite::memory:"));
        assert_eq!(backend, DatabaseBackend::Sqlite);
    }

    #[test]
    fn test_backend_display_round_trips() {
        for backend in [
            DatabaseBackend::Postgres,
            DatabaseBackend::Sqlite,
            DatabaseBackend::Memory,
        ] {
            assert_eq!(backend.to_string().parse::<DatabaseBackend>(), Ok(backend));
        }
    }
}
