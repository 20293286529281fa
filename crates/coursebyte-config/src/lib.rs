//! # Coursebyte Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: credential verification settings
//! - [`database`]: backend selection and pool settings
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use coursebyte_config::{DatabaseConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let db_config = DatabaseConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::{DatabaseBackend, DatabaseConfig};
pub use jwt::JwtConfig;
pub use server::ServerConfig;
