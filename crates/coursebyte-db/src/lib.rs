//! # Coursebyte DB
//!
//! Course persistence behind one backend-agnostic trait, [`CourseStore`].
//!
//! Adapters:
//!
//! - [`PgCourseStore`](postgres::PgCourseStore): PostgreSQL, JSONB attribute column (feature `postgres`)
//! - [`SqliteCourseStore`](sqlite::SqliteCourseStore): SQLite, TEXT attribute column (feature `sqlite`)
//! - [`InMemoryCourseStore`]: process-local maps, for development and tests
//!
//! Writes go to the `courses` table; reads come from the `courses_v` view,
//! which reports `updated` as `created` for rows that were never updated.
//!
//! # Example
//!
//! ```ignore
//! use coursebyte_config::DatabaseConfig;
//! use coursebyte_db::connect_store;
//!
//! let store = connect_store(&DatabaseConfig::from_env()).await?;
//! let courses = store.list().await?;
//! ```

pub mod error;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod row;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryCourseStore;
#[cfg(feature = "postgres")]
pub use postgres::PgCourseStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCourseStore;
pub use store::{CourseStore, connect_store};
