use std::sync::Arc;

use async_trait::async_trait;
use coursebyte_config::{DatabaseBackend, DatabaseConfig};
use coursebyte_models::Course;
use uuid::Uuid;

use crate::error::StoreError;
use crate::memory::InMemoryCourseStore;

/// Course persistence, one implementation per database engine.
///
/// `update` and `delete` report [`StoreError::NotFound`] when no row matched,
/// even though callers look the course up first: a concurrent delete between
/// the lookup and the write must not read as success.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Every course in the read view, in backend order.
    async fn list(&self) -> Result<Vec<Course>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Course, StoreError>;

    async fn create(&self, course: &Course) -> Result<(), StoreError>;

    /// Overwrites the mutable columns of `id`. `id` and `created` are kept.
    async fn update(&self, id: Uuid, course: &Course) -> Result<(), StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Builds the configured backend. Called once at startup.
pub async fn connect_store(config: &DatabaseConfig) -> Result<Arc<dyn CourseStore>, StoreError> {
    tracing::info!(backend = %config.backend, "initializing course store");

    match config.backend {
        DatabaseBackend::Memory => Ok(Arc::new(InMemoryCourseStore::new())),
        DatabaseBackend::Postgres => connect_postgres(config).await,
        DatabaseBackend::Sqlite => connect_sqlite(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &DatabaseConfig) -> Result<Arc<dyn CourseStore>, StoreError> {
    let store = crate::postgres::PgCourseStore::connect(config).await?;
    if config.run_migrations {
        store.migrate().await?;
    }
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &DatabaseConfig) -> Result<Arc<dyn CourseStore>, StoreError> {
    Err(StoreError::Backend(
        "built without the `postgres` feature".to_string(),
    ))
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(config: &DatabaseConfig) -> Result<Arc<dyn CourseStore>, StoreError> {
    let store = crate::sqlite::SqliteCourseStore::connect(config).await?;
    if config.run_migrations {
        store.migrate().await?;
    }
    Ok(Arc::new(store))
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_config: &DatabaseConfig) -> Result<Arc<dyn CourseStore>, StoreError> {
    Err(StoreError::Backend(
        "built without the `sqlite` feature".to_string(),
    ))
}

pub(crate) fn require_url(config: &DatabaseConfig) -> Result<&str, StoreError> {
    config.url.as_deref().ok_or_else(|| {
        StoreError::Backend(format!(
            "DATABASE_URL must be set for the {} backend",
            config.backend
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_memory_store() {
        let store = connect_store(&DatabaseConfig::in_memory()).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sql_backend_requires_url() {
        let config = DatabaseConfig {
            backend: DatabaseBackend::Postgres,
            ..DatabaseConfig::in_memory()
        };
        let err = connect_store(&config).await.err().unwrap();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_connect_sqlite_creates_missing_file() {
        use chrono::Utc;
        use coursebyte_models::Course;

        let path = std::env::temp_dir().join(format!("coursebyte-{}.db", Uuid::new_v4()));
        let config = DatabaseConfig {
            backend: DatabaseBackend::Sqlite,
            url: Some(format!("sqlite://{}", path.display())),
            run_migrations: true,
            ..DatabaseConfig::in_memory()
        };

        let store = connect_store(&config).await.unwrap();
        assert!(path.exists());
        assert!(store.list().await.unwrap().is_empty());

        let course = Course {
            id: Uuid::new_v4(),
            created: Utc::now(),
            course_id: "CS101".to_string(),
            title: "Intro".to_string(),
            ..Default::default()
        };
        store.create(&course).await.unwrap();
        assert_eq!(store.get(course.id).await.unwrap().title, "Intro");

        drop(store);
        let _ = std::fs::remove_file(&path);
    }
}
