//! PostgreSQL course store.
//!
//! # Schema
//!
//! - `courses`: write table, attributes in a `JSONB` column named `rawdata`
//! - `courses_v`: read view over `courses`
//!
//! Attributes are bound as text and cast with `$n::jsonb`; reads cast back with
//! `rawdata::text` so the codec sees the same wire form on every backend.

use async_trait::async_trait;
use coursebyte_config::DatabaseConfig;
use coursebyte_models::Course;
use sqlx::PgPool;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPoolOptions, Postgres};
use tracing::instrument;
use uuid::Uuid;

use crate::error::StoreError;
use crate::row::CourseRow;
use crate::store::{CourseStore, require_url};

#[derive(Clone, Debug)]
pub struct PgCourseStore {
    pool: PgPool,
}

impl PgCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(require_url(config)?)
            .await
            .map_err(StoreError::Connection)?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations (idempotent).
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations/postgres")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.into()))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn conn(&self) -> Result<PoolConnection<Postgres>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::Connection)
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let mut conn = self.conn().await?;

        let rows = sqlx::query_as::<_, CourseRow>(
            r#"SELECT id, created, courseid, title, instructor, description, image,
                      published, updated, rawdata::text AS rawdata
               FROM courses_v"#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| row.into_course().map_err(StoreError::from))
            .collect()
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<Course, StoreError> {
        let mut conn = self.conn().await?;

        let row = sqlx::query_as::<_, CourseRow>(
            r#"SELECT id, created, courseid, title, instructor, description, image,
                      published, updated, rawdata::text AS rawdata
               FROM courses_v
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        Ok(row.into_course()?)
    }

    #[instrument(skip(self, course), fields(id = %course.id))]
    async fn create(&self, course: &Course) -> Result<(), StoreError> {
        let row = CourseRow::from_course(course);
        let mut conn = self.conn().await?;

        sqlx::query(
            r#"INSERT INTO courses
                   (id, created, courseid, title, instructor, description, image,
                    published, updated, rawdata)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10::jsonb)"#,
        )
        .bind(row.id)
        .bind(row.created)
        .bind(&row.courseid)
        .bind(&row.title)
        .bind(&row.instructor)
        .bind(&row.description)
        .bind(&row.image)
        .bind(row.published)
        .bind(row.updated)
        .bind(&row.rawdata)
        .execute(&mut *conn)
        .await
        .map_err(|e| StoreError::on_insert(e, course.id))?;

        Ok(())
    }

    #[instrument(skip(self, course))]
    async fn update(&self, id: Uuid, course: &Course) -> Result<(), StoreError> {
        let row = CourseRow::from_course(course);
        let mut conn = self.conn().await?;

        let result = sqlx::query(
            r#"UPDATE courses
               SET courseid = $2, title = $3, instructor = $4, description = $5,
                   image = $6, published = $7, updated = $8, rawdata = $9::jsonb
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(&row.courseid)
        .bind(&row.title)
        .bind(&row.instructor)
        .bind(&row.description)
        .bind(&row.image)
        .bind(row.published)
        .bind(row.updated)
        .bind(&row.rawdata)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
