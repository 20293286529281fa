//! SQLite course store. Attributes live in a `TEXT` column checked with `json_valid`.

use async_trait::async_trait;
use coursebyte_config::DatabaseConfig;
use coursebyte_models::Course;
use sqlx::SqlitePool;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::instrument;
use uuid::Uuid;

use crate::error::StoreError;
use crate::row::CourseRow;
use crate::store::{CourseStore, require_url};

const SELECT_COURSES: &str = r#"SELECT id, created, courseid, title, instructor, description, image,
       published, updated, rawdata
FROM courses_v"#;

#[derive(Clone, Debug)]
pub struct SqliteCourseStore {
    pool: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the pool, creating the database file on first start.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(require_url(config)?)
            .map_err(StoreError::Connection)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(StoreError::Connection)?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.into()))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn conn(&self) -> Result<PoolConnection<Sqlite>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::Connection)
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let mut conn = self.conn().await?;

        let rows = sqlx::query_as::<_, CourseRow>(SELECT_COURSES)
            .fetch_all(&mut *conn)
            .await?;

        rows.into_iter()
            .map(|row| row.into_course().map_err(StoreError::from))
            .collect()
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<Course, StoreError> {
        let mut conn = self.conn().await?;

        let row = sqlx::query_as::<_, CourseRow>(&format!("{} WHERE id = ?", SELECT_COURSES))
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
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
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
               SET courseid = ?, title = ?, instructor = ?, description = ?,
                   image = ?, published = ?, updated = ?, rawdata = ?
               WHERE id = ?"#,
        )
        .bind(&row.courseid)
        .bind(&row.title)
        .bind(&row.instructor)
        .bind(&row.description)
        .bind(&row.image)
        .bind(row.published)
        .bind(row.updated)
        .bind(&row.rawdata)
        .bind(id)
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

        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
