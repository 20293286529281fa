use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use coursebyte_core::{AppError, ensure_valid, validate_partial, validate_struct};
use coursebyte_db::{CourseStore, StoreError};
use coursebyte_models::Course;

const NOT_FOUND_BY_PATH: &str = "course with the given ID is not found";
const NOT_FOUND_BY_BODY: &str = "course with this ID not found";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(store))]
    pub async fn list(store: &dyn CourseStore) -> Result<Vec<Course>, AppError> {
        Ok(store.list().await?)
    }

    #[instrument(skip(store))]
    pub async fn get(store: &dyn CourseStore, id: Uuid) -> Result<Course, AppError> {
        store
            .get(id)
            .await
            .map_err(|e| not_found_as(e, NOT_FOUND_BY_PATH))
    }

    /// Assigns identity and creation time, validates, then inserts.
    #[instrument(skip(store, course), fields(course_id = %course.course_id))]
    pub async fn create(
        store: &dyn CourseStore,
        mut course: Course,
        now: DateTime<Utc>,
    ) -> Result<Course, AppError> {
        course.id = Uuid::new_v4();
        course.created = now;
        course.updated = None;

        ensure_valid(validate_struct(&course))?;

        store.create(&course).await?;

        tracing::info!(id = %course.id, "course created");
        Ok(course)
    }

    /// Replaces the mutable fields of the course named by `course.id`.
    #[instrument(skip(store, course), fields(id = %course.id))]
    pub async fn update(
        store: &dyn CourseStore,
        mut course: Course,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let existing = store
            .get(course.id)
            .await
            .map_err(|e| not_found_as(e, NOT_FOUND_BY_BODY))?;

        course.created = existing.created;
        course.updated = Some(now);

        ensure_valid(validate_struct(&course))?;

        store
            .update(existing.id, &course)
            .await
            .map_err(|e| not_found_as(e, NOT_FOUND_BY_BODY))
    }

    /// Only `id` is validated; the rest of the payload is ignored.
    #[instrument(skip(store, course), fields(id = %course.id))]
    pub async fn delete(store: &dyn CourseStore, course: &Course) -> Result<(), AppError> {
        ensure_valid(validate_partial(course, &["id"]))?;

        let existing = store
            .get(course.id)
            .await
            .map_err(|e| not_found_as(e, NOT_FOUND_BY_BODY))?;

        store
            .delete(existing.id)
            .await
            .map_err(|e| not_found_as(e, NOT_FOUND_BY_BODY))
    }
}

fn not_found_as(err: StoreError, msg: &'static str) -> AppError {
    if err.is_not_found() {
        AppError::not_found(anyhow!(msg))
    } else {
        err.into()
    }
}
