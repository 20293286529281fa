//! In-memory course store for development and testing.
//!
//! Rows are kept in their column form, attributes JSON-encoded, and reads go
//! through the same projection as the SQL `courses_v` view.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use coursebyte_models::Course;
use tracing::instrument;
use uuid::Uuid;

use crate::error::StoreError;
use crate::row::CourseRow;
use crate::store::CourseStore;

#[derive(Clone, Default)]
pub struct InMemoryCourseStore {
    rows: Arc<RwLock<HashMap<Uuid, CourseRow>>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Read-view projection of a stored row.
fn project(row: &CourseRow) -> Result<Course, StoreError> {
    let mut row = row.clone();
    row.updated = row.updated.or(Some(row.created));
    Ok(row.into_course()?)
}

fn lock_error<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Backend(format!("course store lock poisoned: {}", e))
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let rows = self.rows.read().map_err(lock_error)?;
        rows.values().map(project).collect()
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<Course, StoreError> {
        let rows = self.rows.read().map_err(lock_error)?;
        rows.get(&id)
            .map(project)
            .unwrap_or(Err(StoreError::NotFound(id)))
    }

    #[instrument(skip(self, course), fields(id = %course.id))]
    async fn create(&self, course: &Course) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        if rows.contains_key(&course.id) {
            return Err(StoreError::Duplicate(course.id));
        }
        rows.insert(course.id, CourseRow::from_course(course));
        Ok(())
    }

    #[instrument(skip(self, course))]
    async fn update(&self, id: Uuid, course: &Course) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        let existing = rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        let incoming = CourseRow::from_course(course);
        *existing = CourseRow {
            id: existing.id,
            created: existing.created,
            ..incoming
        };
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use coursebyte_models::CourseAttrs;
    use serde_json::json;

    fn course(course_id: &str) -> Course {
        Course {
            id: Uuid::new_v4(),
            created: Utc::now(),
            course_id: course_id.to_string(),
            title: format!("{} title", course_id),
            attributes: CourseAttrs::try_from(json!({"code": course_id})).unwrap(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips_attributes() {
        let store = InMemoryCourseStore::new();
        let c = course("CS101");
        store.create(&c).await.unwrap();

        let fetched = store.get(c.id).await.unwrap();
        assert_eq!(fetched.attributes, c.attributes);
        assert_eq!(fetched.updated, Some(c.created));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryCourseStore::new();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_create_fails() {
        let store = InMemoryCourseStore::new();
        let c = course("CS101");
        store.create(&c).await.unwrap();
        assert!(matches!(store.create(&c).await, Err(StoreError::Duplicate(id)) if id == c.id));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created() {
        let store = InMemoryCourseStore::new();
        let original = course("CS101");
        store.create(&original).await.unwrap();

        let changed = Course {
            id: Uuid::new_v4(),
            created: original.created - Duration::days(30),
            title: "Renamed".to_string(),
            updated: Some(Utc::now()),
            ..original.clone()
        };
        store.update(original.id, &changed).await.unwrap();

        let fetched = store.get(original.id).await.unwrap();
        assert_eq!(fetched.id, original.id);
        assert_eq!(fetched.created, original.created);
        assert_eq!(fetched.title, "Renamed");
        assert_eq!(fetched.updated, changed.updated);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let store = InMemoryCourseStore::new();
        let c = course("CS101");
        assert!(store.update(c.id, &c).await.unwrap_err().is_not_found());
        assert!(store.delete(c.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_course() {
        let store = InMemoryCourseStore::new();
        let a = course("CS101");
        let b = course("CS102");
        store.create(&a).await.unwrap();
        store.create(&b).await.unwrap();

        store.delete(a.id).await.unwrap();

        assert!(store.get(a.id).await.unwrap_err().is_not_found());
        let remaining = store.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
    }
}
