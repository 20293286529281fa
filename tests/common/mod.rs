use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use coursebyte::router::init_router;
use coursebyte::state::AppState;
use coursebyte_auth::{Claims, create_access_token, sign_claims};
use coursebyte_config::{CorsConfig, JwtConfig};
use coursebyte_db::{CourseStore, InMemoryCourseStore, StoreError};
use coursebyte_models::Course;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(store: Arc<dyn CourseStore>) -> Router {
    let state = AppState::new(store, test_jwt_config(), CorsConfig::default());
    init_router(state)
}

pub fn fresh_token() -> String {
    create_access_token("test-user", &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn expired_token() -> String {
    let issued = Utc::now() - Duration::hours(2);
    let claims = Claims {
        sub: "test-user".to_string(),
        exp: (issued + Duration::hours(1)).timestamp(),
        iat: issued.timestamp(),
    };
    sign_claims(&claims, &test_jwt_config()).unwrap()
}

/// Sends one request and returns the status plus the raw body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<String>,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = authorization {
        builder = builder.header("authorization", auth);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(
        app,
        method,
        uri,
        token.map(|t| format!("Bearer {}", t)),
        body.map(|b| b.to_string()),
    )
    .await;

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Wraps the in-memory store and counts every call that reaches it.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryCourseStore,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CourseStore for CountingStore {
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        self.hit();
        self.inner.list().await
    }

    async fn get(&self, id: Uuid) -> Result<Course, StoreError> {
        self.hit();
        self.inner.get(id).await
    }

    async fn create(&self, course: &Course) -> Result<(), StoreError> {
        self.hit();
        self.inner.create(course).await
    }

    async fn update(&self, id: Uuid, course: &Course) -> Result<(), StoreError> {
        self.hit();
        self.inner.update(id, course).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.hit();
        self.inner.delete(id).await
    }
}

/// Every call fails as if the database were unreachable.
#[allow(dead_code)]
pub struct FailingStore;

#[allow(dead_code)]
fn unavailable() -> StoreError {
    StoreError::Backend("database unavailable".to_string())
}

#[async_trait]
impl CourseStore for FailingStore {
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        Err(unavailable())
    }

    async fn get(&self, _id: Uuid) -> Result<Course, StoreError> {
        Err(unavailable())
    }

    async fn create(&self, _course: &Course) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _id: Uuid, _course: &Course) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StoreError> {
        Err(unavailable())
    }
}
