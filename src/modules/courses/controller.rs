use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::instrument;
use uuid::Uuid;

use coursebyte_core::AppError;
use coursebyte_models::Course;

use crate::middleware::auth::AuthUser;
use crate::modules::courses::model::{CourseResponse, CoursesResponse};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::validator::JsonPayload;

#[instrument(skip(state))]
pub async fn get_courses(State(state): State<AppState>) -> Result<Json<CoursesResponse>, AppError> {
    let courses = CourseService::list(state.store.as_ref())
        .await
        .map_err(|e| e.with_field("count", json!(0)).with_field("courses", Value::Null))?;

    Ok(Json(CoursesResponse::ok(courses)))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        AppError::bad_request(anyhow::anyhow!("{}", rejection.body_text()))
            .with_field("course", Value::Null)
    })?;

    let course = CourseService::get(state.store.as_ref(), id)
        .await
        .map_err(|e| e.with_field("course", Value::Null))?;

    Ok(Json(CourseResponse::ok(course)))
}

#[instrument(skip(state, course), fields(user = %auth_user.user_id()))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonPayload(course): JsonPayload<Course>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseService::create(state.store.as_ref(), course, auth_user.now).await?;

    Ok(Json(CourseResponse::ok(course)))
}

#[instrument(skip(state, course), fields(user = %auth_user.user_id()))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonPayload(course): JsonPayload<Course>,
) -> Result<StatusCode, AppError> {
    CourseService::update(state.store.as_ref(), course, auth_user.now).await?;

    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, course), fields(user = %auth_user.user_id()))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonPayload(course): JsonPayload<Course>,
) -> Result<StatusCode, AppError> {
    CourseService::delete(state.store.as_ref(), &course).await?;

    Ok(StatusCode::NO_CONTENT)
}
