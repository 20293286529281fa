use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_course, delete_course, get_course, get_courses, update_course};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(get_courses))
        .route(
            "/course",
            post(create_course).put(update_course).delete(delete_course),
        )
        .route("/course/{id}", get(get_course))
}
