use axum::Json;
use axum::extract::{Path, Query};
use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).patch(update_course).delete(delete_course),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = repository::fetch_courses(&state.db, &filter).await?;
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course = repository::find_course_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = repository::insert_course(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    let course = repository::update_course(&state.db, id, req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let ok = repository::delete_course(&state.db, id).await?;
    if ok {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
