use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{Activity, Course, LongView, ScheduleError, Scheduler, ShortView};

/// Shared scheduler behind one lock, so the duplicate/conflict scan and the append
/// of an add happen as a single step.
#[derive(Clone)]
pub struct AppState {
    scheduler: Arc<Mutex<Scheduler>>,
}

impl AppState {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
        }
    }

    fn scheduler(&self) -> Arc<Mutex<Scheduler>> {
        self.scheduler.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl From<ScheduleError> for ApiError {
    fn from(value: ScheduleError) -> Self {
        match value {
            ScheduleError::Invalid(err) => ApiError::Invalid(err.to_string()),
            other => ApiError::Conflict(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct AddCoursePayload {
    name: String,
    section: String,
}

#[derive(Debug, Deserialize)]
struct AddEventPayload {
    title: String,
    meeting_days: String,
    start_time: i32,
    end_time: i32,
    #[serde(default)]
    details: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TitlePayload {
    pub title: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(list_catalog))
        .route("/schedule", get(list_schedule))
        .route("/schedule/full", get(list_full_schedule))
        .route("/schedule/activities", get(list_activities))
        .route("/schedule/title", get(get_title).put(update_title))
        .route("/schedule/courses", post(add_course))
        .route("/schedule/events", post(add_event))
        .route("/schedule/reset", post(reset_schedule))
        .route("/schedule/activities/:index", delete(remove_activity))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, scheduler: Scheduler) -> std::io::Result<()> {
    let state = AppState::new(scheduler);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_catalog(State(state): State<AppState>) -> Json<Vec<Course>> {
    let scheduler = state.scheduler();
    let catalog = scheduler.lock().catalog().to_vec();
    Json(catalog)
}

async fn list_schedule(State(state): State<AppState>) -> Json<Vec<ShortView>> {
    let scheduler = state.scheduler();
    let rows = scheduler.lock().scheduled_activities();
    Json(rows)
}

async fn list_full_schedule(State(state): State<AppState>) -> Json<Vec<LongView>> {
    let scheduler = state.scheduler();
    let rows = scheduler.lock().full_scheduled_activities();
    Json(rows)
}

async fn list_activities(State(state): State<AppState>) -> Json<Vec<Activity>> {
    let scheduler = state.scheduler();
    let activities = scheduler.lock().schedule().to_vec();
    Json(activities)
}

async fn get_title(State(state): State<AppState>) -> Json<TitlePayload> {
    let scheduler = state.scheduler();
    let title = scheduler.lock().schedule_title().to_string();
    Json(TitlePayload { title })
}

async fn update_title(
    State(state): State<AppState>,
    Json(payload): Json<TitlePayload>,
) -> Json<TitlePayload> {
    let scheduler = state.scheduler();
    scheduler.lock().set_schedule_title(payload.title.clone());
    Json(payload)
}

async fn add_course(
    State(state): State<AppState>,
    Json(payload): Json<AddCoursePayload>,
) -> Result<(StatusCode, Json<Vec<ShortView>>), ApiError> {
    let scheduler = state.scheduler();
    let mut guard = scheduler.lock();
    if !guard.add_course_to_schedule(&payload.name, &payload.section)? {
        return Err(ApiError::not_found(format!(
            "{} {} is not in the catalog",
            payload.name, payload.section
        )));
    }
    info!(name = %payload.name, section = %payload.section, "POST /schedule/courses");
    Ok((StatusCode::CREATED, Json(guard.scheduled_activities())))
}

async fn add_event(
    State(state): State<AppState>,
    Json(payload): Json<AddEventPayload>,
) -> Result<(StatusCode, Json<Vec<ShortView>>), ApiError> {
    let scheduler = state.scheduler();
    let mut guard = scheduler.lock();
    guard.add_event_to_schedule(
        &payload.title,
        &payload.meeting_days,
        payload.start_time,
        payload.end_time,
        &payload.details,
    )?;
    info!(title = %payload.title, "POST /schedule/events");
    Ok((StatusCode::CREATED, Json(guard.scheduled_activities())))
}

async fn remove_activity(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    let scheduler = state.scheduler();
    let removed = scheduler.lock().remove_activity_from_schedule(index);
    if !removed {
        return Err(ApiError::not_found(format!(
            "no activity at position {index}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn reset_schedule(State(state): State<AppState>) -> StatusCode {
    let scheduler = state.scheduler();
    scheduler.lock().reset_schedule();
    StatusCode::NO_CONTENT
}
