use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::ApiResult,
    saved_jobs::dto::{SaveJobRequest, SavedJobsResponse, SavedResponse},
    saved_jobs::services,
    state::AppState,
};

pub fn saved_jobs_routes() -> Router<AppState> {
    Router::new()
        .route("/saved-jobs", post(save_job).get(list_saved_jobs))
        .route("/saved-jobs/:job_id", delete(remove_saved_job))
}

#[instrument(skip(state, payload))]
pub async fn save_job(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SaveJobRequest>,
) -> ApiResult<Json<SavedResponse>> {
    services::save(&state.db, user_id, &payload).await?;
    Ok(Json(SavedResponse {
        success: true,
        message: "Job saved successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list_saved_jobs(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<SavedJobsResponse>> {
    let jobs = services::list(&state.db, user_id).await?;
    Ok(Json(SavedJobsResponse {
        success: true,
        jobs,
    }))
}

#[instrument(skip(state))]
pub async fn remove_saved_job(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(job_id): Path<String>,
) -> ApiResult<Json<SavedResponse>> {
    services::remove(&state.db, user_id, &job_id).await?;
    Ok(Json(SavedResponse {
        success: true,
        message: "Job removed from saved".into(),
    }))
}
