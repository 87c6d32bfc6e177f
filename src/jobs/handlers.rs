use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{
    error::ApiResult,
    jobs::dto::{default_country, JobListing, SearchQuery},
    jobs::fallback::fallback_jobs,
    state::AppState,
};

pub fn jobs_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(search_jobs))
        .route("/jobs/categories", get(list_categories))
        .route("/jobs/top-companies", get(list_top_companies))
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: i64,
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    #[serde(default = "default_country")]
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct TopCompaniesResponse {
    pub success: bool,
    pub companies: Vec<serde_json::Value>,
}

/// Never surfaces an upstream failure: any error is collapsed into the
/// fallback dataset and a 200 response.
#[instrument(skip(state))]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = match state.jobs.search(&query).await {
        Ok(results) => results,
        Err(e) => {
            warn!(error = %e, "upstream job search failed, serving fallback data");
            fallback_jobs()
        }
    };

    Json(SearchResponse {
        success: true,
        count: results.count,
        jobs: results.jobs,
    })
}

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(q): Query<CountryQuery>,
) -> ApiResult<Json<CategoriesResponse>> {
    let categories = state.jobs.categories(&q.country).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[instrument(skip(state))]
pub async fn list_top_companies(
    State(state): State<AppState>,
    Query(q): Query<CountryQuery>,
) -> ApiResult<Json<TopCompaniesResponse>> {
    let companies = state.jobs.top_companies(&q.country).await?;
    Ok(Json(TopCompaniesResponse {
        success: true,
        companies,
    }))
}
