use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::saved_jobs::dto::SaveJobRequest;
use crate::saved_jobs::repo::{self, NewSavedJob, SavedJob};

/// Save a job for a user. The `(user_id, job_id)` unique constraint is the
/// sole race-resolution mechanism: a concurrent duplicate insert loses at
/// the database and maps to `AlreadySaved` here, so no advisory existence
/// check is made first.
pub async fn save(db: &PgPool, user_id: i64, input: &SaveJobRequest) -> ApiResult<SavedJob> {
    if input.job_id.trim().is_empty() {
        return Err(ApiError::validation("jobId is required"));
    }
    if input.title.trim().is_empty() {
        return Err(ApiError::validation("title is required"));
    }
    if input.company.trim().is_empty() {
        return Err(ApiError::validation("company is required"));
    }

    let new_job = NewSavedJob {
        job_id: &input.job_id,
        title: &input.title,
        company: &input.company,
        location: input.location.as_deref(),
        salary_min: input.salary_min,
        salary_max: input.salary_max,
        contract_type: input.contract_type.as_deref(),
        category: input.category.as_deref(),
    };

    match repo::insert(db, user_id, &new_job).await {
        Ok(saved) => {
            info!(user_id = %user_id, job_id = %saved.job_id, "job saved");
            Ok(saved)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            debug!(user_id = %user_id, job_id = %input.job_id, "duplicate save rejected");
            Err(ApiError::AlreadySaved)
        }
        Err(e) => Err(ApiError::Store(e)),
    }
}

/// All jobs saved by the user, most recent first. Empty vec if none.
pub async fn list(db: &PgPool, user_id: i64) -> ApiResult<Vec<SavedJob>> {
    Ok(repo::list_by_user(db, user_id).await?)
}

/// Remove a saved job. Idempotent: removing an absent pair succeeds.
pub async fn remove(db: &PgPool, user_id: i64, job_id: &str) -> ApiResult<()> {
    let removed = repo::delete_by_user_and_job(db, user_id, job_id).await?;
    if removed > 0 {
        info!(user_id = %user_id, job_id = %job_id, "job unsaved");
    } else {
        debug!(user_id = %user_id, job_id = %job_id, "unsave of absent job, no-op");
    }
    Ok(())
}
