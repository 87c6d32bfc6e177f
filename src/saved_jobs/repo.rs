use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A job a user has saved, denormalized from the upstream listing at the
/// moment of saving.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJob {
    pub id: i64,
    pub user_id: i64,
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<String>,
    pub category: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub struct NewSavedJob<'a> {
    pub job_id: &'a str,
    pub title: &'a str,
    pub company: &'a str,
    pub location: Option<&'a str>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Insert a saved job. A duplicate `(user_id, job_id)` pair surfaces as the
/// database's unique-violation error; callers map it, this layer does not.
pub async fn insert(
    db: &PgPool,
    user_id: i64,
    job: &NewSavedJob<'_>,
) -> Result<SavedJob, sqlx::Error> {
    sqlx::query_as::<_, SavedJob>(
        r#"
        INSERT INTO saved_jobs
            (user_id, job_id, title, company, location,
             salary_min, salary_max, contract_type, category)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, job_id, title, company, location,
                  salary_min, salary_max, contract_type, category, created_at
        "#,
    )
    .bind(user_id)
    .bind(job.job_id)
    .bind(job.title)
    .bind(job.company)
    .bind(job.location)
    .bind(job.salary_min)
    .bind(job.salary_max)
    .bind(job.contract_type)
    .bind(job.category)
    .fetch_one(db)
    .await
}

/// All jobs saved by the user, most recent first.
pub async fn list_by_user(db: &PgPool, user_id: i64) -> Result<Vec<SavedJob>, sqlx::Error> {
    sqlx::query_as::<_, SavedJob>(
        r#"
        SELECT id, user_id, job_id, title, company, location,
               salary_min, salary_max, contract_type, category, created_at
        FROM saved_jobs
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Delete the user's saved job if present. Returns the number of rows
/// removed; zero is not an error.
pub async fn delete_by_user_and_job(
    db: &PgPool,
    user_id: i64,
    job_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM saved_jobs
        WHERE user_id = $1 AND job_id = $2
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}
