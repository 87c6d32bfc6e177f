#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, ensure, Context, Result};
use axum::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use once_cell::sync::Lazy;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tower::util::ServiceExt;

use nexus_connect::app;
use nexus_connect::config::{AdzunaConfig, AppConfig, JwtConfig};
use nexus_connect::jobs::client::{JobsClient, UpstreamError};
use nexus_connect::jobs::dto::{JobSearch, SearchQuery};
use nexus_connect::state::AppState;

static DB_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub async fn acquire_db_lock() -> tokio::sync::MutexGuard<'static, ()> {
    DB_LOCK.lock().await
}

/// Upstream client that always reports the provider as down.
pub struct OfflineJobs;

#[async_trait]
impl JobsClient for OfflineJobs {
    async fn search(&self, _q: &SearchQuery) -> Result<JobSearch, UpstreamError> {
        Err(UpstreamError::MissingCredentials)
    }
    async fn categories(&self, _country: &str) -> Result<Vec<serde_json::Value>, UpstreamError> {
        Err(UpstreamError::MissingCredentials)
    }
    async fn top_companies(
        &self,
        _country: &str,
    ) -> Result<Vec<serde_json::Value>, UpstreamError> {
        Err(UpstreamError::MissingCredentials)
    }
}

pub fn test_config(database_url: &str) -> AppConfig {
    AppConfig {
        database_url: database_url.to_string(),
        jwt: JwtConfig {
            secret: "test-secret".into(),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl_minutes: 60,
        },
        adzuna: AdzunaConfig {
            base_url: "https://fake.local".into(),
            app_id: None,
            app_key: None,
            timeout_secs: 1,
        },
    }
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Returns `None` when `TEST_DATABASE_URL` is unset so DB-backed tests
    /// can skip on machines without Postgres.
    pub async fn try_new() -> Result<Option<Self>> {
        let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
            return Ok(None);
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .context("connect to test database")?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("run migrations")?;
        sqlx::query("TRUNCATE TABLE saved_jobs, users RESTART IDENTITY CASCADE")
            .execute(&pool)
            .await
            .context("truncate tables")?;

        let config = Arc::new(test_config(&database_url));
        let jobs: Arc<dyn JobsClient> = Arc::new(OfflineJobs);
        let state = AppState::from_parts(pool, config, jobs);
        let router = app::build_app(state.clone());

        Ok(Some(Self { state, router }))
    }

    pub fn pool(&self) -> &PgPool {
        &self.state.db
    }

    pub async fn register_token(&self, email: &str, password: &str, full_name: &str) -> Result<String> {
        let response = self
            .post_json(
                "/api/auth/register",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "full_name": full_name,
                }),
                None,
            )
            .await?;
        ensure!(
            response.status() == StatusCode::OK,
            "register failed with status {}",
            response.status()
        );
        let body = body_json(response.into_body()).await?;
        body["token"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("register response missing token"))
    }

    pub async fn post_json(
        &self,
        path: &str,
        payload: &serde_json::Value,
        token: Option<&str>,
    ) -> Result<hyper::Response<Body>> {
        let body = serde_json::to_vec(payload)?;
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = builder.body(Body::from(body))?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<hyper::Response<Body>> {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = builder.body(Body::empty())?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<hyper::Response<Body>> {
        let mut builder = Request::builder().method(Method::DELETE).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = builder.body(Body::empty())?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    /// Two clones of the router racing the same request, for conflict tests.
    pub fn router_pair(&self) -> (Router, Router) {
        (self.router.clone(), self.router.clone())
    }
}

pub async fn body_json(body: Body) -> Result<serde_json::Value> {
    let collected = body
        .collect()
        .await
        .map_err(|err| anyhow!("failed to read response body: {err}"))?;
    Ok(serde_json::from_slice(&collected.to_bytes())?)
}
