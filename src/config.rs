use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Upstream job-provider settings. Credentials are optional: without them
/// search degrades to fallback data instead of failing startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AdzunaConfig {
    pub base_url: String,
    pub app_id: Option<String>,
    pub app_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub adzuna: AdzunaConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "nexus-connect".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "nexus-connect-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let adzuna = AdzunaConfig {
            base_url: std::env::var("ADZUNA_BASE_URL")
                .unwrap_or_else(|_| "https://api.adzuna.com/v1/api/jobs".into()),
            app_id: std::env::var("ADZUNA_APP_ID").ok(),
            app_key: std::env::var("ADZUNA_APP_KEY").ok(),
            timeout_secs: std::env::var("ADZUNA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10),
        };
        Ok(Self {
            database_url,
            jwt,
            adzuna,
        })
    }
}
