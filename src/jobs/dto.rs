use serde::{Deserialize, Serialize};

/// Inbound query for `GET /jobs`, passed through to the upstream provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default = "default_country")]
    pub country: String,
    pub what: Option<String>,
    #[serde(rename = "where")]
    pub location: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_results_per_page")]
    pub results_per_page: u32,
}

pub(crate) fn default_country() -> String {
    "us".into()
}
fn default_page() -> u32 {
    1
}
fn default_results_per_page() -> u32 {
    20
}

/// Upstream job record normalized into the shape the rest of the app
/// (and the saved-jobs table) speaks.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<String>,
    pub created: Option<String>,
    pub redirect_url: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JobSearch {
    pub count: i64,
    pub jobs: Vec<JobListing>,
}

// --- upstream wire shapes (Adzuna) ---

#[derive(Debug, Deserialize)]
pub struct AdzunaSearchResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaJob {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: AdzunaCompany,
    #[serde(default)]
    pub location: AdzunaLocation,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<String>,
    pub created: Option<String>,
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub category: AdzunaCategory,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdzunaCompany {
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdzunaLocation {
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdzunaCategory {
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaCategoriesResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct AdzunaTopCompaniesResponse {
    #[serde(default)]
    pub leaderboard: Vec<serde_json::Value>,
}

impl From<AdzunaJob> for JobListing {
    fn from(job: AdzunaJob) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company.display_name,
            location: job.location.display_name,
            description: job.description,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            contract_type: job.contract_type,
            created: job.created,
            redirect_url: job.redirect_url,
            category: job.category.label,
        }
    }
}
