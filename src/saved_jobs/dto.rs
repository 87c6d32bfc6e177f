use serde::{Deserialize, Serialize};

use crate::saved_jobs::repo::SavedJob;

/// Body of `POST /saved-jobs`. The client sends the job id camel-cased and
/// the rest snake-cased, mirroring the upstream listing shape.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveJobRequest {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SavedJobsResponse {
    pub success: bool,
    pub jobs: Vec<SavedJob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_request_reads_wire_field_names() {
        let body = r#"{
            "jobId": "adzuna-123",
            "title": "Rust Engineer",
            "company": "Acme",
            "salary_min": 90000,
            "contract_type": "permanent"
        }"#;
        let req: SaveJobRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.job_id, "adzuna-123");
        assert_eq!(req.company, "Acme");
        assert_eq!(req.salary_min, Some(90000.0));
        assert!(req.location.is_none());
        assert!(req.category.is_none());
    }

    #[test]
    fn save_request_rejects_missing_required_fields() {
        let body = r#"{"title": "No job id", "company": "Acme"}"#;
        assert!(serde_json::from_str::<SaveJobRequest>(body).is_err());
    }
}
