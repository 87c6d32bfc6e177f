use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::jobs::dto::{JobListing, JobSearch};

/// Static substitute result set served when the upstream provider call
/// fails. Content is fixed; only `created` reflects the current time.
pub fn fallback_jobs() -> JobSearch {
    let created = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".into());

    let jobs = vec![JobListing {
        id: "1".into(),
        title: "Full Stack Developer".into(),
        company: Some("Nexus Tech Solutions".into()),
        location: Some("Remote".into()),
        description: Some(
            "We are looking for an experienced Full Stack Developer to join our team. \
             You will work on cutting-edge web applications using React, Node.js, and PostgreSQL."
                .into(),
        ),
        salary_min: Some(100_000.0),
        salary_max: Some(150_000.0),
        contract_type: Some("permanent".into()),
        created: Some(created),
        redirect_url: Some("#".into()),
        category: Some("IT Jobs".into()),
    }];

    JobSearch {
        count: jobs.len() as i64,
        jobs,
    }
}
