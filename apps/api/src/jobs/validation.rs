//! Field validation for create and update requests.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::job::JobStatus;

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Request body for `POST /jobs` and `PUT /jobs/:id`.
///
/// Fields are kept as raw JSON so that a missing or wrongly typed field
/// reaches validation instead of failing body extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobInput {
    pub title: Option<Value>,
    pub company: Option<Value>,
    pub link: Option<Value>,
    pub status: Option<Value>,
}

/// A `JobInput` that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidJob {
    pub title: String,
    pub company: String,
    pub link: String,
    pub status: JobStatus,
}

pub fn validate_job_input(input: JobInput) -> Result<ValidJob, AppError> {
    let (Some(title), Some(company), Some(link), Some(status)) = (
        non_empty(input.title),
        non_empty(input.company),
        non_empty(input.link),
        non_empty(input.status),
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    let status = match status {
        Value::String(s) => s.parse::<JobStatus>().map_err(AppError::Validation)?,
        other => return Err(AppError::Validation(format!("Invalid status '{other}'"))),
    };

    Ok(ValidJob {
        title: text("title", title)?,
        company: text("company", company)?,
        link: text("link", link)?,
        status,
    })
}

/// Drops absent, `null` and blank-string fields.
fn non_empty(field: Option<Value>) -> Option<Value> {
    field.filter(|value| match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

fn text(name: &str, value: Value) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(AppError::Validation(format!(
            "Field '{name}' must be a string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(title: &str, company: &str, link: &str, status: &str) -> JobInput {
        JobInput {
            title: Some(json!(title)),
            company: Some(json!(company)),
            link: Some(json!(link)),
            status: Some(json!(status)),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let job = validate_job_input(input("Engineer", "Acme", "https://acme.test/job", "Offer"))
            .unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.status, JobStatus::Offer);
    }

    #[test]
    fn test_link_is_not_url_checked() {
        assert!(validate_job_input(input("Engineer", "Acme", "see email", "Applied")).is_ok());
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        let cases = [
            input("", "Acme", "https://acme.test", "Applied"),
            input("Engineer", "", "https://acme.test", "Applied"),
            input("Engineer", "Acme", "", "Applied"),
            input("Engineer", "Acme", "https://acme.test", ""),
        ];
        for case in cases {
            let err = validate_job_input(case).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_FIELDS));
        }
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        assert!(validate_job_input(input("   ", "Acme", "https://acme.test", "Applied")).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut job = input("Engineer", "Acme", "https://acme.test", "Applied");
        job.company = None;
        assert!(matches!(
            validate_job_input(job),
            Err(AppError::Validation(_))
        ));
        assert!(validate_job_input(JobInput::default()).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = validate_job_input(input("Engineer", "Acme", "https://acme.test", "Ghosted"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("Ghosted")));
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let mut job = input("Engineer", "Acme", "https://acme.test", "Applied");
        job.link = Some(Value::Null);
        let err = validate_job_input(job).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_FIELDS));
    }

    #[test]
    fn test_non_string_status_is_rejected() {
        let mut job = input("Engineer", "Acme", "https://acme.test", "Applied");
        job.status = Some(json!(5));
        let err = validate_job_input(job).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid status '5'"));
    }

    #[test]
    fn test_non_string_text_fields_are_rejected() {
        let mut job = input("Engineer", "Acme", "https://acme.test", "Applied");
        job.title = Some(json!(["Engineer"]));
        assert!(matches!(
            validate_job_input(job),
            Err(AppError::Validation(ref m)) if m.contains("'title'")
        ));

        let mut job = input("Engineer", "Acme", "https://acme.test", "Applied");
        job.company = Some(json!({"name": "Acme"}));
        assert!(matches!(
            validate_job_input(job),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_deserializes_wrongly_typed_body() {
        let job: JobInput = serde_json::from_str(
            r#"{"title": "E", "company": "A", "link": "l", "status": 5}"#,
        )
        .unwrap();
        assert!(matches!(
            validate_job_input(job),
            Err(AppError::Validation(_))
        ));
    }
}
