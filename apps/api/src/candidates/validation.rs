use std::path::Path;

use chrono::NaiveDate;

use crate::candidates::models::{CandidateProfile, CandidateSubmission, ResumeUpload};
use crate::errors::AppError;

/// Content types accepted for résumé files: PDF, DOC, DOCX.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

const MIN_NAME_LEN: usize = 2;
const CONTACT_NUMBER_LEN: std::ops::RangeInclusive<usize> = 10..=15;
const GRADUATION_YEARS: std::ops::RangeInclusive<i32> = 1950..=2100;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Joins violations into one message naming every offending field.
pub fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks the résumé part: present, named, an allowed content type, within `max_bytes`.
pub fn validate_resume(resume: Option<ResumeUpload>, max_bytes: usize) -> Result<ResumeUpload, AppError> {
    let resume = resume.ok_or_else(|| AppError::Validation("resume: file is required".to_string()))?;

    let allowed = resume
        .content_type
        .as_deref()
        .map(|ct| ALLOWED_CONTENT_TYPES.contains(&ct))
        .unwrap_or(false);
    if !allowed {
        return Err(AppError::Validation(
            "Only PDF, DOC, DOCX files are allowed".to_string(),
        ));
    }

    if sanitize_file_name(&resume.file_name).is_none() {
        return Err(AppError::Validation("resume: file name is missing".to_string()));
    }

    if resume.data.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "resume: file exceeds the {max_bytes} byte limit"
        )));
    }

    Ok(resume)
}

/// Final path component of a client-supplied file name, if it has one.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    // Clients on Windows send backslash-separated paths.
    let normalized = raw.replace('\\', "/");
    Path::new(normalized.trim())
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .filter(|n| !n.is_empty())
}

/// Splits a comma-separated skill list, trimming entries and dropping empty ones.
pub fn parse_skill_set(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates every text field, collecting all violations rather than stopping at the first.
pub fn validate_submission(
    submission: &CandidateSubmission,
) -> Result<CandidateProfile, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let full_name = required(&mut violations, "full_name", &submission.full_name)
        .filter(|name| {
            let ok = name.chars().count() >= MIN_NAME_LEN;
            if !ok {
                violations.push(FieldViolation::new(
                    "full_name",
                    format!("must be at least {MIN_NAME_LEN} characters"),
                ));
            }
            ok
        });

    let dob = required(&mut violations, "dob", &submission.dob).and_then(|raw| {
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::new("dob", "must be a date in YYYY-MM-DD format"));
                None
            }
        }
    });

    let contact_number = required(&mut violations, "contact_number", &submission.contact_number)
        .filter(|number| {
            let ok = CONTACT_NUMBER_LEN.contains(&number.chars().count());
            if !ok {
                violations.push(FieldViolation::new(
                    "contact_number",
                    format!(
                        "must be between {} and {} characters",
                        CONTACT_NUMBER_LEN.start(),
                        CONTACT_NUMBER_LEN.end()
                    ),
                ));
            }
            ok
        });

    let contact_address = required(&mut violations, "contact_address", &submission.contact_address);
    let education_qualification = required(
        &mut violations,
        "education_qualification",
        &submission.education_qualification,
    );

    let graduation_year = required(&mut violations, "graduation_year", &submission.graduation_year)
        .and_then(|raw| match raw.parse::<i32>() {
            Ok(year) if GRADUATION_YEARS.contains(&year) => Some(year),
            Ok(_) => {
                violations.push(FieldViolation::new(
                    "graduation_year",
                    format!(
                        "must be between {} and {}",
                        GRADUATION_YEARS.start(),
                        GRADUATION_YEARS.end()
                    ),
                ));
                None
            }
            Err(_) => {
                violations.push(FieldViolation::new("graduation_year", "must be an integer"));
                None
            }
        });

    let years_of_experience = required(
        &mut violations,
        "years_of_experience",
        &submission.years_of_experience,
    )
    .and_then(|raw| match raw.parse::<f64>() {
        Ok(years) if years.is_finite() && years >= 0.0 => Some(years),
        Ok(_) => {
            violations.push(FieldViolation::new(
                "years_of_experience",
                "must be a non-negative number",
            ));
            None
        }
        Err(_) => {
            violations.push(FieldViolation::new("years_of_experience", "must be a number"));
            None
        }
    });

    let skill_set = submission
        .skill_set
        .as_deref()
        .map(parse_skill_set);
    if skill_set.is_none() {
        violations.push(FieldViolation::new("skill_set", "field is required"));
    }

    match (
        full_name,
        dob,
        contact_number,
        contact_address,
        education_qualification,
        graduation_year,
        years_of_experience,
        skill_set,
    ) {
        (
            Some(full_name),
            Some(dob),
            Some(contact_number),
            Some(contact_address),
            Some(education_qualification),
            Some(graduation_year),
            Some(years_of_experience),
            Some(skill_set),
        ) if violations.is_empty() => Ok(CandidateProfile {
            full_name,
            dob,
            contact_number,
            contact_address,
            education_qualification,
            graduation_year,
            years_of_experience,
            skill_set,
        }),
        _ => Err(violations),
    }
}

/// Trimmed value of a required field, or a "field is required" violation.
fn required(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &Option<String>,
) -> Option<String> {
    match value {
        Some(v) => Some(v.trim().to_string()),
        None => {
            violations.push(FieldViolation::new(field, "field is required"));
            None
        }
    }
}
