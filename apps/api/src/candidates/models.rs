use bytes::Bytes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored application: validated candidate metadata plus the path of the
/// résumé file written for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub full_name: String,
    pub dob: NaiveDate,
    pub contact_number: String,
    pub contact_address: String,
    pub education_qualification: String,
    pub graduation_year: i32,
    pub years_of_experience: f64,
    pub skill_set: Vec<String>,
    pub resume_filename: String,
}

/// Candidate metadata that passed validation but has no id or file yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProfile {
    pub full_name: String,
    pub dob: NaiveDate,
    pub contact_number: String,
    pub contact_address: String,
    pub education_qualification: String,
    pub graduation_year: i32,
    pub years_of_experience: f64,
    pub skill_set: Vec<String>,
}

impl CandidateProfile {
    pub fn into_candidate(self, id: Uuid, resume_filename: String) -> Candidate {
        Candidate {
            id,
            full_name: self.full_name,
            dob: self.dob,
            contact_number: self.contact_number,
            contact_address: self.contact_address,
            education_qualification: self.education_qualification,
            graduation_year: self.graduation_year,
            years_of_experience: self.years_of_experience,
            skill_set: self.skill_set,
            resume_filename,
        }
    }
}

/// The uploaded résumé part of a submission.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Raw text fields of an upload form, exactly as received.
#[derive(Debug, Clone, Default)]
pub struct CandidateSubmission {
    pub full_name: Option<String>,
    pub dob: Option<String>,
    pub contact_number: Option<String>,
    pub contact_address: Option<String>,
    pub education_qualification: Option<String>,
    pub graduation_year: Option<String>,
    pub years_of_experience: Option<String>,
    pub skill_set: Option<String>,
}

impl CandidateSubmission {
    /// Records a text part by name. Returns false for names that are not form fields.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "full_name" => &mut self.full_name,
            "dob" => &mut self.dob,
            "contact_number" => &mut self.contact_number,
            "contact_address" => &mut self.contact_address,
            "education_qualification" => &mut self.education_qualification,
            "graduation_year" => &mut self.graduation_year,
            "years_of_experience" => &mut self.years_of_experience,
            "skill_set" => &mut self.skill_set,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// Query parameters accepted by `GET /candidates`. All filters are ANDed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateFilter {
    pub skill: Option<String>,
    pub experience: Option<f64>,
    pub graduation_year: Option<i32>,
}

impl CandidateFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if let Some(skill) = self.skill.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let wanted = skill.to_lowercase();
            if !candidate
                .skill_set
                .iter()
                .any(|s| s.to_lowercase() == wanted)
            {
                return false;
            }
        }

        if let Some(min_years) = self.experience {
            if candidate.years_of_experience < min_years {
                return false;
            }
        }

        if let Some(year) = self.graduation_year {
            if candidate.graduation_year != year {
                return false;
            }
        }

        true
    }

    /// Keeps the candidates that match, preserving their order.
    pub fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub candidate_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
pub(crate) fn sample_candidate(name: &str, skills: &[&str], years: f64, grad: i32) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        full_name: name.to_string(),
        dob: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
        contact_number: "9876543210".to_string(),
        contact_address: "12 Baker Street".to_string(),
        education_qualification: "B.Tech".to_string(),
        graduation_year: grad,
        years_of_experience: years,
        skill_set: skills.iter().map(|s| s.to_string()).collect(),
        resume_filename: format!("resumes/{name}.pdf"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let c = sample_candidate("Asha", &["Rust"], 1.0, 2018);
        assert!(CandidateFilter::default().matches(&c));
    }

    #[test]
    fn test_skill_filter_is_case_insensitive() {
        let c = sample_candidate("Asha", &["Python", "SQL"], 4.0, 2018);
        let filter = CandidateFilter {
            skill: Some("python".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&c));
    }

    #[test]
    fn test_skill_filter_requires_whole_entry() {
        let c = sample_candidate("Asha", &["JavaScript"], 4.0, 2018);
        let filter = CandidateFilter {
            skill: Some("java".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&c));
    }

    #[test]
    fn test_blank_skill_is_ignored() {
        let c = sample_candidate("Asha", &[], 4.0, 2018);
        let filter = CandidateFilter {
            skill: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&c));
    }

    #[test]
    fn test_experience_is_inclusive_minimum() {
        let filter = CandidateFilter {
            experience: Some(3.0),
            ..Default::default()
        };
        assert!(!filter.matches(&sample_candidate("Below", &[], 2.9, 2018)));
        assert!(filter.matches(&sample_candidate("Exact", &[], 3.0, 2018)));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let filter = CandidateFilter {
            skill: Some("rust".to_string()),
            experience: Some(2.0),
            graduation_year: Some(2020),
        };
        assert!(filter.matches(&sample_candidate("All", &["Rust"], 5.0, 2020)));
        assert!(!filter.matches(&sample_candidate("WrongYear", &["Rust"], 5.0, 2019)));
        assert!(!filter.matches(&sample_candidate("NoSkill", &["Go"], 5.0, 2020)));
    }

    #[test]
    fn test_apply_preserves_order() {
        let list = vec![
            sample_candidate("First", &["Rust"], 1.0, 2020),
            sample_candidate("Skip", &["Go"], 1.0, 2020),
            sample_candidate("Second", &["rust"], 1.0, 2020),
        ];
        let filter = CandidateFilter {
            skill: Some("RUST".to_string()),
            ..Default::default()
        };
        let names: Vec<_> = filter
            .apply(list)
            .into_iter()
            .map(|c| c.full_name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_submission_set_ignores_unknown_fields() {
        let mut s = CandidateSubmission::default();
        assert!(s.set("full_name", "Asha".to_string()));
        assert!(!s.set("nickname", "A".to_string()));
        assert_eq!(s.full_name.as_deref(), Some("Asha"));
    }
}
