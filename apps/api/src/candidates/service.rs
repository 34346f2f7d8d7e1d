use std::path::Path;

use tracing::{info, warn};
use uuid::Uuid;

use crate::candidates::files::ResumeFiles;
use crate::candidates::models::{Candidate, CandidateSubmission, ResumeUpload};
use crate::candidates::store::CandidateStore;
use crate::candidates::validation::{
    describe, sanitize_file_name, validate_resume, validate_submission,
};
use crate::errors::AppError;

/// Validates a submission, writes the résumé, and stores the new record.
///
/// Nothing touches disk or the store until every check has passed. If the
/// store rejects the record, the file just written is removed again.
pub async fn register_candidate(
    store: &dyn CandidateStore,
    files: &ResumeFiles,
    submission: &CandidateSubmission,
    resume: Option<ResumeUpload>,
    max_upload_bytes: usize,
) -> Result<Uuid, AppError> {
    let resume = validate_resume(resume, max_upload_bytes).inspect_err(|e| {
        warn!("Rejected resume upload: {e}");
    })?;

    let profile = validate_submission(submission).map_err(|violations| {
        let message = describe(&violations);
        warn!("Rejected candidate submission: {message}");
        AppError::Validation(message)
    })?;

    let file_name = sanitize_file_name(&resume.file_name)
        .ok_or_else(|| AppError::Validation("resume: file name is missing".to_string()))?;

    let id = Uuid::new_v4();
    let path = files.save(id, &file_name, &resume.data).await?;
    let candidate = profile.into_candidate(id, path.to_string_lossy().into_owned());

    if let Err(e) = store.put(candidate).await {
        files.remove(&path).await?;
        return Err(e);
    }

    info!(candidate_id = %id, bytes = resume.data.len(), "Candidate uploaded");
    Ok(id)
}

pub async fn find_candidate(store: &dyn CandidateStore, id: &str) -> Result<Candidate, AppError> {
    let id = parse_id(id)?;
    store
        .get(id)
        .await?
        .ok_or_else(AppError::candidate_not_found)
}

/// Deletes the résumé file, then the record.
///
/// A file that is already gone is not an error. Any other file-system failure
/// leaves the record in place so it never points at a file that was half
/// cleaned up.
pub async fn delete_candidate(
    store: &dyn CandidateStore,
    files: &ResumeFiles,
    id: &str,
) -> Result<(), AppError> {
    let candidate = find_candidate(store, id).await?;

    let removed = files.remove(Path::new(&candidate.resume_filename)).await?;
    if !removed {
        warn!(candidate_id = %candidate.id, "Resume file was already missing");
    }

    store
        .delete(candidate.id)
        .await?
        .ok_or_else(AppError::candidate_not_found)?;

    info!(candidate_id = %candidate.id, "Candidate deleted");
    Ok(())
}

/// Ids that are not UUIDs cannot name a stored candidate.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::candidate_not_found())
}
