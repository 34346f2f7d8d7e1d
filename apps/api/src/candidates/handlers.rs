//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::candidates::models::{
    Candidate, CandidateFilter, CandidateSubmission, MessageResponse, ResumeUpload,
    UploadResponse,
};
use crate::candidates::service::{delete_candidate, find_candidate, register_candidate};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart part carrying the résumé file.
const RESUME_FIELD: &str = "resume";

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let (submission, resume) = read_upload_form(multipart).await?;

    let candidate_id = register_candidate(
        state.store.as_ref(),
        &state.files,
        &submission,
        resume,
        state.config.max_upload_bytes,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Candidate uploaded successfully".to_string(),
            candidate_id,
        }),
    ))
}

/// GET /candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(filter): Query<CandidateFilter>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let candidates = state.store.list().await?;
    Ok(Json(filter.apply(candidates)))
}

/// GET /candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = find_candidate(state.store.as_ref(), &id).await?;
    Ok(Json(candidate))
}

/// DELETE /candidates/:id
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    delete_candidate(state.store.as_ref(), &state.files, &id).await?;
    Ok(Json(MessageResponse {
        message: "Candidate deleted successfully".to_string(),
    }))
}

/// Drains every part of the form. Unknown parts are read and discarded.
async fn read_upload_form(
    mut multipart: Multipart,
) -> Result<(CandidateSubmission, Option<ResumeUpload>), AppError> {
    let mut submission = CandidateSubmission::default();
    let mut resume = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;
            resume = Some(ResumeUpload {
                file_name,
                content_type,
                data,
            });
            continue;
        }

        let value = field.text().await?;
        if !submission.set(&name, value) {
            tracing::debug!("Ignoring unexpected form field '{name}'");
        }
    }

    Ok((submission, resume))
}
