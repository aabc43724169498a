use axum::extract::{Multipart, State};
use axum::Json;
use contracts::usecases::u601_resume_analysis::AnalysisResponse;
use std::sync::Arc;

use crate::usecases::u601_resume_analysis::{read_form, AnalysisUpstream, GatewayError};

/// POST /api/analyze
pub async fn analyze(
    State(upstream): State<Arc<AnalysisUpstream>>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, GatewayError> {
    tracing::info!("/api/analyze was called");
    let form = read_form(multipart).await?;
    tracing::info!(
        "Received {} ({}), job_desc: {} chars",
        form.resume.file_name,
        form.resume.content_type,
        form.job_desc.chars().count()
    );
    let analysis = upstream.forward(form).await?;
    Ok(Json(analysis))
}
