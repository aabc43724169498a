//! Resume Analysis - API client

use contracts::usecases::u601_resume_analysis::{
    AnalysisResponse, Submission, ANALYZE_PATH, FIELD_JOB_DESC, FIELD_RESUME_PDF,
};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use super::view_model::PickedFile;
use crate::shared::api_utils::api_url;

/// Any of these is shown to the user the same way
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("bad response body: {0}")]
    Parse(String),
}

fn transport(e: JsValue) -> AnalysisError {
    AnalysisError::Transport(format!("{e:?}"))
}

/// POST /api/analyze с multipart-формой (resume_pdf + job_desc).
///
/// Exactly one request is issued; no retry, no timeout.
pub async fn analyze(submission: &Submission<PickedFile>) -> Result<AnalysisResponse, AnalysisError> {
    let form_data = FormData::new().map_err(transport)?;
    form_data
        .append_with_blob_and_filename(
            FIELD_RESUME_PDF,
            &submission.file.handle,
            &submission.file.meta.name,
        )
        .map_err(transport)?;
    form_data
        .append_with_str(FIELD_JOB_DESC, &submission.job_description)
        .map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(ANALYZE_PATH);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| AnalysisError::Transport("no window".into()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        return Err(AnalysisError::Http(resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let text: String = text
        .as_string()
        .ok_or_else(|| AnalysisError::Parse("body is not text".into()))?;
    serde_json::from_str(&text).map_err(|e| AnalysisError::Parse(e.to_string()))
}
