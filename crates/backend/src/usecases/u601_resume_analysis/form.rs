use axum::extract::Multipart;
use axum::http::header;
use contracts::usecases::u601_resume_analysis::{FIELD_JOB_DESC, FIELD_RESUME_PDF, PDF_MIME};

use super::error::GatewayError;

/// Uploaded resume as received from the browser
#[derive(Debug, Clone)]
pub struct ResumePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Both inputs of an analysis request
#[derive(Debug, Clone)]
pub struct AnalysisForm {
    pub resume: ResumePart,
    pub job_desc: String,
}

/// Читает multipart-форму; неизвестные поля пропускаются.
///
/// A missing part, or a blank job description, is `MissingInputs`.
/// An unparsable `Content-Type` on the resume part is `InvalidPart`.
pub async fn read_form(mut multipart: Multipart) -> Result<AnalysisForm, GatewayError> {
    let mut resume: Option<ResumePart> = None;
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIELD_RESUME_PDF => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let raw_type = field.headers().get(header::CONTENT_TYPE);
                let content_type = match (field.content_type(), raw_type) {
                    (Some(content_type), _) => content_type.to_string(),
                    (None, None) => PDF_MIME.to_string(),
                    // заголовок есть, но не разобрался как MIME
                    (None, Some(raw)) => {
                        return Err(GatewayError::InvalidPart {
                            field: FIELD_RESUME_PDF,
                            reason: format!("unsupported content type {:?}", raw),
                        });
                    }
                };
                let bytes = field.bytes().await?;
                resume = Some(ResumePart {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            FIELD_JOB_DESC => {
                job_desc = Some(field.text().await?);
            }
            _ => {
                tracing::debug!("Skipping unexpected multipart field: {:?}", name);
            }
        }
    }

    match (resume, job_desc) {
        (Some(resume), Some(job_desc)) if !job_desc.trim().is_empty() => {
            Ok(AnalysisForm { resume, job_desc })
        }
        (resume, job_desc) => {
            tracing::warn!(
                "Missing file or job_desc: resume={}, job_desc={}",
                resume.is_some(),
                job_desc.is_some()
            );
            Err(GatewayError::MissingInputs)
        }
    }
}
