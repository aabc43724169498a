use contracts::usecases::u601_resume_analysis::{
    AnalysisResponse, FIELD_JOB_DESC, FIELD_RESUME_PDF,
};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use super::error::GatewayError;
use super::form::AnalysisForm;
use crate::shared::config::AnalysisConfig;
use crate::shared::format::format_number;

/// HTTP-клиент сервиса анализа
pub struct AnalysisUpstream {
    client: reqwest::Client,
    url: String,
}

impl AnalysisUpstream {
    pub fn new(config: &AnalysisConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            url: config.upstream_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends both parts under the same field names and returns the parsed JSON object
    pub async fn forward(&self, form: AnalysisForm) -> Result<AnalysisResponse, GatewayError> {
        let AnalysisForm { resume, job_desc } = form;
        let size = resume.bytes.len();

        let pdf = Part::bytes(resume.bytes)
            .file_name(resume.file_name.clone())
            .mime_str(&resume.content_type)
            .map_err(|_| GatewayError::InvalidPart {
                field: FIELD_RESUME_PDF,
                reason: format!("unsupported content type {:?}", resume.content_type),
            })?;
        let body = Form::new()
            .part(FIELD_RESUME_PDF, pdf)
            .text(FIELD_JOB_DESC, job_desc);

        tracing::info!(
            "Forwarding {} ({} bytes) to {}",
            resume.file_name,
            format_number(size),
            self.url
        );

        let response = self.client.post(&self.url).multipart(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus(status));
        }

        let analysis: AnalysisResponse = response.json().await?;
        tracing::info!(
            "Analysis received, reasoning: {} chars",
            format_number(analysis.reasoning().map(str::len).unwrap_or(0))
        );
        Ok(analysis)
    }
}
