pub mod request;
pub mod response;
pub mod state;

pub use request::{first_pdf, FileDescriptor, SelectedFile};
pub use response::{AnalysisResponse, ErrorResponse};
pub use state::{
    AnalysisSession, Phase, PreconditionError, SubmitGate, SubmitRejection, Submission,
};

use crate::usecases::common::UseCaseMetadata;

/// Path of the analysis endpoint on the gateway
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Multipart field carrying the resume PDF
pub const FIELD_RESUME_PDF: &str = "resume_pdf";

/// Multipart field carrying the job description text
pub const FIELD_JOB_DESC: &str = "job_desc";

/// The only MIME type the file selector accepts
pub const PDF_MIME: &str = "application/pdf";

pub struct ResumeAnalysis;

impl UseCaseMetadata for ResumeAnalysis {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "resume_analysis"
    }

    fn display_name() -> &'static str {
        "Job Scribe Analysis Hub"
    }

    fn description() -> &'static str {
        "Upload a resume PDF and job description to get AI-powered insights."
    }
}
