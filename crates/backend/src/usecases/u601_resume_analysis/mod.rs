//! u601: приём резюме и описания вакансии и передача их сервису анализа.

pub mod error;
pub mod form;
pub mod upstream;

pub use error::GatewayError;
pub use form::{read_form, AnalysisForm, ResumePart};
pub use upstream::AnalysisUpstream;
