pub mod api;
pub mod file_selector;
pub mod job_description;
pub mod view;
pub mod view_model;

pub use view::ResumeAnalysisPage;
