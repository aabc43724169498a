pub mod common;
pub mod u601_resume_analysis;
