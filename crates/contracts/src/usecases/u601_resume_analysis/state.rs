//! Submission state machine of the analysis page.
//!
//! The file axis and the text axis are independent. The page owns one
//! [`AnalysisSession`]; the text itself stays in the input panel, the
//! session only tracks whether it is blank (see [`AnalysisSession::edit_text`]).
//!
//! A successful result colours the phase until the next input change.
//! A failure does not: the phase falls back to the file/text state.

use thiserror::Error;

use super::request::FileDescriptor;
use super::response::AnalysisResponse;

/// Видимая фаза страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileOnly,
    TextOnly,
    Ready,
    Submitting,
    Succeeded,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::FileOnly => "file-only",
            Phase::TextOnly => "text-only",
            Phase::Ready => "ready",
            Phase::Submitting => "submitting",
            Phase::Succeeded => "succeeded",
        }
    }
}

/// Whether "Run Analysis" may be pressed right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    Open,
    MissingFile,
    MissingText,
    InFlight,
}

impl SubmitGate {
    /// Missing file wins over missing text.
    pub fn evaluate(has_file: bool, text: &str, in_flight: bool) -> Self {
        if !has_file {
            SubmitGate::MissingFile
        } else if text.trim().is_empty() {
            SubmitGate::MissingText
        } else if in_flight {
            SubmitGate::InFlight
        } else {
            SubmitGate::Open
        }
    }

    pub fn is_open(self) -> bool {
        self == SubmitGate::Open
    }

    /// Hint shown under the disabled button
    pub fn hint(self) -> Option<&'static str> {
        match self {
            SubmitGate::Open => None,
            SubmitGate::MissingFile => Some("Please upload a PDF resume first"),
            SubmitGate::MissingText => Some("Please enter a job description"),
            SubmitGate::InFlight => Some("Analysis in progress..."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("resume PDF is not selected")]
    MissingFile,
    #[error("job description is empty")]
    MissingText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error("an analysis request is already in flight")]
    InFlight,
}

/// Everything needed to build the multipart request
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub file: F,
    /// Raw text as typed, not trimmed
    pub job_description: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisSession<F> {
    file: Option<F>,
    job_description: String,
    has_text: bool,
    result: Option<AnalysisResponse>,
    in_flight: bool,
    // результат получен, ввод с тех пор не менялся
    fresh_result: bool,
}

impl<F> Default for AnalysisSession<F> {
    fn default() -> Self {
        Self {
            file: None,
            job_description: String::new(),
            has_text: false,
            result: None,
            in_flight: false,
            fresh_result: false,
        }
    }
}

impl<F: FileDescriptor + Clone> AnalysisSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces (or clears) the file axis; allowed in any phase
    pub fn select_file(&mut self, file: Option<F>) {
        self.file = file;
        self.fresh_result = false;
    }

    /// Called on every edit of the job description; allowed in any phase
    pub fn edit_text(&mut self, text: &str) {
        self.has_text = !text.trim().is_empty();
        self.fresh_result = false;
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Text of the last accepted submission
    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn result(&self) -> Option<&AnalysisResponse> {
        self.result.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn gate(&self, text: &str) -> SubmitGate {
        SubmitGate::evaluate(self.file.is_some(), text, self.in_flight)
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            return Phase::Submitting;
        }
        if self.fresh_result {
            return Phase::Succeeded;
        }
        match (self.file.is_some(), self.has_text) {
            (false, false) => Phase::Idle,
            (true, false) => Phase::FileOnly,
            (false, true) => Phase::TextOnly,
            (true, true) => Phase::Ready,
        }
    }

    /// Re-checks the preconditions at the point of use and marks the
    /// session as in flight.
    ///
    /// This is independent of the disabled button: the page must not rely
    /// on the button state alone.
    pub fn begin_submission(&mut self, text: &str) -> Result<Submission<F>, SubmitRejection> {
        self.has_text = !text.trim().is_empty();
        let file = self.file.clone().ok_or(PreconditionError::MissingFile)?;
        if text.trim().is_empty() {
            return Err(PreconditionError::MissingText.into());
        }
        if self.in_flight {
            return Err(SubmitRejection::InFlight);
        }

        self.in_flight = true;
        self.job_description = text.to_string();
        Ok(Submission {
            file,
            job_description: text.to_string(),
        })
    }

    /// Stores the response wholesale, dropping the previous one
    pub fn complete_success(&mut self, response: AnalysisResponse) {
        self.in_flight = false;
        self.result = Some(response);
        self.fresh_result = true;
    }

    /// Leaves the previous result untouched
    pub fn complete_failure(&mut self) {
        self.in_flight = false;
        self.fresh_result = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_resume_analysis::{SelectedFile, PDF_MIME};

    const JOB: &str = "Senior backend engineer, 5+ years Go";

    fn resume() -> SelectedFile {
        SelectedFile::new("resume.pdf", 1_258_291, PDF_MIME)
    }

    fn response(text: &str) -> AnalysisResponse {
        AnalysisResponse {
            analysis_reasoning: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_gate_requires_file_and_text() {
        let cases = [
            (false, "", SubmitGate::MissingFile),
            (false, JOB, SubmitGate::MissingFile),
            (true, "", SubmitGate::MissingText),
            (true, "  \n\t ", SubmitGate::MissingText),
            (true, JOB, SubmitGate::Open),
            (true, "  x  ", SubmitGate::Open),
        ];
        for (has_file, text, expected) in cases {
            assert_eq!(SubmitGate::evaluate(has_file, text, false), expected, "{text:?}");
        }
    }

    #[test]
    fn test_gate_follows_text_edits() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));

        let mut text = String::new();
        for ch in "  Go ".chars() {
            text.push(ch);
            let expected = !text.trim().is_empty();
            assert_eq!(session.gate(&text).is_open(), expected, "{text:?}");
        }
        while text.pop().is_some() {
            let expected = !text.trim().is_empty();
            assert_eq!(session.gate(&text).is_open(), expected, "{text:?}");
        }
    }

    #[test]
    fn test_hint_prefers_missing_file() {
        assert_eq!(
            SubmitGate::evaluate(false, "", false).hint(),
            Some("Please upload a PDF resume first")
        );
        assert_eq!(
            SubmitGate::evaluate(true, "", false).hint(),
            Some("Please enter a job description")
        );
        assert_eq!(SubmitGate::evaluate(true, JOB, false).hint(), None);
    }

    #[test]
    fn test_submit_without_file_is_rejected() {
        let mut session: AnalysisSession<SelectedFile> = AnalysisSession::new();
        let err = session.begin_submission(JOB).unwrap_err();
        assert_eq!(err, SubmitRejection::Precondition(PreconditionError::MissingFile));
        assert!(!session.is_in_flight());
        assert_eq!(session.phase(), Phase::TextOnly);
    }

    #[test]
    fn test_submit_with_blank_text_is_rejected() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        let err = session.begin_submission("   ").unwrap_err();
        assert_eq!(err, SubmitRejection::Precondition(PreconditionError::MissingText));
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_successful_round() {
        let mut session = AnalysisSession::new();
        assert_eq!(session.phase(), Phase::Idle);

        session.select_file(Some(resume()));
        assert_eq!(session.phase(), Phase::FileOnly);
        session.edit_text(JOB);
        assert_eq!(session.phase(), Phase::Ready);

        let submission = session.begin_submission(JOB).unwrap();
        assert_eq!(submission.file.name, "resume.pdf");
        assert_eq!(submission.job_description, JOB);
        assert_eq!(session.phase(), Phase::Submitting);
        assert_eq!(session.gate(JOB), SubmitGate::InFlight);

        session.complete_success(response("Strong match on backend experience."));
        assert_eq!(session.phase(), Phase::Succeeded);
        assert_eq!(
            session.result().and_then(|r| r.reasoning()),
            Some("Strong match on backend experience.")
        );
        assert!(session.gate(JOB).is_open());
    }

    #[test]
    fn test_raw_text_is_sent_untrimmed() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        let submission = session.begin_submission("  Rust\n").unwrap();
        assert_eq!(submission.job_description, "  Rust\n");
        assert_eq!(session.job_description(), "  Rust\n");
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));

        session.begin_submission(JOB).unwrap();
        session.complete_success(response("first"));

        session.begin_submission(JOB).unwrap();
        session.complete_failure();

        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.result().and_then(|r| r.reasoning()), Some("first"));
        assert!(session.file().is_some());
        assert!(session.gate(JOB).is_open());
    }

    #[test]
    fn test_new_result_replaces_old() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));

        session.begin_submission(JOB).unwrap();
        session.complete_success(response("first"));
        session.begin_submission(JOB).unwrap();
        session.complete_success(AnalysisResponse::default());

        assert_eq!(session.result(), Some(&AnalysisResponse::default()));
    }

    #[test]
    fn test_second_submit_while_in_flight() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        session.begin_submission(JOB).unwrap();

        assert_eq!(session.begin_submission(JOB), Err(SubmitRejection::InFlight));
        session.complete_failure();
        assert!(session.begin_submission(JOB).is_ok());
    }

    #[test]
    fn test_file_can_change_during_request() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        let submission = session.begin_submission(JOB).unwrap();

        session.select_file(None);
        assert!(session.file().is_none());
        // запрос уже ушёл со старым файлом
        assert_eq!(submission.file, resume());

        session.complete_success(response("done"));
        assert_eq!(session.gate(JOB), SubmitGate::MissingFile);
    }

    #[test]
    fn test_reselect_same_file_after_removal() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        session.select_file(None);
        assert_eq!(session.phase(), Phase::Idle);

        session.select_file(Some(resume()));
        assert_eq!(session.file(), Some(&resume()));
    }

    #[test]
    fn test_success_then_clear_file_reverts_to_axis_state() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        session.begin_submission(JOB).unwrap();
        session.complete_success(response("done"));
        assert_eq!(session.phase(), Phase::Succeeded);

        session.select_file(None);
        assert_eq!(session.phase(), Phase::TextOnly);
        session.edit_text("");
        assert_eq!(session.phase(), Phase::Idle);
        // результат остаётся на экране
        assert_eq!(session.result().and_then(|r| r.reasoning()), Some("done"));
    }

    #[test]
    fn test_success_then_text_edit_leaves_succeeded() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        session.begin_submission(JOB).unwrap();
        session.complete_success(response("done"));

        session.edit_text("Senior backend engineer, 5+ years Go and Rust");
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn test_failure_reverts_to_preceding_state() {
        let mut session = AnalysisSession::new();
        session.select_file(Some(resume()));
        session.edit_text(JOB);
        session.begin_submission(JOB).unwrap();
        session.complete_failure();
        assert_eq!(session.phase(), Phase::Ready);

        session.edit_text(" ");
        assert_eq!(session.phase(), Phase::FileOnly);
    }

    #[test]
    fn test_phase_follows_live_text() {
        let mut session: AnalysisSession<SelectedFile> = AnalysisSession::new();
        session.edit_text("R");
        assert_eq!(session.phase(), Phase::TextOnly);
        session.select_file(Some(resume()));
        assert_eq!(session.phase(), Phase::Ready);
        session.edit_text("");
        assert_eq!(session.phase(), Phase::FileOnly);
    }
}
