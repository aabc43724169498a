//! Resume Analysis - View Model

use contracts::usecases::u601_resume_analysis::{AnalysisSession, FileDescriptor, SelectedFile};
use leptos::prelude::*;

/// Browser file handle together with its metadata
#[derive(Clone)]
pub struct PickedFile {
    pub meta: SelectedFile,
    pub handle: web_sys::File,
}

impl PickedFile {
    pub fn from_file(handle: web_sys::File) -> Self {
        let meta = SelectedFile::new(handle.name(), handle.size() as u64, handle.type_());
        Self { meta, handle }
    }
}

impl FileDescriptor for PickedFile {
    fn descriptor(&self) -> &SelectedFile {
        &self.meta
    }
}

/// Состояние страницы: файл, последний результат, признак отправки.
///
/// `web_sys::File` is not `Send`, hence the local storage.
#[derive(Clone, Copy)]
pub struct ResumeAnalysisVm {
    pub session: RwSignal<AnalysisSession<PickedFile>, LocalStorage>,
}

impl ResumeAnalysisVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(AnalysisSession::new()),
        }
    }

    pub fn select_file(&self, file: Option<PickedFile>) {
        match &file {
            Some(f) => log::info!("Resume selected: {} ({})", f.meta.name, f.meta.display_size()),
            None => log::info!("Resume removed"),
        }
        self.session.update(|session| session.select_file(file));
    }

    pub fn edit_text(&self, text: &str) {
        self.session.update(|session| session.edit_text(text));
    }

    pub fn has_file(&self) -> bool {
        self.session.with(|session| session.file().is_some())
    }

    pub fn is_in_flight(&self) -> bool {
        self.session.with(|session| session.is_in_flight())
    }

    /// `analysis_reasoning` of the current result
    pub fn reasoning(&self) -> Option<String> {
        self.session.with(|session| {
            session
                .result()
                .and_then(|result| result.reasoning())
                .map(str::to_string)
        })
    }

    pub fn phase_name(&self) -> &'static str {
        self.session.with(|session| session.phase().as_str())
    }
}

impl Default for ResumeAnalysisVm {
    fn default() -> Self {
        Self::new()
    }
}
