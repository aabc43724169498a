use serde::{Deserialize, Serialize};

use super::PDF_MIME;

/// Метаданные выбранного файла резюме
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Only the MIME type reported by the browser is checked, never the content
    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }

    /// Size in megabytes with two decimals, e.g. "1.20 MB"
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// Anything that carries [`SelectedFile`] metadata (the browser wraps a `File` handle with it)
pub trait FileDescriptor {
    fn descriptor(&self) -> &SelectedFile;
}

impl FileDescriptor for SelectedFile {
    fn descriptor(&self) -> &SelectedFile {
        self
    }
}

/// First candidate whose MIME type is exactly `application/pdf`.
///
/// Used for both drops (whole dropped set) and dialog picks (only the first
/// picked file is offered). `None` means the selection must stay as it was.
pub fn first_pdf<T, I>(candidates: I) -> Option<T>
where
    T: FileDescriptor,
    I: IntoIterator<Item = T>,
{
    candidates
        .into_iter()
        .find(|candidate| candidate.descriptor().is_pdf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size() {
        let resume = SelectedFile::new("resume.pdf", 1_258_291, PDF_MIME);
        assert_eq!(resume.display_size(), "1.20 MB");
        assert_eq!(SelectedFile::new("a.pdf", 0, PDF_MIME).display_size(), "0.00 MB");
        assert_eq!(
            SelectedFile::new("b.pdf", 3 * 1024 * 1024, PDF_MIME).display_size(),
            "3.00 MB"
        );
    }

    #[test]
    fn test_first_pdf_skips_other_types() {
        let dropped = vec![
            SelectedFile::new("photo.png", 10, "image/png"),
            SelectedFile::new("resume.pdf", 20, PDF_MIME),
            SelectedFile::new("second.pdf", 30, PDF_MIME),
        ];
        let picked = first_pdf(dropped).map(|f| f.name);
        assert_eq!(picked.as_deref(), Some("resume.pdf"));
    }

    #[test]
    fn test_first_pdf_ignores_non_pdf() {
        let dropped = vec![
            SelectedFile::new("notes.txt", 10, "text/plain"),
            // расширение не важно, только MIME
            SelectedFile::new("fake.pdf", 10, "application/octet-stream"),
        ];
        assert!(first_pdf(dropped).is_none());
        assert!(first_pdf(Vec::<SelectedFile>::new()).is_none());
    }

    #[test]
    fn test_first_pdf_single_pick() {
        let pick = Some(SelectedFile::new("cv.docx", 10, "application/msword"));
        assert!(first_pdf(pick).is_none());

        let pick = Some(SelectedFile::new("cv.pdf", 10, PDF_MIME));
        assert_eq!(first_pdf(pick).map(|f| f.name).as_deref(), Some("cv.pdf"));
    }

    #[test]
    fn test_mime_must_match_exactly() {
        assert!(!SelectedFile::new("x.pdf", 1, "application/PDF").is_pdf());
        assert!(!SelectedFile::new("x.pdf", 1, "application/pdf; charset=binary").is_pdf());
        assert!(SelectedFile::new("x.pdf", 1, "application/pdf").is_pdf());
    }
}
