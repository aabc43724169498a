/// Identity of a UseCase, shared by the page header and the gateway logs
pub trait UseCaseMetadata {
    /// Short index, e.g. "u601"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "resume_analysis"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u601_resume_analysis"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
