/// UseCase metadata used for identification and page titles
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "upload_documents")
    fn usecase_name() -> &'static str;

    /// Name shown in the navigation header
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_upload_documents"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
