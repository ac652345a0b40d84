pub mod preview;
pub mod request;
pub mod response;

pub use preview::{ExtractionPreview, PreviewLine, UNCATEGORIZED_LABEL};
pub use request::{descriptions_from_catalog, ExtractRequest, FieldDescriptions};
pub use response::{DocumentExtraction, ExtractResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct ExtractFields;

impl UseCaseMetadata for ExtractFields {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "extract_fields"
    }

    fn display_name() -> &'static str {
        "Extraction"
    }

    fn description() -> &'static str {
        "Extraction des champs du catalog dans chaque document"
    }
}
