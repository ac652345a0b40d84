pub mod highlights;
pub mod justify_run;
pub mod request;
pub mod response;

pub use highlights::{justified_highlights, value_highlight};
pub use justify_run::JustifyRun;
pub use request::{ExportFormat, JustifyRequest, UpdateDocumentRequest};
pub use response::JustifyResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ValidateFields;

impl UseCaseMetadata for ValidateFields {
    fn usecase_index() -> &'static str {
        "u505"
    }

    fn usecase_name() -> &'static str {
        "validate_fields"
    }

    fn display_name() -> &'static str {
        "Validation"
    }

    fn description() -> &'static str {
        "Vérification, justification et export des valeurs extraites"
    }
}
