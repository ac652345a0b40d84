pub mod request;
pub mod response;

pub use request::{ExcelImportRequest, DOCUMENT_FILES_FIELD, SPREADSHEET_FILE_FIELD};
pub use response::{ExcelColumnsResponse, ExcelImportResponse, ImportedRow, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct UploadDocuments;

impl UseCaseMetadata for UploadDocuments {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_documents"
    }

    fn display_name() -> &'static str {
        "Upload"
    }

    fn description() -> &'static str {
        "Chargement de documents ou de lignes d'un fichier Excel/CSV"
    }
}
