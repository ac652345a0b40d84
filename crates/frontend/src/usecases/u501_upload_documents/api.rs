use crate::shared::files::{append_fields, form_with_files};
use crate::shared::remote;
use contracts::shared::error::ApiError;
use contracts::usecases::u501_upload_documents::{
    ExcelColumnsResponse, ExcelImportRequest, ExcelImportResponse, UploadResponse,
    DOCUMENT_FILES_FIELD, SPREADSHEET_FILE_FIELD,
};
use web_sys::File;

pub async fn upload_documents(files: Vec<File>) -> Result<UploadResponse, ApiError> {
    let form = form_with_files(DOCUMENT_FILES_FIELD, &files).map_err(ApiError::Network)?;
    remote::post_form("/upload", form).await
}

pub async fn get_excel_columns(file: File) -> Result<ExcelColumnsResponse, ApiError> {
    let form = form_with_files(SPREADSHEET_FILE_FIELD, &[file]).map_err(ApiError::Network)?;
    remote::post_form("/get_excel_columns", form).await
}

pub async fn upload_excel(
    file: File,
    request: ExcelImportRequest,
) -> Result<ExcelImportResponse, ApiError> {
    let form = form_with_files(SPREADSHEET_FILE_FIELD, &[file]).map_err(ApiError::Network)?;
    append_fields(&form, &request.form_fields()).map_err(ApiError::Network)?;
    remote::post_form("/upload_excel", form).await
}
