use super::api;
use crate::shared::status::StatusService;
use contracts::domain::a001_document::Document;
use contracts::shared::error::{ClientError, ValidationError};
use contracts::usecases::u501_upload_documents::{ExcelColumnsResponse, ExcelImportRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// Upload page state: uploaded cards and the spreadsheet import form
#[derive(Clone, Copy)]
pub struct UploadVm {
    pub documents: RwSignal<Vec<Document>>,
    pub uploading: RwSignal<bool>,

    /// Spreadsheet waiting for its import settings
    excel_file: StoredValue<Option<File>, LocalStorage>,
    pub excel_name: RwSignal<Option<String>>,
    pub columns: RwSignal<ExcelColumnsResponse>,
    pub text_column: RwSignal<String>,
    pub title_column: RwSignal<String>,
    pub start_row: RwSignal<String>,
    pub end_row: RwSignal<String>,

    /// Document shown in the preview modal
    pub preview_id: RwSignal<Option<String>>,

    status: StatusService,
}

impl UploadVm {
    pub fn new(status: StatusService) -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            uploading: RwSignal::new(false),
            excel_file: StoredValue::new_local(None),
            excel_name: RwSignal::new(None),
            columns: RwSignal::new(ExcelColumnsResponse::default()),
            text_column: RwSignal::new(String::new()),
            title_column: RwSignal::new(String::new()),
            start_row: RwSignal::new("1".to_string()),
            end_row: RwSignal::new(String::new()),
            preview_id: RwSignal::new(None),
            status,
        }
    }

    pub fn upload_files(&self, files: Vec<File>) {
        if files.is_empty() {
            self.status.report(&ValidationError::NoFileSelected.into(), "");
            return;
        }
        let this = *self;
        this.uploading.set(true);
        spawn_local(async move {
            match api::upload_documents(files).await {
                Ok(response) => {
                    log::info!("{} documents uploaded", response.documents.len());
                    let count = response.documents.len();
                    this.documents.update(|docs| docs.extend(response.documents));
                    this.status.success(format!("{} documents chargés", count));
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors de l'upload"),
            }
            this.uploading.set(false);
        });
    }

    /// Reads the columns of a spreadsheet and opens the import form
    pub fn select_excel(&self, file: File) {
        let this = *self;
        this.excel_name.set(Some(file.name()));
        this.excel_file.set_value(Some(file.clone()));
        this.text_column.set(String::new());
        this.title_column.set(String::new());
        spawn_local(async move {
            match api::get_excel_columns(file).await {
                Ok(columns) => this.columns.set(columns),
                Err(e) => {
                    this.status.report(
                        &ClientError::from(e),
                        "Erreur lors de la lecture du fichier",
                    );
                    this.cancel_excel();
                }
            }
        });
    }

    pub fn import_request(&self) -> Result<ExcelImportRequest, ValidationError> {
        let text_column = self.text_column.get_untracked();
        if text_column.is_empty() {
            return Err(ValidationError::MissingTextColumn);
        }
        Ok(ExcelImportRequest {
            text_column,
            title_column: self.title_column.get_untracked(),
            start_row: ExcelImportRequest::parse_row(&self.start_row.get_untracked(), 1),
            end_row: ExcelImportRequest::parse_row(&self.end_row.get_untracked(), 0),
        })
    }

    pub fn process_excel(&self) {
        let Some(file) = self.excel_file.get_value() else {
            self.status.report(&ValidationError::NoFileSelected.into(), "");
            return;
        };
        let request = match self.import_request() {
            Ok(request) => request,
            Err(e) => {
                self.status.report(&e.into(), "");
                return;
            }
        };

        let this = *self;
        this.uploading.set(true);
        spawn_local(async move {
            match api::upload_excel(file, request).await {
                Ok(response) => {
                    this.status.success(response.message());
                    this.documents.update(|docs| {
                        docs.extend(response.documents.into_iter().map(|row| row.into_document()))
                    });
                    this.cancel_excel();
                }
                Err(e) => this
                    .status
                    .report(&ClientError::from(e), "Erreur lors du traitement"),
            }
            this.uploading.set(false);
        });
    }

    pub fn cancel_excel(&self) {
        self.excel_file.set_value(None);
        self.excel_name.set(None);
        self.columns.set(ExcelColumnsResponse::default());
    }
}
