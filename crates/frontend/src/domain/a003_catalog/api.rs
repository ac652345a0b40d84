use crate::shared::files::form_with_files;
use crate::shared::remote;
use contracts::domain::a003_catalog::Catalog;
use contracts::shared::error::ApiError;
use contracts::usecases::common::Ack;
use contracts::usecases::u503_define_catalog::{
    CatalogEnvelope, UploadCatalogResponse, CATALOG_FILE_FIELD,
};
use web_sys::File;

pub async fn get_catalog() -> Result<Catalog, ApiError> {
    let response: CatalogEnvelope = remote::get_json("/get_catalog").await?;
    Ok(response.catalog)
}

pub async fn save_catalog(catalog: Catalog) -> Result<(), ApiError> {
    let request = CatalogEnvelope { catalog };
    let _: Ack = remote::post_json("/save_catalog", &request).await?;
    Ok(())
}

/// Catalog as stored on the server, for download
pub async fn download_catalog() -> Result<Catalog, ApiError> {
    remote::get_json("/download_catalog").await
}

pub async fn upload_catalog(file: File) -> Result<Catalog, ApiError> {
    let form = form_with_files(CATALOG_FILE_FIELD, &[file]).map_err(ApiError::Network)?;
    let response: UploadCatalogResponse = remote::post_form("/upload_catalog", form).await?;
    Ok(response.catalog)
}
