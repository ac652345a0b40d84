pub mod field_count;
pub mod request;
pub mod response;

pub use field_count::{FieldCount, DEFAULT_FIELD_COUNT, MAX_FIELD_COUNT, MIN_FIELD_COUNT};
pub use request::{
    CatalogEnvelope, DescriptionsRequest, FieldNeedingDescription, GenerateAllFieldsRequest,
    GenerateFieldsRequest, CATALOG_FILE_FIELD, CATALOG_FILE_NAME,
};
pub use response::{
    CategoryGenerationResult, DescriptionsResponse, GenerateAllFieldsResponse,
    GenerateFieldsResponse, GeneratedDescription, GeneratedField, UploadCatalogResponse,
};

use crate::usecases::common::UseCaseMetadata;

pub struct DefineCatalog;

impl UseCaseMetadata for DefineCatalog {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "define_catalog"
    }

    fn display_name() -> &'static str {
        "Champs"
    }

    fn description() -> &'static str {
        "Définition des champs à extraire pour chaque catégorie"
    }
}
