pub mod request;
pub mod response;

pub use request::{ClusterRequest, OrganizeRequest, UpdateCategoryRequest};
pub use response::{
    CategoriesResponse, ClusterResponse, DocumentsResponse, OrganizeResponse, OrganizedDocument,
    VisualizationResponse,
};

use crate::usecases::common::UseCaseMetadata;

pub struct CategorizeDocuments;

impl UseCaseMetadata for CategorizeDocuments {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "categorize_documents"
    }

    fn display_name() -> &'static str {
        "Catégorisation"
    }

    fn description() -> &'static str {
        "Regroupement des documents par catégorie, manuel ou assisté par IA"
    }
}
