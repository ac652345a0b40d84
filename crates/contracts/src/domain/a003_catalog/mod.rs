pub mod aggregate;
pub mod overview;
pub mod store;

pub use aggregate::{Catalog, CategoryFields, FieldDefinition, FieldDraft, FieldType};
pub use overview::{category_overview, union_category_names, CategoryCard};
pub use store::{CatalogStore, FieldInsert, GenerationSummary};
