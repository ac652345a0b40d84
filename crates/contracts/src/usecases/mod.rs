pub mod common;
pub mod u501_upload_documents;
pub mod u502_categorize_documents;
pub mod u503_define_catalog;
pub mod u504_extract_fields;
pub mod u505_validate_fields;
pub mod u506_api_key;
