pub mod a001_document;
pub mod a002_category;
pub mod a003_catalog;
