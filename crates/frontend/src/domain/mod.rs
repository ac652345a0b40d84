pub mod a001_document;
pub mod a003_catalog;
