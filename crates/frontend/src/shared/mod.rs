pub mod api_utils;
pub mod export;
pub mod files;
pub mod language;
pub mod modal;
pub mod progress;
pub mod remote;
pub mod status;
