//! Common types and traits for all UseCases

pub mod ack;
pub mod usecase_metadata;

// Re-exports
pub use ack::Ack;
pub use usecase_metadata::UseCaseMetadata;
