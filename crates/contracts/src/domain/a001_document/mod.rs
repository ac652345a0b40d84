pub mod aggregate;

pub use aggregate::{Document, DocumentKind, Justification};
