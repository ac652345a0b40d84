pub mod store;

pub use store::{CategoryMove, CategoryStore, OrganizeOutcome};
