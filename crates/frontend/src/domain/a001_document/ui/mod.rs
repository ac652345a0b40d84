pub mod card;
pub mod preview;

pub use card::DocumentCard;
pub use preview::DocumentPreview;
