pub mod drag_drop;
pub mod error;
pub mod highlight;
pub mod progress;
pub mod status;
