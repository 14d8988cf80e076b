// UI state module.
// Project selection, contact draft, and load status for the tabs.

pub mod contact;
pub mod selection;
pub mod status;

pub use contact::{ContactDraft, ContactField};
pub use selection::Selection;
pub use status::{LoadStatus, StatusState};
