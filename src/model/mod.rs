//! Domain model types (pure).
//!
//! All types in this module are plain data: scroll metrics, tuning
//! constants, user intents and the fixture records shown in the viewport.

pub mod error;
pub mod fixture;
pub mod key_action;
pub mod scroll;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use fixture::{PlacardList, PlacardPage, PlacardRecord};
pub use key_action::KeyAction;
pub use scroll::{ScrollConfig, ScrollSnapshot, ScrollState};
