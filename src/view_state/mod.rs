//! Layout state derived from records and terminal size.

pub mod height_index;
pub mod record_layout;

pub use height_index::HeightIndex;
pub use record_layout::{wrap_text, RecordLayout, RecordRows, Row};
