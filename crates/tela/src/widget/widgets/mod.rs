//! Built-in widgets.

mod text_box;
mod text_edit;

pub use text_box::{BoxBorder, DEFAULT_MARGIN, DEFAULT_PADDING, TextBox};
pub use text_edit::TextEdit;
