//! Per-widget-kind font resolution for tela widgets.
//!
//! Hosts set up one [`FontTable`] per application, usually with a CJK-
//! capable default, and share it across widgets behind an `Arc`. Any
//! widget that wants a kind-specific font asks the table before its
//! render pass:
//!
//! ```
//! use std::sync::Arc;
//! use tela_style::{FontTable, WidgetKind};
//!
//! let fonts = Arc::new(FontTable::default());
//! fonts.set_kind_font(WidgetKind::MenuBar, "Arial");
//!
//! assert_eq!(fonts.resolve(WidgetKind::MenuBar), "Arial");
//! assert_eq!(fonts.resolve(WidgetKind::Label), "STZhongsong");
//! ```

mod error;
mod font_table;
mod widget_kind;

pub use error::{Error, Result};
pub use font_table::{DEFAULT_FONT, FontTable};
pub use widget_kind::WidgetKind;
