//! Tela: localization-aware text widgets for embedding in a GUI host.
//!
//! The crate provides a small widget system centred on two controls:
//!
//! - [`widget::TextEdit`], an editable text surface with font, colour,
//!   wrapping, and spacing attributes.
//! - [`widget::TextBox`], a read-only rendition of a `TextEdit` that
//!   reveals the editor on double-click so users can select and copy.
//!
//! Font selection is centralised in [`style::FontTable`], which resolves a
//! family name per widget kind so an application can restyle every control
//! of one kind at once.
//!
//! Rendering and text measurement are abstracted behind the [`render`]
//! traits; the host implements them on top of its own graphics stack.
//!
//! # Example
//!
//! ```
//! use tela::render::{DisplayList, FixedMetrics};
//! use tela::widget::{PaintContext, TextBox, Widget};
//! use tela::render::Rect;
//!
//! let mut label = TextBox::new("path");
//! label.set_geometry(Rect::new(0.0, 0.0, 400.0, 28.0));
//! label.set_text("/home/user", false);
//!
//! let metrics = FixedMetrics::default();
//! let mut list = DisplayList::new();
//! let mut ctx = PaintContext::new(&mut list, &metrics, label.widget_base().rect());
//! label.paint(&mut ctx);
//! ```

pub mod signal;
pub mod widget;

/// Re-export of the rendering abstraction crate.
pub use tela_render as render;
/// Re-export of the styling crate.
pub use tela_style as style;

pub use signal::{ConnectionId, Signal};
pub use widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent, WidgetId};
