//! The widget system.
//!
//! A widget is a rectangle of host-managed screen estate that can paint
//! itself and react to events. [`WidgetBase`] carries the shared state
//! (identity, geometry, visibility, focus, repaint scheduling); the
//! [`Widget`] trait is the interface hosts drive; [`widgets`] holds the
//! built-in widgets.

mod base;
mod events;
mod painting;
mod traits;
pub mod widgets;

pub use base::{WidgetBase, WidgetId};
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, MouseButton, MouseDoubleClickEvent,
    MousePressEvent, PaintEvent, WidgetEvent,
};
pub use painting::RepaintHandle;
pub use traits::{PaintContext, SizeHint, Widget};
pub use widgets::{BoxBorder, DEFAULT_MARGIN, DEFAULT_PADDING, TextBox, TextEdit};
