//! Widget event types.
//!
//! Events are delivered by the host through [`crate::widget::Widget::event`].
//! Each event carries an [`EventBase`] the handler uses to accept or ignore
//! it; input events that stay unaccepted propagate to the parent widget.

use tela_render::{Point, Rect};

/// Common state shared by all events.
#[derive(Debug, Clone)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    pub fn new() -> Self {
        Self { accepted: false }
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Why a widget gained or lost keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FocusReason {
    /// A mouse click moved focus.
    Mouse,
    /// Tab traversal moved focus forward.
    Tab,
    /// Shift-Tab traversal moved focus backward.
    Backtab,
    #[default]
    Other,
}

/// The widget needs to repaint the given region.
#[derive(Debug, Clone)]
pub struct PaintEvent {
    pub base: EventBase,
    /// Dirty region in the widget's own coordinates.
    pub rect: Rect,
}

impl PaintEvent {
    pub fn new(rect: Rect) -> Self {
        Self {
            base: EventBase::new(),
            rect,
        }
    }
}

/// A mouse button was pressed inside the widget.
#[derive(Debug, Clone)]
pub struct MousePressEvent {
    pub base: EventBase,
    pub button: MouseButton,
    /// Position in the widget's own coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// A mouse button was double-clicked inside the widget.
#[derive(Debug, Clone)]
pub struct MouseDoubleClickEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
}

impl MouseDoubleClickEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// The widget gained keyboard focus.
#[derive(Debug, Clone)]
pub struct FocusInEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusInEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// The widget lost keyboard focus.
#[derive(Debug, Clone)]
pub struct FocusOutEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusOutEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Any event a widget can receive.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    Paint(PaintEvent),
    MousePress(MousePressEvent),
    MouseDoubleClick(MouseDoubleClickEvent),
    FocusIn(FocusInEvent),
    FocusOut(FocusOutEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::Paint(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::MouseDoubleClick(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Paint(e) => &mut e.base,
            Self::MousePress(e) => &mut e.base,
            Self::MouseDoubleClick(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
        }
    }

    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Whether an unaccepted event of this kind bubbles up to the parent.
    ///
    /// Paint and focus events are delivered to exactly one widget; only
    /// mouse input propagates.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::Paint(_) | Self::FocusIn(_) | Self::FocusOut(_) => false,
            Self::MousePress(_) | Self::MouseDoubleClick(_) => !self.is_accepted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_ignore() {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(3.0, 4.0),
        ));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_mouse_events_propagate_until_accepted() {
        let mut event = WidgetEvent::MouseDoubleClick(MouseDoubleClickEvent::new(
            MouseButton::Left,
            Point::ZERO,
        ));
        assert!(event.should_propagate());
        event.accept();
        assert!(!event.should_propagate());
    }

    #[test]
    fn test_focus_and_paint_never_propagate() {
        let focus = WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse));
        assert!(!focus.should_propagate());

        let paint = WidgetEvent::Paint(PaintEvent::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!paint.should_propagate());
    }

    #[test]
    fn test_focus_reason_default() {
        assert_eq!(FocusReason::default(), FocusReason::Other);
    }
}
