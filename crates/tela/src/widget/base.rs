//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles identity, geometry, visibility, keyboard
//! focus state, the tooltip, and repaint scheduling.

use std::sync::atomic::{AtomicU64, Ordering};

use tela_render::{Point, Rect, Size};

use super::painting::RepaintHandle;
use crate::signal::Signal;

/// Uniquely identifies a widget for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it. Geometry is expressed in the parent's coordinate
/// space; painting happens in the widget's own space.
pub struct WidgetBase {
    id: WidgetId,

    /// Host-facing name, used for logging and lookup.
    name: String,

    /// Position relative to the parent, and size.
    geometry: Rect,

    visible: bool,

    /// Whether the widget wants keyboard focus from the host.
    focusable: bool,

    /// Whether the widget currently has focus.
    focused: bool,

    tooltip: String,

    repaint: RepaintHandle,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,
}

impl WidgetBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            name: name.into(),
            geometry: Rect::ZERO,
            visible: true,
            focusable: false,
            focused: false,
            tooltip: String::new(),
            repaint: RepaintHandle::new(),
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // --- Geometry ---

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.geometry == geometry {
            return;
        }
        self.geometry = geometry;
        self.update();
        self.geometry_changed.emit(&geometry);
    }

    /// Position of the top-left corner in the parent's coordinates.
    pub fn pos(&self) -> Point {
        Point::new(self.geometry.left(), self.geometry.top())
    }

    pub fn set_pos(&mut self, pos: Point) {
        let size = self.size();
        self.set_geometry(Rect::new(pos.x, pos.y, size.width, size.height));
    }

    pub fn size(&self) -> Size {
        Size::new(self.geometry.width(), self.geometry.height())
    }

    pub fn resize(&mut self, size: Size) {
        let pos = self.pos();
        self.set_geometry(Rect::new(pos.x, pos.y, size.width, size.height));
    }

    pub fn width(&self) -> f32 {
        self.geometry.width()
    }

    pub fn height(&self) -> f32 {
        self.geometry.height()
    }

    /// The widget's bounds in its own coordinate space.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
    }

    // --- Visibility ---

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.update();
        self.visible_changed.emit(&visible);
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // --- Focus ---

    pub fn wants_keyboard_focus(&self) -> bool {
        self.focusable
    }

    pub fn set_wants_keyboard_focus(&mut self, wants: bool) {
        self.focusable = wants;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // --- Tooltip ---

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    // --- Painting ---

    /// Schedules a repaint of this widget.
    pub fn update(&self) {
        self.repaint.request();
    }

    pub fn needs_repaint(&self) -> bool {
        self.repaint.is_dirty()
    }

    /// Handle through which children and the host observe repaint requests.
    pub fn repaint_handle(&self) -> &RepaintHandle {
        &self.repaint
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetBase::new("a");
        let b = WidgetBase::new("b");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_geometry_change_emits_and_repaints() {
        let mut base = WidgetBase::new("w");
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = hits.clone();
        base.geometry_changed.connect(move |_| {
            hits2.fetch_add(1, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(10.0, 20.0, 100.0, 30.0));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(base.needs_repaint());

        // Same geometry again is a no-op.
        base.set_geometry(Rect::new(10.0, 20.0, 100.0, 30.0));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_local_rect_is_origin_based() {
        let mut base = WidgetBase::new("w");
        base.set_geometry(Rect::new(40.0, 50.0, 200.0, 28.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 200.0, 28.0));
        assert_eq!(base.pos(), Point::new(40.0, 50.0));
    }

    #[test]
    fn test_resize_keeps_position() {
        let mut base = WidgetBase::new("w");
        base.set_geometry(Rect::new(5.0, 6.0, 10.0, 10.0));
        base.resize(Size::new(30.0, 40.0));
        assert_eq!(base.geometry(), Rect::new(5.0, 6.0, 30.0, 40.0));
    }

    #[test]
    fn test_visibility_toggles() {
        let mut base = WidgetBase::new("w");
        assert!(base.is_visible());
        base.hide();
        assert!(!base.is_visible());
        base.show();
        assert!(base.is_visible());
    }

    #[test]
    fn test_repaint_flag_clears_via_handle() {
        let base = WidgetBase::new("w");
        base.update();
        assert!(base.needs_repaint());
        assert!(base.repaint_handle().take());
        assert!(!base.needs_repaint());
    }
}
