//! The core `Widget` trait and paint context.

use tela_render::{Rect, Renderer, Size, TextMetrics};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// Preferred and minimum sizes a widget reports to layout code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    pub preferred: Size,
    pub minimum: Size,
}

impl SizeHint {
    pub fn new(preferred: Size, minimum: Size) -> Self {
        Self { preferred, minimum }
    }

    /// A hint whose minimum equals its preferred size.
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: size,
        }
    }
}

/// Everything a widget needs to paint one frame.
///
/// The context borrows the host's renderer and text measurement for the
/// duration of the paint call. Drawing happens in the widget's own
/// coordinate space; the host has already translated and clipped.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    metrics: &'a dyn TextMetrics,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    pub fn new(
        renderer: &'a mut dyn Renderer,
        metrics: &'a dyn TextMetrics,
        widget_rect: Rect,
    ) -> Self {
        Self {
            renderer,
            metrics,
            widget_rect,
        }
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics
    }

    /// The widget's bounds in its own coordinates (origin at zero).
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }
}

/// The interface every widget implements.
///
/// Hosts drive a widget with three calls: [`event`](Self::event) for input
/// and lifecycle notifications, [`paint`](Self::paint) for drawing, and the
/// geometry accessors inherited from [`WidgetBase`] for layout. The host is
/// expected to deliver a [`WidgetEvent::Paint`] to the widget before each
/// `paint` call, in that order.
pub trait Widget: Send + Sync {
    fn widget_base(&self) -> &WidgetBase;

    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's preferred size given the host's text measurement.
    fn size_hint(&self, metrics: &dyn TextMetrics) -> SizeHint;

    /// Paints the widget into `ctx`.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handles an event. Returns `true` when the event was acted upon.
    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let _ = event;
        false
    }

    // --- Delegation to the base ---

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn set_geometry(&mut self, geometry: Rect) {
        self.widget_base_mut().set_geometry(geometry);
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    /// Schedules a repaint.
    fn update(&self) {
        self.widget_base().update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tela_render::{DisplayList, FixedMetrics};

    struct Dummy {
        base: WidgetBase,
    }

    impl Widget for Dummy {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn size_hint(&self, _metrics: &dyn TextMetrics) -> SizeHint {
            SizeHint::fixed(Size::new(10.0, 10.0))
        }

        fn paint(&self, _ctx: &mut PaintContext<'_>) {}
    }

    #[test]
    fn test_default_event_handler_ignores() {
        let mut widget = Dummy {
            base: WidgetBase::new("dummy"),
        };
        let mut event = WidgetEvent::FocusIn(super::super::events::FocusInEvent::new(
            super::super::events::FocusReason::Tab,
        ));
        assert!(!widget.event(&mut event));
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_trait_delegates_geometry() {
        let mut widget = Dummy {
            base: WidgetBase::new("dummy"),
        };
        widget.set_geometry(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(widget.geometry(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert!(widget.is_visible());
    }

    #[test]
    fn test_paint_context_exposes_rect() {
        let mut list = DisplayList::new();
        let metrics = FixedMetrics::default();
        let ctx = PaintContext::new(&mut list, &metrics, Rect::new(0.0, 0.0, 40.0, 20.0));
        assert_eq!(ctx.width(), 40.0);
        assert_eq!(ctx.height(), 20.0);
    }
}
