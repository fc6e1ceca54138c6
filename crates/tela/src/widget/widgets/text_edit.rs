//! Editable text surface.

use tela_render::{Color, Font, Point, Size, TextMetrics};

use crate::signal::Signal;
use crate::widget::base::WidgetBase;
use crate::widget::events::{FocusInEvent, FocusOutEvent, WidgetEvent};
use crate::widget::painting::RepaintHandle;
use crate::widget::traits::{PaintContext, SizeHint, Widget};

/// A text editing surface driven by the host's input stack.
///
/// `TextEdit` owns the text content and its presentation attributes (font,
/// colour, wrapping, spacing). It is usually embedded in a composite such
/// as [`TextBox`](crate::widget::TextBox); content changes are forwarded to
/// the owner through a shared [`RepaintHandle`] so the owner's static
/// rendition stays current without a back-reference.
pub struct TextEdit {
    base: WidgetBase,
    text: String,
    multi_line: bool,
    word_wrap: bool,
    read_only: bool,
    font: Font,
    text_color: Color,
    line_spacing: f32,
    owner: RepaintHandle,

    /// Emitted with the new content after [`set_text`](Self::set_text)
    /// when notification is requested.
    pub text_changed: Signal<String>,
}

impl TextEdit {
    /// Creates an editor whose content changes repaint `owner`.
    pub fn new(name: impl Into<String>, owner: RepaintHandle) -> Self {
        Self {
            base: WidgetBase::new(name),
            text: String::new(),
            multi_line: false,
            word_wrap: true,
            read_only: false,
            font: Font::default(),
            text_color: Color::BLACK,
            line_spacing: 1.0,
            owner,
            text_changed: Signal::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the content.
    ///
    /// The owner is flagged dirty before the new text is stored, so a host
    /// observing the repaint request never sees stale content afterwards.
    /// `text_changed` fires only when `notify` is set.
    pub fn set_text(&mut self, text: impl Into<String>, notify: bool) {
        self.owner.request();
        self.text = text.into();
        self.base.update();
        if notify {
            self.text_changed.emit(&self.text);
        }
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Switches between single-line and multi-line modes.
    ///
    /// `wrap` is remembered even in single-line mode and takes effect when
    /// multi-line is enabled.
    pub fn set_multi_line(&mut self, multi_line: bool, wrap: bool) {
        self.multi_line = multi_line;
        self.word_wrap = wrap;
        self.base.update();
    }

    pub fn is_word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.base.update();
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.base.update();
    }

    /// Multiplier applied to the line advance in multi-line layouts.
    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.line_spacing = spacing;
        self.base.update();
    }

    pub fn tooltip(&self) -> &str {
        self.base.tooltip()
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.base.set_tooltip(tooltip);
    }

    fn handle_focus_in(&mut self, event: &mut FocusInEvent) -> bool {
        self.base.set_focused(true);
        event.base.accept();
        true
    }

    fn handle_focus_out(&mut self, event: &mut FocusOutEvent) -> bool {
        self.base.set_focused(false);
        event.base.accept();
        true
    }
}

impl Widget for TextEdit {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self, metrics: &dyn TextMetrics) -> SizeHint {
        let line_height = metrics.line_height(&self.font);
        let width = self
            .text
            .lines()
            .map(|line| metrics.text_width(line, &self.font))
            .fold(0.0_f32, f32::max);
        let lines = self.text.lines().count().max(1) as f32;
        SizeHint::new(
            Size::new(width, line_height * lines),
            Size::new(0.0, line_height),
        )
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let color = self.text_color;
        if self.multi_line && self.word_wrap {
            let line_height = ctx.metrics().line_height(&self.font);
            let width = ctx.width();
            ctx.renderer()
                .draw_wrapped_text(&self.text, Point::new(0.0, line_height), width, &self.font, color);
        } else {
            ctx.renderer()
                .draw_text(&self.text, Point::ZERO, &self.font, color);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::FocusIn(e) => self.handle_focus_in(e),
            WidgetEvent::FocusOut(e) => self.handle_focus_out(e),
            WidgetEvent::MousePress(_) if self.base.is_visible() => {
                event.accept();
                true
            }
            _ => false,
        }
    }
}

static_assertions::assert_impl_all!(TextEdit: Send, Sync);
