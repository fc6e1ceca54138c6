//! Read-only text box with copy-on-demand editing.

use std::borrow::Cow;

use tela_render::{
    Color, Font, HorizontalAlign, Justification, Point, Rect, RoundedRect, Size, Stroke,
    TextMetrics, VerticalAlign,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::widget::base::WidgetBase;
use crate::widget::events::{FocusReason, MouseButton, WidgetEvent};
use crate::widget::painting::RepaintHandle;
use crate::widget::traits::{PaintContext, SizeHint, Widget};
use crate::widget::widgets::text_edit::TextEdit;

/// Default gap between the widget edge and the border outline.
pub const DEFAULT_MARGIN: f32 = 2.0;
/// Default gap between the border (or the widget edge) and the text.
pub const DEFAULT_PADDING: f32 = 2.0;

/// Truncation marker appended to elided text.
const ELLIPSIS: &str = "\u{2026}";

/// Optional outline drawn inside the widget's margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBorder {
    /// Draw with rounded corners.
    pub rounded: bool,
    /// Stroke thickness. Also offsets the text inwards.
    pub thickness: f32,
    /// Corner radius, used only when `rounded` is set.
    pub corner_radius: f32,
    pub color: Color,
}

impl Default for BoxBorder {
    fn default() -> Self {
        Self {
            rounded: false,
            thickness: 1.0,
            corner_radius: 0.0,
            color: Color::BLACK,
        }
    }
}

/// A label-like text display that turns into a selectable editor on demand.
///
/// The widget has two presentations. In the static state it paints its
/// content itself: optional border, then the text laid out with the
/// configured justification, elided with an ellipsis when it does not fit.
/// Double-clicking a copyable box switches to the editing state, where the
/// embedded read-only [`TextEdit`] is shown so the user can select and copy
/// the text. Losing focus to a mouse click switches back.
///
/// Showing the editor promotes this widget to want keyboard focus. Hosts
/// that track focus chains should re-query
/// [`wants_keyboard_focus`](WidgetBase::wants_keyboard_focus) on the box
/// and its ancestors after the switch.
pub struct TextBox {
    base: WidgetBase,
    editor: TextEdit,
    first_render: bool,
    editor_showing: bool,
    copyable: bool,
    use_ellipsis: bool,
    justification: Justification,
    margin: f32,
    padding: f32,
    border: Option<BoxBorder>,
    /// `None` inherits the editor's text colour.
    text_color: Option<Color>,
}

impl TextBox {
    pub fn new(name: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(name);
        base.set_wants_keyboard_focus(true);
        let editor_name = format!("{}.editor", base.name());
        let editor = TextEdit::new(editor_name, base.repaint_handle().clone());
        Self {
            base,
            editor,
            first_render: true,
            editor_showing: false,
            copyable: true,
            use_ellipsis: true,
            justification: Justification::TOP_LEFT,
            margin: DEFAULT_MARGIN,
            padding: DEFAULT_PADDING,
            border: None,
            text_color: None,
        }
    }

    // --- Content ---

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// See [`TextEdit::set_text`].
    pub fn set_text(&mut self, text: impl Into<String>, notify: bool) {
        self.editor.set_text(text, notify);
    }

    /// The embedded editing surface.
    pub fn editor(&self) -> &TextEdit {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TextEdit {
        &mut self.editor
    }

    // --- Appearance ---

    pub fn is_copyable(&self) -> bool {
        self.copyable
    }

    /// Whether double-clicking may reveal the editor for copying.
    pub fn set_copyable(&mut self, copyable: bool) {
        self.copyable = copyable;
    }

    pub fn uses_ellipsis(&self) -> bool {
        self.use_ellipsis
    }

    pub fn set_use_ellipsis(&mut self, use_ellipsis: bool) {
        self.use_ellipsis = use_ellipsis;
        self.base.update();
    }

    pub fn justification(&self) -> Justification {
        self.justification
    }

    pub fn set_justification(&mut self, justification: Justification) {
        self.justification = justification;
        self.base.update();
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
        self.base.update();
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
        self.base.update();
    }

    pub fn border(&self) -> Option<&BoxBorder> {
        self.border.as_ref()
    }

    pub fn set_border(&mut self, border: Option<BoxBorder>) {
        self.border = border;
        self.base.update();
    }

    /// The border stroke thickness, or zero when no border is drawn.
    pub fn border_line_thickness(&self) -> f32 {
        self.border.map_or(0.0, |b| b.thickness)
    }

    /// The corner radius, or zero when the border is absent or square.
    pub fn border_corner_radius(&self) -> f32 {
        match self.border {
            Some(b) if b.rounded => b.corner_radius,
            _ => 0.0,
        }
    }

    /// The effective text colour: the explicit override, or the editor's.
    pub fn text_color(&self) -> Color {
        self.text_color.unwrap_or_else(|| self.editor.text_color())
    }

    /// `None` reverts to inheriting the editor's text colour.
    pub fn set_text_color(&mut self, color: Option<Color>) {
        self.text_color = color;
        self.base.update();
    }

    pub fn inherits_text_color(&self) -> bool {
        self.text_color.is_none()
    }

    // --- Editing state ---

    pub fn is_editor_showing(&self) -> bool {
        self.editor_showing
    }

    /// Reveals the editing surface so its content can be selected.
    ///
    /// No-op when the box is not copyable or the editor is already shown.
    /// The editor is first normalized: moved to the box origin, made
    /// read-only, stripped of keyboard focus, and sized to the box. The
    /// box itself is promoted to want keyboard focus so it can observe
    /// the focus loss that dismisses the editor.
    pub fn show_editor(&mut self) {
        if !self.copyable || self.editor_showing {
            return;
        }
        self.normalize_editor();
        if !self.base.wants_keyboard_focus() {
            self.base.set_wants_keyboard_focus(true);
        }
        self.editor.widget_base_mut().show();
        self.editor_showing = true;
        self.base.update();
        tracing::debug!(target: "tela::text_box", name = self.base.name(), "editor shown");
    }

    /// Dismisses the editing surface unconditionally.
    pub fn hide_editor(&mut self) {
        self.editor.widget_base_mut().hide();
        if self.editor_showing {
            tracing::debug!(target: "tela::text_box", name = self.base.name(), "editor hidden");
        }
        self.editor_showing = false;
        self.base.update();
    }

    fn normalize_editor(&mut self) {
        let size = self.base.size();
        let editor_base = self.editor.widget_base_mut();
        if editor_base.pos() != Point::ZERO {
            editor_base.set_pos(Point::ZERO);
        }
        if editor_base.size() != size {
            editor_base.resize(size);
        }
        if editor_base.wants_keyboard_focus() {
            editor_base.set_wants_keyboard_focus(false);
        }
        if !self.editor.is_read_only() {
            self.editor.set_read_only(true);
        }
    }

    fn first_render_init(&mut self) {
        self.hide_editor();
        let size = self.base.size();
        self.editor.widget_base_mut().resize(size);
        let tooltip = self.editor.tooltip().to_owned();
        self.base.set_tooltip(tooltip);
        self.first_render = false;
        tracing::trace!(target: "tela::text_box", name = self.base.name(), "first render");
    }

    // --- Static painting ---

    fn draw_single_line(
        &self,
        ctx: &mut PaintContext<'_>,
        text: &str,
        bounds: Rect,
        font: &Font,
        color: Color,
    ) {
        let display = if self.use_ellipsis {
            elide_right(text, bounds.width(), font, ctx.metrics())
        } else {
            Cow::Borrowed(text)
        };
        let width = ctx.metrics().text_width(&display, font);
        let line_height = ctx.metrics().line_height(font);

        let x = match self.justification.horizontal {
            HorizontalAlign::Left => bounds.left(),
            HorizontalAlign::Center => bounds.left() + (bounds.width() - width) / 2.0,
            HorizontalAlign::Right => bounds.right() - width,
        };
        let y = match self.justification.vertical {
            VerticalAlign::Top => bounds.top(),
            VerticalAlign::Middle => bounds.top() + (bounds.height() - line_height) / 2.0,
            VerticalAlign::Bottom => bounds.bottom() - line_height,
        };
        ctx.renderer()
            .draw_text(&display, Point::new(x, y), font, color);
    }
}

impl Widget for TextBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self, metrics: &dyn TextMetrics) -> SizeHint {
        let inset = self.padding + self.border.map_or(0.0, |b| self.margin + b.thickness);
        let inner = self.editor.size_hint(metrics);
        SizeHint::new(
            Size::new(
                inner.preferred.width + 2.0 * inset,
                inner.preferred.height + 2.0 * inset,
            ),
            Size::new(
                inner.minimum.width + 2.0 * inset,
                inner.minimum.height + 2.0 * inset,
            ),
        )
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        // While the editor is shown it paints itself; the static rendition
        // would bleed through underneath it.
        if self.editor_showing {
            return;
        }

        let mut offset = 0.0;
        if let Some(border) = &self.border {
            offset += self.margin;
            let outline = Rect::new(
                offset,
                offset,
                ctx.width() - 2.0 * offset,
                ctx.height() - 2.0 * offset,
            );
            let stroke = Stroke::new(border.color, border.thickness);
            if border.rounded {
                ctx.renderer()
                    .stroke_rounded_rect(RoundedRect::new(outline, border.corner_radius), &stroke);
            } else {
                ctx.renderer().stroke_rect(outline, &stroke);
            }
            offset += border.thickness;
        }
        offset += self.padding;

        let text = self.editor.text();
        if text.is_empty() {
            return;
        }
        let font = self.editor.font().clone();
        let color = self.text_color();
        let bounds = Rect::new(
            offset,
            offset,
            ctx.width() - 2.0 * offset,
            ctx.height() - 2.0 * offset,
        );

        if !self.editor.is_multi_line() {
            self.draw_single_line(ctx, text, bounds, &font, color);
        } else if self.editor.is_word_wrap() {
            let line_height = ctx.metrics().line_height(&font);
            let origin = Point::new(offset, offset + line_height);
            let max_width = ctx.width() - 2.0 * offset;
            ctx.renderer()
                .draw_wrapped_text(text, origin, max_width, &font, color);
        } else {
            let advance = ctx.metrics().line_height(&font) * self.editor.line_spacing();
            let mut top = bounds.top();
            // TODO: pass only the current line to draw_single_line; each
            // pass currently lays out the whole content again.
            for _ in text.lines() {
                let line_rect = Rect::new(bounds.left(), top, bounds.width(), advance);
                self.draw_single_line(ctx, text, line_rect, &font, color);
                top += advance;
            }
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Paint(_) => {
                if self.first_render {
                    self.first_render_init();
                }
                false
            }
            WidgetEvent::MouseDoubleClick(e) => {
                if e.button == MouseButton::Left && !self.editor_showing && self.copyable {
                    e.base.accept();
                    self.show_editor();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::FocusIn(e) => {
                self.base.set_focused(true);
                e.base.accept();
                true
            }
            WidgetEvent::FocusOut(e) => {
                self.base.set_focused(false);
                if self.editor_showing && e.reason == FocusReason::Mouse {
                    e.base.accept();
                    self.hide_editor();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MousePress(_) => false,
        }
    }
}

static_assertions::assert_impl_all!(TextBox: Send, Sync);

/// Truncates `text` from the right so it fits in `available`, appending an
/// ellipsis. Cuts on grapheme boundaries so composed characters are never
/// split. Returns the input unchanged when it already fits.
fn elide_right<'a>(
    text: &'a str,
    available: f32,
    font: &Font,
    metrics: &dyn TextMetrics,
) -> Cow<'a, str> {
    if metrics.text_width(text, font) <= available {
        return Cow::Borrowed(text);
    }
    let ellipsis_width = metrics.text_width(ELLIPSIS, font);
    if ellipsis_width >= available {
        return Cow::Borrowed(ELLIPSIS);
    }

    let budget = available - ellipsis_width;
    let graphemes: Vec<&str> = text.graphemes(true).collect();

    // Largest prefix that fits alongside the ellipsis. Widths grow
    // monotonically with the prefix length, so binary search applies.
    let mut low = 0usize;
    let mut high = graphemes.len();
    while low < high {
        let mid = low + (high - low).div_ceil(2);
        let prefix: String = graphemes[..mid].concat();
        if metrics.text_width(&prefix, font) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut elided: String = graphemes[..low].concat();
    elided.push_str(ELLIPSIS);
    Cow::Owned(elided)
}
