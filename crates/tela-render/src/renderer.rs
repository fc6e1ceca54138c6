//! The drawing interface widgets paint through.

use crate::text::Font;
use crate::types::{Color, Point, Rect, RoundedRect, Stroke};

/// Abstract 2D renderer implemented by the host framework.
///
/// Widgets are handed a `&mut dyn Renderer` during painting and never
/// know what is behind it: a GPU canvas, a platform drawing context, or
/// the [`DisplayList`](crate::DisplayList) recorder.
///
/// # Coordinate System
///
/// All coordinates are in logical pixels with the origin at the top-left
/// and y growing downward. `save`/`restore` manage a transform stack;
/// `translate` composes with the current transform.
///
/// # Text
///
/// `draw_text` places a single run at a top-left position; line breaking
/// for `draw_wrapped_text` is delegated to the host's own text layout.
pub trait Renderer {
    /// Push the current render state (transform, clip) onto a stack.
    fn save(&mut self);

    /// Pop the render state stack.
    fn restore(&mut self);

    /// Translate the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Intersect the current clip with a rectangle.
    fn clip_rect(&mut self, rect: Rect);

    /// Fill a rectangle with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Stroke a rounded-rectangle outline.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a single run of text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Point, font: &Font, color: Color);

    /// Draw `text` word-wrapped to `max_width`, starting at the baseline
    /// position `origin`. Wrapping is performed by the host.
    fn draw_wrapped_text(
        &mut self,
        text: &str,
        origin: Point,
        max_width: f32,
        font: &Font,
        color: Color,
    );
}
