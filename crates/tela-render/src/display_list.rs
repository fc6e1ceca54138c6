//! A command-recording renderer.
//!
//! [`DisplayList`] implements [`Renderer`] by flattening every draw call
//! into a [`DrawCommand`] with the current translation applied. Hosts
//! that cannot hand out a drawing context directly can replay the list
//! against their own canvas; tests use it to assert exactly what a
//! widget painted.

use crate::renderer::Renderer;
use crate::text::Font;
use crate::types::{Color, Point, Rect, RoundedRect, Stroke};

/// A single recorded draw operation, in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clip was narrowed to a rectangle.
    ClipRect(Rect),
    /// A filled rectangle.
    FillRect { rect: Rect, color: Color },
    /// A stroked rectangle outline.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// A stroked rounded-rectangle outline.
    StrokeRoundedRect { rect: RoundedRect, stroke: Stroke },
    /// A line segment.
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// A single text run, positioned by its top-left corner.
    Text {
        text: String,
        pos: Point,
        font: Font,
        color: Color,
    },
    /// A word-wrapped text block, positioned by its first baseline.
    WrappedText {
        text: String,
        origin: Point,
        max_width: f32,
        font: Font,
        color: Color,
    },
}

/// Render state tracked per save/restore level.
#[derive(Debug, Clone, Copy, Default)]
struct RenderState {
    offset: Point,
}

/// A [`Renderer`] that records commands instead of drawing.
#[derive(Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    stack: Vec<RenderState>,
    state: RenderState,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands and reset the state stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.state = RenderState::default();
    }

    /// Iterate over the text runs in the list (single runs and wrapped
    /// blocks), in draw order.
    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::WrappedText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn to_absolute(&self, p: Point) -> Point {
        Point::new(p.x + self.state.offset.x, p.y + self.state.offset.y)
    }

    fn rect_to_absolute(&self, rect: Rect) -> Rect {
        Rect {
            origin: self.to_absolute(rect.origin),
            size: rect.size,
        }
    }
}

impl Renderer for DisplayList {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        } else {
            tracing::warn!(target: "tela_render::display_list", "restore without matching save");
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.offset.x += tx;
        self.state.offset.y += ty;
    }

    fn clip_rect(&mut self, rect: Rect) {
        let rect = self.rect_to_absolute(rect);
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.rect_to_absolute(rect);
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let rect = self.rect_to_absolute(rect);
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke) {
        let rect = RoundedRect {
            rect: self.rect_to_absolute(rect.rect),
            radius: rect.radius,
        };
        self.commands.push(DrawCommand::StrokeRoundedRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from: self.to_absolute(from),
            to: self.to_absolute(to),
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Point, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos: self.to_absolute(pos),
            font: font.clone(),
            color,
        });
    }

    fn draw_wrapped_text(
        &mut self,
        text: &str,
        origin: Point,
        max_width: f32,
        font: &Font,
        color: Color,
    ) {
        self.commands.push(DrawCommand::WrappedText {
            text: text.to_owned(),
            origin: self.to_absolute(origin),
            max_width,
            font: font.clone(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_draw_order() {
        let mut list = DisplayList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        list.draw_text("hi", Point::ZERO, &Font::default(), Color::BLACK);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_translate_applies_to_commands() {
        let mut list = DisplayList::new();
        list.translate(10.0, 20.0);
        list.fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0), Color::RED);

        let DrawCommand::FillRect { rect, .. } = &list.commands()[0] else {
            panic!("expected FillRect");
        };
        assert_eq!(*rect, Rect::new(11.0, 22.0, 3.0, 4.0));
    }

    #[test]
    fn test_save_restore_unwinds_translation() {
        let mut list = DisplayList::new();
        list.save();
        list.translate(5.0, 5.0);
        list.restore();
        list.draw_text("x", Point::ZERO, &Font::default(), Color::BLACK);

        let DrawCommand::Text { pos, .. } = &list.commands()[0] else {
            panic!("expected Text");
        };
        assert_eq!(*pos, Point::ZERO);
    }

    #[test]
    fn test_text_runs_filter() {
        let mut list = DisplayList::new();
        list.fill_rect(Rect::ZERO, Color::WHITE);
        list.draw_text("one", Point::ZERO, &Font::default(), Color::BLACK);
        list.draw_wrapped_text("two", Point::ZERO, 100.0, &Font::default(), Color::BLACK);

        let runs: Vec<&str> = list.text_runs().collect();
        assert_eq!(runs, vec!["one", "two"]);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut list = DisplayList::new();
        list.translate(5.0, 5.0);
        list.fill_rect(Rect::ZERO, Color::WHITE);
        list.clear();

        assert!(list.is_empty());
        list.draw_text("x", Point::ZERO, &Font::default(), Color::BLACK);
        let DrawCommand::Text { pos, .. } = &list.commands()[0] else {
            panic!("expected Text");
        };
        assert_eq!(*pos, Point::ZERO);
    }
}
