//! Host rendering abstraction for tela widgets.
//!
//! This crate defines the seam between tela widgets and the host GUI
//! framework's graphics stack:
//!
//! - Geometry and colour value types ([`Point`], [`Rect`], [`Color`], …)
//! - The [`Renderer`] trait the host implements to draw
//! - The [`TextMetrics`] trait the host implements to measure text
//! - [`DisplayList`], a recording [`Renderer`] for headless hosts and
//!   tests
//!
//! No rasterization, shaping, or windowing happens here; those belong to
//! the host.

mod display_list;
mod renderer;
mod text;
mod types;

pub use display_list::{DisplayList, DrawCommand};
pub use renderer::Renderer;
pub use text::{
    FixedMetrics, Font, FontFamily, FontStyle, FontWeight, HorizontalAlign, Justification,
    TextMetrics, VerticalAlign,
};
pub use types::{Color, Point, Rect, RoundedRect, Size, Stroke};
