//! Canvas drawing primitives
//!
//! Shapes, labels, and sheet composition on `RgbaImage` canvases.

pub mod shapes;
pub mod sheet;
pub mod text;

pub use shapes::{
    Bounds, clamp_corner_radius, draw_polygon, draw_rectangle, draw_rounded_rectangle,
    draw_vertical_gradient, gradient_color,
};
pub use sheet::{compose_grid, compose_strip};
pub use text::{
    LabelFont, LabelStyle, centered_origin, draw_centered_label, draw_label, draw_text, text_size,
};
