//! covergen paints a gradient book cover with a wrapped title, subtitle and author line.
//!
//! # Pipeline overview
//!
//! 1. **Load**: read and parse the font (`LoadedFont`); failures here are fatal.
//! 2. **Plan**: `CoverConfig + LoadedFont -> CoverLayout` (font sizes, wrapped lines, positions)
//! 3. **Paint**: vertical gradient from a random palette pair, then text composited on top
//! 4. **Encode**: write the buffer as a PNG
//!
//! Wrapping is character-granular so CJK text without spaces breaks cleanly. Text drawing
//! failures are logged and skipped; they never abort a cover.
#![forbid(unsafe_code)]

mod compose;
mod config;
mod encode;
mod foundation;
mod render;
mod text;

pub use compose::{
    AUTHOR_MIN_LEFT, AuthorPlacement, CoverLayout, TextBlock, author_left, compose_cover,
    generate_cover, paint_cover, plan_cover, title_font_size, usable_width,
};
pub use config::CoverConfig;
pub use encode::png::{ensure_parent_dir, write_png};
pub use foundation::core::{Canvas, ColorPair, MAX_CANVAS_EDGE, Rgba8};
pub use foundation::error::{CoverError, CoverResult};
pub use render::buffer::PixelBuffer;
pub use render::gradient::render_vertical_gradient;
pub use render::palette::{PALETTE, pick as pick_palette};
pub use text::draw::{TextRun, draw_text};
pub use text::font::{FontFace, GlyphMeasure, LoadedFont};
pub use text::wrap::{is_punctuation, wrap_text, wrap_with};
