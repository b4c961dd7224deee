use crate::{
    foundation::{
        core::Rgba8,
        error::{CoverError, CoverResult},
    },
    render::{buffer::PixelBuffer, composite::over_in_place},
    text::font::{FontFace, GlyphMeasure, LoadedFont},
};

/// One line of text to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub size: f32,
    pub color: Rgba8,
    /// Left edge, or horizontal center when `centered` is set.
    pub x: i32,
    pub baseline: i32,
    pub centered: bool,
}

/// Draw `run` onto `buffer`.
///
/// Failures are logged and leave the buffer untouched.
pub fn draw_text(buffer: &mut PixelBuffer, font: &LoadedFont, run: &TextRun<'_>) {
    if let Err(err) = try_draw_text(buffer, font, run) {
        tracing::warn!(%err, text = run.text, size = run.size, "text omitted");
    }
}

fn try_draw_text(
    buffer: &mut PixelBuffer,
    font: &LoadedFont,
    run: &TextRun<'_>,
) -> CoverResult<()> {
    let face = font.face(run.size)?;

    let mut x = run.x;
    if run.centered {
        x -= face.text_width(run.text) as i32 / 2;
    }

    let glyphs = layout_glyphs(&face, run.text, x, run.baseline);
    if glyphs.is_empty() {
        return Ok(());
    }

    let width: u16 = buffer
        .width()
        .try_into()
        .map_err(|_| CoverError::face("canvas width exceeds u16"))?;
    let height: u16 = buffer
        .height()
        .try_into()
        .map_err(|_| CoverError::face("canvas height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    let c = run.color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    ctx.glyph_run(face.render_font())
        .font_size(face.size())
        .fill_glyphs(glyphs.into_iter());
    ctx.flush();

    let mut layer = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut layer);
    over_in_place(buffer.data_mut(), layer.data_as_u8_slice())
}

/// Pen positions for `text` starting at `x` on `baseline`. Unmapped characters are skipped and
/// do not advance the pen.
pub fn layout_glyphs(
    face: &FontFace<'_>,
    text: &str,
    x: i32,
    baseline: i32,
) -> Vec<vello_cpu::Glyph> {
    let mut pen = x as f32;
    let mut glyphs = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let (Some(id), Some(advance)) = (face.glyph_id(ch), face.advance(ch)) else {
            continue;
        };
        glyphs.push(vello_cpu::Glyph {
            id,
            x: pen,
            y: baseline as f32,
        });
        pen += advance as f32;
    }
    glyphs
}

#[cfg(test)]
#[path = "../../tests/unit/text/draw.rs"]
mod tests;
