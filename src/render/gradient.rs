use crate::{
    foundation::core::{ColorPair, Rgba8},
    render::buffer::PixelBuffer,
};

/// Fill `buffer` with a top-to-bottom linear gradient from `pair.start` to `pair.end`.
///
/// Row `y` uses `ratio = y / height`; channels are truncated to u8 and alpha is opaque. Every
/// pixel in a row gets the same color.
pub fn render_vertical_gradient(buffer: &mut PixelBuffer, pair: ColorPair) {
    let height = buffer.height();
    for y in 0..height {
        let ratio = f64::from(y) / f64::from(height);
        buffer.fill_row(y, row_color(pair, ratio));
    }
}

/// Interpolated color at `ratio` in [0, 1].
pub fn row_color(pair: ColorPair, ratio: f64) -> Rgba8 {
    let lerp = |s: u8, e: u8| -> u8 { (f64::from(s) * (1.0 - ratio) + f64::from(e) * ratio) as u8 };
    Rgba8::opaque(
        lerp(pair.start.r, pair.end.r),
        lerp(pair.start.g, pair.end.g),
        lerp(pair.start.b, pair.end.b),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
