//! Cover layout and orchestration.
//!
//! A cover is produced in two steps: [`plan_cover`] turns a [`CoverConfig`] into a
//! [`CoverLayout`] (font sizes, wrapped lines, pen positions) without touching pixels, and
//! [`paint_cover`] renders a layout over a gradient background.

use crate::{
    config::CoverConfig,
    encode::png::write_png,
    foundation::{
        core::{Canvas, ColorPair, Rgba8},
        error::CoverResult,
    },
    render::{buffer::PixelBuffer, gradient::render_vertical_gradient, palette},
    text::{
        draw::{TextRun, draw_text},
        font::{GlyphMeasure, LoadedFont},
        wrap::wrap_text,
    },
};

pub const TITLE_SIZE: f32 = 58.0;
pub const TITLE_SIZE_LONG: f32 = 50.0;
/// Titles with more code points than this use [`TITLE_SIZE_LONG`].
pub const TITLE_LONG_CHARS: usize = 20;
pub const TITLE_LINE_FACTOR: f64 = 1.6;

pub const SUBTITLE_SIZE: f32 = 34.0;
pub const SUBTITLE_LINE_FACTOR: f64 = 1.4;
pub const SUBTITLE_GAP: i32 = 40;

pub const AUTHOR_SIZE: f32 = 22.0;
pub const AUTHOR_RIGHT_MARGIN: i32 = 30;
pub const AUTHOR_MIN_LEFT: i32 = 30;
pub const AUTHOR_BOTTOM_OFFSET: i32 = 50;

/// Horizontal space reserved for both side margins together.
pub const SIDE_MARGINS: i32 = 120;

pub const TITLE_COLOR: Rgba8 = Rgba8::WHITE;
pub const SUBTITLE_COLOR: Rgba8 = Rgba8::new(245, 245, 245, 230);
pub const AUTHOR_COLOR: Rgba8 = Rgba8::new(255, 255, 255, 200);

/// Centered, vertically stacked lines.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextBlock {
    pub size: f32,
    pub lines: Vec<String>,
    pub center_x: i32,
    /// Baseline of the first line.
    pub top: i32,
    pub pitch: i32,
}

impl TextBlock {
    pub fn baseline(&self, line: usize) -> i32 {
        self.top + line as i32 * self.pitch
    }

    /// Baseline position one pitch below the last line.
    pub fn bottom(&self) -> i32 {
        self.baseline(self.lines.len())
    }

    fn runs(&self, color: Rgba8) -> impl Iterator<Item = TextRun<'_>> {
        self.lines.iter().enumerate().map(move |(i, line)| TextRun {
            text: line,
            size: self.size,
            color,
            x: self.center_x,
            baseline: self.baseline(i),
            centered: true,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AuthorPlacement {
    pub text: String,
    pub size: f32,
    pub width: u32,
    pub x: i32,
    pub baseline: i32,
}

/// Resolved placement of every text element on a cover.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CoverLayout {
    pub canvas: Canvas,
    pub title: TextBlock,
    pub subtitle: TextBlock,
    /// `None` when no face could be created for the author line.
    pub author: Option<AuthorPlacement>,
}

pub fn title_font_size(title: &str) -> f32 {
    if title.chars().count() > TITLE_LONG_CHARS {
        TITLE_SIZE_LONG
    } else {
        TITLE_SIZE
    }
}

/// Wrapping width for a canvas. Negative on canvases narrower than the margins.
pub fn usable_width(canvas_width: u32) -> i32 {
    canvas_width as i32 - SIDE_MARGINS
}

/// Right-aligned author x, never left of [`AUTHOR_MIN_LEFT`].
pub fn author_left(canvas_width: u32, author_width: u32) -> i32 {
    let x = i64::from(canvas_width) - i64::from(author_width) - i64::from(AUTHOR_RIGHT_MARGIN);
    x.max(i64::from(AUTHOR_MIN_LEFT)) as i32
}

fn line_pitch(size: f32, factor: f64) -> i32 {
    (f64::from(size) * factor) as i32
}

/// Compute the layout of `config` with `font`.
pub fn plan_cover(config: &CoverConfig, font: &LoadedFont) -> CoverResult<CoverLayout> {
    let canvas = config.canvas()?;
    let max_width = usable_width(canvas.width);
    let center_x = canvas.width as i32 / 2;

    let title_size = title_font_size(&config.title);
    let title = TextBlock {
        size: title_size,
        lines: wrap_text(&config.title, title_size, max_width, font),
        center_x,
        top: canvas.height as i32 / 3,
        pitch: line_pitch(title_size, TITLE_LINE_FACTOR),
    };

    let subtitle = TextBlock {
        size: SUBTITLE_SIZE,
        lines: wrap_text(&config.subtitle, SUBTITLE_SIZE, max_width, font),
        center_x,
        top: title.bottom() + SUBTITLE_GAP,
        pitch: line_pitch(SUBTITLE_SIZE, SUBTITLE_LINE_FACTOR),
    };

    let author = match font.face(AUTHOR_SIZE) {
        Ok(face) => {
            let width = face.text_width(&config.author);
            Some(AuthorPlacement {
                text: config.author.clone(),
                size: AUTHOR_SIZE,
                width,
                x: author_left(canvas.width, width),
                baseline: canvas.height as i32 - AUTHOR_BOTTOM_OFFSET,
            })
        }
        Err(err) => {
            tracing::warn!(%err, "author omitted");
            None
        }
    };

    tracing::debug!(
        title_size,
        title_lines = title.lines.len(),
        subtitle_lines = subtitle.lines.len(),
        "planned cover"
    );

    Ok(CoverLayout {
        canvas,
        title,
        subtitle,
        author,
    })
}

/// Render `layout` over a `background` gradient.
pub fn paint_cover(
    layout: &CoverLayout,
    font: &LoadedFont,
    background: ColorPair,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(layout.canvas);
    render_vertical_gradient(&mut buffer, background);

    for run in layout.title.runs(TITLE_COLOR) {
        draw_text(&mut buffer, font, &run);
    }
    for run in layout.subtitle.runs(SUBTITLE_COLOR) {
        draw_text(&mut buffer, font, &run);
    }
    if let Some(author) = &layout.author {
        draw_text(
            &mut buffer,
            font,
            &TextRun {
                text: &author.text,
                size: author.size,
                color: AUTHOR_COLOR,
                x: author.x,
                baseline: author.baseline,
                centered: false,
            },
        );
    }
    buffer
}

/// Plan and paint a cover with a background drawn from `rng`.
#[tracing::instrument(skip_all, fields(width = config.width, height = config.height))]
pub fn compose_cover(
    config: &CoverConfig,
    font: &LoadedFont,
    rng: &mut fastrand::Rng,
) -> CoverResult<PixelBuffer> {
    let background = palette::pick(rng);
    tracing::debug!(?background, "palette");
    let layout = plan_cover(config, font)?;
    Ok(paint_cover(&layout, font, background))
}

/// Load the font named by `config`, compose the cover and write it to `config.output_path`.
#[tracing::instrument(skip_all, fields(out = %config.output_path.display()))]
pub fn generate_cover(config: &CoverConfig, rng: &mut fastrand::Rng) -> CoverResult<()> {
    config.validate()?;
    let font = LoadedFont::load(&config.font_path)?;
    let buffer = compose_cover(config, &font, rng)?;
    write_png(&buffer, &config.output_path)
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
