//! Character-granular line wrapping.
//!
//! Lines break between any two code points, which is what CJK text without inter-word spaces
//! needs. Breaks are nudged to land before trailing punctuation, and a long title that still fits
//! on one line is split in two for balance.

use crate::text::font::{GlyphMeasure, LoadedFont};

/// Punctuation that should not start a fresh line when avoidable.
pub const PUNCTUATION: &[char] = &[
    '，', '。', '；', '：', '！', '？', '、', '（', '）', '《', '》', '【', '】', '「',
    '」',
];

/// Texts longer than this that fit on a single line are split in two.
pub const FORCED_SPLIT_MIN_CHARS: usize = 15;

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

fn is_split_point(ch: char) -> bool {
    ch == ' ' || is_punctuation(ch)
}

/// Wrap `text` at `font_size` so that lines fit in `max_width` pixels.
///
/// If no face can be created at `font_size` the text comes back as one unwrapped line.
pub fn wrap_text(text: &str, font_size: f32, max_width: i32, font: &LoadedFont) -> Vec<String> {
    let face = match font.face(font_size) {
        Ok(face) => face,
        Err(err) => {
            tracing::warn!(%err, font_size, "wrapping disabled, face unavailable");
            return vec![text.to_string()];
        }
    };
    wrap_with(&face, text, max_width)
}

/// Wrapping core, independent of where the advances come from.
pub fn wrap_with(measure: &impl GlyphMeasure, text: &str, max_width: i32) -> Vec<String> {
    let max_width = i64::from(max_width);
    let punct_threshold = max_width * 9 / 10;

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width: i64 = 0;

    for ch in text.chars() {
        let Some(advance) = measure.advance(ch) else {
            continue;
        };
        let char_width = i64::from(advance);

        if current_width + char_width > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        // Sees the line as left by the overflow flush above.
        if !current.is_empty()
            && is_punctuation(ch)
            && current_width + char_width > punct_threshold
        {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        current.push(ch);
        current_width += char_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() == 1 {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() > FORCED_SPLIT_MIN_CHARS {
            let (head, tail) = split_in_two(&chars);
            return vec![head, tail];
        }
    }

    lines
}

/// Split after the first split point at or past the midpoint, else exactly at the midpoint.
fn split_in_two(chars: &[char]) -> (String, String) {
    let mid = chars.len() / 2;
    let at = chars[mid..]
        .iter()
        .position(|&ch| is_split_point(ch))
        .map(|offset| mid + offset + 1)
        .unwrap_or(mid);
    (chars[..at].iter().collect(), chars[at..].iter().collect())
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
