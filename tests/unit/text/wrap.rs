use super::*;

/// ASCII is 30px, everything else 58px, `X` has no glyph.
struct FixedWidths;

impl GlyphMeasure for FixedWidths {
    fn advance(&self, ch: char) -> Option<u32> {
        match ch {
            'X' => None,
            c if c.is_ascii() => Some(30),
            _ => Some(58),
        }
    }
}

/// Every character is 10px.
struct Uniform;

impl GlyphMeasure for Uniform {
    fn advance(&self, _ch: char) -> Option<u32> {
        Some(10)
    }
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_with(&FixedWidths, "", 510).is_empty());
}

#[test]
fn short_title_stays_on_one_line() {
    let lines = wrap_with(&FixedWidths, "Go编程完全指南", 510);
    assert_eq!(lines, vec!["Go编程完全指南".to_string()]);
}

#[test]
fn overflow_starts_a_new_line() {
    let lines = wrap_with(&Uniform, "abcdefg", 35);
    assert_eq!(lines, vec!["abc", "def", "g"]);
}

#[test]
fn exact_fit_does_not_break() {
    let lines = wrap_with(&Uniform, "abcd", 40);
    assert_eq!(lines, vec!["abcd"]);
}

#[test]
fn punctuation_near_the_edge_breaks_early() {
    // After nine characters the line is 90px; the comma would make it 100px, which fits in
    // 100 but crosses the 90% threshold.
    let lines = wrap_with(&Uniform, "一二三四五六七八九，十", 100);
    assert_eq!(lines, vec!["一二三四五六七八九", "，十"]);
}

#[test]
fn overflowing_punctuation_starts_the_next_line() {
    // The comma would make the line 100px in a 95px box: the overflow flush runs first and the
    // punctuation check then sees an empty line, so the comma leads the next line.
    let lines = wrap_with(&Uniform, "一二三四五六七八九，十", 95);
    assert_eq!(lines, vec!["一二三四五六七八九", "，十"]);
}

#[test]
fn negative_width_puts_every_character_on_its_own_line() {
    let lines = wrap_with(&Uniform, "abc，d", -20);
    assert_eq!(lines, vec!["a", "b", "c", "，", "d"]);
}

#[test]
fn punctuation_well_inside_the_line_is_kept() {
    let lines = wrap_with(&Uniform, "一二，三", 100);
    assert_eq!(lines, vec!["一二，三"]);
}

#[test]
fn unmeasurable_characters_are_dropped() {
    let lines = wrap_with(&FixedWidths, "aXbX", 510);
    assert_eq!(lines, vec!["ab"]);
}

#[test]
fn no_line_exceeds_max_width_and_text_is_preserved() {
    let text = "构建高效、可靠的现代后端服务，以及 more ascii words in。再来一些中文字符";
    for max_width in [58, 100, 200, 333, 510] {
        let lines = wrap_with(&FixedWidths, text, max_width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.is_empty());
            assert!(FixedWidths.text_width(line) as i32 <= max_width, "{line:?}");
        }
        assert_eq!(lines.concat(), text);
    }
}

#[test]
fn long_single_line_without_delimiters_splits_at_midpoint() {
    let text = "abcdefghijklmnopqrstuvwx";
    assert_eq!(text.chars().count(), 24);
    let lines = wrap_with(&Uniform, text, 1000);
    assert_eq!(lines, vec!["abcdefghijkl", "mnopqrstuvwx"]);
}

#[test]
fn long_single_line_splits_after_first_delimiter_past_midpoint() {
    // 19 code points, midpoint 9, first delimiter at index 10.
    let text = "一二三四五六七八九十，一二三四五六七八";
    let lines = wrap_with(&Uniform, text, 1000);
    assert_eq!(lines, vec!["一二三四五六七八九十，", "一二三四五六七八"]);
}

#[test]
fn delimiters_before_the_midpoint_are_ignored() {
    let text = "ab cdefghijklmnop";
    assert_eq!(text.chars().count(), 17);
    let lines = wrap_with(&Uniform, text, 1000);
    assert_eq!(lines, vec!["ab cdefg", "hijklmnop"]);
}

#[test]
fn space_counts_as_a_split_point() {
    let text = "abcdefghi jklmnopq";
    let lines = wrap_with(&Uniform, text, 1000);
    assert_eq!(lines, vec!["abcdefghi ", "jklmnopq"]);
}

#[test]
fn fifteen_code_points_do_not_force_a_split() {
    let text = "abcdefghijklmno";
    let lines = wrap_with(&Uniform, text, 1000);
    assert_eq!(lines, vec![text]);
}

#[test]
fn forced_split_counts_dropped_characters() {
    // Dropped characters still count towards the length and end up in the halves.
    let text = "abcdefghXXXXXXXXXX";
    let lines = wrap_with(&FixedWidths, text, 1000);
    assert_eq!(lines, vec!["abcdefghX", "XXXXXXXXX"]);
}

#[test]
fn face_failure_returns_text_unwrapped() {
    let font = LoadedFont::load(std::path::Path::new("tests/data/fonts/DejaVuSans.ttf")).unwrap();
    let text = "a very long title that would otherwise wrap";
    assert_eq!(wrap_text(text, 0.0, 10, &font), vec![text.to_string()]);
}

#[test]
fn wrap_text_uses_real_advances() {
    let font = LoadedFont::load(std::path::Path::new("tests/data/fonts/DejaVuSans.ttf")).unwrap();
    let face = font.face(34.0).unwrap();
    let text = "The quick brown fox jumps over the lazy dog";
    let lines = wrap_text(text, 34.0, 300, &font);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(face.text_width(line) <= 300);
    }
    assert_eq!(lines.concat(), text);
}
