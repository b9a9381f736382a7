//! Word wrapping and overflow-aware text placement.
//!
//! Line height is a fixed multiple of the font size (see
//! [LINE_HEIGHT_FACTOR](crate::font::LINE_HEIGHT_FACTOR)), not true font metrics, and
//! widths come from an approximate per-character table. Wrapping is greedy:
//! each line takes as many words as fit.

use crate::page::{Page, Region, TextStyle};
use crate::units::Pt;

/// Vertical space added after a block of text that was placed completely
pub const TRAILING_GAP: Pt = Pt(4.0);

/// Where a block of text may be placed
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextBox {
    pub x: Pt,
    /// Top of the first line box
    pub y: Pt,
    pub max_width: Pt,
    /// The lowest y a line may reach
    pub bottom: Pt,
}

/// The outcome of placing text
#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    /// Everything was drawn; the value is the y after the trailing gap
    Placed(Pt),
    /// Continuation was not allowed and the text does not fit. Nothing was drawn.
    NeedsNewPage,
    /// Continuation was allowed; the lines that fit were drawn and the rest
    /// should be placed on the next page
    Overflow { y: Pt, remaining: Vec<String> },
}

/// Clean text up before wrapping: control characters are removed,
/// non-breaking spaces become plain spaces, runs of whitespace collapse to a
/// single space, and blank lines are dropped. Explicit line breaks survive so
/// bullet lists in descriptions keep their shape.
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n')
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\t' => ' ',
                    ch => ch,
                })
                .filter(|ch| !ch.is_control())
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedily wrap `text` to `max_width`. The text is normalized first. Words
/// wider than a full line are split between characters so nothing ever
/// crosses the right edge.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: Pt) -> Vec<String> {
    let normalized = normalize(text);
    let space = style.width_of(" ");
    let mut lines = Vec::new();

    for paragraph in normalized.split('\n') {
        let mut line = String::new();
        let mut line_width = Pt(0.0);

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = style.width_of(word);

            if line.is_empty() {
                if word_width <= max_width {
                    line.push_str(word);
                    line_width = word_width;
                } else {
                    let mut pieces = split_long_word(word, style, max_width);
                    let last = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    line_width = style.width_of(&last);
                    line = last;
                }
            } else if line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                if word_width <= max_width {
                    line.push_str(word);
                    line_width = word_width;
                } else {
                    let mut pieces = split_long_word(word, style, max_width);
                    let last = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    line_width = style.width_of(&last);
                    line = last;
                }
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Character-level breaking for a single word that cannot fit on one line
fn split_long_word(word: &str, style: &TextStyle, max_width: Pt) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut width = Pt(0.0);
    for ch in word.chars() {
        let advance = style.font.width_of_text(ch.encode_utf8(&mut [0; 4]), style.size);
        if !current.is_empty() && width + advance > max_width {
            pieces.push(std::mem::take(&mut current));
            width = Pt(0.0);
        }
        current.push(ch);
        width += advance;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Height `text` would take once wrapped, excluding the trailing gap
pub fn measure(text: &str, style: &TextStyle, max_width: Pt) -> Pt {
    style.line_height() * wrap_text(text, style, max_width).len() as f32
}

/// Wrap and place `text` inside `bounds`.
///
/// Without continuation the text is all-or-nothing: if the wrapped block
/// would cross `bounds.bottom`, nothing is drawn and
/// [FlowResult::NeedsNewPage] is returned so the caller can break the page
/// and try again. With continuation, the lines that fit are drawn and the
/// rest come back in [FlowResult::Overflow].
pub fn render_text(
    page: &mut Page,
    region: Region,
    text: &str,
    bounds: TextBox,
    style: TextStyle,
    allow_continuation: bool,
) -> FlowResult {
    let lines = wrap_text(text, &style, bounds.max_width);
    render_lines(page, region, lines, bounds, style, allow_continuation)
}

/// Place already-wrapped lines; see [render_text]
pub fn render_lines(
    page: &mut Page,
    region: Region,
    lines: Vec<String>,
    bounds: TextBox,
    style: TextStyle,
    allow_continuation: bool,
) -> FlowResult {
    let line_height = style.line_height();
    let needed = line_height * lines.len() as f32;

    if bounds.y + needed > bounds.bottom {
        if !allow_continuation {
            return FlowResult::NeedsNewPage;
        }

        let available = bounds.bottom - bounds.y;
        let fitting = if *available <= 0.0 {
            0
        } else {
            ((*available / *line_height).floor() as usize).min(lines.len())
        };

        let mut lines = lines;
        let remaining = lines.split_off(fitting);
        let mut y = bounds.y;
        for line in lines {
            page.add_text(region, line, style, bounds.x, y);
            y += line_height;
        }
        return FlowResult::Overflow { y, remaining };
    }

    let mut y = bounds.y;
    for line in lines {
        page.add_text(region, line, style, bounds.x, y);
        y += line_height;
    }
    FlowResult::Placed(y + TRAILING_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::BuiltinFont;
    use crate::layout::Margins;
    use crate::pagesize::A4;

    fn style() -> TextStyle {
        TextStyle::new(BuiltinFont::Helvetica, Pt(10.0), colours::BLACK)
    }

    fn bounds(y: f32, bottom: f32) -> TextBox {
        TextBox {
            x: Pt(40.0),
            y: Pt(y),
            max_width: Pt(200.0),
            bottom: Pt(bottom),
        }
    }

    #[test]
    fn normalizes_whitespace_and_controls() {
        assert_eq!(
            normalize("  Led\u{00A0}the   team\u{0007}\t now \r\n\n\n- shipped  "),
            "Led the team now\n- shipped"
        );
    }

    #[test]
    fn wraps_within_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(10);
        let lines = wrap_text(&text, &style(), Pt(200.0));
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(style().width_of(line) <= Pt(200.0), "{line} is too wide");
        }
        assert_eq!(lines.join(" "), normalize(&text));
    }

    #[test]
    fn breaks_words_longer_than_a_line() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, &style(), Pt(100.0));
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn all_or_nothing_without_continuation() {
        let mut page = Page::new(A4, Margins::default());
        let text = "word ".repeat(200);
        let result = render_text(&mut page, Region::Body, &text, bounds(700.0, 780.0), style(), false);
        assert_eq!(result, FlowResult::NeedsNewPage);
        assert!(page.region(Region::Body).is_empty());
    }

    #[test]
    fn continuation_draws_what_fits() {
        let mut page = Page::new(A4, Margins::default());
        let text = "word ".repeat(200);
        let result = render_text(&mut page, Region::Body, &text, bounds(700.0, 750.0), style(), true);
        match result {
            FlowResult::Overflow { y, remaining } => {
                // 50pt of room at 12.5pt per line
                assert_eq!(page.region(Region::Body).len(), 4);
                assert_eq!(y, Pt(750.0));
                assert!(!remaining.is_empty());
            }
            other => panic!("expected overflow, got {other:?}"),
        }
        for command in page.region(Region::Body) {
            assert!(command.bottom() <= Pt(750.0));
        }
    }

    #[test]
    fn placed_text_returns_new_y() {
        let mut page = Page::new(A4, Margins::default());
        let result = render_text(&mut page, Region::Body, "short", bounds(100.0, 780.0), style(), false);
        assert_eq!(result, FlowResult::Placed(Pt(112.5) + TRAILING_GAP));
    }
}
