use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use pdf_writer::{Name, Pdf};

/// Ratio of line height to font size. This is a fixed approximation rather
/// than real font metrics: leading + ascent − descent for Helvetica and Times
/// lands within a few percent of it.
pub const LINE_HEIGHT_FACTOR: f32 = 1.25;

/// Ratio of ascent to font size, used to place the baseline below the top of
/// a line box
pub const ASCENT_FACTOR: f32 = 0.75;

/// One of the standard PDF base-14 fonts. These are never embedded; every
/// conforming reader ships them, which keeps the output small and the layout
/// independent of the host's installed fonts.
///
/// Text is encoded in WinAnsi (Windows-1252), so Latin-1 accented characters
/// render correctly and anything outside that set is substituted with `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 6] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
        BuiltinFont::TimesRoman,
        BuiltinFont::TimesBold,
        BuiltinFont::TimesItalic,
    ];

    /// The PostScript name of the font
    pub fn base_font(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::TimesBold => "Times-Bold",
            BuiltinFont::TimesItalic => "Times-Italic",
        }
    }

    /// Name of the font in each page's resource dictionary
    pub fn resource_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F0",
            BuiltinFont::HelveticaBold => "F1",
            BuiltinFont::HelveticaOblique => "F2",
            BuiltinFont::TimesRoman => "F3",
            BuiltinFont::TimesBold => "F4",
            BuiltinFont::TimesItalic => "F5",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            BuiltinFont::TimesRoman => &TIMES_ROMAN_WIDTHS,
            BuiltinFont::TimesBold => &TIMES_BOLD_WIDTHS,
            BuiltinFont::TimesItalic => &TIMES_ITALIC_WIDTHS,
        }
    }

    fn ascii_width(self, byte: u8) -> f32 {
        match byte {
            0x20..=0x7E => self.widths()[(byte - 0x20) as usize] as f32,
            _ => self.widths()[(b'n' - 0x20) as usize] as f32,
        }
    }

    /// Advance width of a character in 1/1000 em, from the base-14 AFM
    /// metrics. Accented Latin-1 letters take the width of their base letter.
    pub fn char_width_1000(self, ch: char) -> f32 {
        let byte = winansi_byte(ch).unwrap_or(b'?');
        match byte {
            0x20..=0x7E => self.ascii_width(byte),
            0xA0 => self.ascii_width(b' '),
            0x96 => self.ascii_width(b'0'),
            0x97 | 0x85 | 0x89 => 1000.0,
            0x95 => 350.0,
            0x91 | 0x92 | 0x82 => self.ascii_width(b','),
            0x93 | 0x94 | 0x84 => self.ascii_width(b'"'),
            0xC6 | 0x8C => self.ascii_width(b'W'),
            0xE6 | 0x9C => self.ascii_width(b'w'),
            0xDF => self.ascii_width(b'b'),
            _ => match latin1_base(byte) {
                Some(base) => self.ascii_width(base),
                None => self.ascii_width(b'0'),
            },
        }
    }

    /// Calculate the default line height of the font for the given size
    pub fn line_height(self, size: Pt) -> Pt {
        size * LINE_HEIGHT_FACTOR
    }

    /// Distance from the top of a line box to the baseline
    pub fn ascent(self, size: Pt) -> Pt {
        size * ASCENT_FACTOR
    }

    /// Calculate the width of a given string of text at the given size
    pub fn width_of_text(self, text: &str, size: Pt) -> Pt {
        let thousandths: f32 = text.chars().map(|ch| self.char_width_1000(ch)).sum();
        size * (thousandths / 1000.0)
    }

    /// Encode text as WinAnsi bytes for a `Tj` operator
    pub fn encode(self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| winansi_byte(ch).unwrap_or(b'?'))
            .collect()
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// The ASCII letter an accented WinAnsi letter is drawn on
fn latin1_base(byte: u8) -> Option<u8> {
    Some(match byte {
        0xC0..=0xC5 => b'A',
        0xC7 => b'C',
        0xC8..=0xCB => b'E',
        0xCC..=0xCF => b'I',
        0xD0 => b'D',
        0xD1 => b'N',
        0xD2..=0xD6 | 0xD8 => b'O',
        0xD9..=0xDC => b'U',
        0xDD | 0x9F => b'Y',
        0xDE => b'P',
        0xE0..=0xE5 => b'a',
        0xE7 => b'c',
        0xE8..=0xEB => b'e',
        0xEC..=0xEF => b'i',
        0xF0 | 0xF2..=0xF6 | 0xF8 => b'o',
        0xF1 => b'n',
        0xF9..=0xFC => b'u',
        0xFD | 0xFF => b'y',
        0xFE => b'p',
        0x8A => b'S',
        0x9A => b's',
        0x8E => b'Z',
        0x9E => b'z',
        _ => return None,
    })
}

// Advance widths for ' ' through '~', in 1/1000 em, from the Adobe AFM files
// of the standard fonts. The oblique Helvetica shares the upright metrics.

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 675, 675, 675, 500, 920,
    611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
    667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
    389, 278, 389, 422, 500, 333,
    500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
    500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
    400, 275, 400, 541,
];

/// Map a single Unicode char to its WinAnsi byte, if it has one
pub(crate) fn winansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x0020..=0x007E => Some(c as u8),
        0x00A0..=0x00FF => Some(c as u8),
        0x20AC => Some(0x80),
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95),
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_text_is_wider() {
        let font = BuiltinFont::Helvetica;
        assert!(font.width_of_text("MMMM", Pt(10.0)) > font.width_of_text("iiii", Pt(10.0)));
        assert_eq!(font.width_of_text("", Pt(10.0)), Pt(0.0));
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "Senior Engineer";
        assert!(
            BuiltinFont::HelveticaBold.width_of_text(text, Pt(11.0))
                > BuiltinFont::Helvetica.width_of_text(text, Pt(11.0))
        );
    }

    #[test]
    fn encodes_latin1_and_substitutes_the_rest() {
        let bytes = BuiltinFont::Helvetica.encode("José – 漢");
        assert_eq!(bytes, vec![b'J', b'o', b's', 0xE9, b' ', 0x96, b' ', b'?']);
    }

    #[test]
    fn widths_follow_the_font_metrics() {
        let width = BuiltinFont::Helvetica.width_of_text("Hello", Pt(10.0));
        assert!((*width - 22.78).abs() < 0.001, "{width}");
        let width = BuiltinFont::TimesRoman.width_of_text("Hello", Pt(10.0));
        assert!((*width - 22.22).abs() < 0.001, "{width}");

        let font = BuiltinFont::HelveticaOblique;
        assert_eq!(font.char_width_1000('i'), 222.0);
        assert_eq!(font.char_width_1000('é'), font.char_width_1000('e'));
        assert_eq!(font.char_width_1000('Ñ'), font.char_width_1000('N'));
        assert_eq!(font.char_width_1000('\u{2014}'), 1000.0);
    }

    #[test]
    fn line_height_is_proportional() {
        assert_eq!(BuiltinFont::TimesRoman.line_height(Pt(10.0)), Pt(12.5));
    }
}
