use pdf_writer::Content;

/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channel values as 8-bit RGB, used when painting rasters
    pub fn to_rgb_bytes(self) -> [u8; 3] {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self {
            Colour::RGB { r, g, b } => [to_byte(r), to_byte(g), to_byte(b)],
            Colour::Grey { g } => [to_byte(g); 3],
        }
    }

    pub(crate) fn apply_fill(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => {
                content.set_fill_rgb(r, g, b);
            }
            Colour::Grey { g } => {
                content.set_fill_gray(g);
            }
        }
    }

    pub(crate) fn apply_stroke(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => {
                content.set_stroke_rgb(r, g, b);
            }
            Colour::Grey { g } => {
                content.set_stroke_gray(g);
            }
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const DARK_GREY: Colour = Colour::Grey { g: 0.25 };
    pub const MID_GREY: Colour = Colour::Grey { g: 0.45 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.8 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(
            Colour::from_hex("#ff8000").map(Colour::to_rgb_bytes),
            Some([255, 128, 0])
        );
        assert_eq!(Colour::from_hex("zzzzzz"), None);
        assert_eq!(Colour::from_hex("#fff"), None);
    }

    #[test]
    fn grey_expands_to_rgb() {
        assert_eq!(colours::WHITE.to_rgb_bytes(), [255, 255, 255]);
    }
}
