//! Profile photo preparation: centred square crop, resize, circular mask.

use crate::colour::Colour;
use crate::ImageDecodeError;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Default edge length, in pixels, of the prepared photo
pub const DEFAULT_PHOTO_RESOLUTION: u32 = 256;

const PLACEHOLDER_BACKGROUND: Colour = Colour::Grey { g: 0.82 };
const PLACEHOLDER_FIGURE: Colour = Colour::Grey { g: 0.62 };

/// Crop the largest centred square out of `image`, scale it to
/// `size`×`size` and clear everything outside the inscribed circle.
///
/// The edge of the circle is antialiased; the exterior is fully transparent
/// so the photo can sit on any background.
pub fn crop_to_circle(image: &DynamicImage, size: u32) -> RgbaImage {
    let size = size.max(1);
    let (width, height) = image.dimensions();
    let side = width.min(height);
    if side == 0 {
        return placeholder(size);
    }
    let square = image.crop_imm((width - side) / 2, (height - side) / 2, side, side);
    let mut pixels = square
        .resize_exact(size, size, FilterType::Lanczos3)
        .to_rgba8();
    apply_circle_mask(&mut pixels);
    pixels
}

fn apply_circle_mask(pixels: &mut RgbaImage) {
    let radius = pixels.width() as f32 / 2.0;
    for (x, y, pixel) in pixels.enumerate_pixels_mut() {
        let coverage = coverage(x, y, radius);
        pixel.0[3] = (pixel.0[3] as f32 * coverage).round() as u8;
    }
}

/// How much of pixel (x, y) lies inside a circle of `radius` centred in a
/// square of side `2 * radius`, approximated over a one-pixel band
fn coverage(x: u32, y: u32, radius: f32) -> f32 {
    let dx = x as f32 + 0.5 - radius;
    let dy = y as f32 + 0.5 - radius;
    let distance = (dx * dx + dy * dy).sqrt();
    (radius - distance + 0.5).clamp(0.0, 1.0)
}

/// A neutral head-and-shoulders glyph in a grey disc. Identical for a
/// given size on every call.
pub fn placeholder(size: u32) -> RgbaImage {
    let size = size.max(1);
    let s = size as f32;
    let radius = s / 2.0;
    let background = PLACEHOLDER_BACKGROUND.to_rgb_bytes();
    let figure = PLACEHOLDER_FIGURE.to_rgb_bytes();

    let head = (s * 0.5, s * 0.38, s * 0.18);
    let shoulders = (s * 0.5, s * 0.92, s * 0.34);

    let mut pixels = RgbaImage::from_fn(size, size, |x, y| {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        let inside = |(cx, cy, r): (f32, f32, f32)| {
            let (dx, dy) = (px - cx, py - cy);
            dx * dx + dy * dy <= r * r
        };
        let [r, g, b] = if inside(head) || inside(shoulders) {
            figure
        } else {
            background
        };
        Rgba([r, g, b, 255])
    });
    for (x, y, pixel) in pixels.enumerate_pixels_mut() {
        pixel.0[3] = (255.0 * coverage(x, y, radius)).round() as u8;
    }
    pixels
}

/// Decode `bytes` and crop them into a circular photo
pub fn photo_from_bytes(bytes: &[u8], size: u32) -> Result<RgbaImage, ImageDecodeError> {
    let image = image::load_from_memory(bytes)?;
    photo_from_image(&image, size)
}

/// Crop an already-decoded image into a circular photo
pub fn photo_from_image(image: &DynamicImage, size: u32) -> Result<RgbaImage, ImageDecodeError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ImageDecodeError::Empty);
    }
    Ok(crop_to_circle(image, size))
}

/// Like [photo_from_bytes], but a photo that cannot be decoded is replaced
/// by the [placeholder] rather than failing the render
pub fn photo_or_placeholder(bytes: &[u8], size: u32) -> RgbaImage {
    recover(photo_from_bytes(bytes, size), size)
}

pub(crate) fn recover(result: Result<RgbaImage, ImageDecodeError>, size: u32) -> RgbaImage {
    match result {
        Ok(pixels) => pixels,
        Err(e) => {
            log::warn!("could not use the profile photo ({e}); drawing a placeholder instead");
            placeholder(size)
        }
    }
}
