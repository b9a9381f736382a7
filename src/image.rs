use crate::refs::{ObjectReferences, RefType};
use image::RgbaImage;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

/// A raster image ready to be embedded in the document. Alpha is carried
/// through as a soft mask, so transparent pixels stay transparent over
/// whatever the page paints underneath.
#[derive(Debug, Clone)]
pub struct Image {
    pub pixels: RgbaImage,
}

struct EncodeOutput {
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new(pixels: RgbaImage) -> Image {
        Image { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn encode(&self) -> EncodeOutput {
        let level = CompressionLevel::DefaultLevel as u8;

        let rgb: Vec<u8> = self
            .pixels
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        let has_alpha = self.pixels.pixels().any(|p| p.0[3] < 255);
        let mask = has_alpha.then(|| {
            let alphas: Vec<u8> = self.pixels.pixels().map(|p| p.0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });

        EncodeOutput {
            bytes: compress_to_vec_zlib(&rgb, level),
            mask,
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();
        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, &encoded.bytes);
        image.filter(Filter::FlateDecode);
        image.width(self.width() as i32);
        image.height(self.height() as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask);
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width() as i32);
            s_mask.height(self.height() as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
