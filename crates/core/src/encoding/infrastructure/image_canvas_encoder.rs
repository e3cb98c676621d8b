use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, RgbaImage};

use crate::encoding::domain::canvas_encoder::{CanvasEncoder, EncodeError, EncodedImage};
use crate::encoding::domain::output_format::OutputFormat;
use crate::shared::constants::JPEG_QUALITY;

/// Encodes the canvas in memory using the `image` crate's codecs.
pub struct ImageCanvasEncoder {
    format: OutputFormat,
}

impl ImageCanvasEncoder {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Default for ImageCanvasEncoder {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl CanvasEncoder for ImageCanvasEncoder {
    fn encode(&self, canvas: &RgbaImage) -> Result<EncodedImage, EncodeError> {
        let mut bytes = Vec::new();
        match self.format {
            OutputFormat::Jpeg => {
                let rgb = flatten_over_black(canvas);
                JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
                    .encode_image(&rgb)
                    .map_err(EncodeError::Image)?;
            }
            OutputFormat::Png => {
                PngEncoder::new(&mut bytes)
                    .write_image(
                        canvas.as_raw(),
                        canvas.width(),
                        canvas.height(),
                        ExtendedColorType::Rgba8,
                    )
                    .map_err(EncodeError::Image)?;
            }
        }

        Ok(EncodedImage {
            bytes,
            content_type: self.format.content_type(),
        })
    }
}

/// Drops alpha by compositing onto black, so transparent pixels encode as black.
fn flatten_over_black(canvas: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let [r, g, b, a] = canvas.get_pixel(x, y).0;
        Rgb([premultiply(r, a), premultiply(g, a), premultiply(b, a)])
    })
}

fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}
