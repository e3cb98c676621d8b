use image::{DynamicImage, RgbaImage};

use crate::shared::face_region::FaceRegion;

/// Domain interface for drawing the mask over detected faces.
///
/// Implementations modify the canvas in place, one mask per region, in
/// the order given. Regions partly or wholly off the canvas are clipped.
pub trait MaskCompositor: Send + Sync {
    fn composite(&self, canvas: &mut RgbaImage, regions: &[FaceRegion]);
}

/// Canvas with the image's bounds, holding an opaque copy of its pixels.
pub fn new_canvas(image: &DynamicImage) -> RgbaImage {
    image.to_rgba8()
}
