use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::compositing::domain::mask_compositor::MaskCompositor;
use crate::shared::face_region::FaceRegion;

/// Scales the mask to each face with nearest-neighbor sampling and
/// alpha-blends it over the canvas.
pub struct NearestMaskCompositor {
    mask: Arc<RgbaImage>,
}

impl NearestMaskCompositor {
    pub fn new(mask: Arc<RgbaImage>) -> Self {
        Self { mask }
    }
}

impl MaskCompositor for NearestMaskCompositor {
    fn composite(&self, canvas: &mut RgbaImage, regions: &[FaceRegion]) {
        for region in regions {
            if region.scale <= 0 {
                continue;
            }
            let size = region.scale as u32;
            let (x, y) = region.top_left();
            log::debug!("Mask at ({x}, {y}) size {size}");

            let resized = imageops::resize(self.mask.as_ref(), size, size, FilterType::Nearest);
            imageops::overlay(canvas, &resized, x as i64, y as i64);
        }
    }
}
