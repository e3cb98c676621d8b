use crate::shared::constants::{
    CLUSTER_OVERLAP_THRESHOLD, MAX_FACE_SIZE, MIN_FACE_SIZE, SCALE_FACTOR, SEARCH_ANGLE,
    SHIFT_FACTOR,
};

/// Search parameters handed to the cascade classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct CascadeParams {
    /// Smallest face diameter searched for, in pixels.
    pub min_size: u32,
    /// Largest face diameter searched for, in pixels.
    pub max_size: u32,
    /// Fraction of the window size moved between scan positions.
    pub shift_factor: f64,
    /// Multiplicative window growth per scale step.
    pub scale_factor: f64,
    /// In-plane rotation searched, in turns. `0.0` means upright only.
    pub angle: f64,
    /// Overlap above which raw detections are merged into one face.
    pub cluster_threshold: f64,
}

impl Default for CascadeParams {
    fn default() -> Self {
        Self {
            min_size: MIN_FACE_SIZE,
            max_size: MAX_FACE_SIZE,
            shift_factor: SHIFT_FACTOR,
            scale_factor: SCALE_FACTOR,
            angle: SEARCH_ANGLE,
            cluster_threshold: CLUSTER_OVERLAP_THRESHOLD,
        }
    }
}

impl CascadeParams {
    /// Scan step in pixels for a window of `window_size` pixels. Never zero.
    pub fn window_step(&self, window_size: u32) -> u32 {
        ((window_size as f64 * self.shift_factor).round() as u32).max(1)
    }

    /// Pyramid downscale per level, i.e. the inverse of the window growth.
    pub fn pyramid_scale(&self) -> f32 {
        (1.0 / self.scale_factor) as f32
    }

    /// True when an image of the given size cannot contain a face of `min_size`.
    pub fn too_small(&self, rows: u32, cols: u32) -> bool {
        rows.min(cols) < self.min_size
    }
}
