use crate::detection::domain::cascade_params::CascadeParams;
use crate::detection::domain::detection_clusterer::cluster_detections;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::face_region::FaceRegion;

/// Sliding window edge used by the SeetaFace cascade.
const WINDOW_SIZE: u32 = 40;

/// Classifier score below which a window is rejected.
const SCORE_THRESHOLD: f64 = 2.0;

/// Face detector backed by the `rustface` crate (SeetaFace cascade).
///
/// The model is parsed once at startup and cloned into a fresh detector
/// per call, so a single instance can serve concurrent requests.
pub struct RustfaceDetector {
    model: rustface::Model,
    params: CascadeParams,
}

impl RustfaceDetector {
    pub fn new(model: rustface::Model, params: CascadeParams) -> Self {
        if params.angle != 0.0 {
            log::warn!(
                "Search angle {} is not supported by the SeetaFace cascade; scanning upright only",
                params.angle
            );
        }
        log::info!(
            "Cascade detector: faces {}..{} px, step {} px, pyramid {:.3}, angle {}",
            params.min_size,
            params.max_size,
            params.window_step(WINDOW_SIZE),
            params.pyramid_scale(),
            params.angle
        );
        Self { model, params }
    }
}

/// Square region centered on a rustface bounding box, sized by its longer side.
fn to_face_region(face: &rustface::FaceInfo) -> FaceRegion {
    let bbox = face.bbox();
    FaceRegion {
        row: bbox.y() + bbox.height() as i32 / 2,
        col: bbox.x() + bbox.width() as i32 / 2,
        scale: bbox.width().max(bbox.height()) as i32,
        score: face.score(),
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, pixels: &[u8], rows: u32, cols: u32) -> Vec<FaceRegion> {
        if self.params.too_small(rows, cols) || pixels.len() < (rows as usize) * (cols as usize) {
            log::debug!("Skipping detection on {cols}x{rows} image");
            return Vec::new();
        }

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_window_size(WINDOW_SIZE);
        detector.set_min_face_size(self.params.min_size);
        detector.set_max_face_size(self.params.max_size);
        detector.set_pyramid_scale_factor(self.params.pyramid_scale());
        let step = self.params.window_step(WINDOW_SIZE);
        detector.set_slide_window_step(step, step);
        detector.set_score_thresh(SCORE_THRESHOLD);

        let raw: Vec<FaceRegion> = detector
            .detect(&rustface::ImageData::new(pixels, cols, rows))
            .iter()
            .map(to_face_region)
            .collect();

        let faces = cluster_detections(&raw, self.params.cluster_threshold);
        log::debug!("{} raw detections clustered into {} faces", raw.len(), faces.len());
        faces
    }
}
