use std::sync::Arc;
use std::time::Instant;

use crate::assets::asset_store::AssetStore;
use crate::compositing::domain::mask_compositor::{new_canvas, MaskCompositor};
use crate::compositing::infrastructure::nearest_mask_compositor::NearestMaskCompositor;
use crate::detection::domain::cascade_params::CascadeParams;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::infrastructure::rustface_detector::RustfaceDetector;
use crate::encoding::domain::canvas_encoder::{CanvasEncoder, EncodedImage};
use crate::encoding::domain::output_format::OutputFormat;
use crate::encoding::infrastructure::image_canvas_encoder::ImageCanvasEncoder;
use crate::ingest::image_ingest::ingest;
use crate::pipeline::function_io::{FunctionRequest, FunctionResponse};
use crate::pipeline::pipeline_error::PipelineError;

/// Result of a successful invocation.
pub struct MaskedImage {
    pub encoded: EncodedImage,
    pub faces: usize,
}

/// Single-request pipeline: ingest → detect → composite → encode.
///
/// Holds only read-only collaborators, so one instance is shared by all
/// worker threads. Per-request buffers live on the calling thread.
pub struct MaskFacesUseCase {
    detector: Box<dyn FaceDetector>,
    compositor: Box<dyn MaskCompositor>,
    encoder: Box<dyn CanvasEncoder>,
}

impl MaskFacesUseCase {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        compositor: Box<dyn MaskCompositor>,
        encoder: Box<dyn CanvasEncoder>,
    ) -> Self {
        Self {
            detector,
            compositor,
            encoder,
        }
    }

    /// Wires the production collaborators from the loaded assets.
    pub fn from_assets(assets: &AssetStore, format: OutputFormat) -> Self {
        Self::new(
            Box::new(RustfaceDetector::new(
                assets.model().clone(),
                CascadeParams::default(),
            )),
            Box::new(NearestMaskCompositor::new(Arc::clone(assets.mask()))),
            Box::new(ImageCanvasEncoder::new(format)),
        )
    }

    /// Runs the pipeline and converts any failure into a JSON error response.
    pub fn handle(&self, request: &FunctionRequest) -> FunctionResponse {
        match self.execute(request) {
            Ok(masked) => {
                log::info!(
                    "Masked {} face(s), {} bytes of {}",
                    masked.faces,
                    masked.encoded.bytes.len(),
                    masked.encoded.content_type
                );
                FunctionResponse::image(masked.encoded)
            }
            Err(e) => {
                log::warn!("Request failed ({}): {e}", e.status());
                FunctionResponse::error(e.status(), e.to_string())
            }
        }
    }

    pub fn execute(&self, request: &FunctionRequest) -> Result<MaskedImage, PipelineError> {
        let image = timed("ingest", || {
            ingest(request.content_type.as_deref(), &request.body)
        })?;

        let faces = timed("detect", || {
            let gray = image.to_luma8();
            self.detector
                .detect(gray.as_raw(), gray.height(), gray.width())
        });

        let canvas = timed("composite", || {
            let mut canvas = new_canvas(&image);
            self.compositor.composite(&mut canvas, &faces);
            canvas
        });

        let encoded = timed("encode", || self.encoder.encode(&canvas))?;

        Ok(MaskedImage {
            encoded,
            faces: faces.len(),
        })
    }
}

fn timed<T>(stage: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    log::debug!(
        "{stage}: {:.1}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    out
}
