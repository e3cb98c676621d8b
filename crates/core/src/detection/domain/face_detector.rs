use crate::shared::face_region::FaceRegion;

/// Domain interface for face detection over a single-channel intensity buffer.
///
/// `pixels` is row-major with `rows * cols` bytes. Implementations are
/// shared read-only across request threads, hence `&self` and `Sync`.
/// An empty result means no faces, not a failure.
pub trait FaceDetector: Send + Sync {
    fn detect(&self, pixels: &[u8], rows: u32, cols: u32) -> Vec<FaceRegion>;
}
