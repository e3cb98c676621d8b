use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("cannot encode output image: {0}")]
    Image(#[source] image::ImageError),
}

/// Encoded response body together with the content type that describes it.
#[derive(Clone, Debug)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Serializes a finished canvas for the response.
pub trait CanvasEncoder: Send + Sync {
    fn encode(&self, canvas: &RgbaImage) -> Result<EncodedImage, EncodeError>;
}
