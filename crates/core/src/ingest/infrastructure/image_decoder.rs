use image::DynamicImage;

use crate::ingest::domain::ingest_error::IngestError;

/// Decodes an encoded raster, sniffing the container format from its magic bytes.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, IngestError> {
    if bytes.is_empty() {
        return Err(IngestError::EmptyBody);
    }
    image::load_from_memory(bytes).map_err(IngestError::Decode)
}
