use std::convert::Infallible;

use bytes::Bytes;

use crate::ingest::domain::ingest_error::IngestError;

/// Returns the contents of the first form part named `field`.
///
/// Parts are scanned in order. A body that ends without such a part is
/// [`IngestError::MissingImageField`]; a body that cannot be parsed up to
/// that point is [`IngestError::MalformedMultipart`].
pub fn read_form_field(body: &[u8], boundary: &str, field: &str) -> Result<Bytes, IngestError> {
    let chunk = Bytes::copy_from_slice(body);
    let stream = futures_util::stream::iter(std::iter::once(Ok::<Bytes, Infallible>(chunk)));
    let mut multipart = multer::Multipart::new(stream, boundary);

    pollster::block_on(async move {
        while let Some(part) = multipart.next_field().await.map_err(malformed)? {
            if part.name() != Some(field) {
                log::debug!("Skipping form part {:?}", part.name());
                continue;
            }
            return part.bytes().await.map_err(malformed);
        }
        Err(IngestError::MissingImageField)
    })
}

fn malformed(e: multer::Error) -> IngestError {
    IngestError::MalformedMultipart(e.to_string())
}
