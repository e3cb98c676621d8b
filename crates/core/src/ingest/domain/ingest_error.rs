use thiserror::Error;

/// Per-request ingest failures. All are recoverable and reported to the caller.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("missing content type")]
    MissingContentType,
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("multipart content type has no boundary")]
    MissingBoundary,
    #[error("malformed multipart body: {0}")]
    MalformedMultipart(String),
    #[error("empty image: form has no `image` field")]
    MissingImageField,
    #[error("empty image: request body is empty")]
    EmptyBody,
    #[error("invalid image: {0}")]
    Decode(#[source] image::ImageError),
}
