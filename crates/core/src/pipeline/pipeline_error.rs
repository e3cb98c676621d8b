use thiserror::Error;

use crate::encoding::domain::canvas_encoder::EncodeError;
use crate::ingest::domain::ingest_error::IngestError;

/// A failed invocation. Every variant becomes a JSON error response.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl PipelineError {
    /// HTTP status reported to the caller.
    pub fn status(&self) -> u16 {
        match self {
            PipelineError::Ingest(_) => 400,
            PipelineError::Encode(_) => 500,
        }
    }
}
