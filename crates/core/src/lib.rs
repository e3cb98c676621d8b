//! Face masking pipeline: ingest an uploaded image, detect faces with a
//! cascade classifier, composite a mask over each face and re-encode.

pub mod assets;
pub mod compositing;
pub mod detection;
pub mod encoding;
pub mod ingest;
pub mod pipeline;
pub mod shared;
