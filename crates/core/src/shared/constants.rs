pub const MASK_ASSET_NAME: &str = "mask.png";
pub const MODEL_ASSET_NAME: &str = "seeta_fd_frontal_v1.0.bin";

/// Multipart form field that carries the uploaded image.
pub const IMAGE_FORM_FIELD: &str = "image";

pub const MIN_FACE_SIZE: u32 = 20;
pub const MAX_FACE_SIZE: u32 = 2000;
pub const SHIFT_FACTOR: f64 = 0.1;
pub const SCALE_FACTOR: f64 = 1.1;
/// Upright faces only.
pub const SEARCH_ANGLE: f64 = 0.0;
pub const CLUSTER_OVERLAP_THRESHOLD: f64 = 0.18;

pub const JPEG_QUALITY: u8 = 100;

pub const JSON_CONTENT_TYPE: &str = "application/json";
