pub mod domain;
pub mod image_ingest;
pub mod infrastructure;
