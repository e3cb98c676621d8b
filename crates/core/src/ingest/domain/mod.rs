pub mod ingest_error;
pub mod request_encoding;
