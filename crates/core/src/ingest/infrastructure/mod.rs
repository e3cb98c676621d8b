pub mod image_decoder;
pub mod multipart_reader;
