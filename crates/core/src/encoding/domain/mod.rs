pub mod canvas_encoder;
pub mod output_format;
