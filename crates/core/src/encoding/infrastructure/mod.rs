pub mod image_canvas_encoder;
