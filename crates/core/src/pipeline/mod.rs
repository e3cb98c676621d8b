pub mod function_io;
pub mod mask_faces_use_case;
pub mod pipeline_error;
