pub mod constants;
pub mod face_region;
