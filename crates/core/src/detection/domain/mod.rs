pub mod cascade_params;
pub mod detection_clusterer;
pub mod face_detector;
