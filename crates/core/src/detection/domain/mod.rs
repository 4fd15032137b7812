pub mod detection;
pub mod face_detector;
pub mod tensor;
pub mod tensor_decoder;
