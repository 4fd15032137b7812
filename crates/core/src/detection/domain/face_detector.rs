use crate::detection::domain::tensor::DetectionTensor;
use crate::shared::frame::Frame;

/// Black-box detection capability: consumes a frame, produces the raw
/// detection tensor.
///
/// Any backend fits behind this seam (Caffe-style or TensorFlow-style
/// models, or a scripted stand-in). Implementations may be stateful,
/// hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<DetectionTensor, Box<dyn std::error::Error>>;
}
