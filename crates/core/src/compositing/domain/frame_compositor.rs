use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;

/// Domain interface for the per-frame privacy pass: blur everything outside
/// the detected regions, restore the originals inside them.
///
/// Mutates the frame in place and cannot fail given a structurally valid
/// frame and detection list. `&mut self` lets implementations reuse scratch
/// buffers across frames; the operation is blocking and non-reentrant.
pub trait FrameCompositor: Send {
    fn compose(&mut self, frame: &mut Frame, detections: &[Detection]);
}
