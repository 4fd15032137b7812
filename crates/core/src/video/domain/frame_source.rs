use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;

/// Produces the sequence of frames to process.
///
/// Implementations own acquisition details (file decoding, device capture,
/// threading); the pipeline only sees exclusively-owned frames, one at a
/// time. Exhaustion of the iterator is the end-of-stream signal.
pub trait FrameSource: Send {
    /// Opens the source and reports its stream properties.
    fn open(&mut self, path: &Path) -> Result<StreamInfo, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in acquisition order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the source.
    fn close(&mut self);
}
