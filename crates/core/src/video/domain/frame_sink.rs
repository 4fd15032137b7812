use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;

/// Consumes processed frames (display, encoder, image files).
pub trait FrameSink: Send {
    /// Prepares the sink for a stream with the given properties.
    fn open(
        &mut self,
        path: &Path,
        info: &StreamInfo,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Writes one processed frame.
    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Flushes and releases the sink.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
