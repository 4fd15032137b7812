use std::path::PathBuf;

/// Properties of an opened frame stream, reported by a
/// [`FrameSource`](crate::video::domain::frame_source::FrameSource).
///
/// Single images are modeled as one-frame streams with `fps = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub source_path: Option<PathBuf>,
}
