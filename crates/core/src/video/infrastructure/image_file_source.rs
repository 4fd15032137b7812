use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;
use crate::video::domain::frame_source::FrameSource;

/// Adapts a single image file to the [`FrameSource`] interface.
///
/// The image becomes a one-frame stream with `fps = 0`, letting the
/// pipeline treat images and live streams uniformly. Decoding goes
/// through the `image` crate and always converts to RGB.
pub struct ImageFileSource {
    frame: Option<Frame>,
}

impl ImageFileSource {
    pub fn new() -> Self {
        Self { frame: None }
    }
}

impl Default for ImageFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for ImageFileSource {
    fn open(&mut self, path: &Path) -> Result<StreamInfo, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        self.frame = Some(Frame::new(img.into_raw(), width, height, 3, 0));

        Ok(StreamInfo {
            width,
            height,
            fps: 0.0,
            total_frames: 1,
            source_path: Some(path.to_path_buf()),
        })
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        if self.frame.is_none() {
            return Box::new(std::iter::once(Err("ImageFileSource: not opened".into())));
        }
        Box::new(self.frame.take().into_iter().map(Ok))
    }

    fn close(&mut self) {
        self.frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("test.png");
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([40, 90, 180]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_open_returns_stream_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 120, 80);
        let mut source = ImageFileSource::new();
        let info = source.open(&path).unwrap();
        assert_eq!(info.width, 120);
        assert_eq!(info.height, 80);
        assert_eq!(info.fps, 0.0);
        assert_eq!(info.total_frames, 1);
        assert_eq!(info.source_path, Some(path));
    }

    #[test]
    fn test_open_nonexistent_errors() {
        let mut source = ImageFileSource::new();
        assert!(source.open(Path::new("/nonexistent/test.png")).is_err());
    }

    #[test]
    fn test_frames_yields_single_rgb_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 120, 80);
        let mut source = ImageFileSource::new();
        source.open(&path).unwrap();

        let frames: Vec<_> = source.frames().collect();
        assert_eq!(frames.len(), 1);
        let frame = frames.into_iter().next().unwrap().unwrap();
        assert_eq!(frame.width(), 120);
        assert_eq!(frame.height(), 80);
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[40, 90, 180]);
    }

    #[test]
    fn test_frames_without_open_errors() {
        let mut source = ImageFileSource::new();
        assert!(source.frames().next().unwrap().is_err());
    }

    #[test]
    fn test_close_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 10, 10);
        let mut source = ImageFileSource::new();
        source.open(&path).unwrap();
        source.close();
        source.close();
    }
}
