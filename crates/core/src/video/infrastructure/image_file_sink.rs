use std::path::{Path, PathBuf};

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;
use crate::video::domain::frame_sink::FrameSink;

/// Writes processed frames as image files via the `image` crate.
///
/// Single-frame streams write exactly the requested path; longer streams
/// get a zero-padded frame index appended to the file stem.
pub struct ImageFileSink {
    path: Option<PathBuf>,
    multi_frame: bool,
}

impl ImageFileSink {
    pub fn new() -> Self {
        Self {
            path: None,
            multi_frame: false,
        }
    }
}

impl Default for ImageFileSink {
    fn default() -> Self {
        Self::new()
    }
}

fn indexed_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{index:06}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index:06}"),
    };
    path.with_file_name(name)
}

impl FrameSink for ImageFileSink {
    fn open(&mut self, path: &Path, info: &StreamInfo) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.path = Some(path.to_path_buf());
        self.multi_frame = info.total_frames > 1;
        Ok(())
    }

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.path.as_ref().ok_or("ImageFileSink: not opened")?;
        let target = if self.multi_frame {
            indexed_path(path, frame.index())
        } else {
            path.clone()
        };

        let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
            .ok_or("Frame data does not match its dimensions")?;
        img.save(&target)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.path = None;
        Ok(())
    }
}
