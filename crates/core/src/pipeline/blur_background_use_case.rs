use std::path::Path;

use crate::compositing::domain::frame_compositor::FrameCompositor;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::tensor_decoder::decode_detections;
use crate::video::domain::frame_sink::FrameSink;
use crate::video::domain::frame_source::FrameSource;

/// Frame-by-frame privacy pipeline: read → detect → decode → compose → write.
///
/// Strictly sequential and blocking: each frame is exclusively owned by its
/// iteration and fully processed before the next one is read. The pipeline
/// stops at end-of-stream; there is no per-frame cancellation.
pub struct BlurBackgroundUseCase {
    source: Box<dyn FrameSource>,
    sink: Box<dyn FrameSink>,
    detector: Box<dyn FaceDetector>,
    compositor: Box<dyn FrameCompositor>,
    confidence_threshold: f32,
}

impl BlurBackgroundUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        sink: Box<dyn FrameSink>,
        detector: Box<dyn FaceDetector>,
        compositor: Box<dyn FrameCompositor>,
        confidence_threshold: f32,
    ) -> Self {
        Self {
            source,
            sink,
            detector,
            compositor,
            confidence_threshold,
        }
    }

    /// Runs the pipeline to end-of-stream; returns the number of frames
    /// written.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let info = self.source.open(input_path)?;
        self.sink.open(output_path, &info)?;
        log::info!(
            "Processing {}x{} stream ({} frame(s))",
            info.width,
            info.height,
            info.total_frames
        );

        let mut frames_written = 0usize;
        for frame_result in self.source.frames() {
            let mut frame = frame_result?;

            let tensor = self.detector.detect(&frame)?;
            let detections = decode_detections(
                &tensor,
                frame.width(),
                frame.height(),
                self.confidence_threshold,
            );
            log::debug!("Frame {}: kept {} region(s)", frame.index(), detections.len());

            self.compositor.compose(&mut frame, &detections);
            self.sink.write(&frame)?;
            frames_written += 1;
        }

        self.source.close();
        self.sink.close()?;
        log::info!("Done: {frames_written} frame(s) written");
        Ok(frames_written)
    }
}
