use std::path::Path;
use std::thread::JoinHandle;

use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;
use crate::video::domain::frame_source::FrameSource;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

/// Error crossing the acquisition thread boundary.
///
/// Source errors are not necessarily `Send`, so the full cause chain is
/// flattened into the message before it crosses the channel.
#[derive(Debug, Error)]
#[error("frame acquisition failed: {message}")]
pub struct AcquisitionError {
    message: String,
}

impl AcquisitionError {
    fn from_boxed(err: Box<dyn std::error::Error>) -> Self {
        let mut message = err.to_string();
        let mut cause = err.source();
        while let Some(c) = cause {
            message.push_str(": ");
            message.push_str(&c.to_string());
            cause = c.source();
        }
        Self { message }
    }
}

/// Runs frame acquisition on a dedicated thread, handing frames to the
/// processing loop over a bounded channel.
///
/// The consumer still sees a plain [`FrameSource`] yielding exclusively
/// owned frames one at a time; only the acquisition overlaps with
/// processing. Dropping the receiver (via `close` or early iterator drop)
/// unblocks the reader thread, which then shuts down its inner source.
pub struct ThreadedFrameSource {
    inner: Option<Box<dyn FrameSource>>,
    receiver: Option<crossbeam_channel::Receiver<Result<Frame, AcquisitionError>>>,
    handle: Option<JoinHandle<Box<dyn FrameSource>>>,
    capacity: usize,
}

impl ThreadedFrameSource {
    pub fn new(inner: Box<dyn FrameSource>) -> Self {
        Self::with_capacity(inner, DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(inner: Box<dyn FrameSource>, capacity: usize) -> Self {
        Self {
            inner: Some(inner),
            receiver: None,
            handle: None,
            capacity: capacity.max(1),
        }
    }
}

impl FrameSource for ThreadedFrameSource {
    fn open(&mut self, path: &Path) -> Result<StreamInfo, Box<dyn std::error::Error>> {
        let mut inner = self
            .inner
            .take()
            .ok_or("ThreadedFrameSource: already opened")?;
        let info = inner.open(path)?;

        let (sender, receiver) = crossbeam_channel::bounded(self.capacity);
        self.handle = Some(std::thread::spawn(move || {
            for frame_result in inner.frames() {
                let mapped = frame_result.map_err(AcquisitionError::from_boxed);
                if sender.send(mapped).is_err() {
                    // Consumer hung up; stop reading.
                    break;
                }
            }
            inner.close();
            inner
        }));
        self.receiver = Some(receiver);

        Ok(info)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        match self.receiver.take() {
            Some(receiver) => Box::new(
                receiver
                    .into_iter()
                    .map(|r| r.map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })),
            ),
            None => Box::new(std::iter::once(Err(
                "ThreadedFrameSource: not opened".into()
            ))),
        }
    }

    fn close(&mut self) {
        // Dropping the receiver makes any pending send fail, so the reader
        // thread exits even mid-stream.
        self.receiver = None;
        if let Some(handle) = self.handle.take() {
            if let Ok(inner) = handle.join() {
                self.inner = Some(inner);
            }
        }
    }
}

impl Drop for ThreadedFrameSource {
    fn drop(&mut self) {
        self.close();
    }
}
