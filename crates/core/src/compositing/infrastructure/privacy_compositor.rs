use ndarray::Array3;

use crate::compositing::domain::frame_compositor::FrameCompositor;
use crate::detection::domain::detection::Detection;
use crate::shared::constants::BLUR_KERNEL_SIZE;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

use super::gaussian;

/// Pixels captured under one kept rect before blurring, written back after.
struct RegionSnapshot {
    rect: Rect,
    pixels: Array3<u8>,
}

/// CPU privacy compositor: snapshot the kept regions, blur the whole frame
/// with a separable Gaussian, then restore the snapshots in capture order.
///
/// Restoring in capture order makes overlaps last-write-wins by detection
/// index. Running the pass twice leaves kept regions intact but blurs the
/// background twice; the operation is deliberately not idempotent.
pub struct PrivacyCompositor {
    kernel: Vec<f32>,
    blur_temp: Vec<f32>,
}

impl PrivacyCompositor {
    pub fn new(kernel_size: usize) -> Self {
        let kernel_size = kernel_size | 1; // kernel must be odd to stay centered
        Self {
            kernel: gaussian::gaussian_kernel_1d(kernel_size),
            blur_temp: Vec::new(),
        }
    }
}

impl Default for PrivacyCompositor {
    fn default() -> Self {
        Self::new(BLUR_KERNEL_SIZE)
    }
}

impl FrameCompositor for PrivacyCompositor {
    fn compose(&mut self, frame: &mut Frame, detections: &[Detection]) {
        let fw = frame.width();
        let fh = frame.height();

        // Capture before any blurring so blur never contaminates a kept
        // region's source pixels. Empty and inverted rects are skipped.
        let mut snapshots: Vec<RegionSnapshot> = Vec::with_capacity(detections.len());
        for det in detections {
            let rect = det.rect.clamp(fw, fh);
            if rect.is_empty() {
                continue;
            }
            snapshots.push(RegionSnapshot {
                rect,
                pixels: frame.region_view(&rect).to_owned(),
            });
        }

        let width = fw as usize;
        let height = fh as usize;
        let channels = frame.channels() as usize;
        gaussian::blur_frame_with_kernel(
            frame.data_mut(),
            width,
            height,
            channels,
            &self.kernel,
            &mut self.blur_temp,
        );

        for snapshot in &snapshots {
            frame
                .region_view_mut(&snapshot.rect)
                .assign(&snapshot.pixels);
        }
    }
}
