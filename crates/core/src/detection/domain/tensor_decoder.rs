use crate::detection::domain::detection::Detection;
use crate::detection::domain::tensor::{
    DetectionTensor, BOTTOM_OFFSET, CONFIDENCE_OFFSET, LEFT_OFFSET, RIGHT_OFFSET, TOP_OFFSET,
};
use crate::shared::rect::Rect;

/// Decodes a raw detection tensor into pixel-space detections.
///
/// Records are visited in tensor order and that order is preserved in the
/// output. A record survives only if its confidence strictly exceeds
/// `confidence_threshold`. Normalized box corners are scaled by the frame
/// dimensions, truncated toward zero, then clamped on all four sides into
/// `[0, frame_w] x [0, frame_h]` (detectors occasionally emit fractions
/// slightly outside `[0, 1]`).
///
/// Inverted boxes are passed through unchanged; the compositor skips them.
/// A malformed or empty tensor simply yields no detections.
pub fn decode_detections(
    tensor: &DetectionTensor,
    frame_w: u32,
    frame_h: u32,
    confidence_threshold: f32,
) -> Vec<Detection> {
    let mut detections = Vec::new();
    for record in tensor.records() {
        let confidence = record[CONFIDENCE_OFFSET];
        if confidence > confidence_threshold {
            let rect = Rect::new(
                (record[LEFT_OFFSET] * frame_w as f32) as i32,
                (record[TOP_OFFSET] * frame_h as f32) as i32,
                (record[RIGHT_OFFSET] * frame_w as f32) as i32,
                (record[BOTTOM_OFFSET] * frame_h as f32) as i32,
            )
            .clamp(frame_w, frame_h);
            detections.push(Detection { confidence, rect });
        }
    }
    detections
}
