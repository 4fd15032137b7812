use crate::shared::rect::Rect;

/// One decoded detection: confidence score plus bounding box in absolute
/// pixel coordinates, clamped to the frame bounds.
///
/// Lives only for the processing of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub confidence: f32,
    pub rect: Rect,
}
