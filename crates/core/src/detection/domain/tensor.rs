/// Number of scalar fields per detection record.
pub const RECORD_STRIDE: usize = 7;

/// Field offsets within one record:
/// `[batch_id, class_id, confidence, left, top, right, bottom]`.
pub const CONFIDENCE_OFFSET: usize = 2;
pub const LEFT_OFFSET: usize = 3;
pub const TOP_OFFSET: usize = 4;
pub const RIGHT_OFFSET: usize = 5;
pub const BOTTOM_OFFSET: usize = 6;

/// Raw output of a detection model: a flat float sequence grouped into
/// 7-field records, with the four spatial fields normalized to `[0, 1]`
/// relative to frame width/height.
///
/// Produced once per frame, decoded immediately, then discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionTensor {
    values: Vec<f32>,
}

impl DetectionTensor {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Iterates complete records in tensor order. A trailing partial
    /// record is dropped.
    pub fn records(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.values.chunks_exact(RECORD_STRIDE)
    }
}
