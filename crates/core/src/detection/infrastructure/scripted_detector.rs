use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::tensor::{DetectionTensor, RECORD_STRIDE};
use crate::shared::frame::Frame;

/// One scripted detection, normalized coordinates as an SSD-style model
/// would report them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ScriptedRecord {
    pub confidence: f32,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read detection script {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid detection script {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Replays a fixed detection list for every frame, standing in for a live
/// model backend.
///
/// Synthesizes a well-formed 7-field tensor per frame (batch 0, class 1),
/// so the decoder sees exactly what a real detector would produce.
#[derive(Debug)]
pub struct ScriptedDetector {
    records: Vec<ScriptedRecord>,
}

impl ScriptedDetector {
    pub fn new(records: Vec<ScriptedRecord>) -> Self {
        Self { records }
    }

    /// Loads records from a JSON file: an array of
    /// `{confidence, left, top, right, bottom}` objects.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = serde_json::from_str(&contents).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(records))
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<DetectionTensor, Box<dyn std::error::Error>> {
        let mut values = Vec::with_capacity(self.records.len() * RECORD_STRIDE);
        for r in &self.records {
            values.extend_from_slice(&[0.0, 1.0, r.confidence, r.left, r.top, r.right, r.bottom]);
        }
        Ok(DetectionTensor::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::tensor::CONFIDENCE_OFFSET;
    use std::io::Write;

    fn make_frame() -> Frame {
        Frame::new(vec![0u8; 4 * 4 * 3], 4, 4, 3, 0)
    }

    #[test]
    fn test_detect_builds_seven_field_records() {
        let mut detector = ScriptedDetector::new(vec![ScriptedRecord {
            confidence: 0.9,
            left: 0.1,
            top: 0.2,
            right: 0.3,
            bottom: 0.4,
        }]);
        let tensor = detector.detect(&make_frame()).unwrap();
        assert_eq!(
            tensor.values(),
            &[0.0, 1.0, 0.9, 0.1, 0.2, 0.3, 0.4][..]
        );
    }

    #[test]
    fn test_detect_preserves_record_order() {
        let mut detector = ScriptedDetector::new(vec![
            ScriptedRecord {
                confidence: 0.9,
                left: 0.0,
                top: 0.0,
                right: 0.1,
                bottom: 0.1,
            },
            ScriptedRecord {
                confidence: 0.6,
                left: 0.5,
                top: 0.5,
                right: 0.7,
                bottom: 0.7,
            },
        ]);
        let tensor = detector.detect(&make_frame()).unwrap();
        let records: Vec<_> = tensor.records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][CONFIDENCE_OFFSET], 0.9);
        assert_eq!(records[1][CONFIDENCE_OFFSET], 0.6);
    }

    #[test]
    fn test_empty_script_yields_empty_tensor() {
        let mut detector = ScriptedDetector::new(Vec::new());
        let tensor = detector.detect(&make_frame()).unwrap();
        assert!(tensor.values().is_empty());
    }

    #[test]
    fn test_from_path_parses_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faces.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"confidence": 0.8, "left": 0.2, "top": 0.2, "right": 0.6, "bottom": 0.6}}]"#
        )
        .unwrap();

        let detector = ScriptedDetector::from_path(&path).unwrap();
        assert_eq!(detector.records.len(), 1);
        assert_eq!(detector.records[0].confidence, 0.8);
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = ScriptedDetector::from_path(Path::new("/nonexistent/faces.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }

    #[test]
    fn test_from_path_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faces.json");
        std::fs::write(&path, "not json").unwrap();

        let err = ScriptedDetector::from_path(&path).unwrap_err();
        assert!(matches!(err, ScriptError::Parse { .. }));
    }
}
