//! Per-frame detection input.
//!
//! Frames are exchanged as JSONL, one object per line:
//!
//! ```text
//! {"target": {"x": 300, "y": 200, "width": 40, "height": 80}, "is_target_lost": false}
//! {"target": null, "is_target_lost": true}
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// What the detection pipeline reports for one video frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// The tracked target's bounding box, if any.
    #[serde(default)]
    pub target: Option<BoundingBox>,

    /// Whether the target has disappeared from view.
    #[serde(default)]
    pub is_target_lost: bool,
}

impl FrameInput {
    /// A frame in which the target was seen.
    pub fn seen(target: BoundingBox) -> Self {
        Self {
            target: Some(target),
            is_target_lost: false,
        }
    }

    /// A frame in which the target could not be found.
    pub fn lost() -> Self {
        Self {
            target: None,
            is_target_lost: true,
        }
    }
}

/// Parse JSONL frame inputs, skipping blank and `#` comment lines.
pub fn parse_frames(jsonl: &str) -> Result<Vec<FrameInput>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize frame inputs to JSONL format.
pub fn serialize_frames(frames: &[FrameInput]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
