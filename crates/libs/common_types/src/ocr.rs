use serde::{Deserialize, Serialize};

/// One detected text region from the OCR service, with its quadrilateral
/// outline in image pixel coordinates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OcrFragment {
    #[serde(rename = "txt")]
    pub text: String,
    /// Four `[x, y]` corner points, starting top-left and going clockwise.
    #[serde(rename = "boxes")]
    pub corners: [[f64; 2]; 4],
}

impl OcrFragment {
    /// Vertical center of the outline, the mean of the four corner ys.
    #[must_use]
    pub fn y_center(&self) -> f64 {
        self.corners.iter().map(|corner| corner[1]).sum::<f64>() / 4.0
    }

    /// X coordinate of the first corner point, used for left-to-right ordering.
    #[must_use]
    pub fn left_x(&self) -> f64 {
        self.corners[0][0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_response() {
        // Response shape of the PaddleOCR space, including fields we ignore.
        let body = r#"[
            {"txt": "Alice", "boxes": [[10.0, 100.0], [60.0, 100.0], [60.0, 120.0], [10.0, 120.0]], "score": 0.98},
            {"txt": "123456", "boxes": [[70, 101], [130, 101], [130, 119], [70, 119]], "score": 0.91}
        ]"#;

        let fragments: Vec<OcrFragment> = serde_json::from_str(body).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "Alice");
        assert_eq!(fragments[0].corners[3], [10.0, 120.0]);
    }

    #[test]
    fn y_center_is_mean_of_corner_ys() {
        let fragment = OcrFragment {
            text: "x".to_string(),
            corners: [[0.0, 100.0], [50.0, 102.0], [50.0, 118.0], [0.0, 120.0]],
        };
        assert!((fragment.y_center() - 110.0).abs() < f64::EPSILON);
        assert!((fragment.left_x() - 0.0).abs() < f64::EPSILON);
    }
}
