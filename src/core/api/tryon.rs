//! AR try-on: body analysis of an uploaded photo (`/analyze-image`) and
//! try-on generation (`/ar-tryon/generate-tryon`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::body_mesh::{DEFAULT_SKIN_TONE, GarmentStyle, Measurements};

pub use crate::core::body_mesh::GarmentCategory;

pub const ANALYZE_IMAGE_PATH: &str = "/analyze-image";
pub const GENERATE_TRYON_PATH: &str = "/ar-tryon/generate-tryon";

pub const DEFAULT_MODEL_NAME: &str = "User";
const FALLBACK_GLB_STEM: &str = "vastravaani_model";

/// Result of the photo analysis; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BodyAnalysis {
    #[serde(default)]
    pub height_estimate: Option<f64>,
    #[serde(default)]
    pub weight_estimate: Option<f64>,
    #[serde(default)]
    pub shoulder_width: Option<f64>,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hip: Option<f64>,
    #[serde(default)]
    pub arm_length: Option<f64>,
    #[serde(default)]
    pub inseam: Option<f64>,
    #[serde(default)]
    pub skin_tone: Option<String>,
    #[serde(default)]
    pub body_shape: Option<String>,
    #[serde(default)]
    pub posture: Option<String>,
    /// 0.0 ..= 1.0
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub analysis_details: Value,
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl BodyAnalysis {
    /// Overwrite the measurements the analysis detected, keep the rest
    pub fn apply_to(&self, current: &Measurements) -> Measurements {
        Measurements {
            height: positive(self.height_estimate).unwrap_or(current.height),
            weight: positive(self.weight_estimate).unwrap_or(current.weight),
            shoulder_width: positive(self.shoulder_width).unwrap_or(current.shoulder_width),
            chest: positive(self.chest).unwrap_or(current.chest),
            waist: positive(self.waist).unwrap_or(current.waist),
            hip: positive(self.hip).unwrap_or(current.hip),
            arm_length: positive(self.arm_length).unwrap_or(current.arm_length),
            inseam: positive(self.inseam).unwrap_or(current.inseam),
        }
    }

    pub fn skin_tone(&self) -> &str {
        self.skin_tone
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SKIN_TONE)
    }

    pub fn body_shape(&self) -> &str {
        self.body_shape
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("unknown")
    }

    /// Rows of the "detected" panel
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let cm = |v: Option<f64>| match positive(v) {
            Some(v) => format!("{:.0} cm", v),
            None => "—".to_string(),
        };
        vec![
            ("Height", cm(self.height_estimate)),
            ("Chest", cm(self.chest)),
            ("Waist", cm(self.waist)),
            ("Shape", self.body_shape().to_string()),
            (
                "Confidence",
                match self.confidence_score {
                    Some(c) => format!("{:.0}%", c * 100.0),
                    None => "—".to_string(),
                },
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAvatar {
    pub avatar_type: &'static str,
    pub measurements: Measurements,
    pub skin_tone: String,
    pub body_shape: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentModel {
    pub model_type: &'static str,
    pub model_format: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryOnPreferences {
    pub garment_category: GarmentCategory,
    pub color: String,
    pub pose: &'static str,
    pub lighting: &'static str,
}

/// Body of the try-on generation call. Fabric properties are optional
/// upstream and left out, the backend simulates a default drape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryOnRequest {
    pub user_avatar: UserAvatar,
    pub garment_model: GarmentModel,
    pub preferences: TryOnPreferences,
}

impl TryOnRequest {
    pub fn new(
        measurements: &Measurements,
        analysis: Option<&BodyAnalysis>,
        garment: &GarmentStyle,
    ) -> Self {
        let (skin_tone, body_shape) = match analysis {
            Some(a) => (a.skin_tone(), a.body_shape()),
            None => (DEFAULT_SKIN_TONE, "unknown"),
        };
        Self {
            user_avatar: UserAvatar {
                avatar_type: "uploaded",
                measurements: *measurements,
                skin_tone: skin_tone.to_string(),
                body_shape: body_shape.to_string(),
            },
            garment_model: GarmentModel {
                model_type: "2d_image",
                model_format: "png",
            },
            preferences: TryOnPreferences {
                garment_category: garment.category,
                color: garment.color.clone(),
                pose: "frontal",
                lighting: "studio",
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FitRecommendations {
    /// 0 ..= 100
    #[serde(default)]
    pub fit_score: Option<f64>,
    #[serde(default)]
    pub size_recommendation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub adjustments_needed: Vec<String>,
    #[serde(default)]
    pub length_recommendation: Option<String>,
    #[serde(default)]
    pub width_recommendation: Option<String>,
}

impl FitRecommendations {
    pub fn score_text(&self) -> String {
        match self.fit_score {
            Some(score) => format!("{:.0}%", score),
            None => "N/A".to_string(),
        }
    }

    pub fn size(&self) -> &str {
        self.size_recommendation
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("M")
    }

    /// Explicit notes, else the suggested adjustments, else a dash
    pub fn notes_text(&self) -> String {
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            return notes.to_string();
        }
        if !self.adjustments_needed.is_empty() {
            return self.adjustments_needed.join("; ");
        }
        "—".to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TryOnResult {
    #[serde(default)]
    pub fit_recommendations: FitRecommendations,
    /// Base64 GLB model; empty when the backend produced none
    #[serde(default)]
    pub downloadable_glb: String,
}

impl TryOnResult {
    pub fn glb_href(&self) -> Option<String> {
        if self.downloadable_glb.is_empty() {
            None
        } else {
            Some(format!(
                "data:application/octet-stream;base64,{}",
                self.downloadable_glb
            ))
        }
    }
}

/// `<name>.glb`, falling back to a fixed stem for a blank name
pub fn glb_filename(name: &str) -> String {
    let stem = name.trim();
    let stem = if stem.is_empty() { FALLBACK_GLB_STEM } else { stem };
    format!("{}.glb", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_missing_and_zero_values() {
        let analysis = BodyAnalysis {
            height_estimate: Some(182.0),
            chest: Some(0.0),
            waist: Some(-3.0),
            ..Default::default()
        };
        let current = Measurements::default();
        let next = analysis.apply_to(&current);

        assert_eq!(next.height, 182.0);
        assert_eq!(next.chest, current.chest);
        assert_eq!(next.waist, current.waist);
        assert_eq!(next.inseam, current.inseam);
    }

    // ========================================================================
    // Body analysis
    // ========================================================================

    #[test]
    fn test_analysis_parses_backend_shape() {
        let body = r##"{
            "height_estimate": 168.4, "weight_estimate": 61.0, "shoulder_width": 41.0,
            "chest": 92.0, "waist": 70.0, "hip": 96.0, "arm_length": 58.0, "inseam": 76.0,
            "body_shape": "hourglass", "skin_tone": "#C68642", "posture": "upright",
            "confidence_score": 0.82, "analysis_details": "pose landmarks"
        }"##;
        let analysis: BodyAnalysis = serde_json::from_str(body).unwrap();
        let rows = analysis.summary_rows();

        assert_eq!(rows[0], ("Height", "168 cm".to_string()));
        assert_eq!(rows[1], ("Chest", "92 cm".to_string()));
        assert_eq!(rows[2], ("Waist", "70 cm".to_string()));
        assert_eq!(rows[3].1, "hourglass");
        assert_eq!(rows[4].1, "82%");
        assert_eq!(analysis.skin_tone(), "#C68642");
    }

    #[test]
    fn test_analysis_merges_detected_measurements() {
        let body = r#"{"height_estimate": 175.0, "chest": 92.0, "waist": 70.0, "hip": 96.0, "inseam": 0}"#;
        let analysis: BodyAnalysis = serde_json::from_str(body).unwrap();
        let current = Measurements::default();
        let next = analysis.apply_to(&current);

        assert_eq!(next.height, 175.0);
        assert_eq!(next.chest, 92.0);
        assert_eq!(next.waist, 70.0);
        assert_eq!(next.hip, 96.0);
        assert_eq!(next.inseam, current.inseam);
        assert_eq!(next.weight, current.weight);
    }

    // ========================================================================
    // Try-on request
    // ========================================================================

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_request_matches_backend_shape() {
        let req = TryOnRequest::new(&Measurements::default(), None, &GarmentStyle::default());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(keys(&json), vec!["garment_model", "preferences", "user_avatar"]);
        assert_eq!(
            keys(&json["user_avatar"]),
            vec!["avatar_type", "body_shape", "measurements", "skin_tone"]
        );
        assert_eq!(
            keys(&json["user_avatar"]["measurements"]),
            vec!["arm_length", "chest", "height", "hip", "inseam", "shoulder_width", "waist", "weight"]
        );
        assert_eq!(
            json["garment_model"],
            serde_json::json!({ "model_type": "2d_image", "model_format": "png" })
        );
    }

    #[test]
    fn test_request_without_analysis_uses_defaults() {
        let req = TryOnRequest::new(&Measurements::default(), None, &GarmentStyle::default());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["user_avatar"]["avatar_type"], "uploaded");
        assert_eq!(json["user_avatar"]["measurements"]["height"], 170.0);
        assert_eq!(json["user_avatar"]["skin_tone"], "#E5BCA8");
        assert_eq!(json["user_avatar"]["body_shape"], "unknown");
        assert_eq!(json["preferences"]["garment_category"], "dress");
        assert_eq!(json["preferences"]["color"], "#E91E63");
        assert_eq!(json["preferences"]["pose"], "frontal");
        assert_eq!(json["preferences"]["lighting"], "studio");
    }

    #[test]
    fn test_request_carries_detected_tone() {
        let analysis = BodyAnalysis {
            skin_tone: Some("#8D5524".to_string()),
            body_shape: Some("rectangle".to_string()),
            ..Default::default()
        };
        let garment = GarmentStyle {
            category: GarmentCategory::Jacket,
            color: "#000000".to_string(),
        };
        let req = TryOnRequest::new(&Measurements::default(), Some(&analysis), &garment);
        assert_eq!(req.user_avatar.skin_tone, "#8D5524");
        assert_eq!(req.user_avatar.body_shape, "rectangle");
        assert_eq!(req.preferences.garment_category, GarmentCategory::Jacket);
    }

    // ========================================================================
    // Try-on result
    // ========================================================================

    #[test]
    fn test_fit_card_fallbacks() {
        let result: TryOnResult = serde_json::from_str("{}").unwrap();
        let fit = &result.fit_recommendations;
        assert_eq!(fit.score_text(), "N/A");
        assert_eq!(fit.size(), "M");
        assert_eq!(fit.notes_text(), "—");
        assert_eq!(result.glb_href(), None);

        let result: TryOnResult = serde_json::from_str(
            r#"{"fit_recommendations": {"fit_score": 87.4, "size_recommendation": "L", "adjustments_needed": ["Take in waist"]}, "downloadable_glb": "Z2xURg=="}"#,
        )
        .unwrap();
        assert_eq!(result.fit_recommendations.score_text(), "87%");
        assert_eq!(result.fit_recommendations.notes_text(), "Take in waist");
        assert_eq!(
            result.glb_href().as_deref(),
            Some("data:application/octet-stream;base64,Z2xURg==")
        );
    }

    #[test]
    fn test_glb_filename() {
        assert_eq!(glb_filename("Asha"), "Asha.glb");
        assert_eq!(glb_filename("   "), "vastravaani_model.glb");
    }
}
