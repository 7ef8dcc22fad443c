//! Fabric recommender (`/fabric-recommender/*`)
//!
//! Three calls chained by the wizard: analyze the garment photo, ask for
//! recommendations with the user's preferences, export the result as PDF.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::OptionSet;

pub const ANALYZE_IMAGE_PATH: &str = "/fabric-recommender/analyze-image";
pub const RECOMMEND_PATH: &str = "/fabric-recommender/recommend";
pub const EXPORT_PDF_PATH: &str = "/fabric-recommender/export-pdf";

/// Characters of reasoning shown in the results table
pub const REASONING_PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    #[default]
    Shirt,
    Dress,
    Pants,
    Gown,
    Blouse,
    Jacket,
    Skirt,
}

impl OptionSet for GarmentType {
    const ALL: &'static [Self] = &[
        GarmentType::Shirt,
        GarmentType::Dress,
        GarmentType::Pants,
        GarmentType::Gown,
        GarmentType::Blouse,
        GarmentType::Jacket,
        GarmentType::Skirt,
    ];

    fn key(self) -> &'static str {
        match self {
            GarmentType::Shirt => "shirt",
            GarmentType::Dress => "dress",
            GarmentType::Pants => "pants",
            GarmentType::Gown => "gown",
            GarmentType::Blouse => "blouse",
            GarmentType::Jacket => "jacket",
            GarmentType::Skirt => "skirt",
        }
    }

    fn label(self) -> &'static str {
        match self {
            GarmentType::Shirt => "Shirt",
            GarmentType::Dress => "Dress",
            GarmentType::Pants => "Pants",
            GarmentType::Gown => "Gown",
            GarmentType::Blouse => "Blouse",
            GarmentType::Jacket => "Jacket",
            GarmentType::Skirt => "Skirt",
        }
    }
}

/// Style, season and occasion are free-form on the wire; these are the
/// values the preferences form offers.
pub const STYLE_OPTIONS: &[&str] = &["modern", "traditional", "vintage", "minimalist", "bohemian"];
pub const SEASON_OPTIONS: &[&str] = &["summer", "winter", "spring", "fall", "all-season"];
pub const OCCASION_OPTIONS: &[&str] = &["casual", "formal", "wedding", "party", "office", "festival"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FabricPreferences {
    pub garment_type: GarmentType,
    pub style_preference: String,
    pub season: String,
    pub color_preferences: Vec<String>,
    pub fabric_preferences: Vec<String>,
    pub budget_min: f64,
    pub budget_max: f64,
    pub occasion: String,
    pub sustainability: bool,
}

impl Default for FabricPreferences {
    fn default() -> Self {
        Self {
            garment_type: GarmentType::default(),
            style_preference: "modern".to_string(),
            season: "summer".to_string(),
            color_preferences: Vec::new(),
            fabric_preferences: Vec::new(),
            budget_min: 100.0,
            budget_max: 5000.0,
            occasion: "casual".to_string(),
            sustainability: false,
        }
    }
}

/// Body of `/recommend`: the preferences plus the analyzed image
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub preferences: FabricPreferences,
    pub image_base64: Option<String>,
}

impl RecommendRequest {
    /// The analysis response is kept opaque; only its image echo is reused
    pub fn new(preferences: FabricPreferences, image_analysis: &Value) -> Self {
        Self {
            preferences,
            image_base64: image_analysis
                .get("image_base64")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricRecommendation {
    #[serde(default)]
    pub fabric_name: String,
    #[serde(default)]
    pub fabric_type: String,
    #[serde(default)]
    pub price_per_meter: f64,
    #[serde(default)]
    pub supplier: String,
    /// 0.0 ..= 1.0
    #[serde(default)]
    pub compatibility_score: f64,
    #[serde(default)]
    pub ai_reasoning: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub purchase_link: Option<String>,
    /// Marketplace the offer was found on; the PDF export prints it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Everything else the recommender sent, echoed back on export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Vec<FabricRecommendation>,
    #[serde(default)]
    pub ai_summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportPdfRequest<'a> {
    pub recommendations: &'a [FabricRecommendation],
    pub image_analysis: &'a Value,
    pub user_preferences: &'a FabricPreferences,
    pub ai_summary: &'a str,
}

/// `fabric_recommendations_<ms>.pdf`
pub fn export_filename(timestamp_ms: u64) -> String {
    format!("fabric_recommendations_{}.pdf", timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_preferences() {
        let prefs = FabricPreferences::default();
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["garment_type"], "shirt");
        assert_eq!(json["style_preference"], "modern");
        assert_eq!(json["budget_min"], 100.0);
        assert_eq!(json["budget_max"], 5000.0);
        assert_eq!(json["sustainability"], false);
    }

    #[test]
    fn test_recommend_request_flattens_preferences() {
        let analysis = json!({"success": true, "image_base64": "data:image/jpeg;base64,QUJD"});
        let req = RecommendRequest::new(FabricPreferences::default(), &analysis);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["image_base64"], "data:image/jpeg;base64,QUJD");
        assert_eq!(json["season"], "summer");
        assert!(json.get("preferences").is_none());
    }

    #[test]
    fn test_recommend_request_without_image() {
        let req = RecommendRequest::new(FabricPreferences::default(), &json!({}));
        assert!(req.image_base64.is_none());
    }

    #[test]
    fn test_recommendation_parses_sparse_entries() {
        let body = r#"{"recommendations": [{"fabric_name": "Mulmul Cotton", "price_per_meter": 240, "compatibility_score": 0.91}], "ai_summary": "Light cottons"}"#;
        let resp: RecommendResponse = serde_json::from_str(body).unwrap();
        let first = &resp.recommendations[0];
        assert_eq!(first.fabric_name, "Mulmul Cotton");
        assert_eq!(first.price_per_meter, 240.0);
        assert!(first.purchase_link.is_none());
    }

    #[test]
    fn test_export_echoes_backend_fields() {
        let body = r#"{"recommendations": [{
            "fabric_name": "Chanderi Silk", "fabric_type": "silk", "price_per_meter": 890,
            "supplier": "Weaver Co", "platform": "google_shopping", "rating": 4.5,
            "sustainability_score": 0.7
        }], "ai_summary": "Festive silks"}"#;
        let resp: RecommendResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.recommendations[0].platform.as_deref(), Some("google_shopping"));

        let analysis = json!({});
        let prefs = FabricPreferences::default();
        let export = ExportPdfRequest {
            recommendations: &resp.recommendations,
            image_analysis: &analysis,
            user_preferences: &prefs,
            ai_summary: &resp.ai_summary,
        };
        let json = serde_json::to_value(&export).unwrap();
        let rec = &json["recommendations"][0];

        assert_eq!(rec["platform"], "google_shopping");
        assert_eq!(rec["rating"], 4.5);
        assert_eq!(rec["sustainability_score"], 0.7);
        assert_eq!(rec["fabric_name"], "Chanderi Silk");
    }

    #[test]
    fn test_export_omits_unknown_platform() {
        let rec: FabricRecommendation =
            serde_json::from_str(r#"{"fabric_name": "Khadi"}"#).unwrap();
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("platform").is_none());
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(1_700_000_000_123),
            "fabric_recommendations_1700000000123.pdf"
        );
    }
}
