//! Color and pattern analysis (`/color-pattern-analyzer/analyze`)

use serde::Deserialize;

pub const ANALYZE_PATH: &str = "/color-pattern-analyzer/analyze";

/// Upload timeout for the analyzer, which runs a vision model
pub const ANALYZE_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatternAnalysis {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// 0.0 ..= 1.0
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DominantColor {
    pub hex: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaletteColor {
    #[serde(default)]
    pub name: String,
    pub hex: String,
    #[serde(default)]
    pub rgb: Option<Rgb>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColorPalette {
    #[serde(default)]
    pub harmony_type: String,
    #[serde(default)]
    pub primary: Option<PaletteColor>,
    #[serde(default)]
    pub secondary: Vec<PaletteColor>,
    #[serde(default)]
    pub complementary: Option<PaletteColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColorAnalysis {
    /// Echo of the uploaded image as base64, without the data-url prefix
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub pattern_analysis: PatternAnalysis,
    #[serde(default)]
    pub dominant_colors: Vec<DominantColor>,
    #[serde(default)]
    pub color_palette: ColorPalette,
    #[serde(default)]
    pub ai_insights: String,
    #[serde(default)]
    pub styling_recommendations: String,
}

impl ColorAnalysis {
    /// Image echo as an `<img src>` value
    pub fn image_src(&self) -> Option<String> {
        self.image_base64
            .as_deref()
            .filter(|b| !b.is_empty())
            .map(|b| {
                if b.starts_with("data:") {
                    b.to_string()
                } else {
                    format!("data:image/jpeg;base64,{}", b)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response() {
        let body = r##"{
            "image_base64": "AAAA",
            "pattern_analysis": {"type": "Floral", "description": "Large blooms", "confidence": 0.87},
            "dominant_colors": [{"hex": "#1A1A1A", "name": "Charcoal", "percentage": 42.5, "rgb": [26, 26, 26]}],
            "color_palette": {
                "harmony_type": "Analogous",
                "primary": {"name": "Charcoal", "hex": "#1A1A1A", "rgb": {"r": 26, "g": 26, "b": 26}},
                "secondary": [{"name": "Ash", "hex": "#B2B2B2"}],
                "complementary": {"name": "Ivory", "hex": "#FFFFF0"}
            },
            "ai_insights": "Works for evening wear",
            "styling_recommendations": "Pair with gold"
        }"##;
        let analysis: ColorAnalysis = serde_json::from_str(body).unwrap();

        assert_eq!(analysis.pattern_analysis.kind, "Floral");
        assert_eq!(analysis.dominant_colors[0].name, "Charcoal");
        let primary = analysis.color_palette.primary.as_ref().unwrap();
        assert_eq!(primary.rgb.unwrap().css(), "rgb(26, 26, 26)");
        assert_eq!(analysis.color_palette.secondary.len(), 1);
        assert_eq!(
            analysis.image_src().as_deref(),
            Some("data:image/jpeg;base64,AAAA")
        );
    }

    #[test]
    fn test_sparse_response() {
        let analysis: ColorAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.dominant_colors.is_empty());
        assert!(analysis.color_palette.primary.is_none());
        assert_eq!(analysis.image_src(), None);
    }
}
