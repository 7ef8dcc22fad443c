//! Design generation: the guided generator (`/design-generator/*`) and the
//! one-shot quick design (`/design/generate`).

use serde::{Deserialize, Serialize};

use super::OptionSet;
use crate::core::forms::split_csv;

pub const GENERATE_PROMPT_PATH: &str = "/design-generator/generate-prompt";
pub const GENERATE_IMAGE_PATH: &str = "/design-generator/generate-image";
pub const DOWNLOAD_IMAGE_PATH: &str = "/design-generator/download-image";
pub const QUICK_DESIGN_PATH: &str = "/design/generate";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl OptionSet for Gender {
    const ALL: &'static [Self] = &[Gender::Female, Gender::Male];

    fn key(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl Gender {
    /// Outfits offered for this gender; the first one is the default
    pub fn outfits(self) -> &'static [&'static str] {
        match self {
            Gender::Female => &[
                "Lehenga",
                "Saree",
                "Kurti",
                "Gown",
                "Anarkali",
                "Western Dress",
                "Sharara",
                "Jumpsuit",
            ],
            Gender::Male => &[
                "Sherwani",
                "Suit",
                "Dhoti",
                "Kurta",
                "Shirt",
                "Blazer",
                "Traditional Wear",
                "Casual Outfit",
            ],
        }
    }

    pub fn default_outfit(self) -> &'static str {
        self.outfits()[0]
    }
}

pub const OCCASIONS: &[&str] = &["Wedding", "Partywear", "Festival", "Casual", "Office"];
pub const FABRICS: &[&str] = &["Silk", "Cotton", "Satin", "Velvet"];
pub const REGIONS: &[&str] = &["Indian", "Western", "Fusion"];

pub const DEFAULT_COLORS: &str = "Lavender, Silver";
pub const DEFAULT_KEYWORDS: &str = "embroidered, elegant";

/// Raw form state of the first wizard step
#[derive(Debug, Clone, PartialEq)]
pub struct DesignBrief {
    pub gender: Gender,
    pub outfit_type: String,
    pub occasion: String,
    pub colors: String,
    pub fabric_preference: String,
    pub regional_preference: String,
    pub style_keywords: String,
    pub design_description: String,
}

impl Default for DesignBrief {
    fn default() -> Self {
        Self {
            gender: Gender::Female,
            outfit_type: Gender::Female.default_outfit().to_string(),
            occasion: OCCASIONS[0].to_string(),
            colors: DEFAULT_COLORS.to_string(),
            fabric_preference: FABRICS[0].to_string(),
            regional_preference: REGIONS[0].to_string(),
            style_keywords: DEFAULT_KEYWORDS.to_string(),
            design_description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    pub outfit_type: String,
    pub occasion: String,
    pub gender: Gender,
    pub colors: Vec<String>,
    pub fabric_preference: String,
    pub regional_preference: String,
    pub style_keywords: Vec<String>,
    pub design_description: String,
}

impl From<&DesignBrief> for PromptRequest {
    fn from(brief: &DesignBrief) -> Self {
        Self {
            outfit_type: brief.outfit_type.clone(),
            occasion: brief.occasion.clone(),
            gender: brief.gender,
            colors: split_csv(&brief.colors),
            fabric_preference: brief.fabric_preference.clone(),
            regional_preference: brief.regional_preference.clone(),
            style_keywords: split_csv(&brief.style_keywords),
            design_description: brief.design_description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FabricNote {
    #[serde(default)]
    pub fabric: String,
    #[serde(default)]
    pub properties: String,
    #[serde(default)]
    pub care: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PromptResponse {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub fabrics: Vec<FabricNote>,
    #[serde(default)]
    pub inspiration_collage: Option<String>,
    #[serde(default)]
    pub inspiration_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub use_refiner: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    pub image: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

impl OptionSet for ImageFormat {
    const ALL: &'static [Self] = &[ImageFormat::Png, ImageFormat::Jpg];

    fn key(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpg => "JPG",
        }
    }
}

impl ImageFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpg => "image/jpeg",
        }
    }

    /// `vastravaani-design.<ext>`
    pub fn filename(self) -> String {
        format!("vastravaani-design.{}", self.key())
    }
}

/// Query parameters of the download endpoint
pub fn download_query(prompt: &str, format: ImageFormat, use_refiner: bool) -> Vec<(String, String)> {
    vec![
        ("prompt".to_string(), prompt.to_string()),
        ("format".to_string(), format.key().to_string()),
        ("use_refiner".to_string(), use_refiner.to_string()),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickStyle {
    #[default]
    Modern,
    Vintage,
    Casual,
    Formal,
    Bohemian,
}

impl OptionSet for QuickStyle {
    const ALL: &'static [Self] = &[
        QuickStyle::Modern,
        QuickStyle::Vintage,
        QuickStyle::Casual,
        QuickStyle::Formal,
        QuickStyle::Bohemian,
    ];

    fn key(self) -> &'static str {
        match self {
            QuickStyle::Modern => "modern",
            QuickStyle::Vintage => "vintage",
            QuickStyle::Casual => "casual",
            QuickStyle::Formal => "formal",
            QuickStyle::Bohemian => "bohemian",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QuickStyle::Modern => "Modern",
            QuickStyle::Vintage => "Vintage",
            QuickStyle::Casual => "Casual",
            QuickStyle::Formal => "Formal",
            QuickStyle::Bohemian => "Bohemian",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickDesignRequest {
    pub description: String,
    pub style: QuickStyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuickDesignResponse {
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outfits_follow_gender() {
        assert_eq!(Gender::Female.default_outfit(), "Lehenga");
        assert_eq!(Gender::Male.default_outfit(), "Sherwani");
        assert!(Gender::Male.outfits().contains(&"Kurta"));
        assert!(!Gender::Female.outfits().contains(&"Sherwani"));
    }

    #[test]
    fn test_prompt_request_from_default_brief() {
        let req = PromptRequest::from(&DesignBrief::default());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["gender"], "Female");
        assert_eq!(json["outfit_type"], "Lehenga");
        assert_eq!(json["colors"], serde_json::json!(["Lavender", "Silver"]));
        assert_eq!(
            json["style_keywords"],
            serde_json::json!(["embroidered", "elegant"])
        );
        assert_eq!(json["regional_preference"], "Indian");
    }

    #[test]
    fn test_prompt_request_drops_blank_entries() {
        let brief = DesignBrief {
            colors: "Gold, , Maroon,".to_string(),
            style_keywords: String::new(),
            ..Default::default()
        };
        let req = PromptRequest::from(&brief);
        assert_eq!(req.colors, vec!["Gold", "Maroon"]);
        assert!(req.style_keywords.is_empty());
    }

    #[test]
    fn test_prompt_response_without_collage() {
        let body = r#"{"summary": "s", "prompt": "p", "fabrics": [{"fabric": "Silk", "properties": "Lustrous", "care": "Dry clean"}], "inspiration_count": 0}"#;
        let resp: PromptResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.fabrics[0].care, "Dry clean");
        assert!(resp.inspiration_collage.is_none());
    }

    #[test]
    fn test_download_query_and_filename() {
        let query = download_query("red saree", ImageFormat::Jpg, false);
        assert_eq!(query[0], ("prompt".to_string(), "red saree".to_string()));
        assert_eq!(query[1].1, "jpg");
        assert_eq!(query[2].1, "false");
        assert_eq!(ImageFormat::Jpg.filename(), "vastravaani-design.jpg");
        assert_eq!(ImageFormat::Png.mime(), "image/png");
    }

    #[test]
    fn test_quick_design_request() {
        let req = QuickDesignRequest {
            description: "Pastel kurta".to_string(),
            style: QuickStyle::Bohemian,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["style"], "bohemian");
    }
}
