//! Trend analytics (`/advanced-trends/analyze-advanced`)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OptionSet;
use crate::core::forms::{split_csv, split_whitespace_tags};

pub const ANALYZE_PATH: &str = "/advanced-trends/analyze-advanced";

pub const DEFAULT_THEME: &str = "Streetwear 2025";
pub const DEFAULT_HASHTAGS: &str = "#streetwear #fashion2025";
pub const DEFAULT_KEYWORDS: &str = "oversized, vintage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Pinterest,
    Tiktok,
}

impl OptionSet for Platform {
    const ALL: &'static [Self] = &[Platform::Instagram, Platform::Pinterest, Platform::Tiktok];

    fn key(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Pinterest => "pinterest",
            Platform::Tiktok => "tiktok",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Pinterest => "Pinterest",
            Platform::Tiktok => "TikTok",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Global,
    Asia,
    Europe,
    America,
    Africa,
}

impl OptionSet for Region {
    const ALL: &'static [Self] = &[
        Region::Global,
        Region::Asia,
        Region::Europe,
        Region::America,
        Region::Africa,
    ];

    fn key(self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::America => "america",
            Region::Africa => "africa",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::America => "Americas",
            Region::Africa => "Africa",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TimeRange {
    #[serde(rename = "7")]
    Week,
    #[default]
    #[serde(rename = "30")]
    Month,
    #[serde(rename = "60")]
    TwoMonths,
    #[serde(rename = "90")]
    Quarter,
}

impl OptionSet for TimeRange {
    const ALL: &'static [Self] = &[
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::TwoMonths,
        TimeRange::Quarter,
    ];

    fn key(self) -> &'static str {
        match self {
            TimeRange::Week => "7",
            TimeRange::Month => "30",
            TimeRange::TwoMonths => "60",
            TimeRange::Quarter => "90",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
            TimeRange::TwoMonths => "Last 60 days",
            TimeRange::Quarter => "Last 90 days",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Basic,
    #[default]
    Detailed,
    Comprehensive,
}

impl OptionSet for Depth {
    const ALL: &'static [Self] = &[Depth::Basic, Depth::Detailed, Depth::Comprehensive];

    fn key(self) -> &'static str {
        match self {
            Depth::Basic => "basic",
            Depth::Detailed => "detailed",
            Depth::Comprehensive => "comprehensive",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Depth::Basic => "Basic",
            Depth::Detailed => "Detailed",
            Depth::Comprehensive => "Comprehensive",
        }
    }
}

/// Raw form state of the trends page
#[derive(Debug, Clone, PartialEq)]
pub struct TrendQuery {
    pub theme: String,
    pub platforms: Vec<Platform>,
    pub hashtags: String,
    pub keywords: String,
    pub region: Region,
    pub time_range: TimeRange,
    pub depth: Depth,
}

impl Default for TrendQuery {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            platforms: vec![Platform::Instagram, Platform::Pinterest],
            hashtags: DEFAULT_HASHTAGS.to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            region: Region::default(),
            time_range: TimeRange::default(),
            depth: Depth::default(),
        }
    }
}

impl TrendQuery {
    pub fn toggle_platform(&mut self, platform: Platform) {
        toggle_platform(&mut self.platforms, platform);
    }
}

/// Add or remove a platform, keeping the canonical order
pub fn toggle_platform(platforms: &mut Vec<Platform>, platform: Platform) {
    if platforms.contains(&platform) {
        platforms.retain(|p| *p != platform);
    } else {
        platforms.push(platform);
        platforms.sort_by_key(|p| Platform::ALL.iter().position(|q| q == p).unwrap_or(usize::MAX));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRequest {
    pub theme: String,
    pub platforms: Vec<Platform>,
    pub hashtags: Vec<String>,
    pub keywords: Vec<String>,
    pub region: Region,
    pub time_range: TimeRange,
    pub output_format: &'static str,
    pub depth: Depth,
}

impl From<&TrendQuery> for TrendRequest {
    fn from(query: &TrendQuery) -> Self {
        Self {
            theme: query.theme.trim().to_string(),
            platforms: query.platforms.clone(),
            hashtags: split_whitespace_tags(&query.hashtags),
            keywords: split_csv(&query.keywords),
            region: query.region,
            time_range: query.time_range,
            output_format: "detailed",
            depth: query.depth,
        }
    }
}

/// Metric values come back as numbers or strings depending on the scraper
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendMetrics {
    #[serde(default)]
    pub total_posts: Value,
    #[serde(default)]
    pub instagram: Value,
    #[serde(default)]
    pub pinterest: Value,
    #[serde(default)]
    pub unique_hashtags: Value,
    #[serde(default)]
    pub analysis_depth: Value,
}

impl TrendMetrics {
    /// Cards shown above the charts
    pub fn cards(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Posts Analyzed", metric_text(&self.total_posts)),
            ("Instagram", metric_text(&self.instagram)),
            ("Pinterest", metric_text(&self.pinterest)),
            ("Hashtags", metric_text(&self.unique_hashtags)),
        ]
    }
}

/// Render a metric; missing values show as a dash
pub fn metric_text(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendInsights {
    #[serde(default)]
    pub ai_forecast: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendReport {
    #[serde(default)]
    pub metrics: TrendMetrics,
    /// Chart name to image data-url
    #[serde(default)]
    pub charts: BTreeMap<String, String>,
    #[serde(default)]
    pub insights: TrendInsights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendResponse {
    pub data: TrendReport,
}

/// `hashtag_frequency` -> `Hashtag Frequency`
pub fn chart_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request() {
        let req = TrendRequest::from(&TrendQuery::default());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["theme"], "Streetwear 2025");
        assert_eq!(json["platforms"], json!(["instagram", "pinterest"]));
        assert_eq!(json["hashtags"], json!(["#streetwear", "#fashion2025"]));
        assert_eq!(json["keywords"], json!(["oversized", "vintage"]));
        assert_eq!(json["region"], "global");
        assert_eq!(json["time_range"], "30");
        assert_eq!(json["output_format"], "detailed");
        assert_eq!(json["depth"], "detailed");
    }

    #[test]
    fn test_hashtags_split_on_any_spacing() {
        let query = TrendQuery {
            hashtags: "  #boho   #linen ".to_string(),
            keywords: " , earthy ,,pastel ".to_string(),
            ..Default::default()
        };
        let req = TrendRequest::from(&query);
        assert_eq!(req.hashtags, vec!["#boho", "#linen"]);
        assert_eq!(req.keywords, vec!["earthy", "pastel"]);
    }

    #[test]
    fn test_toggle_platform_keeps_order() {
        let mut query = TrendQuery::default();
        query.toggle_platform(Platform::Instagram);
        assert_eq!(query.platforms, vec![Platform::Pinterest]);

        query.toggle_platform(Platform::Tiktok);
        query.toggle_platform(Platform::Instagram);
        assert_eq!(
            query.platforms,
            vec![Platform::Instagram, Platform::Pinterest, Platform::Tiktok]
        );
    }

    #[test]
    fn test_report_parses() {
        let body = json!({
            "success": true,
            "data": {
                "metrics": {"total_posts": 240, "instagram": "120", "pinterest": 120, "unique_hashtags": 57},
                "charts": {"hashtag_frequency": "data:image/png;base64,AA", "platform_split": "data:image/png;base64,BB"},
                "insights": {"ai_forecast": "**Baggy** fits stay", "recommendations": ["Stock cargo pants"]}
            }
        });
        let resp: TrendResponse = serde_json::from_value(body).unwrap();
        let cards = resp.data.metrics.cards();

        assert_eq!(cards[0], ("Posts Analyzed", "240".to_string()));
        assert_eq!(cards[1].1, "120");
        assert_eq!(resp.data.charts.len(), 2);
        assert_eq!(resp.data.insights.recommendations.len(), 1);
    }

    #[test]
    fn test_missing_metric_renders_dash() {
        assert_eq!(metric_text(&Value::Null), "—");
        assert_eq!(metric_text(&json!(3.5)), "3.5");
    }

    #[test]
    fn test_chart_label_replaces_every_underscore() {
        assert_eq!(chart_label("hashtag_frequency"), "Hashtag Frequency");
        assert_eq!(chart_label("top_color_share_by_week"), "Top Color Share By Week");
        assert_eq!(chart_label("sentiment"), "Sentiment");
    }
}
