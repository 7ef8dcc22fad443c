//! Pricing strategy (`/pricing/suggest`)

use serde::{Deserialize, Serialize};

use super::OptionSet;

pub const SUGGEST_PATH: &str = "/pricing/suggest";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TargetMarket {
    #[serde(rename = "budget")]
    Budget,
    #[default]
    #[serde(rename = "mid-range")]
    MidRange,
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "luxury")]
    Luxury,
}

impl OptionSet for TargetMarket {
    const ALL: &'static [Self] = &[
        TargetMarket::Budget,
        TargetMarket::MidRange,
        TargetMarket::Premium,
        TargetMarket::Luxury,
    ];

    fn key(self) -> &'static str {
        match self {
            TargetMarket::Budget => "budget",
            TargetMarket::MidRange => "mid-range",
            TargetMarket::Premium => "premium",
            TargetMarket::Luxury => "luxury",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TargetMarket::Budget => "Budget",
            TargetMarket::MidRange => "Mid-Range",
            TargetMarket::Premium => "Premium",
            TargetMarket::Luxury => "Luxury",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRequest {
    pub product_name: String,
    pub cost: f64,
    pub target_market: TargetMarket,
    pub competition: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingResponse {
    pub strategy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let req = PricingRequest {
            product_name: "Linen shirt".to_string(),
            cost: 450.5,
            target_market: TargetMarket::default(),
            competition: String::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["target_market"], "mid-range");
        assert_eq!(json["cost"], 450.5);
        assert_eq!(json["competition"], "");
    }

    #[test]
    fn test_market_keys_match_serde() {
        for market in TargetMarket::ALL {
            let json = serde_json::to_value(market).unwrap();
            assert_eq!(json, market.key());
        }
    }
}
