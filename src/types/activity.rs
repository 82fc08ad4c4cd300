use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single point-of-interest visit within a day.
///
/// Every field is display text. Nothing here is parsed or validated beyond
/// presence; the time window in particular is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Display time window (e.g. "08:00 - 09:30")
    pub time: String,
    /// English name of the place
    pub name_en: String,
    /// Chinese name of the place, as written on local signage
    pub name_zh: String,
    /// Optional pinyin transliteration of the Chinese name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// Chinese street address
    pub address_zh: String,
    /// Optional English street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_en: Option<String>,
    /// Optional district or neighborhood label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_zh: Option<String>,
    /// Free-text query used to build outbound map links
    pub map_query: String,
    /// City name used by region-scoped map providers
    pub city_zh: String,
    /// Optional transit hint (nearest metro line and station)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_hint: Option<String>,
    /// What the visit is about
    pub description: String,
    /// Price tier label such as "$", "$$$" or "Free"
    pub price_range: String,
    /// Recommendation note
    pub recommendation: String,
}

impl Activity {
    /// Chinese address followed by the district label, if any.
    pub fn full_address_zh(&self) -> String {
        match &self.district_zh {
            Some(district) => format!("{} ({})", self.address_zh, district),
            None => self.address_zh.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_default_when_missing() {
        let activity: Activity = serde_json::from_value(json!({
            "time": "09:00 - 11:00",
            "name_en": "Local Market",
            "name_zh": "当地市场",
            "address_zh": "市中心区域",
            "map_query": "当地市场",
            "city_zh": "城市",
            "description": "Explore the local lifestyle and fresh produce.",
            "price_range": "$",
            "recommendation": "Great for authentic photos."
        }))
        .unwrap();

        assert!(activity.pinyin.is_none());
        assert!(activity.address_en.is_none());
        assert!(activity.metro_hint.is_none());
        assert_eq!(activity.full_address_zh(), "市中心区域");

        let value = serde_json::to_value(&activity).unwrap();
        assert!(value.get("district_zh").is_none());
    }

    #[test]
    fn test_full_address_includes_district() {
        let activity: Activity = serde_json::from_value(json!({
            "time": "18:00 - 20:00",
            "name_en": "The Bund",
            "name_zh": "外滩",
            "address_zh": "中山东一路",
            "district_zh": "黄浦区",
            "map_query": "外滩",
            "city_zh": "上海",
            "description": "Dinner with a view.",
            "price_range": "$$$",
            "recommendation": "Book a window seat."
        }))
        .unwrap();

        assert_eq!(activity.full_address_zh(), "中山东一路 (黄浦区)");
    }
}
