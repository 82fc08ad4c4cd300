use crate::types::Activity;
use serde::{Deserialize, Serialize};
use url::Url;

const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/";
const APPLE_MAPS: &str = "https://maps.apple.com/";
const AMAP_SEARCH: &str = "https://uri.amap.com/search";
const BAIDU_PLACE_SEARCH: &str = "https://api.map.baidu.com/place/search";

/// Map apps an activity can be opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    Google,
    Apple,
    Amap,
    Baidu,
}

impl MapProvider {
    pub const ALL: [MapProvider; 4] = [
        MapProvider::Google,
        MapProvider::Apple,
        MapProvider::Amap,
        MapProvider::Baidu,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MapProvider::Google => "Google Maps",
            MapProvider::Apple => "Apple Maps",
            MapProvider::Amap => "高德地图 (Amap)",
            MapProvider::Baidu => "百度地图 (Baidu)",
        }
    }

    /// Region-scoped providers take the city as a search hint
    pub fn uses_city(&self) -> bool {
        matches!(self, MapProvider::Amap | MapProvider::Baidu)
    }

    pub fn url(&self, query: &str, city: &str) -> Url {
        match self {
            MapProvider::Google => google_maps_url(query),
            MapProvider::Apple => apple_maps_url(query),
            MapProvider::Amap => amap_url(query, city),
            MapProvider::Baidu => baidu_maps_url(query, city),
        }
    }
}

/// An outbound link for one provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink {
    pub provider: MapProvider,
    pub url: Url,
}

pub fn google_maps_url(query: &str) -> Url {
    with_params(GOOGLE_MAPS_SEARCH, &[("api", "1"), ("query", query)])
}

pub fn apple_maps_url(query: &str) -> Url {
    with_params(APPLE_MAPS, &[("q", query)])
}

pub fn amap_url(query: &str, city: &str) -> Url {
    with_params(
        AMAP_SEARCH,
        &[("keyword", query), ("city", city), ("mode", "0")],
    )
}

pub fn baidu_maps_url(query: &str, city: &str) -> Url {
    with_params(
        BAIDU_PLACE_SEARCH,
        &[("query", query), ("region", city), ("output", "html")],
    )
}

fn with_params(endpoint: &str, params: &[(&str, &str)]) -> Url {
    let mut url = Url::parse(endpoint)
        .unwrap_or_else(|err| panic!("invalid built-in map endpoint {}: {}", endpoint, err));
    url.query_pairs_mut().extend_pairs(params.iter());
    url
}

impl Activity {
    /// Links for every provider, built from the map query and city hint.
    pub fn map_links(&self) -> Vec<MapLink> {
        MapProvider::ALL
            .iter()
            .map(|provider| MapLink {
                provider: *provider,
                url: provider.url(&self.map_query, &self.city_zh),
            })
            .collect()
    }
}
