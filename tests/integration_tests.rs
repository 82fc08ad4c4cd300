use chinatrip_rs::{
    generate, maps, Catalog, ItineraryPlanner, ItineraryStore, MapProvider, PlannerError,
    TripRequest,
};
use std::sync::Arc;
use std::time::Duration;

fn strings(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

#[test]
fn test_output_length_and_numbering() {
    let catalog = Catalog::builtin();
    let cases: [(&str, Vec<String>); 5] = [
        ("Shanghai", strings(&["Food", "Culture"])),
        ("Beijing", strings(&["Culture"])),
        ("Chengdu", strings(&["Nightlife", "Nature", "Food"])),
        ("Atlantis", strings(&["Food"])),
        ("Shanghai", Vec::new()),
    ];

    for (city, interests) in &cases {
        for total_days in 1..=10 {
            let plans = generate(catalog, city, total_days, interests.as_slice());
            assert_eq!(plans.len(), total_days as usize);
            let numbers: Vec<u32> = plans.iter().map(|plan| plan.day).collect();
            let expected: Vec<u32> = (1..=total_days).collect();
            assert_eq!(numbers, expected, "{} {:?}", city, interests);
        }
    }
}

#[test]
fn test_empty_interests_behave_like_food() {
    let catalog = Catalog::builtin();
    let none: [&str; 0] = [];
    for city in ["Shanghai", "Beijing", "Chengdu", "Atlantis"] {
        assert_eq!(
            generate(catalog, city, 4, &none),
            generate(catalog, city, 4, &["Food"]),
        );
    }
}

#[test]
fn test_unknown_city_uses_default_set() {
    let catalog = Catalog::builtin();
    let plans = generate(catalog, "Atlantis", 5, &["Food", "Culture", "Nature"]);
    for plan in &plans {
        assert_eq!(&plan.activities, catalog.default_activities());
    }
}

#[test]
fn test_shanghai_food_single_day() {
    let plans = generate(Catalog::builtin(), "Shanghai", 1, &["Food"]);
    assert_eq!(plans.len(), 1);

    let names: Vec<&str> = plans[0]
        .activities
        .iter()
        .map(|activity| activity.name_en.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Jia Jia Tang Bao", "Yu Garden Old Town", "The Bund"]
    );
    assert_eq!(plans[0].activities[0].time, "08:00 - 09:30");
    assert_eq!(plans[0].activities[2].name_zh, "外滩");
}

#[test]
fn test_shanghai_food_second_day_repeats_template() {
    let catalog = Catalog::builtin();
    let plans = generate(catalog, "Shanghai", 2, &["Food"]);

    // one Food template, so (2 - 1) % 1 + 1 = 1 picks it again
    assert_eq!(plans[1].day, 2);
    assert_eq!(plans[1].activities.len(), 3);
    assert_eq!(plans[1].activities[0].name_en, "Jia Jia Tang Bao");
    assert_eq!(plans[1].activities, plans[0].activities);
}

#[test]
fn test_interest_without_templates_falls_back() {
    let catalog = Catalog::builtin();
    let plans = generate(catalog, "Shanghai", 2, &["Food", "Nightlife"]);

    assert_eq!(plans[0].activities[0].name_en, "Jia Jia Tang Bao");
    assert!(Arc::ptr_eq(&plans[1].activities, catalog.default_activities()));
    assert_eq!(plans[1].activities[0].name_en, "Local Market");
}

#[test]
fn test_interest_rotation_across_days() {
    let plans = generate(Catalog::builtin(), "Shanghai", 4, &["Culture", "Food"]);
    assert_eq!(plans[0].activities[0].name_en, "Shanghai Museum");
    assert_eq!(plans[1].activities[0].name_en, "Jia Jia Tang Bao");
    assert_eq!(plans[2].activities[0].name_en, "Shanghai Museum");
    assert_eq!(plans[3].activities[0].name_en, "Jia Jia Tang Bao");
}

#[test]
fn test_generation_is_idempotent() {
    let planner = ItineraryPlanner::builtin().without_delay();
    let request = TripRequest::new("Beijing", 6, strings(&["Culture", "Nightlife"]));
    assert_eq!(planner.generate(&request), planner.generate(&request));
}

#[tokio::test]
async fn test_later_finisher_wins_the_slot() {
    let store = ItineraryStore::new();
    let slow = ItineraryPlanner::builtin().with_delay(Duration::from_millis(80));
    let fast = ItineraryPlanner::builtin().with_delay(Duration::from_millis(10));

    let first = TripRequest::new("Shanghai", 1, strings(&["Food"]));
    let second = TripRequest::new("Chengdu", 2, strings(&["Nature"]));

    // `first` is triggered first but finishes last
    tokio::join!(slow.plan_into(&first, &store), fast.plan_into(&second, &store));

    let current = store.current().unwrap();
    assert_eq!(current.city(), "Shanghai");
    assert_eq!(store.version(), 2);
}

#[test]
fn test_map_urls_for_the_bund() {
    let expectations = [
        (MapProvider::Google, "www.google.com", "query"),
        (MapProvider::Apple, "maps.apple.com", "q"),
        (MapProvider::Amap, "uri.amap.com", "keyword"),
        (MapProvider::Baidu, "api.map.baidu.com", "query"),
    ];

    for (provider, host, key) in expectations {
        let url = provider.url("外滩", "上海");
        assert_eq!(url.host_str(), Some(host));

        let decoded = url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned());
        assert_eq!(decoded.as_deref(), Some("外滩"));

        if provider.uses_city() {
            let city_key = if provider == MapProvider::Amap { "city" } else { "region" };
            let city = url
                .query_pairs()
                .find(|(k, _)| k == city_key)
                .map(|(_, v)| v.into_owned());
            assert_eq!(city.as_deref(), Some("上海"));
        }
    }

    assert_eq!(
        maps::google_maps_url("外滩"),
        MapProvider::Google.url("外滩", "ignored")
    );
}

#[test]
fn test_activity_map_links_cover_every_provider() {
    let catalog = Catalog::builtin();
    let bund = &catalog.lookup("Shanghai", "Food")[0].activities[2];
    let links = bund.map_links();

    assert_eq!(links.len(), 4);
    let providers: Vec<MapProvider> = links.iter().map(|link| link.provider).collect();
    assert_eq!(providers, MapProvider::ALL.to_vec());
}

#[test]
fn test_error_handling() {
    let error = PlannerError::InvalidInput("Test error".to_string());
    assert_eq!(error.error_code(), "INVALID_INPUT");
    assert!(error.to_string().contains("Test error"));

    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "INVALID_INPUT");
    assert_eq!(payload["error"]["user_error"], true);

    let payload = PlannerError::Catalog("broken".to_string()).to_error_payload();
    assert_eq!(payload["error"]["user_error"], false);
}
