use super::state::{CopyField, ItineraryView};
use crate::error::Result;
use crate::types::{Activity, DayPlan, Itinerary};
use serde_json::Value;
use std::time::Instant;

/// Output formats offered by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::PlannerError::InvalidInput(format!(
                "unknown output format {:?} (expected text or json)",
                other
            ))),
        }
    }
}

pub fn render(
    itinerary: &Itinerary,
    view: &ItineraryView,
    format: OutputFormat,
    now: Instant,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(itinerary, view, now)),
        OutputFormat::Json => render_json(itinerary),
    }
}

pub fn render_json(itinerary: &Itinerary) -> Result<String> {
    Ok(serde_json::to_string_pretty(itinerary)?)
}

/// JSON Schema describing the JSON output
pub fn itinerary_schema() -> Result<Value> {
    let root = schemars::schema_for!(Itinerary);
    Ok(serde_json::to_value(root)?)
}

/// Human-readable itinerary: a header, then one panel per day. Collapsed
/// panels show only their summary line.
pub fn render_text(itinerary: &Itinerary, view: &ItineraryView, now: Instant) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== Your {} Adventure ===", itinerary.city()));
    lines.push(itinerary.request.summary());

    for plan in &itinerary.days {
        lines.push(String::new());
        let open = view.panels.is_open(plan.day);
        lines.push(day_header(plan, open));

        if open {
            for (idx, activity) in plan.activities.iter().enumerate() {
                lines.push(String::new());
                render_card(&mut lines, activity, plan.day, idx + 1, view, now);
            }
        }
    }

    lines.join("\n")
}

fn day_header(plan: &DayPlan, open: bool) -> String {
    let marker = if open { "▼" } else { "▶" };
    format!(
        "{} Day {} · {} Activities Planned",
        marker,
        plan.day,
        plan.activity_count()
    )
}

fn render_card(
    lines: &mut Vec<String>,
    activity: &Activity,
    day: u32,
    index: usize,
    view: &ItineraryView,
    now: Instant,
) {
    let card = view.card(day, index);

    lines.push(format!("  {}. [{}]", index, activity.time));
    lines.push(format!("     {}", activity.name_en));
    match &activity.pinyin {
        Some(pinyin) => lines.push(format!("     {}  {}", activity.name_zh, pinyin)),
        None => lines.push(format!("     {}", activity.name_zh)),
    }
    lines.push(format!("     {}", activity.full_address_zh()));
    if let Some(address_en) = &activity.address_en {
        lines.push(format!("     {}", address_en));
    }
    if let Some(metro) = &activity.metro_hint {
        lines.push(format!("     • {}", metro));
    }
    lines.push(format!("     {}", activity.description));

    for field in [CopyField::Name, CopyField::Address] {
        if card.copied(field, now) {
            lines.push(format!("     ✓ Copied {}", field.label()));
        }
    }

    if view.show_map_links || card.maps_open {
        for link in activity.map_links() {
            lines.push(format!("     {}: {}", link.provider.label(), link.url));
        }
    }

    lines.push(format!(
        "     [{}] {}",
        activity.price_range, activity.recommendation
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ItineraryPlanner;
    use crate::types::TripRequest;

    fn shanghai_food(days: u32) -> Itinerary {
        ItineraryPlanner::builtin()
            .without_delay()
            .generate(&TripRequest::new("Shanghai", days, vec!["Food".to_string()]))
    }

    #[test]
    fn test_text_shows_open_day_only() {
        let itinerary = shanghai_food(2);
        let view = ItineraryView::new();
        let text = render_text(&itinerary, &view, Instant::now());

        assert!(text.contains("Your Shanghai Adventure"));
        assert!(text.contains("2 Days • Food"));
        assert!(text.contains("▼ Day 1 · 3 Activities Planned"));
        assert!(text.contains("▶ Day 2 · 3 Activities Planned"));
        assert!(text.contains("佳家汤包  Jiā Jiā Tāng Bāo"));
        assert!(text.contains("黄河路90号 (黄浦区/人民广场)"));
        assert!(text.contains("uri.amap.com"));
        // day 2 repeats the Food template but is collapsed
        assert_eq!(text.matches("佳家汤包").count(), 1);
    }

    #[test]
    fn test_text_expand_all_and_hide_links() {
        let itinerary = shanghai_food(2);
        let mut view = ItineraryView::new();
        view.panels.expand_all();
        view.show_map_links = false;
        let text = render_text(&itinerary, &view, Instant::now());

        assert!(text.contains("▼ Day 2 · 3 Activities Planned"));
        assert_eq!(text.matches("佳家汤包").count(), 2);
        assert!(!text.contains("Google Maps"));
    }

    #[test]
    fn test_text_shows_fallback_day() {
        let itinerary = ItineraryPlanner::builtin().without_delay().generate(
            &TripRequest::new("Atlantis", 1, vec!["Food".to_string()]),
        );
        let text = render_text(&itinerary, &ItineraryView::new(), Instant::now());

        assert!(text.contains("Your Atlantis Adventure"));
        assert!(text.contains("▼ Day 1 · 1 Activities Planned"));
        assert!(text.contains("当地市场"));
    }

    #[test]
    fn test_card_maps_toggle_overrides_hidden_links() {
        let itinerary = shanghai_food(1);
        let mut view = ItineraryView::new();
        view.show_map_links = false;
        view.card_mut(1, 2).toggle_maps();
        let text = render_text(&itinerary, &view, Instant::now());

        assert_eq!(text.matches("Google Maps").count(), 1);
    }

    #[test]
    fn test_text_shows_copy_feedback() {
        let itinerary = shanghai_food(1);
        let mut view = ItineraryView::new();
        let now = Instant::now();
        view.card_mut(1, 3).record_copy(CopyField::Name, true, now);

        let text = render_text(&itinerary, &view, now);
        assert!(text.contains("✓ Copied Chinese name"));
        assert!(!text.contains("✓ Copied address"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let itinerary = shanghai_food(2);
        let json = render(&itinerary, &ItineraryView::new(), OutputFormat::Json, Instant::now())
            .unwrap();
        let back: Itinerary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, itinerary);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_schema_lists_days() {
        let schema = itinerary_schema().unwrap();
        assert!(schema["properties"]["days"].is_object());
        assert!(schema["properties"]["request"].is_object());
    }
}
