use crate::{
    catalog::{Catalog, KNOWN_INTERESTS},
    config::{normalize_interests, validate_days, PlannerConfig},
    core::{ItineraryPlanner, ItineraryStore},
    error::PlannerError,
    tools::Clipboard,
    types::{Itinerary, TripRequest},
    view::{itinerary_schema, render, CopyField, ItineraryView, OutputFormat},
};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// CLI entry point for the chinatrip tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = build_command().get_matches();

    if matches.get_flag("schema") {
        let schema = itinerary_schema()?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let catalog = Catalog::builtin();
    if matches.get_flag("list") {
        println!("{}", list_catalog(catalog));
        return Ok(());
    }

    let config = PlannerConfig::from_env().context("failed to load configuration")?;
    let request = request_from_matches(&matches, &config)?;
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(|value| value.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();

    let delay = matches
        .get_one::<u64>("delay-ms")
        .map(|millis| Duration::from_millis(*millis))
        .unwrap_or(config.delay);

    if !catalog.has_city(&request.city) {
        warn!(city = %request.city, "unknown city, every day will use the default activities");
    }

    let planner = ItineraryPlanner::from_config(&config).with_delay(delay);
    let store = ItineraryStore::new();

    if format == OutputFormat::Text {
        eprintln!("Finding the best local spots in {}...", request.city);
    }
    planner.plan_into(&request, &store).await;

    let itinerary = store
        .current()
        .context("no itinerary was published")?;
    info!(
        days = itinerary.days.len(),
        activities = itinerary.total_activities(),
        "itinerary generated"
    );

    let mut view = ItineraryView::new();
    view.on_generated();
    apply_view_flags(&matches, &itinerary, &mut view)?;

    let copies = [
        ("copy-name", CopyField::Name),
        ("copy-address", CopyField::Address),
    ];
    let mut clipboard = None;
    for (flag, field) in copies {
        let Some(target) = matches.get_one::<String>(flag) else {
            continue;
        };
        let (day, index) = parse_activity_ref(target)?;
        let activity = itinerary.activity(day, index)?;
        let text = field.text(activity);

        let backend = clipboard.get_or_insert_with(Clipboard::system);
        let copied = backend.copy(text).await;
        view.card_mut(day, index)
            .record_copy(field, copied, Instant::now());

        if copied {
            eprintln!("Copied {} \"{}\" to clipboard", field.label(), text);
        } else {
            error!(day, index, "clipboard copy failed");
            eprintln!("Could not copy {} to clipboard", field.label());
        }
    }

    match render(&itinerary, &view, format, Instant::now()) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Rendering failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

/// Argument definitions
pub fn build_command() -> Command {
    Command::new("chinatrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plan a day-by-day China city trip from a built-in catalog")
        .arg(
            Arg::new("city")
                .short('c')
                .long("city")
                .value_name("CITY")
                .help("Destination city (or set CHINATRIP_CITY)"),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .value_parser(value_parser!(u32))
                .help("Trip length, 1 to 7 days (or set CHINATRIP_DAYS)"),
        )
        .arg(
            Arg::new("interest")
                .short('i')
                .long("interest")
                .value_name("TAG")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Interest tag, repeatable: Food, Culture, Nature, Nightlife"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .help("Output format"),
        )
        .arg(
            Arg::new("open")
                .long("open")
                .value_name("DAY")
                .value_parser(value_parser!(u32))
                .conflicts_with("expand-all")
                .help("Day panel to expand (defaults to day 1)"),
        )
        .arg(
            Arg::new("expand-all")
                .long("expand-all")
                .action(ArgAction::SetTrue)
                .help("Expand every day"),
        )
        .arg(
            Arg::new("toggle")
                .long("toggle")
                .value_name("DAY")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Append)
                .help("Toggle a day panel, repeatable (toggling the open day closes it)"),
        )
        .arg(
            Arg::new("maps")
                .long("maps")
                .value_name("DAY.N")
                .action(ArgAction::Append)
                .help("Show map links for activity N on DAY, repeatable"),
        )
        .arg(
            Arg::new("no-maps")
                .long("no-maps")
                .action(ArgAction::SetTrue)
                .help("Hide map links on activity cards"),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_name("MILLIS")
                .value_parser(value_parser!(u64))
                .help("Simulated processing delay (or set CHINATRIP_DELAY_MS)"),
        )
        .arg(
            Arg::new("copy-name")
                .long("copy-name")
                .value_name("DAY.N")
                .help("Copy the Chinese name of activity N on DAY to the clipboard"),
        )
        .arg(
            Arg::new("copy-address")
                .long("copy-address")
                .value_name("DAY.N")
                .help("Copy the Chinese address of activity N on DAY to the clipboard"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List cities and the interests they have templates for"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .action(ArgAction::SetTrue)
                .help("Print the JSON Schema of the JSON output"),
        )
}

/// Merge CLI arguments over the configured defaults
pub fn request_from_matches(
    matches: &ArgMatches,
    config: &PlannerConfig,
) -> Result<TripRequest, PlannerError> {
    let city = matches
        .get_one::<String>("city")
        .map(|city| city.trim().to_string())
        .unwrap_or_else(|| config.city.clone());
    if city.is_empty() {
        return Err(PlannerError::InvalidInput("city must not be empty".to_string()));
    }

    let days = validate_days(matches.get_one::<u32>("days").copied().unwrap_or(config.days))?;

    let interests = match matches.get_many::<String>("interest") {
        Some(values) => normalize_interests(values),
        None => config.interests.clone(),
    };
    if interests.is_empty() {
        return Err(PlannerError::InvalidInput(
            "select at least one interest".to_string(),
        ));
    }

    Ok(TripRequest::new(city, days, interests))
}

/// Apply panel and map-link flags to a freshly reset view
pub fn apply_view_flags(
    matches: &ArgMatches,
    itinerary: &Itinerary,
    view: &mut ItineraryView,
) -> Result<(), PlannerError> {
    if matches.get_flag("expand-all") {
        view.panels.expand_all();
    } else if let Some(day) = matches.get_one::<u32>("open") {
        view.panels.open(*day);
    }
    if let Some(days) = matches.get_many::<u32>("toggle") {
        for day in days {
            view.panels.toggle(*day);
        }
    }

    view.show_map_links = !matches.get_flag("no-maps");
    if let Some(targets) = matches.get_many::<String>("maps") {
        for target in targets {
            let (day, index) = parse_activity_ref(target)?;
            itinerary.activity(day, index)?;
            view.card_mut(day, index).toggle_maps();
        }
    }
    Ok(())
}

/// Parse a `DAY.N` activity reference (both 1-based)
pub fn parse_activity_ref(value: &str) -> Result<(u32, usize), PlannerError> {
    let invalid = || {
        PlannerError::InvalidInput(format!(
            "activity reference must look like DAY.N (e.g. 1.2), got {:?}",
            value
        ))
    };

    let (day, index) = value.trim().split_once('.').ok_or_else(invalid)?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let index: usize = index.parse().map_err(|_| invalid())?;
    if day == 0 || index == 0 {
        return Err(invalid());
    }
    Ok((day, index))
}

fn list_catalog(catalog: &Catalog) -> String {
    let mut lines = Vec::new();
    lines.push("Cities:".to_string());
    for city in catalog.cities() {
        lines.push(format!("  {}: {}", city, catalog.interests(city).join(", ")));
    }
    lines.push(String::new());
    lines.push(format!("Interests: {}", KNOWN_INTERESTS.join(", ")));
    lines.join("\n")
}
