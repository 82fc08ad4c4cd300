//! chinatrip-rs: a small, type-safe itinerary builder for China city trips
//!
//! Pick a city, a trip length and a few interest tags; the planner assembles a
//! day-by-day plan from a built-in catalog of hand-picked places, falling back
//! to a default activity list wherever the catalog has nothing to offer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chinatrip_rs::{ItineraryPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let planner = ItineraryPlanner::builtin();
//!     let request = TripRequest::new("Shanghai", 3, vec!["Food".to_string()]);
//!
//!     let itinerary = planner.plan(&request).await;
//!     for day in &itinerary.days {
//!         println!("Day {}: {} activities", day.day, day.activities.len());
//!     }
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod tools;
pub mod types;
pub mod view;

pub use catalog::{Catalog, KNOWN_INTERESTS};
pub use config::PlannerConfig;
pub use core::{generate, ItineraryPlanner, ItineraryStore, FALLBACK_INTEREST};
pub use error::{PlannerError, Result};
pub use tools::{Clipboard, MapLink, MapProvider};
pub use types::{Activity, DayPlan, Itinerary, TripRequest};

pub use core as planner;
pub use tools::maps;

#[cfg(feature = "cli")]
pub mod cli;
