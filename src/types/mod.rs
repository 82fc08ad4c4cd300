pub mod activity;
pub mod itinerary;

pub use activity::Activity;
pub use itinerary::{DayPlan, Itinerary, TripRequest};
