pub mod planner;
pub mod selector;
pub mod store;

pub use planner::{ItineraryPlanner, DEFAULT_DELAY};
pub use selector::{generate, interest_for_day, FALLBACK_INTEREST};
pub use store::ItineraryStore;
