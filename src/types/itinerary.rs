use super::activity::Activity;
use crate::error::{PlannerError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One day of an itinerary.
///
/// Inside the catalog `day` is the template's position within its interest's
/// template list. In generated output it is the 1-based trip day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// 1-based day counter
    pub day: u32,
    /// Activities in display order
    #[schemars(with = "Vec<Activity>")]
    pub activities: Arc<[Activity]>,
}

impl DayPlan {
    pub fn new(day: u32, activities: Arc<[Activity]>) -> Self {
        Self { day, activities }
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// Destination city (e.g. "Shanghai")
    pub city: String,
    /// Requested trip length in days
    pub days: u32,
    /// Selected interest tags, in the order they cycle across days
    pub interests: Vec<String>,
}

impl TripRequest {
    pub fn new(city: impl Into<String>, days: u32, interests: Vec<String>) -> Self {
        Self {
            city: city.into(),
            days,
            interests,
        }
    }

    /// Short "3 Days • Food, Culture" summary line
    pub fn summary(&self) -> String {
        format!("{} Days • {}", self.days, self.interests.join(", "))
    }
}

/// A generated itinerary together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    pub request: TripRequest,
    /// Day plans numbered 1..=days
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    pub fn new(request: TripRequest, days: Vec<DayPlan>) -> Self {
        Self { request, days }
    }

    pub fn city(&self) -> &str {
        &self.request.city
    }

    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    /// Look up an activity by 1-based day and 1-based position.
    pub fn activity(&self, day: u32, index: usize) -> Result<&Activity> {
        index
            .checked_sub(1)
            .and_then(|idx| self.day(day)?.activities.get(idx))
            .ok_or(PlannerError::ActivityNotFound { day, index })
    }

    pub fn total_activities(&self) -> usize {
        self.days.iter().map(DayPlan::activity_count).sum()
    }
}
