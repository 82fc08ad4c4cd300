use super::{selector, store::ItineraryStore};
use crate::{
    catalog::Catalog,
    config::PlannerConfig,
    types::{Itinerary, TripRequest},
};
use std::time::{Duration, Instant};
use tracing::info;

/// Simulated processing time before an itinerary is handed back.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Runs the selector against a catalog, optionally after a fixed delay.
#[derive(Debug, Clone)]
pub struct ItineraryPlanner<'c> {
    catalog: &'c Catalog,
    delay: Duration,
}

impl ItineraryPlanner<'static> {
    /// Planner over the built-in catalog with the default delay.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::builtin().with_delay(config.delay)
    }
}

impl<'c> ItineraryPlanner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn without_delay(self) -> Self {
        self.with_delay(Duration::ZERO)
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Produce an itinerary immediately.
    pub fn generate(&self, request: &TripRequest) -> Itinerary {
        let days = selector::generate(
            self.catalog,
            &request.city,
            request.days,
            request.interests.as_slice(),
        );
        Itinerary::new(request.clone(), days)
    }

    /// Wait out the configured delay once, then produce the itinerary.
    pub async fn plan(&self, request: &TripRequest) -> Itinerary {
        let started = Instant::now();
        info!(
            city = %request.city,
            days = request.days,
            interests = %request.interests.join(","),
            "generating itinerary"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let itinerary = self.generate(request);
        info!(
            city = %request.city,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "itinerary ready"
        );
        itinerary
    }

    /// Plan and publish into `store`. Stale requests are not cancelled; the
    /// last one to finish owns the slot.
    pub async fn plan_into(&self, request: &TripRequest, store: &ItineraryStore) -> u64 {
        let itinerary = self.plan(request).await;
        store.publish(itinerary)
    }
}
