//! Static point-of-interest catalog
//!
//! The catalog maps city → interest tag → ordered template days. It is built
//! once from an embedded JSON document, validated at load and never mutated
//! afterwards. Lookups for unknown cities or interests return an empty slice.

mod validation;

use crate::error::{PlannerError, Result};
use crate::types::{Activity, DayPlan};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Interest tags offered to users, in display order.
pub const KNOWN_INTERESTS: [&str; 4] = ["Food", "Culture", "Nature", "Nightlife"];

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogDocument {
    /// city → interest tag → template days
    pub cities: BTreeMap<String, BTreeMap<String, Vec<DayPlan>>>,
    /// Activities used when no template matches
    pub default_activities: Vec<Activity>,
}

/// Immutable itinerary template table.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: BTreeMap<String, BTreeMap<String, Vec<DayPlan>>>,
    default_activities: Arc<[Activity]>,
}

impl Catalog {
    /// The process-wide catalog compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Catalog::from_json(EMBEDDED_CATALOG)
                .unwrap_or_else(|err| panic!("embedded catalog failed to load: {}", err))
        })
    }

    /// Parse and validate a catalog document.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|err| PlannerError::Catalog(format!("catalog is not valid JSON: {}", err)))?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        validation::validate_document_schema(&raw)?;

        let document: CatalogDocument = serde_path_to_error::deserialize(raw).map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            PlannerError::Catalog(format!(
                "failed to deserialize catalog at {}: {}",
                location,
                err.inner()
            ))
        })?;

        validation::validate_structure(&document)?;

        debug!(
            cities = document.cities.len(),
            defaults = document.default_activities.len(),
            "catalog loaded"
        );

        Ok(Self {
            cities: document.cities,
            default_activities: document.default_activities.into(),
        })
    }

    /// Template days for a city and interest, or an empty slice.
    pub fn lookup(&self, city: &str, interest: &str) -> &[DayPlan] {
        self.cities
            .get(city)
            .and_then(|interests| interests.get(interest))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The fallback activity set, shared by every fallback day.
    pub fn default_activities(&self) -> &Arc<[Activity]> {
        &self.default_activities
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Cities with at least one template, alphabetically.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Interest tags that have templates in a city.
    pub fn interests(&self, city: &str) -> Vec<&str> {
        self.cities
            .get(city)
            .map(|interests| interests.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
