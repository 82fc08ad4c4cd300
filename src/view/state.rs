//! View state for rendering an itinerary
//!
//! Pure data. Nothing here reads or writes the catalog or the selector; it
//! only tracks which panels are expanded and which cards showed a recent copy.

use crate::types::Activity;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a "copied" check mark stays visible
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Accordion of day panels; at most one is open unless everything is expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPanels {
    open_day: Option<u32>,
    expand_all: bool,
}

impl Default for DayPanels {
    fn default() -> Self {
        Self {
            open_day: Some(1),
            expand_all: false,
        }
    }
}

impl DayPanels {
    /// Close the open day if it is `day`, otherwise open `day`
    pub fn toggle(&mut self, day: u32) {
        self.expand_all = false;
        self.open_day = if self.open_day == Some(day) {
            None
        } else {
            Some(day)
        };
    }

    pub fn open(&mut self, day: u32) {
        self.expand_all = false;
        self.open_day = Some(day);
    }

    pub fn expand_all(&mut self) {
        self.expand_all = true;
    }

    /// Back to the post-generation state: day 1 open
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self, day: u32) -> bool {
        self.expand_all || self.open_day == Some(day)
    }

    pub fn open_day(&self) -> Option<u32> {
        self.open_day
    }
}

/// Transient success marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < COPY_FEEDBACK_WINDOW)
            .unwrap_or(false)
    }
}

/// Which activity field a copy action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyField {
    /// Chinese name, for showing to a taxi driver
    Name,
    /// Chinese address
    Address,
}

impl CopyField {
    pub fn text<'a>(&self, activity: &'a Activity) -> &'a str {
        match self {
            CopyField::Name => &activity.name_zh,
            CopyField::Address => &activity.address_zh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CopyField::Name => "Chinese name",
            CopyField::Address => "address",
        }
    }
}

/// Per-activity card state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    pub copied_name: CopyIndicator,
    pub copied_address: CopyIndicator,
    pub maps_open: bool,
}

impl CardState {
    pub fn toggle_maps(&mut self) {
        self.maps_open = !self.maps_open;
    }

    /// Only a successful copy lights the indicator
    pub fn record_copy(&mut self, field: CopyField, success: bool, now: Instant) {
        if !success {
            return;
        }
        match field {
            CopyField::Name => self.copied_name.mark(now),
            CopyField::Address => self.copied_address.mark(now),
        }
    }

    pub fn copied(&self, field: CopyField, now: Instant) -> bool {
        match field {
            CopyField::Name => self.copied_name.is_active(now),
            CopyField::Address => self.copied_address.is_active(now),
        }
    }
}

/// Everything the renderer needs besides the itinerary itself
#[derive(Debug, Clone, Default)]
pub struct ItineraryView {
    pub panels: DayPanels,
    pub show_map_links: bool,
    cards: HashMap<(u32, usize), CardState>,
}

impl ItineraryView {
    pub fn new() -> Self {
        Self {
            show_map_links: true,
            ..Self::default()
        }
    }

    /// Reset after a fresh itinerary arrives
    pub fn on_generated(&mut self) {
        self.panels.reset();
        self.cards.clear();
    }

    /// Card for a 1-based day and 1-based activity position
    pub fn card(&self, day: u32, index: usize) -> CardState {
        self.cards.get(&(day, index)).cloned().unwrap_or_default()
    }

    pub fn card_mut(&mut self, day: u32, index: usize) -> &mut CardState {
        self.cards.entry((day, index)).or_default()
    }
}
