//! Terminal presentation of generated itineraries

pub mod render;
pub mod state;

pub use render::{itinerary_schema, render, render_json, render_text, OutputFormat};
pub use state::{CardState, CopyField, CopyIndicator, DayPanels, ItineraryView, COPY_FEEDBACK_WINDOW};
