use crate::catalog::Catalog;
use crate::types::DayPlan;
use tracing::{debug, warn};

/// Interest used when the caller supplies none.
pub const FALLBACK_INTEREST: &str = "Food";

/// Build a day-by-day plan from the catalog.
///
/// Day `i` (1-based) takes its interest by cycling through `interests`, then
/// looks up that interest's templates for `city`. Within a non-empty template
/// list the template whose stored day number equals `((i - 1) mod len) + 1`
/// is used. Anything that does not resolve to a template gets the catalog's
/// default activity set.
///
/// Total over its inputs: the result always holds exactly `total_days` plans
/// numbered `1..=total_days`.
pub fn generate<S: AsRef<str>>(
    catalog: &Catalog,
    city: &str,
    total_days: u32,
    interests: &[S],
) -> Vec<DayPlan> {
    if interests.is_empty() {
        warn!(
            fallback = FALLBACK_INTEREST,
            "no interests selected, using fallback interest"
        );
    }

    (1..=total_days)
        .map(|day| {
            let interest = interest_for_day(interests, day);
            let templates = catalog.lookup(city, interest);

            match select_template(templates, day) {
                Some(template) => {
                    debug!(day, city, interest, template_day = template.day, "using template");
                    DayPlan::new(day, template.activities.clone())
                }
                None => {
                    debug!(day, city, interest, "no template, using default activities");
                    DayPlan::new(day, catalog.default_activities().clone())
                }
            }
        })
        .collect()
}

/// Interest tag for a 1-based trip day. An empty list or an empty tag
/// resolves to [`FALLBACK_INTEREST`].
pub fn interest_for_day<S: AsRef<str>>(interests: &[S], day: u32) -> &str {
    if interests.is_empty() {
        return FALLBACK_INTEREST;
    }
    let index = day.saturating_sub(1) as usize % interests.len();
    match interests[index].as_ref() {
        "" => FALLBACK_INTEREST,
        tag => tag,
    }
}

/// Match by stored day number, not by position in the list.
fn select_template(templates: &[DayPlan], day: u32) -> Option<&DayPlan> {
    if templates.is_empty() {
        return None;
    }
    let wanted = day.saturating_sub(1) as usize % templates.len() + 1;
    templates
        .iter()
        .find(|template| template.day as usize == wanted)
}
