//! Stage filtering and date layout.

use jiff::civil::Date;
use jiff::{Span, Zoned};

use crate::models::{PlannedStage, Profile, StageBlueprint};

/// Filter catalogue stages by the profile and lay out their time windows.
///
/// Stages are kept in catalogue order. Each surviving stage's duration is
/// the nominal duration scaled by the pace multiplier, rounded, and never
/// less than one week. The first window opens on the profile's start date
/// (or today when none is set) and every later window opens the day the
/// previous one ends: back to back, no gap, no overlap.
///
/// Within each kept stage, tasks are filtered by their own predicates;
/// a task without one always survives. Stage exclusion suppresses all of
/// the stage's tasks regardless of what the task predicates would say.
pub fn plan_stages(profile: &Profile, catalogue: &[StageBlueprint]) -> Vec<PlannedStage> {
    let multiplier = profile.pace.multiplier();
    let mut cursor = start_date(profile);

    let mut planned = Vec::new();
    for blueprint in catalogue {
        if !(blueprint.applies)(profile) {
            continue;
        }

        let duration_weeks = adjusted_weeks(blueprint.duration_weeks, multiplier);
        let starts_on = cursor;
        let ends_on = starts_on.saturating_add(Span::new().days(i64::from(duration_weeks) * 7));
        cursor = ends_on;

        let tasks = blueprint
            .tasks
            .iter()
            .filter(|task| task.applies.map_or(true, |applies| applies(profile)))
            .copied()
            .collect();

        planned.push(PlannedStage {
            id: blueprint.id,
            title: blueprint.title,
            summary: blueprint.summary,
            milestone: blueprint.milestone,
            nominal_weeks: blueprint.duration_weeks,
            duration_weeks,
            starts_on,
            ends_on,
            tasks,
            resources: blueprint.resources.clone(),
        });
    }

    planned
}

/// Nominal weeks scaled by the pace multiplier, rounded, floored at one.
fn adjusted_weeks(nominal: u32, multiplier: f64) -> u32 {
    let scaled = (f64::from(nominal) * multiplier).round();
    if scaled < 1.0 {
        1
    } else {
        scaled as u32
    }
}

/// The profile's start date, or today when none is set.
///
/// Falling back to today makes an undated plan drift day by day; callers
/// needing a reproducible layout must set an explicit start date.
fn start_date(profile: &Profile) -> Date {
    profile.start_date.unwrap_or_else(|| Zoned::now().date())
}
