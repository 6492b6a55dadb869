//! PROJECT ACTIVITIES: shared baseline travel of the whole project
//!
//! Distances are already project-level aggregates, so there is no passenger
//! split and no round-trip doubling. Car activities always use the
//! conventional factor. Activities whose distance is not a positive number
//! are skipped.

use crate::answers::ProjectActivity;

pub fn calculate_project_activities(activities: &[ProjectActivity]) -> f64 {
    activities
        .iter()
        .filter_map(|activity| {
            activity
                .contributing_km()
                .map(|km| km * activity.activity_type.factor())
        })
        .sum()
}
