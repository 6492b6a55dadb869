//! Emission reports for the final summary page.

pub mod markdown;
pub mod json;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;

use crate::answers::{ParticipantAnswers, ProjectActivity};
use crate::calculator::{calculate_emissions, calculate_transport, EmissionCalculation, TransportBreakdown};
use serde::Serialize;

/// Breakdown plus the per-mode transport detail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionReport {
    pub calculation: EmissionCalculation,
    pub transport: TransportBreakdown,
    /// Project activities with a usable distance
    pub project_activity_count: usize,
}

impl EmissionReport {
    pub fn build(answers: &ParticipantAnswers, project_activities: &[ProjectActivity]) -> Self {
        Self {
            calculation: calculate_emissions(answers, project_activities),
            transport: calculate_transport(answers),
            project_activity_count: project_activities
                .iter()
                .filter(|a| a.contributing_km().is_some())
                .count(),
        }
    }

    /// Share of the total (0-100) for a component value
    pub fn share_pct(&self, value: f64) -> f64 {
        if self.calculation.total_co2 > 0.0 {
            value / self.calculation.total_co2 * 100.0
        } else {
            0.0
        }
    }
}
