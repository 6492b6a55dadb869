//! Batch calculation for all participants of a project
//!
//! Participants are independent, so results are computed in parallel with
//! Rayon. Output order matches input order.

use crate::answers::{ParticipantAnswers, ProjectActivity};
use crate::calculator::{calculate_emissions, trees_needed, EmissionCalculation};
use rayon::prelude::*;
use serde::Serialize;

/// Aggregate over a batch of participant results
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub participants: usize,
    /// Sum of participant totals (kg)
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    /// Mean participant total; 0 for an empty batch
    #[serde(rename = "meanCO2")]
    pub mean_co2: f64,
    /// Trees needed for `total_co2`
    pub trees_needed: u64,
}

/// Calculate every participant against the same project baseline
pub fn calculate_batch(
    participants: &[ParticipantAnswers],
    project_activities: &[ProjectActivity],
) -> Vec<EmissionCalculation> {
    participants
        .par_iter()
        .map(|answers| calculate_emissions(answers, project_activities))
        .collect()
}

pub fn summarize(results: &[EmissionCalculation]) -> BatchSummary {
    let total_co2: f64 = results.iter().map(|r| r.total_co2).sum();
    let mean_co2 = if results.is_empty() {
        0.0
    } else {
        total_co2 / results.len() as f64
    };

    BatchSummary {
        participants: results.len(),
        total_co2,
        mean_co2,
        trees_needed: trees_needed(total_co2),
    }
}
