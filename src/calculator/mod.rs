//! Emissions calculator
//!
//! Each footprint component lives in its own module; `calculate_emissions`
//! combines them into the breakdown shown to participants.
//!
//! The calculation is pure and never fails: unanswered fields contribute
//! nothing, because it is re-run after every answered question.

pub mod transport;
pub mod accommodation;
pub mod food;
pub mod project_activities;

pub use transport::{calculate_transport, ModeContribution, TransportBreakdown};
pub use accommodation::calculate_accommodation;
pub use food::calculate_food;
pub use project_activities::calculate_project_activities;

use crate::answers::{ParticipantAnswers, ProjectActivity};
use crate::factors::CO2_PER_TREE_KG;
use serde::{Deserialize, Serialize};

/// CO₂ breakdown for one participant (kg)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionCalculation {
    #[serde(rename = "transportCO2")]
    pub transport_co2: f64,
    #[serde(rename = "accommodationCO2")]
    pub accommodation_co2: f64,
    #[serde(rename = "foodCO2")]
    pub food_co2: f64,
    #[serde(rename = "projectActivitiesCO2")]
    pub project_activities_co2: f64,
    /// Always the sum of the four components
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    /// Trees needed to absorb `total_co2` in a year
    #[serde(rename = "treesNeeded")]
    pub trees_needed: u64,
}

impl EmissionCalculation {
    pub fn from_components(
        transport_co2: f64,
        accommodation_co2: f64,
        food_co2: f64,
        project_activities_co2: f64,
    ) -> Self {
        let total_co2 = transport_co2 + accommodation_co2 + food_co2 + project_activities_co2;
        Self {
            transport_co2,
            accommodation_co2,
            food_co2,
            project_activities_co2,
            total_co2,
            trees_needed: trees_needed(total_co2),
        }
    }

    /// Components in display order, with their labels
    pub fn components(&self) -> [(&'static str, f64); 4] {
        [
            ("Transport", self.transport_co2),
            ("Accommodation", self.accommodation_co2),
            ("Food", self.food_co2),
            ("Project activities", self.project_activities_co2),
        ]
    }
}

/// Whole trees needed to offset `total_co2` kg
pub fn trees_needed(total_co2: f64) -> u64 {
    if total_co2 > 0.0 {
        (total_co2 / CO2_PER_TREE_KG).ceil() as u64
    } else {
        0
    }
}

/// Calculate the emissions breakdown for a participant.
///
/// `project_activities` is the shared baseline of the participant's project;
/// pass an empty slice when there is none.
pub fn calculate_emissions(
    answers: &ParticipantAnswers,
    project_activities: &[ProjectActivity],
) -> EmissionCalculation {
    EmissionCalculation::from_components(
        calculate_transport(answers).total_co2,
        calculate_accommodation(answers),
        calculate_food(answers),
        calculate_project_activities(project_activities),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{AccommodationCategory, Electricity, MeatFrequency, RoomOccupancy};
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_answers() {
        let result = calculate_emissions(&ParticipantAnswers::default(), &[]);
        assert_eq!(result, EmissionCalculation::default());
        assert_eq!(result.trees_needed, 0);
    }

    #[test]
    fn test_combined_scenario() {
        let answers = ParticipantAnswers {
            days: Some(7.0),
            accommodation_category: Some(AccommodationCategory::Camping),
            room_occupancy: Some(RoomOccupancy::FourOrMore),
            electricity: Some(Electricity::Green),
            food: Some(MeatFrequency::Never),
            flight_km: Some(500.0),
            boat_km: Some(0.0),
            train_km: Some(0.0),
            bus_km: Some(0.0),
            car_km: Some(0.0),
            ..Default::default()
        };
        let result = calculate_emissions(&answers, &[]);

        assert_relative_eq!(result.transport_co2, 255.0, epsilon = 1e-9);
        assert_relative_eq!(result.accommodation_co2, 2.3625, epsilon = 1e-9);
        assert_relative_eq!(result.food_co2, 10.5, epsilon = 1e-9);
        assert_relative_eq!(result.total_co2, 267.8625, epsilon = 1e-9);
        assert_eq!(result.trees_needed, 13);
    }

    #[test]
    fn test_trees_round_up() {
        assert_eq!(trees_needed(0.0), 0);
        assert_eq!(trees_needed(0.1), 1);
        assert_eq!(trees_needed(22.0), 1);
        assert_eq!(trees_needed(22.01), 2);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = EmissionCalculation::from_components(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["transportCO2"], 1.0);
        assert_eq!(json["projectActivitiesCO2"], 4.0);
        assert_eq!(json["totalCO2"], 10.0);
        assert_eq!(json["treesNeeded"], 1);
    }
}
