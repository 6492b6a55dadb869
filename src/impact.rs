//! Marginal impact of a single answer
//!
//! Live feedback in the questionnaire shows how much a just-answered question
//! changed the footprint. The delta is the difference between two full
//! calculations: one without the answer group, one with it.

use crate::answers::{ParticipantAnswers, ProjectActivity};
use crate::calculator::{calculate_emissions, EmissionCalculation};
use crate::factors::TransportMode;
use serde::{Deserialize, Serialize};

/// Fields that are removed together when measuring impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerGroup {
    Days,
    /// Category, room occupancy and electricity
    Accommodation,
    Food,
    Flight,
    Boat,
    Train,
    Bus,
    /// Distance, car type and passengers
    Car,
}

impl AnswerGroup {
    /// Heading shown next to the delta in the questionnaire
    pub fn display_name(self) -> &'static str {
        match self {
            AnswerGroup::Days => "Trip length",
            AnswerGroup::Accommodation => "Accommodation",
            AnswerGroup::Food => "Food",
            AnswerGroup::Flight => "Flight",
            AnswerGroup::Boat => "Boat",
            AnswerGroup::Train => "Train",
            AnswerGroup::Bus => "Bus",
            AnswerGroup::Car => "Car",
        }
    }

    /// Copy of `answers` with this group's fields cleared
    pub fn remove_from(self, answers: &ParticipantAnswers) -> ParticipantAnswers {
        let mut without = answers.clone();
        match self {
            AnswerGroup::Days => without.days = None,
            AnswerGroup::Accommodation => {
                without.accommodation_category = None;
                without.room_occupancy = None;
                without.electricity = None;
            }
            AnswerGroup::Food => without.food = None,
            AnswerGroup::Flight => without.set_distance_km(TransportMode::Flight, None),
            AnswerGroup::Boat => without.set_distance_km(TransportMode::Boat, None),
            AnswerGroup::Train => without.set_distance_km(TransportMode::Train, None),
            AnswerGroup::Bus => without.set_distance_km(TransportMode::Bus, None),
            AnswerGroup::Car => {
                without.car_km = None;
                without.car_type = None;
                without.car_passengers = None;
            }
        }
        without
    }
}

/// Before/after comparison for one answer group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDelta {
    pub group: AnswerGroup,
    pub label: &'static str,
    /// Without the group
    pub before: EmissionCalculation,
    /// With the group as answered
    pub after: EmissionCalculation,
    #[serde(rename = "deltaCO2")]
    pub delta_co2: f64,
}

pub fn marginal_impact(
    answers: &ParticipantAnswers,
    project_activities: &[ProjectActivity],
    group: AnswerGroup,
) -> ImpactDelta {
    let before = calculate_emissions(&group.remove_from(answers), project_activities);
    let after = calculate_emissions(answers, project_activities);

    ImpactDelta {
        group,
        label: group.display_name(),
        before,
        after,
        delta_co2: after.total_co2 - before.total_co2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{
        AccommodationCategory, ActivityType, CarType, Electricity, MeatFrequency, RoomOccupancy,
    };
    use approx::assert_relative_eq;

    fn hostel_week() -> ParticipantAnswers {
        ParticipantAnswers {
            days: Some(7.0),
            accommodation_category: Some(AccommodationCategory::Hostel),
            room_occupancy: Some(RoomOccupancy::TwoPeople),
            electricity: Some(Electricity::Green),
            food: Some(MeatFrequency::Sometimes),
            train_km: Some(300.0),
            car_km: Some(60.0),
            car_type: Some(CarType::Electric),
            car_passengers: Some(2.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_accommodation_group_removed_together() {
        let impact = marginal_impact(&hostel_week(), &[], AnswerGroup::Accommodation);
        assert_eq!(impact.before.accommodation_co2, 0.0);
        assert_relative_eq!(impact.delta_co2, 9.45, epsilon = 1e-9);
    }

    #[test]
    fn test_days_removes_accommodation_and_food() {
        let impact = marginal_impact(&hostel_week(), &[], AnswerGroup::Days);
        assert_eq!(impact.label, "Trip length");
        assert_eq!(impact.before.accommodation_co2, 0.0);
        assert_eq!(impact.before.food_co2, 0.0);
        assert_relative_eq!(impact.delta_co2, 9.45 + 28.0, epsilon = 1e-9);
    }

    #[test]
    fn test_car_group() {
        let impact = marginal_impact(&hostel_week(), &[], AnswerGroup::Car);
        // (60 × 0.053 / 2) × 2
        assert_relative_eq!(impact.delta_co2, 3.18, epsilon = 1e-9);
    }

    #[test]
    fn test_project_activities_cancel_out() {
        let activities = vec![ProjectActivity::new(ActivityType::Bus, 200.0)];
        let impact = marginal_impact(&hostel_week(), &activities, AnswerGroup::Train);

        assert_eq!(
            impact.before.project_activities_co2,
            impact.after.project_activities_co2
        );
        assert_relative_eq!(impact.delta_co2, 300.0 * 0.041 * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unanswered_group_has_no_impact() {
        let impact = marginal_impact(&hostel_week(), &[], AnswerGroup::Flight);
        assert_eq!(impact.delta_co2, 0.0);
    }
}
