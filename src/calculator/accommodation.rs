//! ACCOMMODATION: nights away, scaled by room sharing and electricity source
//!
//! Needs both `days` and `accommodationCategory`. Occupancy and electricity
//! default to a multiplier of 1.0 while unanswered. No round-trip doubling.

use crate::answers::ParticipantAnswers;

pub fn calculate_accommodation(answers: &ParticipantAnswers) -> f64 {
    let (Some(days), Some(category)) = (answers.contributing_days(), answers.accommodation_category)
    else {
        return 0.0;
    };

    let occupancy = answers.room_occupancy.map_or(1.0, |o| o.factor());
    let electricity = answers.electricity.map_or(1.0, |e| e.factor());

    days * category.factor() * occupancy * electricity
}
