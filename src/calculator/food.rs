//! FOOD: daily diet footprint by meat-eating frequency

use crate::answers::ParticipantAnswers;

pub fn calculate_food(answers: &ParticipantAnswers) -> f64 {
    match (answers.contributing_days(), answers.food) {
        (Some(days), Some(food)) => days * food.factor(),
        _ => 0.0,
    }
}
