//! Questionnaire session
//!
//! Participants answer one question per step. After every step the whole
//! footprint is recomputed and the change caused by that answer is reported.
//! The final summary is logged; results are not stored here.

use crate::answers::{ParticipantAnswers, ProjectActivity};
use crate::calculator::{calculate_emissions, EmissionCalculation};
use crate::factors::{
    AccommodationCategory, CarType, Electricity, MeatFrequency, RoomOccupancy, TransportMode,
};
use crate::impact::{marginal_impact, AnswerGroup};
use serde::{Deserialize, Serialize};

/// Questions in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionStep {
    Days,
    AccommodationCategory,
    RoomOccupancy,
    Electricity,
    Food,
    FlightKm,
    BoatKm,
    TrainKm,
    BusKm,
    CarKm,
    CarType,
    CarPassengers,
}

pub const QUESTION_ORDER: [QuestionStep; 12] = [
    QuestionStep::Days,
    QuestionStep::AccommodationCategory,
    QuestionStep::RoomOccupancy,
    QuestionStep::Electricity,
    QuestionStep::Food,
    QuestionStep::FlightKm,
    QuestionStep::BoatKm,
    QuestionStep::TrainKm,
    QuestionStep::BusKm,
    QuestionStep::CarKm,
    QuestionStep::CarType,
    QuestionStep::CarPassengers,
];

impl QuestionStep {
    /// Group whose impact is reported after this step
    pub fn group(self) -> AnswerGroup {
        match self {
            QuestionStep::Days => AnswerGroup::Days,
            QuestionStep::AccommodationCategory
            | QuestionStep::RoomOccupancy
            | QuestionStep::Electricity => AnswerGroup::Accommodation,
            QuestionStep::Food => AnswerGroup::Food,
            QuestionStep::FlightKm => AnswerGroup::Flight,
            QuestionStep::BoatKm => AnswerGroup::Boat,
            QuestionStep::TrainKm => AnswerGroup::Train,
            QuestionStep::BusKm => AnswerGroup::Bus,
            QuestionStep::CarKm | QuestionStep::CarType | QuestionStep::CarPassengers => {
                AnswerGroup::Car
            }
        }
    }

    fn is_answered(self, answers: &ParticipantAnswers) -> bool {
        match self {
            QuestionStep::Days => answers.days.is_some(),
            QuestionStep::AccommodationCategory => answers.accommodation_category.is_some(),
            QuestionStep::RoomOccupancy => answers.room_occupancy.is_some(),
            QuestionStep::Electricity => answers.electricity.is_some(),
            QuestionStep::Food => answers.food.is_some(),
            QuestionStep::FlightKm => answers.flight_km.is_some(),
            QuestionStep::BoatKm => answers.boat_km.is_some(),
            QuestionStep::TrainKm => answers.train_km.is_some(),
            QuestionStep::BusKm => answers.bus_km.is_some(),
            QuestionStep::CarKm => answers.car_km.is_some(),
            QuestionStep::CarType => answers.car_type.is_some(),
            QuestionStep::CarPassengers => answers.car_passengers.is_some(),
        }
    }

    /// Car details are only asked when the participant travelled by car
    fn is_applicable(self, answers: &ParticipantAnswers) -> bool {
        match self {
            QuestionStep::CarType | QuestionStep::CarPassengers => {
                answers.contributing_km(TransportMode::Car).is_some()
            }
            _ => true,
        }
    }
}

/// A single answered question
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", content = "value", rename_all = "camelCase")]
pub enum Answer {
    Days(f64),
    AccommodationCategory(AccommodationCategory),
    RoomOccupancy(RoomOccupancy),
    Electricity(Electricity),
    Food(MeatFrequency),
    FlightKm(f64),
    BoatKm(f64),
    TrainKm(f64),
    BusKm(f64),
    CarKm(f64),
    CarType(CarType),
    CarPassengers(f64),
}

impl Answer {
    pub fn step(&self) -> QuestionStep {
        match self {
            Answer::Days(_) => QuestionStep::Days,
            Answer::AccommodationCategory(_) => QuestionStep::AccommodationCategory,
            Answer::RoomOccupancy(_) => QuestionStep::RoomOccupancy,
            Answer::Electricity(_) => QuestionStep::Electricity,
            Answer::Food(_) => QuestionStep::Food,
            Answer::FlightKm(_) => QuestionStep::FlightKm,
            Answer::BoatKm(_) => QuestionStep::BoatKm,
            Answer::TrainKm(_) => QuestionStep::TrainKm,
            Answer::BusKm(_) => QuestionStep::BusKm,
            Answer::CarKm(_) => QuestionStep::CarKm,
            Answer::CarType(_) => QuestionStep::CarType,
            Answer::CarPassengers(_) => QuestionStep::CarPassengers,
        }
    }

    pub fn apply_to(self, answers: &mut ParticipantAnswers) {
        match self {
            Answer::Days(days) => answers.days = Some(days),
            Answer::AccommodationCategory(c) => answers.accommodation_category = Some(c),
            Answer::RoomOccupancy(o) => answers.room_occupancy = Some(o),
            Answer::Electricity(e) => answers.electricity = Some(e),
            Answer::Food(f) => answers.food = Some(f),
            Answer::FlightKm(km) => answers.flight_km = Some(km),
            Answer::BoatKm(km) => answers.boat_km = Some(km),
            Answer::TrainKm(km) => answers.train_km = Some(km),
            Answer::BusKm(km) => answers.bus_km = Some(km),
            Answer::CarKm(km) => answers.car_km = Some(km),
            Answer::CarType(t) => answers.car_type = Some(t),
            Answer::CarPassengers(n) => answers.car_passengers = Some(n),
        }
    }
}

/// Feedback shown right after a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFeedback {
    pub step: QuestionStep,
    pub group: AnswerGroup,
    /// Change in total CO₂ caused by the step's answer group
    #[serde(rename = "deltaCO2")]
    pub delta_co2: f64,
    /// Running footprint with all answers so far
    pub running: EmissionCalculation,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionnaireSession {
    answers: ParticipantAnswers,
    project_activities: Vec<ProjectActivity>,
    history: Vec<StepFeedback>,
}

impl QuestionnaireSession {
    pub fn new(project_activities: Vec<ProjectActivity>) -> Self {
        Self {
            answers: ParticipantAnswers::default(),
            project_activities,
            history: Vec::new(),
        }
    }

    /// Resume from answers given earlier
    pub fn with_answers(answers: ParticipantAnswers, project_activities: Vec<ProjectActivity>) -> Self {
        Self {
            answers,
            project_activities,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[StepFeedback] {
        &self.history
    }

    /// Record an answer and report its impact
    pub fn apply(&mut self, answer: Answer) -> StepFeedback {
        let step = answer.step();
        answer.apply_to(&mut self.answers);

        let impact = marginal_impact(&self.answers, &self.project_activities, step.group());
        let feedback = StepFeedback {
            step,
            group: impact.group,
            delta_co2: impact.delta_co2,
            running: impact.after,
        };

        tracing::debug!(
            "Answered {:?}: delta {:.3} kg CO2, running total {:.3} kg",
            step,
            feedback.delta_co2,
            feedback.running.total_co2
        );

        self.history.push(feedback);
        feedback
    }

    /// First question still waiting for an answer
    pub fn next_step(&self) -> Option<QuestionStep> {
        QUESTION_ORDER
            .into_iter()
            .filter(|step| step.is_applicable(&self.answers))
            .find(|step| !step.is_answered(&self.answers))
    }

    pub fn is_complete(&self) -> bool {
        self.next_step().is_none()
    }

    /// Current footprint
    pub fn current(&self) -> EmissionCalculation {
        calculate_emissions(&self.answers, &self.project_activities)
    }

    /// Final summary; logged instead of persisted
    pub fn finish(self) -> EmissionCalculation {
        let result = self.current();
        if !self.is_complete() {
            tracing::warn!(
                "Questionnaire finished with unanswered steps (next: {:?})",
                self.next_step()
            );
        }
        tracing::info!(
            "Questionnaire submitted: transport={:.2} accommodation={:.2} food={:.2} activities={:.2} total={:.2} kg CO2, {} trees",
            result.transport_co2,
            result.accommodation_co2,
            result.food_co2,
            result.project_activities_co2,
            result.total_co2,
            result.trees_needed
        );
        result
    }
}
