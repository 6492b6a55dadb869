//! Greendex Emissions Calculator
//!
//! CO₂ footprint of Erasmus+ mobility participants, computed from the
//! Greendex questionnaire answers plus the shared activities of their project.
//!
//! Modules:
//! - `factors`: Fixed emission factor tables and answer enums
//! - `answers`: Participant answers and project activities
//! - `calculator`: Transport, accommodation, food and project activity components
//! - `impact`: Before/after delta of a single answer group
//! - `questionnaire`: Step-by-step session with live feedback
//! - `batch`: Parallel calculation for all participants of a project
//! - `data`: Project activity store
//! - `report`: Markdown and JSON summaries
//! - `api_server`: Axum HTTP API (feature `api`)

pub mod factors;
pub mod answers;
pub mod calculator;
pub mod impact;
pub mod questionnaire;
pub mod batch;
pub mod data;
pub mod report;
pub mod api_server;

// Re-export commonly used types
pub use answers::{ParticipantAnswers, ProjectActivity};
pub use calculator::{calculate_emissions, trees_needed, EmissionCalculation};
pub use factors::{
    AccommodationCategory, ActivityType, CarType, Electricity, FactorError, MeatFrequency,
    RoomOccupancy, TransportMode,
};
pub use impact::{marginal_impact, AnswerGroup, ImpactDelta};
pub use questionnaire::{Answer, QuestionStep, QuestionnaireSession, StepFeedback};
pub use batch::{calculate_batch, summarize, BatchSummary};
pub use data::ProjectActivityStore;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
