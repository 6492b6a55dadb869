// Axum API Server Module
//
// Purpose: HTTP surface over the emissions calculator for the questionnaire UI
// Every calculation is recomputed per request; the only state is the project
// activity store loaded at startup.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::answers::{ParticipantAnswers, ProjectActivity};

#[cfg(feature = "api")]
use crate::calculator::{calculate_emissions, EmissionCalculation};

#[cfg(feature = "api")]
use crate::data::ProjectActivityStore;

#[cfg(feature = "api")]
use crate::factors::{factor_tables, FactorTables};

#[cfg(feature = "api")]
use crate::impact::{marginal_impact, AnswerGroup, ImpactDelta};

#[cfg(feature = "api")]
use crate::report::{EmissionReport, MarkdownFormatter};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<ProjectActivityStore>,
}

#[cfg(feature = "api")]
impl AppState {
    /// Load the project activity store, or start with an empty one
    pub fn new(activities_path: Option<&str>) -> anyhow::Result<Self> {
        let activities = match activities_path {
            Some(path) => {
                tracing::info!("Loading project activities from {}", path);
                ProjectActivityStore::load(std::path::Path::new(path))?
            }
            None => {
                tracing::info!("No project activities file configured - starting empty");
                ProjectActivityStore::default()
            }
        };

        Ok(Self::with_store(activities))
    }

    pub fn with_store(activities: ProjectActivityStore) -> Self {
        Self {
            activities: Arc::new(activities),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Factor tables (public contract)
        .route("/api/factors", get(get_factors))

        // Emission endpoints
        .route("/api/emissions/calculate", post(calculate))
        .route("/api/emissions/impact", post(impact))
        .route("/api/emissions/report", post(report))
        .route("/api/emissions/submit", post(submit))

        // Project activities
        .route("/api/projects/:id/activities", get(get_project_activities))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn get_factors() -> Json<FactorTables> {
    Json(factor_tables())
}

#[cfg(feature = "api")]
async fn calculate(
    State(state): State<AppState>,
    Json(payload): Json<CalculationRequest>,
) -> Result<Json<EmissionCalculation>, AppError> {
    let activities = resolve_activities(&state, &payload)?;
    Ok(Json(calculate_emissions(&payload.answers, &activities)))
}

#[cfg(feature = "api")]
async fn impact(
    State(state): State<AppState>,
    Json(payload): Json<ImpactRequest>,
) -> Result<Json<ImpactDelta>, AppError> {
    let activities = resolve_activities(&state, &payload.request)?;
    Ok(Json(marginal_impact(
        &payload.request.answers,
        &activities,
        payload.group,
    )))
}

#[cfg(feature = "api")]
async fn report(
    State(state): State<AppState>,
    Json(payload): Json<CalculationRequest>,
) -> Result<String, AppError> {
    let activities = resolve_activities(&state, &payload)?;
    let report = EmissionReport::build(&payload.answers, &activities);
    Ok(MarkdownFormatter::format(&report))
}

/// Final submission: results are logged, not persisted
#[cfg(feature = "api")]
async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<CalculationRequest>,
) -> Result<Json<EmissionCalculation>, AppError> {
    let activities = resolve_activities(&state, &payload)?;
    let result = calculate_emissions(&payload.answers, &activities);

    tracing::info!(
        project_id = payload.project_id.as_deref().unwrap_or("-"),
        transport = result.transport_co2,
        accommodation = result.accommodation_co2,
        food = result.food_co2,
        project_activities = result.project_activities_co2,
        total = result.total_co2,
        trees = result.trees_needed,
        "Questionnaire submitted"
    );

    Ok(Json(result))
}

#[cfg(feature = "api")]
async fn get_project_activities(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<ProjectActivity>>, AppError> {
    if !state.activities.contains(&project_id) {
        return Err(AppError::NotFound(format!("Project not found: {}", project_id)));
    }
    Ok(Json(state.activities.activities(&project_id).to_vec()))
}

/// Inline activities win over the stored ones for `project_id`
#[cfg(feature = "api")]
fn resolve_activities(
    state: &AppState,
    request: &CalculationRequest,
) -> Result<Vec<ProjectActivity>, AppError> {
    if let Some(activities) = &request.project_activities {
        return Ok(activities.clone());
    }

    match &request.project_id {
        Some(id) if state.activities.contains(id) => Ok(state.activities.activities(id).to_vec()),
        Some(id) => Err(AppError::NotFound(format!("Project not found: {}", id))),
        None => Ok(Vec::new()),
    }
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculationRequest {
    #[serde(default)]
    answers: ParticipantAnswers,
    project_activities: Option<Vec<ProjectActivity>>,
    project_id: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct ImpactRequest {
    #[serde(flatten)]
    request: CalculationRequest,
    group: AnswerGroup,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("{0}")]
    NotFound(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
