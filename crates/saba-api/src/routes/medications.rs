use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use saba_core::models::patient::PatientContext;
use saba_meds::normalize::{
    DEFAULT_THRESHOLD, MedicationMention, Suggestion, expand_abbreviations,
    resolve_medications, suggest,
};
use saba_meds::safety::{MedicationSafetyReport, analyze};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct MedicationCheckRequest {
    pub text: String,
    #[serde(default)]
    pub context: PatientContext,
}

#[derive(Serialize)]
pub struct MedicationCheckResponse {
    pub mentions: Vec<MedicationMention>,
    pub report: MedicationSafetyReport,
}

/// Normalize a free-text medication list and run the safety analyzer.
pub async fn check_medications(
    State(state): State<AppState>,
    Json(req): Json<MedicationCheckRequest>,
) -> Json<MedicationCheckResponse> {
    let mentions = resolve_medications(&req.text, state.lexicon, DEFAULT_THRESHOLD);
    let report = analyze(&mentions, &req.context, state.lexicon);

    Json(MedicationCheckResponse { mentions, report })
}

#[derive(Deserialize)]
pub struct ExpandRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExpandResponse {
    pub expanded: String,
}

/// Annotate dosing/medical abbreviations in a text block.
pub async fn expand_medication_text(
    State(state): State<AppState>,
    Json(req): Json<ExpandRequest>,
) -> Json<ExpandResponse> {
    Json(ExpandResponse {
        expanded: expand_abbreviations(&req.text, state.lexicon),
    })
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

/// Did-you-mean drug name search at the looser threshold.
pub async fn search_medications(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Suggestion>> {
    let limit = params.limit.unwrap_or(5);
    Json(suggest(&params.q, state.lexicon, limit))
}
