use axum::Json;
use serde::{Deserialize, Serialize};

use saba_rules::{InterventionRecord, RuleContext, evaluate};
use saba_scales::score_all;
use saba_scales::scoring::ScoreResult;

use crate::adapter::adapt_answers;

#[derive(Deserialize)]
pub struct AssessRequest {
    /// Raw form values: scale name to item key to value. Values may be
    /// numbers, numeric strings, or booleans as submitted by the form.
    pub answers: serde_json::Value,
}

#[derive(Serialize)]
pub struct AssessResponse {
    pub scores: Vec<ScoreResult>,
    pub interventions: Vec<InterventionRecord>,
}

/// Score every answered scale and evaluate the intervention rules.
pub async fn assess(Json(req): Json<AssessRequest>) -> Json<AssessResponse> {
    let answers = adapt_answers(&req.answers);
    let scores = score_all(&answers);
    let interventions = evaluate(&RuleContext {
        scores: &scores,
        answers: &answers,
    });

    Json(AssessResponse {
        scores,
        interventions,
    })
}
