use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// Lawton IADL: instrumental activities of daily living.
/// Eight items scored 0/1, total 0–8.
pub struct Iadl;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct IadlAnswers {
    pub telephone: Option<f64>,
    pub shopping: Option<f64>,
    pub food_preparation: Option<f64>,
    pub housekeeping: Option<f64>,
    pub laundry: Option<f64>,
    pub transportation: Option<f64>,
    pub medications: Option<f64>,
    pub finances: Option<f64>,
}

impl IadlAnswers {
    fn answered(&self) -> Vec<f64> {
        [
            self.telephone,
            self.shopping,
            self.food_preparation,
            self.housekeeping,
            self.laundry,
            self.transportation,
            self.medications,
            self.finances,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Scale for Iadl {
    fn id(&self) -> ScaleId {
        ScaleId::Iadl
    }

    fn name(&self) -> &str {
        "Lawton IADL"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 8.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let items = answers.iadl.as_ref()?.answered();
        if items.is_empty() {
            return None;
        }
        let total: f64 = items.iter().sum();

        let interpretation = if total >= 7.0 {
            "Independent in instrumental activities"
        } else if total >= 4.0 {
            "Needs some assistance"
        } else {
            "Dependent in instrumental activities"
        };

        Some(ScoreResult {
            scale_id: self.id(),
            scale_name: self.name().to_string(),
            total: Some(total),
            subtotals: Vec::new(),
            positive: None,
            interpretation: interpretation.to_string(),
            range: self.range(),
        })
    }
}
