use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// Braden Scale for pressure-injury risk.
/// Six subscales, total 6–23. Lower is higher risk; 18 and below is
/// the conventional at-risk cut point.
pub struct Braden;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BradenAnswers {
    /// 1–4.
    pub sensory_perception: Option<f64>,
    /// 1–4.
    pub moisture: Option<f64>,
    /// 1–4.
    pub activity: Option<f64>,
    /// 1–4.
    pub mobility: Option<f64>,
    /// 1–4.
    pub nutrition: Option<f64>,
    /// 1–3.
    pub friction_shear: Option<f64>,
}

impl BradenAnswers {
    fn answered(&self) -> Vec<f64> {
        [
            self.sensory_perception,
            self.moisture,
            self.activity,
            self.mobility,
            self.nutrition,
            self.friction_shear,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Scale for Braden {
    fn id(&self) -> ScaleId {
        ScaleId::Braden
    }

    fn name(&self) -> &str {
        "Braden Scale"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 6.0, max: 23.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let items = answers.braden.as_ref()?.answered();
        if items.is_empty() {
            return None;
        }
        let total: f64 = items.iter().sum();

        let interpretation = if total <= 12.0 {
            "High pressure-injury risk"
        } else if total <= 18.0 {
            "At risk of pressure injury"
        } else {
            "Low pressure-injury risk"
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
