use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// MNA-SF: Mini Nutritional Assessment, short form.
/// Six screening items, total 0–14. 12–14 normal, 8–11 at risk,
/// 0–7 malnourished.
pub struct MnaSf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MnaSfAnswers {
    /// Decline in food intake over 3 months (0–2).
    pub food_intake_decline: Option<f64>,
    /// Weight loss over 3 months (0–3).
    pub weight_loss: Option<f64>,
    /// Mobility (0–2).
    pub mobility: Option<f64>,
    /// Psychological stress or acute disease (0–2).
    pub acute_stress: Option<f64>,
    /// Neuropsychological problems (0–2).
    pub neuropsychological: Option<f64>,
    /// BMI, or calf circumference when BMI unavailable (0–3).
    pub bmi_or_calf: Option<f64>,
}

impl MnaSfAnswers {
    fn answered(&self) -> Vec<f64> {
        [
            self.food_intake_decline,
            self.weight_loss,
            self.mobility,
            self.acute_stress,
            self.neuropsychological,
            self.bmi_or_calf,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Scale for MnaSf {
    fn id(&self) -> ScaleId {
        ScaleId::MnaSf
    }

    fn name(&self) -> &str {
        "MNA-SF"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 14.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let items = answers.mna_sf.as_ref()?.answered();
        if items.is_empty() {
            return None;
        }
        let total: f64 = items.iter().sum();

        let interpretation = if total <= 7.0 {
            "Malnourished"
        } else if total <= 11.0 {
            "At risk of malnutrition"
        } else {
            "Normal nutritional status"
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
