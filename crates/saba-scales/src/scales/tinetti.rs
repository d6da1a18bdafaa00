use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult, Subtotal};

/// Tinetti POMA: Performance-Oriented Mobility Assessment.
///
/// Balance (0–16) and gait (0–12) sections summed independently,
/// total 0–28. Below 19 indicates high fall risk; downstream rules use
/// the total against that cut point, so balance, gait, and total are all
/// retained in the result.
pub struct Tinetti;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TinettiAnswers {
    /// Balance section subtotal (0–16).
    pub balance: Option<f64>,
    /// Gait section subtotal (0–12).
    pub gait: Option<f64>,
}

impl Scale for Tinetti {
    fn id(&self) -> ScaleId {
        ScaleId::Tinetti
    }

    fn name(&self) -> &str {
        "Tinetti POMA"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 28.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let a = answers.tinetti.as_ref()?;
        if a.balance.is_none() && a.gait.is_none() {
            return None;
        }

        let balance = a.balance.unwrap_or(0.0);
        let gait = a.gait.unwrap_or(0.0);
        let total = balance + gait;

        let interpretation = if total < 19.0 {
            "High fall risk"
        } else if total <= 23.0 {
            "Moderate fall risk"
        } else {
            "Low fall risk"
        };

        Some(ScoreResult {
            scale_id: self.id(),
            scale_name: self.name().to_string(),
            total: Some(total),
            subtotals: vec![
                Subtotal {
                    id: "balance".to_string(),
                    name: "Balance".to_string(),
                    value: balance,
                },
                Subtotal {
                    id: "gait".to_string(),
                    name: "Gait".to_string(),
                    value: gait,
                },
            ],
            positive: None,
            interpretation: interpretation.to_string(),
            range: self.range(),
        })
    }
}
