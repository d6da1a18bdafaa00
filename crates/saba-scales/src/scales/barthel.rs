use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// Barthel Index of activities of daily living.
/// Ten items, total 0–100. Higher is more independent.
pub struct Barthel;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BarthelAnswers {
    /// 0/5/10.
    pub feeding: Option<f64>,
    /// 0/5.
    pub bathing: Option<f64>,
    /// 0/5.
    pub grooming: Option<f64>,
    /// 0/5/10.
    pub dressing: Option<f64>,
    /// 0/5/10.
    pub bowels: Option<f64>,
    /// 0/5/10.
    pub bladder: Option<f64>,
    /// 0/5/10.
    pub toilet_use: Option<f64>,
    /// 0/5/10/15.
    pub transfers: Option<f64>,
    /// 0/5/10/15.
    pub mobility: Option<f64>,
    /// 0/5/10.
    pub stairs: Option<f64>,
}

impl BarthelAnswers {
    fn answered(&self) -> Vec<f64> {
        [
            self.feeding,
            self.bathing,
            self.grooming,
            self.dressing,
            self.bowels,
            self.bladder,
            self.toilet_use,
            self.transfers,
            self.mobility,
            self.stairs,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Scale for Barthel {
    fn id(&self) -> ScaleId {
        ScaleId::Barthel
    }

    fn name(&self) -> &str {
        "Barthel Index"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 100.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let items = answers.barthel.as_ref()?.answered();
        if items.is_empty() {
            return None;
        }
        let total: f64 = items.iter().sum();

        let interpretation = if total >= 90.0 {
            "Independent"
        } else if total >= 60.0 {
            "Partially dependent"
        } else {
            "Severely dependent"
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
