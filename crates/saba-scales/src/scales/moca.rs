use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// MoCA: Montreal Cognitive Assessment.
/// Seven cognitive domains, total 0–30. 26 and above is considered normal.
pub struct Moca;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MocaAnswers {
    /// Trail making, cube copy, clock drawing (0–5).
    pub visuospatial: Option<f64>,
    /// Lion, rhino, camel (0–3).
    pub naming: Option<f64>,
    /// Digit span, vigilance, serial 7s (0–6).
    pub attention: Option<f64>,
    /// Sentence repetition, fluency (0–3).
    pub language: Option<f64>,
    /// Similarity pairs (0–2).
    pub abstraction: Option<f64>,
    /// Five words at five minutes (0–5).
    pub delayed_recall: Option<f64>,
    /// Date, month, year, day, place, city (0–6).
    pub orientation: Option<f64>,
}

impl MocaAnswers {
    fn answered(&self) -> Vec<f64> {
        [
            self.visuospatial,
            self.naming,
            self.attention,
            self.language,
            self.abstraction,
            self.delayed_recall,
            self.orientation,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Scale for Moca {
    fn id(&self) -> ScaleId {
        ScaleId::Moca
    }

    fn name(&self) -> &str {
        "MoCA"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 30.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let items = answers.moca.as_ref()?.answered();
        if items.is_empty() {
            return None;
        }
        let total: f64 = items.iter().sum();

        let interpretation = if total >= 26.0 {
            "Normal cognition"
        } else if total >= 18.0 {
            "Mild cognitive impairment range"
        } else {
            "Significant cognitive impairment range"
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
