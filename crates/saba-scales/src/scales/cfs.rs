use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// CFS: Clinical Frailty Scale.
/// A single ordinal rating 1–9; the selected value is the score itself.
pub struct Cfs;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CfsAnswers {
    pub score: Option<f64>,
}

fn level_label(score: f64) -> &'static str {
    match score as i64 {
        1 => "Very fit",
        2 => "Fit",
        3 => "Managing well",
        4 => "Living with very mild frailty",
        5 => "Living with mild frailty",
        6 => "Living with moderate frailty",
        7 => "Living with severe frailty",
        8 => "Living with very severe frailty",
        9 => "Terminally ill",
        _ => "Outside the 1-9 rating range",
    }
}

impl Scale for Cfs {
    fn id(&self) -> ScaleId {
        ScaleId::Cfs
    }

    fn name(&self) -> &str {
        "Clinical Frailty Scale"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 1.0, max: 9.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let score = answers.cfs.as_ref()?.score?;

        Some(ScoreResult {
            scale_id: self.id(),
            scale_name: self.name().to_string(),
            total: Some(score),
            subtotals: Vec::new(),
            positive: None,
            interpretation: level_label(score).to_string(),
            range: self.range(),
        })
    }
}
