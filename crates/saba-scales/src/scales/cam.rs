use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// CAM: Confusion Assessment Method delirium screen.
///
/// Positive iff (acute onset with fluctuating course AND inattention)
/// AND (disorganized thinking OR altered level of consciousness). This
/// boolean form is the standard CAM algorithm and must not be reshaped.
pub struct Cam;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CamAnswers {
    pub acute_onset_fluctuating: Option<bool>,
    pub inattention: Option<bool>,
    pub disorganized_thinking: Option<bool>,
    pub altered_consciousness: Option<bool>,
}

impl CamAnswers {
    fn is_unanswered(&self) -> bool {
        self.acute_onset_fluctuating.is_none()
            && self.inattention.is_none()
            && self.disorganized_thinking.is_none()
            && self.altered_consciousness.is_none()
    }
}

impl Scale for Cam {
    fn id(&self) -> ScaleId {
        ScaleId::Cam
    }

    fn name(&self) -> &str {
        "CAM"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 4.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let a = answers.cam.as_ref()?;
        if a.is_unanswered() {
            return None;
        }

        // Unanswered features count as absent.
        let acute = a.acute_onset_fluctuating.unwrap_or(false);
        let inattention = a.inattention.unwrap_or(false);
        let disorganized = a.disorganized_thinking.unwrap_or(false);
        let altered = a.altered_consciousness.unwrap_or(false);

        let positive = (acute && inattention) && (disorganized || altered);

        let interpretation = if positive {
            "Delirium screen positive"
        } else {
            "Delirium screen negative"
        };

        Some(ScoreResult {
            scale_id: self.id(),
            scale_name: self.name().to_string(),
            total: None,
            subtotals: Vec::new(),
            positive: Some(positive),
            interpretation: interpretation.to_string(),
            range: self.range(),
        })
    }
}
