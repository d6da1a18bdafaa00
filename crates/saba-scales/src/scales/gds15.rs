use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Scale;
use crate::answers::AssessmentAnswers;
use crate::scoring::{ScaleId, ScoreRange, ScoreResult};

/// GDS-15: Geriatric Depression Scale, short form.
/// 15 yes/no items, one point per depressive answer. 5+ suggests
/// depression, 10+ is consistent with severe depression.
pub struct Gds15;

/// Each item holds the point value already mapped from the yes/no answer
/// (1.0 = depressive direction, 0.0 = not).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Gds15Answers {
    pub satisfied_with_life: Option<f64>,
    pub dropped_activities: Option<f64>,
    pub life_feels_empty: Option<f64>,
    pub often_bored: Option<f64>,
    pub good_spirits: Option<f64>,
    pub afraid_of_bad_things: Option<f64>,
    pub happy_most_of_time: Option<f64>,
    pub often_helpless: Option<f64>,
    pub prefers_to_stay_home: Option<f64>,
    pub memory_problems: Option<f64>,
    pub wonderful_to_be_alive: Option<f64>,
    pub feels_worthless: Option<f64>,
    pub full_of_energy: Option<f64>,
    pub situation_hopeless: Option<f64>,
    pub others_better_off: Option<f64>,
}

impl Gds15Answers {
    fn answered(&self) -> Vec<f64> {
        [
            self.satisfied_with_life,
            self.dropped_activities,
            self.life_feels_empty,
            self.often_bored,
            self.good_spirits,
            self.afraid_of_bad_things,
            self.happy_most_of_time,
            self.often_helpless,
            self.prefers_to_stay_home,
            self.memory_problems,
            self.wonderful_to_be_alive,
            self.feels_worthless,
            self.full_of_energy,
            self.situation_hopeless,
            self.others_better_off,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Scale for Gds15 {
    fn id(&self) -> ScaleId {
        ScaleId::Gds15
    }

    fn name(&self) -> &str {
        "GDS-15"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange { min: 0.0, max: 15.0 }
    }

    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult> {
        let items = answers.gds15.as_ref()?.answered();
        if items.is_empty() {
            return None;
        }
        let total: f64 = items.iter().sum();

        let interpretation = if total >= 10.0 {
            "Consistent with severe depression"
        } else if total >= 5.0 {
            "Suggestive of depression"
        } else {
            "Depression screen negative"
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
