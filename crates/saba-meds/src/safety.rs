//! The combined medication-safety report.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use saba_core::models::patient::PatientContext;

use crate::appropriateness::{
    InappropriateFinding, StartRecommendation, check_inappropriate, check_start,
};
use crate::burden::{AcbResult, anticholinergic_burden};
use crate::interactions::{InteractionFinding, check_interactions};
use crate::lexicon::Lexicon;
use crate::normalize::{MedicationMention, resolved_names};

/// Everything the safety analyzer produces for one medication list.
/// Empty sub-lists are valid, expected states — never an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationSafetyReport {
    pub interactions: Vec<InteractionFinding>,
    pub inappropriate: Vec<InappropriateFinding>,
    pub anticholinergic: AcbResult,
    pub start_recommendations: Vec<StartRecommendation>,
}

/// Run all four sub-analyses over the resolved mentions.
///
/// The sub-analyses are independent and order-insensitive; the report is
/// their concatenation. Empty medication or condition lists degrade to
/// empty findings.
pub fn analyze(
    mentions: &[MedicationMention],
    ctx: &PatientContext,
    lexicon: &Lexicon,
) -> MedicationSafetyReport {
    let names = resolved_names(mentions);

    MedicationSafetyReport {
        interactions: check_interactions(&names, lexicon),
        inappropriate: check_inappropriate(&names, ctx, lexicon),
        anticholinergic: anticholinergic_burden(&names, lexicon),
        start_recommendations: check_start(&names, ctx, lexicon),
    }
}
