//! Additive anticholinergic burden scoring.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lexicon::Lexicon;

/// A conventional action threshold: totals of 3 or more are associated
/// with measurable cognitive and functional decline.
const HIGH_BURDEN: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcbContribution {
    pub drug: String,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcbResult {
    pub total: u32,
    pub contributions: Vec<AcbContribution>,
}

impl AcbResult {
    pub fn is_high(&self) -> bool {
        self.total >= HIGH_BURDEN
    }
}

/// Sum the per-drug anticholinergic points over a resolved medication
/// list. Drugs with zero points do not appear in the contribution list;
/// adding a recognized anticholinergic never decreases the total.
pub fn anticholinergic_burden(names: &[String], lexicon: &Lexicon) -> AcbResult {
    let mut contributions = Vec::new();
    let mut total: u32 = 0;

    for name in names {
        let Some(entry) = lexicon.find_drug(name) else {
            continue;
        };
        if entry.acb_points == 0 {
            continue;
        }
        total += u32::from(entry.acb_points);
        contributions.push(AcbContribution {
            drug: entry.name.to_string(),
            points: entry.acb_points,
        });
    }

    AcbResult {
        total,
        contributions,
    }
}
