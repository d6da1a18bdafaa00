//! Typed per-scale answer records.
//!
//! One record per scale, every item optional — only answered items are
//! present, mirroring a partially completed form. The raw-form adapter in
//! the API layer is the only place that builds these from untyped values.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use crate::scales::barthel::BarthelAnswers;
pub use crate::scales::braden::BradenAnswers;
pub use crate::scales::cam::CamAnswers;
pub use crate::scales::cfs::CfsAnswers;
pub use crate::scales::gds15::Gds15Answers;
pub use crate::scales::iadl::IadlAnswers;
pub use crate::scales::mna_sf::MnaSfAnswers;
pub use crate::scales::moca::MocaAnswers;
pub use crate::scales::tinetti::TinettiAnswers;

/// One patient session's worth of form answers across all scales.
///
/// `surprise_question` is the free-standing "would you be surprised if
/// this patient died within the next 12 months?" item; `Some(false)`
/// (would not be surprised) feeds the goals-of-care rule directly without
/// belonging to any scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AssessmentAnswers {
    pub moca: Option<MocaAnswers>,
    pub gds15: Option<Gds15Answers>,
    pub barthel: Option<BarthelAnswers>,
    pub iadl: Option<IadlAnswers>,
    pub mna_sf: Option<MnaSfAnswers>,
    pub braden: Option<BradenAnswers>,
    pub cam: Option<CamAnswers>,
    pub tinetti: Option<TinettiAnswers>,
    pub cfs: Option<CfsAnswers>,
    pub surprise_question: Option<bool>,
}

impl AssessmentAnswers {
    pub fn is_empty(&self) -> bool {
        self.moca.is_none()
            && self.gds15.is_none()
            && self.barthel.is_none()
            && self.iadl.is_none()
            && self.mna_sf.is_none()
            && self.braden.is_none()
            && self.cam.is_none()
            && self.tinetti.is_none()
            && self.cfs.is_none()
            && self.surprise_question.is_none()
    }
}
