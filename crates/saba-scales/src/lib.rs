//! saba-scales
//!
//! Standardized geriatric assessment scales. Pure scoring — each scale
//! maps its typed answer record to a `ScoreResult` with no I/O and no
//! shared mutable state. A scale with zero answered items yields no
//! result at all, which callers must distinguish from a scored total of
//! zero.

pub mod answers;
pub mod error;
pub mod scales;
pub mod scoring;

use answers::AssessmentAnswers;
use scoring::{ScaleId, ScoreRange, ScoreResult};

/// Trait implemented by each assessment scale.
pub trait Scale: Send + Sync {
    /// Stable identifier (e.g. `ScaleId::Moca`).
    fn id(&self) -> ScaleId;

    /// Human-readable name (e.g. "MoCA").
    fn name(&self) -> &str;

    /// Normative display range for the total.
    fn range(&self) -> ScoreRange;

    /// Score this scale's slice of the answers.
    ///
    /// Returns `None` when the scale was not answered at all; partially
    /// completed scales are still scored over the answered items.
    fn score(&self, answers: &AssessmentAnswers) -> Option<ScoreResult>;
}

/// Return all registered scales, in fixed declaration order.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::moca::Moca),
        Box::new(scales::gds15::Gds15),
        Box::new(scales::barthel::Barthel),
        Box::new(scales::iadl::Iadl),
        Box::new(scales::mna_sf::MnaSf),
        Box::new(scales::braden::Braden),
        Box::new(scales::cam::Cam),
        Box::new(scales::tinetti::Tinetti),
        Box::new(scales::cfs::Cfs),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: ScaleId) -> Box<dyn Scale> {
    match id {
        ScaleId::Moca => Box::new(scales::moca::Moca),
        ScaleId::Gds15 => Box::new(scales::gds15::Gds15),
        ScaleId::Barthel => Box::new(scales::barthel::Barthel),
        ScaleId::Iadl => Box::new(scales::iadl::Iadl),
        ScaleId::MnaSf => Box::new(scales::mna_sf::MnaSf),
        ScaleId::Braden => Box::new(scales::braden::Braden),
        ScaleId::Cam => Box::new(scales::cam::Cam),
        ScaleId::Tinetti => Box::new(scales::tinetti::Tinetti),
        ScaleId::Cfs => Box::new(scales::cfs::Cfs),
    }
}

/// Score every answered scale, in registry order.
///
/// Deterministic: the same answers always produce the same list in the
/// same order, computed fresh on every call.
pub fn score_all(answers: &AssessmentAnswers) -> Vec<ScoreResult> {
    all_scales()
        .iter()
        .filter_map(|s| s.score(answers))
        .collect()
}
