//! saba-meds
//!
//! Medication intelligence: a static drug/abbreviation lexicon, a
//! typo-tolerant name matcher, a free-text normalizer, and the safety
//! analyzer (interactions, prescribing-appropriateness checks,
//! anticholinergic burden, omitted-therapy recommendations).
//!
//! Every function is pure and total over its inputs: malformed text and
//! unknown tokens degrade to empty results, never errors. The lexicon is
//! immutable process-wide state, always passed by reference.

pub mod appropriateness;
pub mod burden;
pub mod interactions;
pub mod lexicon;
pub mod normalize;
pub mod safety;
pub mod similarity;
