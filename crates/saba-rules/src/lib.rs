//! saba-rules
//!
//! The intervention rule engine: a fixed, ordered list of independent
//! rules evaluated against the current score set. Each rule is a
//! (predicate, factory) pair; the output is the concatenation of every
//! firing rule's records in declaration order. No deduplication, no
//! cross-rule suppression — re-running on unchanged input yields the
//! identical list.

pub mod intervention;
pub mod rules;

pub use intervention::{InterventionDomain, InterventionRecord, Priority};
pub use rules::{RuleContext, evaluate};
