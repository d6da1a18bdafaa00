use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical category an intervention belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterventionDomain {
    Frailty,
    Falls,
    Delirium,
    Depression,
    Cognition,
    PressureInjury,
    GoalsOfCare,
    Nutrition,
}

/// Ordered priority; `High` sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One recommended intervention. Immutable once produced; the full list
/// is regenerated whenever any score changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterventionRecord {
    pub domain: InterventionDomain,
    pub priority: Priority,
    pub action: String,
    pub rationale: String,
    pub citation: Option<String>,
}

impl InterventionRecord {
    pub(crate) fn new(
        domain: InterventionDomain,
        priority: Priority,
        action: &str,
        rationale: &str,
        citation: Option<&str>,
    ) -> Self {
        Self {
            domain,
            priority,
            action: action.to_string(),
            rationale: rationale.to_string(),
            citation: citation.map(str::to_string),
        }
    }
}
