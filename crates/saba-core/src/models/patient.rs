use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Clinical context the medication analyzer and rule engine may consult.
/// Everything is optional — an empty context disables the age- and
/// condition-gated checks without disabling the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

impl PatientContext {
    /// True when age is known and at least 65.
    pub fn is_older_adult(&self) -> bool {
        self.age.is_some_and(|a| a >= 65)
    }

    /// Case-insensitive substring search over the condition list.
    pub fn has_condition(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.conditions
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
    }
}

/// Roster entry persisted by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub context: PatientContext,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Envelope for one completed assessment session, stored as entered.
/// The engine itself never reads this back — scoring always runs on the
/// typed answers, freshly adapted from the raw form values.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date_administered: jiff::civil::Date,
    pub answers: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
