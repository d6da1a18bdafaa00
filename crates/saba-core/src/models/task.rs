use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Follow-up task attached to a patient, persisted by the surrounding
/// application.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaskRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub title: String,
    pub done: bool,
    pub due: Option<jiff::civil::Date>,
    pub created_at: jiff::Timestamp,
}
