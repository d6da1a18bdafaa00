use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScaleError;

/// Identifier for each supported assessment scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleId {
    Moca,
    Gds15,
    Barthel,
    Iadl,
    MnaSf,
    Braden,
    Cam,
    Tinetti,
    Cfs,
}

impl ScaleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleId::Moca => "moca",
            ScaleId::Gds15 => "gds15",
            ScaleId::Barthel => "barthel",
            ScaleId::Iadl => "iadl",
            ScaleId::MnaSf => "mna_sf",
            ScaleId::Braden => "braden",
            ScaleId::Cam => "cam",
            ScaleId::Tinetti => "tinetti",
            ScaleId::Cfs => "cfs",
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleId {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moca" => Ok(ScaleId::Moca),
            "gds15" => Ok(ScaleId::Gds15),
            "barthel" => Ok(ScaleId::Barthel),
            "iadl" => Ok(ScaleId::Iadl),
            "mna_sf" => Ok(ScaleId::MnaSf),
            "braden" => Ok(ScaleId::Braden),
            "cam" => Ok(ScaleId::Cam),
            "tinetti" => Ok(ScaleId::Tinetti),
            "cfs" => Ok(ScaleId::Cfs),
            other => Err(ScaleError::UnknownScale(other.to_string())),
        }
    }
}

/// Normative display range for a scale's total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

/// One retained component of a composite score (e.g. Tinetti balance/gait).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subtotal {
    pub id: String,
    pub name: String,
    pub value: f64,
}

/// The outcome of scoring one scale.
///
/// A `ScoreResult` exists iff the scale had at least one answered item —
/// a fully unanswered scale is omitted from the result set, which is a
/// different outcome from a total of zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub scale_id: ScaleId,
    pub scale_name: String,
    /// Numeric total; `None` for composite-boolean scales (CAM).
    pub total: Option<f64>,
    #[serde(default)]
    pub subtotals: Vec<Subtotal>,
    /// Derived screen outcome where the scale defines one
    /// (CAM delirium-positive).
    pub positive: Option<bool>,
    pub interpretation: String,
    pub range: ScoreRange,
}
