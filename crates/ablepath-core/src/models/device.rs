use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A device offered for recommendation, supplied by the caller per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidateDevice {
    pub id: String,
    /// Device-standard category identifier, e.g. `"22-06"`.
    pub category_id: String,
    /// Price in the deployment's currency. `None` when unknown.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<jiff::Timestamp>,
}
