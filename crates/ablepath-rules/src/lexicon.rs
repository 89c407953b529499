use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Keywords for tagging free-text feedback. Positive keywords are checked
/// first, so feedback containing both kinds is tagged positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}
