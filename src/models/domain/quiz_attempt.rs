use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Selected option per question index.
pub type AnswerState = BTreeMap<usize, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeOutcome {
    Success,
    KeepPracticing,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub score: u32,
    pub total: u32,
    pub passed: bool,
    pub outcome: GradeOutcome,
    pub submitted_at: DateTime<Utc>,
}
