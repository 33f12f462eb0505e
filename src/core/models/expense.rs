use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use utoipa::ToSchema;

/// Participant id -> amount that participant owes toward one expense.
pub type SplitTable = HashMap<String, f64>;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    #[default]
    Equal,
    /// Recognized but inert: produces an empty split table.
    Custom,
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SplitType::Equal => "equal",
            SplitType::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    pub paid_by: String,
    pub split_among: Vec<String>,
    pub split_type: SplitType,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub splits: SplitTable,
}

impl Expense {
    /// Amount `user_id` owes toward this expense, zero when absent.
    pub fn owed_by(&self, user_id: &str) -> f64 {
        self.splits.get(user_id).copied().unwrap_or(0.0)
    }
}
