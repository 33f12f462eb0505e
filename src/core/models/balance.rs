use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{CURRENCY_SYMBOL, SETTLED_THRESHOLD};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Others owe this user.
    Owed,
    /// This user owes others.
    Owes,
    Settled,
}

impl BalanceStatus {
    pub fn classify(balance: f64) -> Self {
        if balance >= SETTLED_THRESHOLD {
            BalanceStatus::Owed
        } else if balance <= -SETTLED_THRESHOLD {
            BalanceStatus::Owes
        } else {
            BalanceStatus::Settled
        }
    }
}

/// A net balance together with how it reads to the user it belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub balance: f64,
    pub status: BalanceStatus,
    /// Absolute value rounded to cents.
    pub display_amount: f64,
    pub message: String,
}

impl BalanceSummary {
    pub fn new(balance: f64) -> Self {
        let status = BalanceStatus::classify(balance);
        let display_amount = round_to_cents(balance.abs());
        let message = match status {
            BalanceStatus::Owed => format!("You are owed {}{:.2}", CURRENCY_SYMBOL, display_amount),
            BalanceStatus::Owes => format!("You owe {}{:.2}", CURRENCY_SYMBOL, display_amount),
            BalanceStatus::Settled => "You are all settled up!".to_string(),
        };
        BalanceSummary {
            balance,
            status,
            display_amount,
            message,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    pub user_id: String,
    pub balance: f64,
    pub status: BalanceStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupBalance {
    pub group_id: String,
    pub group_name: String,
    pub summary: BalanceSummary,
}

/// Overall position of one user plus the per-group breakdown.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceOverview {
    pub user_id: String,
    pub total: BalanceSummary,
    pub groups: Vec<GroupBalance>,
}

pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
