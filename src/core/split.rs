use std::collections::HashSet;

use log::debug;

use crate::core::errors::SplitterError;
use crate::core::models::{SplitTable, SplitType};

/// Apportions `amount` among `participants`.
///
/// With [`SplitType::Equal`] every distinct participant owes `amount / n`,
/// except the payer, who owes nothing toward their own expense. The payer's
/// share is not reassigned, so the table sums to `amount * (n - 1) / n` when
/// the payer participates and to `amount` otherwise.
///
/// [`SplitType::Custom`] carries no per-participant amounts yet and yields an
/// empty table.
pub fn compute_split(
    amount: f64,
    participants: &[String],
    split_type: SplitType,
    payer: &str,
) -> Result<SplitTable, SplitterError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SplitterError::invalid_expense(
            "amount",
            "Invalid Amount",
            "Amount must be a positive number",
        ));
    }
    if participants.is_empty() {
        return Err(SplitterError::invalid_expense(
            "split_among",
            "No Participants",
            "Select at least one member to split with",
        ));
    }

    let distinct = distinct_participants(participants);
    let table: SplitTable = match split_type {
        SplitType::Equal => {
            let per_person = amount / distinct.len() as f64;
            distinct
                .into_iter()
                .map(|user_id| {
                    let owed = if user_id == payer { 0.0 } else { per_person };
                    (user_id.to_string(), owed)
                })
                .collect()
        }
        SplitType::Custom => SplitTable::new(),
    };

    debug!("Computed {} split of {} paid by {}: {:?}", split_type, amount, payer, table);
    Ok(table)
}

/// First occurrence of each id, in input order.
pub(crate) fn distinct_participants(participants: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    participants
        .iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect()
}
