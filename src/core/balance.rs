use log::debug;

use crate::core::models::{BalanceStatus, Expense, Group, MemberBalance};

/// Net position of `user_id` over `expenses`.
///
/// The payer of an expense is credited its full amount; every user listed in
/// the split table is debited their owed amount. Positive means others owe
/// the user, negative means the user owes others.
pub fn compute_balance<'a, I>(user_id: &str, expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().fold(0.0, |mut balance, expense| {
        if expense.paid_by == user_id {
            balance += expense.amount;
        }
        if let Some(&owed) = expense.splits.get(user_id) {
            if owed != 0.0 {
                balance -= owed;
            }
        }
        balance
    })
}

/// Same as [`compute_balance`], restricted to expenses of one group.
pub fn compute_group_balance<'a, I>(user_id: &str, group_id: &str, expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    compute_balance(
        user_id,
        expenses.into_iter().filter(|expense| expense.group_id == group_id),
    )
}

/// Scoped balance of every member of `group`, in member order.
pub fn compute_member_balances(group: &Group, expenses: &[Expense]) -> Vec<MemberBalance> {
    debug!("Calculating member balances for group {}", group.id);
    let balances: Vec<MemberBalance> = group
        .members
        .iter()
        .map(|user_id| {
            let balance = compute_group_balance(user_id, &group.id, expenses);
            MemberBalance {
                user_id: user_id.clone(),
                balance,
                status: BalanceStatus::classify(balance),
            }
        })
        .collect();
    debug!("Member balances for group {}: {:?}", group.id, balances);
    balances
}
