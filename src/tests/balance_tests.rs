use super::{assert_close, equal_expense};
use crate::core::balance::{compute_balance, compute_group_balance, compute_member_balances};
use crate::core::models::{BalanceStatus, BalanceSummary, Group};
use chrono::Utc;

#[test]
fn test_payer_outside_split_is_credited_full_amount() {
    let expenses = vec![equal_expense("e1", "g1", 60.0, "C", &["A", "B"])];

    assert_close(compute_balance("C", &expenses), 60.0);
    assert_close(compute_balance("A", &expenses), -30.0);
    assert_close(compute_balance("B", &expenses), -30.0);
}

#[test]
fn test_two_expenses_match_hand_computed_table() {
    let expenses = vec![
        equal_expense("e1", "g1", 100.0, "A", &["A", "B"]),
        equal_expense("e2", "g1", 50.0, "B", &["A", "B"]),
    ];

    // e1 splits {A: 0, B: 50}, e2 splits {A: 25, B: 0}
    let table = [("A", 100.0 - 25.0), ("B", 50.0 - 50.0), ("C", 0.0)];
    for (user, expected) in table {
        assert_close(compute_balance(user, &expenses), expected);
    }
}

#[test]
fn test_unrelated_user_has_zero_balance() {
    let expenses = vec![equal_expense("e1", "g1", 80.0, "A", &["A", "B"])];
    assert_eq!(compute_balance("nobody", &expenses), 0.0);
    assert_eq!(compute_balance("A", &[]), 0.0);
}

#[test]
fn test_scoped_balance_ignores_other_groups() {
    let expenses = vec![
        equal_expense("e1", "g1", 100.0, "A", &["A", "B"]),
        equal_expense("e2", "g2", 40.0, "B", &["A", "B"]),
    ];

    assert_close(compute_group_balance("A", "g1", &expenses), 100.0);
    assert_close(compute_group_balance("A", "g2", &expenses), -20.0);
    assert_close(compute_balance("A", &expenses), 80.0);
    assert_close(
        compute_group_balance("A", "g1", &expenses) + compute_group_balance("A", "g2", &expenses),
        compute_balance("A", &expenses),
    );
}

#[test]
fn test_member_balances_follow_member_order() {
    let group = Group {
        id: "g1".to_string(),
        name: "Trip".to_string(),
        description: String::new(),
        created_at: Utc::now(),
        members: vec!["B".to_string(), "A".to_string(), "C".to_string()],
        created_by: "A".to_string(),
    };
    let expenses = vec![
        equal_expense("e1", "g1", 90.0, "A", &["A", "B", "C"]),
        equal_expense("e2", "other", 500.0, "C", &["A"]),
    ];

    let balances = compute_member_balances(&group, &expenses);
    let users: Vec<&str> = balances.iter().map(|b| b.user_id.as_str()).collect();
    assert_eq!(users, vec!["B", "A", "C"]);
    assert_close(balances[0].balance, -30.0);
    assert_eq!(balances[0].status, BalanceStatus::Owes);
    assert_close(balances[1].balance, 90.0);
    assert_eq!(balances[1].status, BalanceStatus::Owed);
    assert_close(balances[2].balance, -30.0);
}

#[test]
fn test_balance_summary_messages() {
    let owed = BalanceSummary::new(25.0);
    assert_eq!(owed.status, BalanceStatus::Owed);
    assert_eq!(owed.message, "You are owed $25.00");

    let owes = BalanceSummary::new(-100.0 / 3.0);
    assert_eq!(owes.status, BalanceStatus::Owes);
    assert_eq!(owes.display_amount, 33.33);
    assert_eq!(owes.message, "You owe $33.33");

    let settled = BalanceSummary::new(1e-12);
    assert_eq!(settled.status, BalanceStatus::Settled);
    assert_eq!(settled.message, "You are all settled up!");
}
