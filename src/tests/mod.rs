mod balance_tests;
mod service_tests;

use crate::constants::{SPLIT_TOLERANCE, seed_users};
use crate::core::models::{Expense, SplitType};
use crate::core::services::ExpenseSplitterService;
use crate::core::split::compute_split;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use chrono::Utc;

pub fn create_test_service() -> ExpenseSplitterService<InMemoryStorage> {
    let _ = env_logger::try_init();
    ExpenseSplitterService::new(InMemoryStorage::with_users(seed_users()), "currentUser")
}

pub fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Expense record with an equal split, built the way the service builds one.
pub fn equal_expense(id: &str, group_id: &str, amount: f64, paid_by: &str, split_among: &[&str]) -> Expense {
    let split_among = ids(split_among);
    let splits = compute_split(amount, &split_among, SplitType::Equal, paid_by).unwrap();
    Expense {
        id: id.to_string(),
        group_id: group_id.to_string(),
        title: format!("Expense {}", id),
        description: String::new(),
        amount,
        category: "General".to_string(),
        created_at: Utc::now(),
        paid_by: paid_by.to_string(),
        split_among,
        split_type: SplitType::Equal,
        splits,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < SPLIT_TOLERANCE,
        "expected {} but got {}",
        expected,
        actual
    );
}
