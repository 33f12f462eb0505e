use crate::core::models::User;

/// Float comparison tolerance for split and balance arithmetic.
pub const SPLIT_TOLERANCE: f64 = 1e-9;

/// Balances closer to zero than half a cent read as settled.
pub const SETTLED_THRESHOLD: f64 = 0.005;

pub const CURRENCY_SYMBOL: &str = "$";

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

pub const DEFAULT_CATEGORY: &str = "General";

pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food & Drink",
    "Groceries",
    "Housing",
    "Transportation",
    "Entertainment",
    "Utilities",
    DEFAULT_CATEGORY,
];

pub const DEFAULT_CURRENT_USER_ID: &str = "currentUser";

// Log targets
pub const GROUP_CREATED: &str = "group_created";
pub const EXPENSE_ADDED: &str = "expense_added";
pub const BALANCE_QUERIED: &str = "balance_queried";
pub const STATE_PERSISTED: &str = "state_persisted";

pub fn seed_users() -> Vec<User> {
    vec![
        User::new("user1", "John Doe", "john@example.com", "👨"),
        User::new("user2", "Jane Smith", "jane@example.com", "👩"),
        User::new(DEFAULT_CURRENT_USER_ID, "You", "you@example.com", "😎"),
    ]
}
