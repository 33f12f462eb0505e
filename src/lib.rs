pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::balance::{compute_balance, compute_group_balance, compute_member_balances};
pub use crate::core::errors::SplitterError;
pub use crate::core::services::{ExpenseSplitterService, NewExpense};
pub use crate::core::split::compute_split;
pub use crate::infrastructure::storage::{
    Storage, in_memory::InMemoryStorage, json_file::JsonFileStorage,
};

#[cfg(test)]
mod tests;
