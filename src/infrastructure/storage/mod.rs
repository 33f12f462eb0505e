use crate::core::errors::SplitterError;
use crate::core::models::{Expense, Group, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, SplitterError>;
    async fn list_users(&self) -> Result<Vec<User>, SplitterError>;
    async fn find_group(&self, group_id: &str) -> Result<Option<Group>, SplitterError>;
    async fn list_groups(&self) -> Result<Vec<Group>, SplitterError>;
    async fn append_group(&self, group: Group) -> Result<(), SplitterError>;
    /// Expenses in insertion order, optionally restricted to one group.
    async fn list_expenses(&self, group_id: Option<&str>) -> Result<Vec<Expense>, SplitterError>;
    async fn append_expense(&self, expense: Expense) -> Result<(), SplitterError>;
}

pub mod in_memory;
pub mod json_file;
