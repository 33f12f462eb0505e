use crate::core::errors::SplitterError;
use crate::core::models::{Expense, Group, User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything the store holds, in the shape it is persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    #[serde(default)]
    pub current_user: Option<User>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<StateSnapshot>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self::from_snapshot(StateSnapshot {
            users,
            ..StateSnapshot::default()
        })
    }

    pub fn from_snapshot(snapshot: StateSnapshot) -> Self {
        InMemoryStorage {
            state: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        self.state.read().await.clone()
    }

    pub async fn set_current_user(&self, user: Option<User>) {
        self.state.write().await.current_user = user;
    }

    /// Shared handle to the underlying state for wrappers that must hold the
    /// write lock across a mutation and its persistence.
    pub(crate) fn state(&self) -> &Arc<RwLock<StateSnapshot>> {
        &self.state
    }
}

pub(crate) fn push_group(state: &mut StateSnapshot, group: Group) -> Result<(), SplitterError> {
    if state.groups.iter().any(|g| g.id == group.id) {
        return Err(SplitterError::StorageError(format!("Group {} already exists", group.id)));
    }
    state.groups.push(group);
    Ok(())
}

pub(crate) fn push_expense(state: &mut StateSnapshot, expense: Expense) -> Result<(), SplitterError> {
    if state.expenses.iter().any(|e| e.id == expense.id) {
        return Err(SplitterError::StorageError(format!(
            "Expense {} already exists",
            expense.id
        )));
    }
    state.expenses.push(expense);
    Ok(())
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, SplitterError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, SplitterError> {
        Ok(self.state.read().await.users.clone())
    }

    async fn find_group(&self, group_id: &str) -> Result<Option<Group>, SplitterError> {
        let state = self.state.read().await;
        Ok(state.groups.iter().find(|g| g.id == group_id).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, SplitterError> {
        Ok(self.state.read().await.groups.clone())
    }

    async fn append_group(&self, group: Group) -> Result<(), SplitterError> {
        let mut state = self.state.write().await;
        push_group(&mut state, group)
    }

    async fn list_expenses(&self, group_id: Option<&str>) -> Result<Vec<Expense>, SplitterError> {
        let state = self.state.read().await;
        Ok(state
            .expenses
            .iter()
            .filter(|e| group_id.is_none_or(|gid| e.group_id == gid))
            .cloned()
            .collect())
    }

    async fn append_expense(&self, expense: Expense) -> Result<(), SplitterError> {
        let mut state = self.state.write().await;
        push_expense(&mut state, expense)
    }
}
