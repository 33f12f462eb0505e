use crate::constants::STATE_PERSISTED;
use crate::core::errors::SplitterError;
use crate::core::models::{Expense, Group, User};
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::{InMemoryStorage, StateSnapshot, push_expense, push_group};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// In-memory store mirrored to a JSON file after every mutation.
#[derive(Clone)]
pub struct JsonFileStorage {
    inner: InMemoryStorage,
    path: PathBuf,
}

impl JsonFileStorage {
    /// Loads the snapshot at `path`, or starts from `seed_users` when the
    /// file does not exist yet.
    pub async fn open(path: impl AsRef<Path>, seed_users: Vec<User>) -> Result<Self, SplitterError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let mut snapshot: StateSnapshot = serde_json::from_str(&contents)?;
                info!(
                    "Loaded state from {}: {} users, {} groups, {} expenses",
                    path.display(),
                    snapshot.users.len(),
                    snapshot.groups.len(),
                    snapshot.expenses.len()
                );
                if snapshot.users.is_empty() {
                    warn!("State file {} has no users, seeding defaults", path.display());
                    snapshot.users = seed_users;
                }
                snapshot
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("No state file at {}, starting fresh", path.display());
                StateSnapshot {
                    users: seed_users,
                    ..StateSnapshot::default()
                }
            }
            Err(err) => return Err(err.into()),
        };

        Ok(JsonFileStorage {
            inner: InMemoryStorage::from_snapshot(snapshot),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        self.inner.snapshot().await
    }

    pub async fn set_current_user(&self, user: Option<User>) -> Result<(), SplitterError> {
        let mut state = self.inner.state().write().await;
        let previous = std::mem::replace(&mut state.current_user, user);
        if let Err(err) = write_snapshot(&self.path, &state).await {
            state.current_user = previous;
            return Err(err);
        }
        Ok(())
    }
}

async fn write_snapshot(path: &Path, snapshot: &StateSnapshot) -> Result<(), SplitterError> {
    let json = serde_json::to_vec_pretty(snapshot)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!("{} path={} bytes={}", STATE_PERSISTED, path.display(), json.len());
    Ok(())
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, SplitterError> {
        self.inner.find_user(user_id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, SplitterError> {
        self.inner.list_users().await
    }

    async fn find_group(&self, group_id: &str) -> Result<Option<Group>, SplitterError> {
        self.inner.find_group(group_id).await
    }

    async fn list_groups(&self) -> Result<Vec<Group>, SplitterError> {
        self.inner.list_groups().await
    }

    async fn append_group(&self, group: Group) -> Result<(), SplitterError> {
        let mut state = self.inner.state().write().await;
        push_group(&mut state, group)?;
        if let Err(err) = write_snapshot(&self.path, &state).await {
            state.groups.pop();
            return Err(err);
        }
        Ok(())
    }

    async fn list_expenses(&self, group_id: Option<&str>) -> Result<Vec<Expense>, SplitterError> {
        self.inner.list_expenses(group_id).await
    }

    async fn append_expense(&self, expense: Expense) -> Result<(), SplitterError> {
        let mut state = self.inner.state().write().await;
        push_expense(&mut state, expense)?;
        if let Err(err) = write_snapshot(&self.path, &state).await {
            state.expenses.pop();
            return Err(err);
        }
        Ok(())
    }
}
