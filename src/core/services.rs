use crate::constants::{BALANCE_QUERIED, EXPENSE_ADDED, GROUP_CREATED};
use crate::core::balance::{compute_balance, compute_group_balance, compute_member_balances};
use crate::core::errors::SplitterError;
use crate::core::models::{
    BalanceOverview, BalanceSummary, Expense, Group, GroupBalance, MemberBalance, SplitType, User,
};
use crate::core::split::{compute_split, distinct_participants};
use crate::core::validation::{
    AmountInput, is_known_category, normalize_category, require_amount, validate_description,
    validate_group_description, validate_group_name, validate_participants, validate_title,
};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Expense creation data as submitted by the presentation layer.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub category: Option<String>,
    pub paid_by: String,
    pub split_among: Vec<String>,
    #[serde(default)]
    pub split_type: SplitType,
}

pub struct ExpenseSplitterService<S: Storage> {
    storage: S,
    current_user_id: String,
}

impl<S: Storage> ExpenseSplitterService<S> {
    pub fn new(storage: S, current_user_id: impl Into<String>) -> Self {
        let current_user_id = current_user_id.into();
        info!("Initializing ExpenseSplitterService for user {}", current_user_id);
        ExpenseSplitterService {
            storage,
            current_user_id,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn require_user(&self, user_id: &str) -> Result<User, SplitterError> {
        self.storage
            .find_user(user_id)
            .await?
            .ok_or_else(|| SplitterError::unknown_user(user_id))
    }

    async fn require_group(&self, group_id: &str) -> Result<Group, SplitterError> {
        self.storage
            .find_group(group_id)
            .await?
            .ok_or_else(|| SplitterError::unknown_group(group_id))
    }

    // USERS

    pub async fn current_user(&self) -> Result<User, SplitterError> {
        self.require_user(&self.current_user_id).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, SplitterError> {
        self.require_user(user_id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, SplitterError> {
        self.storage.list_users().await
    }

    // GROUPS

    pub async fn create_group(
        &self,
        name: &str,
        description: &str,
        member_ids: &[String],
        created_by: &User,
    ) -> Result<Group, SplitterError> {
        let name = validate_group_name(name)?;
        let description = validate_group_description(description)?;

        let mut members: Vec<String> = Vec::with_capacity(member_ids.len() + 1);
        for user_id in distinct_participants(member_ids) {
            self.require_user(user_id).await?;
            members.push(user_id.to_string());
        }
        if !members.iter().any(|m| *m == created_by.id) {
            members.push(created_by.id.clone());
        }

        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            created_at: Utc::now(),
            members,
            created_by: created_by.id.clone(),
        };
        self.storage.append_group(group.clone()).await?;

        info!(
            "{} group_id={} created_by={} members={}",
            GROUP_CREATED,
            group.id,
            created_by.id,
            group.members.len()
        );
        Ok(group)
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Group, SplitterError> {
        self.require_group(group_id).await
    }

    pub async fn get_groups_for_user(&self, user_id: &str) -> Result<Vec<Group>, SplitterError> {
        Ok(self
            .storage
            .list_groups()
            .await?
            .into_iter()
            .filter(|g| g.is_member(user_id))
            .collect())
    }

    /// Members resolved to users, in member order. Ids that no longer
    /// resolve are skipped.
    pub async fn get_group_members(&self, group_id: &str) -> Result<Vec<User>, SplitterError> {
        let group = self.require_group(group_id).await?;
        let mut users = Vec::with_capacity(group.members.len());
        for user_id in &group.members {
            match self.storage.find_user(user_id).await? {
                Some(user) => users.push(user),
                None => warn!("Group {} lists unknown member {}", group.id, user_id),
            }
        }
        Ok(users)
    }

    // EXPENSES

    pub async fn add_expense(&self, group_id: &str, input: NewExpense) -> Result<Expense, SplitterError> {
        info!("Adding expense '{}' to group {}", input.title, group_id);
        let title = validate_title(&input.title)?;
        let amount = require_amount(input.amount.as_ref())?;
        let description = validate_description(&input.description)?;
        let split_among = validate_participants(&input.split_among)?;

        let group = self.require_group(group_id).await?;
        self.require_user(&input.paid_by).await?;

        for user_id in &split_among {
            if !group.is_member(user_id) {
                warn!("Participant {} is not a member of group {}", user_id, group.id);
            }
        }

        let splits = compute_split(amount, &split_among, input.split_type, &input.paid_by)?;
        let category = normalize_category(input.category.as_deref());
        if !is_known_category(&category) {
            debug!("Expense '{}' uses custom category {}", title, category);
        }

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            group_id: group.id.clone(),
            title,
            description,
            amount,
            category,
            created_at: Utc::now(),
            paid_by: input.paid_by,
            split_among,
            split_type: input.split_type,
            splits,
        };
        self.storage.append_expense(expense.clone()).await?;

        info!(
            "{} expense_id={} group_id={} amount={} paid_by={}",
            EXPENSE_ADDED, expense.id, expense.group_id, expense.amount, expense.paid_by
        );
        Ok(expense)
    }

    pub async fn get_expenses_for_group(&self, group_id: &str) -> Result<Vec<Expense>, SplitterError> {
        let group = self.require_group(group_id).await?;
        self.storage.list_expenses(Some(&group.id)).await
    }

    // BALANCES

    pub async fn get_balance_in_group(&self, user_id: &str, group_id: &str) -> Result<f64, SplitterError> {
        let group = self.require_group(group_id).await?;
        let expenses = self.storage.list_expenses(Some(&group.id)).await?;
        let balance = compute_group_balance(user_id, &group.id, &expenses);
        debug!(
            "{} user_id={} group_id={} balance={}",
            BALANCE_QUERIED, user_id, group.id, balance
        );
        Ok(balance)
    }

    pub async fn get_total_balance(&self, user_id: &str) -> Result<f64, SplitterError> {
        let expenses = self.storage.list_expenses(None).await?;
        let balance = compute_balance(user_id, &expenses);
        debug!("{} user_id={} total={}", BALANCE_QUERIED, user_id, balance);
        Ok(balance)
    }

    pub async fn get_group_balances(&self, group_id: &str) -> Result<Vec<MemberBalance>, SplitterError> {
        let group = self.require_group(group_id).await?;
        let expenses = self.storage.list_expenses(Some(&group.id)).await?;
        Ok(compute_member_balances(&group, &expenses))
    }

    /// Total balance plus one entry per group `user_id` belongs to, all taken
    /// from a single expense snapshot.
    pub async fn get_balance_overview(&self, user_id: &str) -> Result<BalanceOverview, SplitterError> {
        let user = self.require_user(user_id).await?;
        let groups = self.get_groups_for_user(&user.id).await?;
        let expenses = self.storage.list_expenses(None).await?;

        let group_balances = groups
            .into_iter()
            .map(|group| GroupBalance {
                summary: BalanceSummary::new(compute_group_balance(&user.id, &group.id, &expenses)),
                group_id: group.id,
                group_name: group.name,
            })
            .collect();

        Ok(BalanceOverview {
            total: BalanceSummary::new(compute_balance(&user.id, &expenses)),
            user_id: user.id,
            groups: group_balances,
        })
    }
}
