pub mod balance;
pub mod expense;
pub mod group;
pub mod user;

pub use balance::{BalanceOverview, BalanceStatus, BalanceSummary, GroupBalance, MemberBalance};
pub use expense::{Expense, SplitTable, SplitType};
pub use group::Group;
pub use user::User;
