use utoipa::OpenApi;

use crate::{
    api::models::{BalanceResponse, CreateGroupRequest, ErrorResponse},
    core::{
        models::{
            BalanceOverview, BalanceStatus, BalanceSummary, Expense, Group, GroupBalance, MemberBalance, SplitType,
            User,
        },
        services::NewExpense,
        validation::AmountInput,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::get_current_user,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::get_user_groups,
        super::handlers::get_total_balance,
        super::handlers::get_balance_overview,
        super::handlers::create_group,
        super::handlers::get_group,
        super::handlers::get_group_members,
        super::handlers::add_expense,
        super::handlers::list_group_expenses,
        super::handlers::get_group_balances,
        super::handlers::get_group_balance
    ),
    components(schemas(
        CreateGroupRequest,
        NewExpense,
        AmountInput,
        BalanceResponse,
        ErrorResponse,
        User,
        Group,
        Expense,
        SplitType,
        BalanceStatus,
        BalanceSummary,
        MemberBalance,
        GroupBalance,
        BalanceOverview
    )),
    info(
        title = "Expense Splitter API",
        description = "Groups, shared expenses and the balances derived from them",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
