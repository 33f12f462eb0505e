use crate::{
    api::{models::*, openapi::ApiDoc},
    core::{
        models::{BalanceOverview, BalanceSummary, Expense, Group, MemberBalance, User},
        services::{ExpenseSplitterService, NewExpense},
    },
    infrastructure::storage::json_file::JsonFileStorage,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;

pub type AppState = Arc<ExpenseSplitterService<JsonFileStorage>>;

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/me", get(get_current_user))
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/users/{user_id}/groups", get(get_user_groups))
        .route("/users/{user_id}/balance", get(get_total_balance))
        .route("/users/{user_id}/overview", get(get_balance_overview))
        .route("/groups", post(create_group))
        .route("/groups/{group_id}", get(get_group))
        .route("/groups/{group_id}/members", get(get_group_members))
        .route(
            "/groups/{group_id}/expenses",
            get(list_group_expenses).post(add_expense),
        )
        .route("/groups/{group_id}/balances", get(get_group_balances))
        .route("/groups/{group_id}/balances/{user_id}", get(get_group_balance))
        .with_state(service)
}

/// Full application router: the API nested under `/api` plus the OpenAPI
/// document.
pub fn app_router(service: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(service))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "The configured current user", body = User),
        (status = 404, description = "Current user not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_current_user(State(service): State<AppState>) -> Result<Json<User>, ApiError> {
    Ok(Json(service.current_user().await?))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All known users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_users(State(service): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(service.list_users().await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(service.get_user(&user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/groups",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Groups the user belongs to", body = [Group]),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user_groups(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let user = service.get_user(&user_id).await?;
    Ok(Json(service.get_groups_for_user(&user.id).await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/balance",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Balance across all groups", body = BalanceResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_total_balance(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let user = service.get_user(&user_id).await?;
    let balance = service.get_total_balance(&user.id).await?;
    Ok(Json(BalanceResponse {
        user_id: user.id,
        group_id: None,
        summary: BalanceSummary::new(balance),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/overview",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Total balance and per-group breakdown", body = BalanceOverview),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_balance_overview(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BalanceOverview>, ApiError> {
    Ok(Json(service.get_balance_overview(&user_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = Group),
        (status = 400, description = "Invalid group input", body = ErrorResponse),
        (status = 404, description = "Member or creator not found", body = ErrorResponse)
    )
)]
pub(crate) async fn create_group(
    State(service): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let created_by = match req.created_by_id {
        Some(user_id) => service.get_user(&user_id).await?,
        None => service.current_user().await?,
    };
    let group = service
        .create_group(&req.name, &req.description, &req.member_ids, &created_by)
        .await?;
    Ok((StatusCode::CREATED, Json(group)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    params(("group_id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group found", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group(
    State(service): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(service.get_group(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/members",
    params(("group_id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group members", body = [User]),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_members(
    State(service): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(service.get_group_members(&group_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/expenses",
    params(("group_id" = String, Path, description = "Group id")),
    request_body = NewExpense,
    responses(
        (status = 201, description = "Expense recorded with its split table", body = Expense),
        (status = 400, description = "Invalid expense input", body = ErrorResponse),
        (status = 404, description = "Group or payer not found", body = ErrorResponse)
    )
)]
pub(crate) async fn add_expense(
    State(service): State<AppState>,
    Path(group_id): Path<String>,
    Json(req): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = service.add_expense(&group_id, req).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/expenses",
    params(("group_id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Expenses of the group in insertion order", body = [Expense]),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn list_group_expenses(
    State(service): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    Ok(Json(service.get_expenses_for_group(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/balances",
    params(("group_id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Balance of every group member", body = [MemberBalance]),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_balances(
    State(service): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<MemberBalance>>, ApiError> {
    Ok(Json(service.get_group_balances(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/balances/{user_id}",
    params(
        ("group_id" = String, Path, description = "Group id"),
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Balance of the user within the group", body = BalanceResponse),
        (status = 404, description = "Group or user not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_balance(
    State(service): State<AppState>,
    Path((group_id, user_id)): Path<(String, String)>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let user = service.get_user(&user_id).await?;
    let balance = service.get_balance_in_group(&user.id, &group_id).await?;
    Ok(Json(BalanceResponse {
        user_id: user.id,
        group_id: Some(group_id),
        summary: BalanceSummary::new(balance),
    }))
}
