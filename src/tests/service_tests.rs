use super::{assert_close, create_test_service, ids};
use crate::core::errors::SplitterError;
use crate::core::models::{BalanceStatus, SplitType};
use crate::core::services::NewExpense;
use crate::infrastructure::storage::Storage;

fn dinner(paid_by: &str, amount: &str, split_among: &[&str]) -> NewExpense {
    NewExpense {
        title: "Dinner".to_string(),
        description: String::new(),
        amount: Some(amount.into()),
        category: Some("Food & Drink".to_string()),
        paid_by: paid_by.to_string(),
        split_among: ids(split_among),
        split_type: SplitType::Equal,
    }
}

#[tokio::test]
async fn test_create_group_appends_creator() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();

    let group = service
        .create_group(" Trip ", "Weekend away", &ids(&["user1", "user2", "user1"]), &me)
        .await
        .unwrap();

    assert_eq!(group.name, "Trip");
    assert_eq!(group.created_by, "currentUser");
    assert_eq!(group.members, vec!["user1", "user2", "currentUser"]);
    assert_eq!(service.get_group(&group.id).await.unwrap(), group);
}

#[tokio::test]
async fn test_create_group_validates_input() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();

    let result = service.create_group("  ", "", &[], &me).await;
    assert!(matches!(result, Err(SplitterError::InvalidGroupInput(..))));

    let result = service.create_group("Trip", "", &ids(&["ghost"]), &me).await;
    assert!(matches!(
        result,
        Err(SplitterError::UnknownReference("user", ref id)) if id == "ghost"
    ));

    assert!(service.storage().list_groups().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_expense_materializes_split_table() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();
    let group = service
        .create_group("Flat", "", &ids(&["user1", "user2"]), &me)
        .await
        .unwrap();

    let expense = service
        .add_expense(&group.id, dinner("currentUser", "90", &["currentUser", "user1", "user2"]))
        .await
        .unwrap();

    assert_eq!(expense.group_id, group.id);
    assert_eq!(expense.amount, 90.0);
    assert_eq!(expense.category, "Food & Drink");
    assert_eq!(expense.splits["currentUser"], 0.0);
    assert_close(expense.splits["user1"], 30.0);
    assert_close(expense.splits["user2"], 30.0);
    assert_eq!(service.get_expenses_for_group(&group.id).await.unwrap(), vec![expense]);
}

#[tokio::test]
async fn test_add_expense_rejects_invalid_input_without_writing() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();
    let group = service.create_group("Flat", "", &ids(&["user1"]), &me).await.unwrap();

    for amount in ["", "abc", "0", "-3"] {
        let result = service
            .add_expense(&group.id, dinner("user1", amount, &["user1", "currentUser"]))
            .await;
        assert!(matches!(result, Err(SplitterError::InvalidExpenseInput(..))));
    }

    let result = service.add_expense(&group.id, dinner("user1", "10", &[])).await;
    assert!(matches!(result, Err(SplitterError::InvalidExpenseInput(..))));

    let mut untitled = dinner("user1", "10", &["user1"]);
    untitled.title = " ".to_string();
    let result = service.add_expense(&group.id, untitled).await;
    assert!(matches!(result, Err(SplitterError::InvalidExpenseInput(..))));

    let result = service.add_expense("missing", dinner("user1", "10", &["user1"])).await;
    assert!(matches!(result, Err(SplitterError::UnknownReference("group", _))));

    let result = service.add_expense(&group.id, dinner("ghost", "10", &["user1"])).await;
    assert!(matches!(result, Err(SplitterError::UnknownReference("user", _))));

    assert!(service.storage().list_expenses(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_custom_split_records_empty_table() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();
    let group = service.create_group("Flat", "", &ids(&["user1"]), &me).await.unwrap();

    let mut input = dinner("user1", "50", &["user1", "currentUser"]);
    input.split_type = SplitType::Custom;
    let expense = service.add_expense(&group.id, input).await.unwrap();

    assert!(expense.splits.is_empty());
    assert_close(service.get_balance_in_group("user1", &group.id).await.unwrap(), 50.0);
    assert_eq!(service.get_balance_in_group("currentUser", &group.id).await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_group_and_total_balances() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();
    let flat = service.create_group("Flat", "", &ids(&["user1"]), &me).await.unwrap();
    let trip = service.create_group("Trip", "", &ids(&["user2"]), &me).await.unwrap();

    service
        .add_expense(&flat.id, dinner("currentUser", "100", &["currentUser", "user1"]))
        .await
        .unwrap();
    service
        .add_expense(&flat.id, dinner("user1", "50", &["currentUser", "user1"]))
        .await
        .unwrap();
    service
        .add_expense(&trip.id, dinner("user2", "60", &["currentUser", "user2"]))
        .await
        .unwrap();

    assert_close(service.get_balance_in_group("currentUser", &flat.id).await.unwrap(), 75.0);
    assert_close(service.get_balance_in_group("currentUser", &trip.id).await.unwrap(), -30.0);
    assert_close(service.get_total_balance("currentUser").await.unwrap(), 45.0);
    assert_close(service.get_balance_in_group("user1", &flat.id).await.unwrap(), 0.0);

    let balances = service.get_group_balances(&flat.id).await.unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].user_id, "user1");
    assert_eq!(balances[0].status, BalanceStatus::Settled);
    assert_eq!(balances[1].user_id, "currentUser");
    assert_close(balances[1].balance, 75.0);

    let overview = service.get_balance_overview("currentUser").await.unwrap();
    assert_close(overview.total.balance, 45.0);
    assert_eq!(overview.total.message, "You are owed $45.00");
    assert_eq!(overview.groups.len(), 2);
    assert_eq!(overview.groups[0].group_name, "Flat");
    assert_eq!(overview.groups[1].summary.message, "You owe $30.00");

    let result = service.get_balance_in_group("currentUser", "missing").await;
    assert!(matches!(result, Err(SplitterError::UnknownReference("group", _))));
}

#[tokio::test]
async fn test_groups_for_user_and_members() {
    let service = create_test_service();
    let me = service.current_user().await.unwrap();
    let john = service.get_user("user1").await.unwrap();
    service.create_group("Mine", "", &ids(&["user2"]), &me).await.unwrap();
    let johns = service.create_group("Johns", "", &[], &john).await.unwrap();

    let mine = service.get_groups_for_user("currentUser").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Mine");
    assert_eq!(service.get_groups_for_user("user1").await.unwrap().len(), 1);

    let members = service.get_group_members(&johns.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "John Doe");

    assert!(matches!(
        service.get_user("ghost").await,
        Err(SplitterError::UnknownReference("user", _))
    ));
}
