use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{DEFAULT_CATEGORY, EXPENSE_CATEGORIES, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::core::errors::SplitterError;
use crate::core::split::distinct_participants;

/// Raw amount as it arrives from a form: either already numeric or the text
/// the user typed.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    pub fn parse(&self) -> Result<f64, SplitterError> {
        match self {
            AmountInput::Number(value) => validate_amount(*value),
            AmountInput::Text(raw) => parse_amount(raw),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

fn missing_amount() -> SplitterError {
    SplitterError::invalid_expense("amount", "Missing Amount", "Amount is required")
}

/// An absent or `null` amount is reported the same way as blank text.
pub fn require_amount(input: Option<&AmountInput>) -> Result<f64, SplitterError> {
    input.ok_or_else(missing_amount)?.parse()
}

pub fn parse_amount(raw: &str) -> Result<f64, SplitterError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(missing_amount());
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        SplitterError::invalid_expense(
            "amount",
            "Invalid Amount",
            format!("`{}` is not a number", trimmed),
        )
    })?;
    validate_amount(value)
}

pub fn validate_amount(amount: f64) -> Result<f64, SplitterError> {
    if !amount.is_finite() {
        return Err(SplitterError::invalid_expense(
            "amount",
            "Invalid Amount",
            "Amount must be a finite number",
        ));
    }
    if amount <= 0.0 {
        return Err(SplitterError::invalid_expense(
            "amount",
            "Invalid Amount",
            "Amount must be greater than 0",
        ));
    }
    Ok(amount)
}

pub fn validate_title(title: &str) -> Result<String, SplitterError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SplitterError::invalid_expense(
            "title",
            "Missing Title",
            "Title cannot be empty",
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(SplitterError::invalid_expense(
            "title",
            "Title Too Long",
            format!("Title cannot exceed {} characters", MAX_TITLE_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_description(description: &str) -> Result<String, SplitterError> {
    let trimmed = description.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(SplitterError::invalid_expense(
            "description",
            "Description Too Long",
            format!("Description cannot exceed {} characters", MAX_DESCRIPTION_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_participants(participants: &[String]) -> Result<Vec<String>, SplitterError> {
    let distinct: Vec<String> = distinct_participants(participants)
        .into_iter()
        .map(str::to_string)
        .collect();
    if distinct.is_empty() {
        return Err(SplitterError::invalid_expense(
            "split_among",
            "No Participants",
            "Select at least one member to split with",
        ));
    }
    Ok(distinct)
}

pub fn validate_group_name(name: &str) -> Result<String, SplitterError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SplitterError::invalid_group(
            "name",
            "Missing Name",
            "Please enter a group name",
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(SplitterError::invalid_group(
            "name",
            "Name Too Long",
            format!("Group name cannot exceed {} characters", MAX_TITLE_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_group_description(description: &str) -> Result<String, SplitterError> {
    let trimmed = description.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(SplitterError::invalid_group(
            "description",
            "Description Too Long",
            format!("Description cannot exceed {} characters", MAX_DESCRIPTION_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}

/// Blank categories fall back to the default label.
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

pub fn is_known_category(category: &str) -> bool {
    EXPENSE_CATEGORIES.contains(&category)
}
