use inquire::{error::InquireResult, required, CustomType, Select, Text};
use rust_decimal::Decimal;

use crate::errors::SpendlogError;
use crate::records::{PurchaseRecord, RecordDraft, RecordPatch, DEFAULT_CATEGORY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    ViewAll,
    Search,
    Update,
    Delete,
    Summarize,
    Exit,
}

pub fn menu_action() -> InquireResult<MenuAction> {
    let options = vec![
        "Add a new purchase record",
        "View all records",
        "Search records by item name or category",
        "Update a record",
        "Delete a record",
        "Category summary report",
        "Exit and save",
    ];
    let choice = Select::new("What would you like to do?", options).prompt()?;
    Ok(match choice {
        "Add a new purchase record" => MenuAction::Add,
        "View all records" => MenuAction::ViewAll,
        "Search records by item name or category" => MenuAction::Search,
        "Update a record" => MenuAction::Update,
        "Delete a record" => MenuAction::Delete,
        "Category summary report" => MenuAction::Summarize,
        "Exit and save" => MenuAction::Exit,
        _ => unreachable!(),
    })
}

pub fn money_amount(currency: char, prompt: &str) -> InquireResult<Decimal> {
    CustomType::new(prompt)
        .with_formatter(&|decimal: Decimal| format!("{currency}{decimal:.2}"))
        .with_error_message("Please type a valid number")
        .with_help_message("Type the cost using a decimal point as a separator")
        .prompt()
}

fn money_amount_or_current(
    currency: char,
    prompt: &str,
    current: Decimal,
) -> InquireResult<Decimal> {
    CustomType::new(prompt)
        .with_default(current)
        .with_formatter(&|decimal: Decimal| format!("{currency}{decimal:.2}"))
        .with_error_message("Please type a valid number")
        .with_help_message("Press enter to keep the current cost")
        .prompt()
}

pub fn record_draft(currency: char) -> Result<RecordDraft, SpendlogError> {
    let item_name = Text::new("Item name:")
        .with_validator(required!("Require non-empty item name"))
        .prompt()?;
    let category = Text::new("Category:")
        .with_default(DEFAULT_CATEGORY)
        .with_help_message("Groceries, Electronics, Clothes, ...")
        .prompt()?;
    let cost = money_amount(currency, "Cost:")?;
    RecordDraft::new(&item_name, &category, cost)
}

pub fn record_patch(currency: char, current: &PurchaseRecord) -> Result<RecordPatch, SpendlogError> {
    let item_name = Text::new("New item name:")
        .with_help_message(&format!(
            "Current: '{}'; leave blank to keep it",
            current.item_name
        ))
        .prompt()?;
    let item_name = item_name.trim().to_string();
    let category = Text::new("New category:")
        .with_help_message(&format!(
            "Current: '{}'; leave blank to keep it",
            current.category
        ))
        .prompt()?;
    let category = category.trim().to_string();
    let cost = money_amount_or_current(currency, "New cost:", current.cost)?;
    Ok(RecordPatch {
        item_name: (!item_name.is_empty()).then_some(item_name),
        category: (!category.is_empty()).then_some(category),
        cost: Some(cost),
    })
}

/// Blank input cancels (`None`); a non-numeric entry aborts the operation
/// with a parse error rather than re-prompting.
pub fn record_id(prompt: &str) -> Result<Option<u64>, SpendlogError> {
    let input = Text::new(prompt)
        .with_help_message("Press enter to cancel")
        .prompt()?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let id = input
        .parse::<u64>()
        .map_err(|_| SpendlogError::Parse(format!("'{input}' is not a valid record id")))?;
    Ok(Some(id))
}

pub fn search_keyword() -> Result<Option<String>, SpendlogError> {
    let keyword = Text::new("Keyword:")
        .with_help_message("Matches item name or category; press enter to cancel")
        .prompt()?;
    let keyword = keyword.trim().to_string();
    Ok((!keyword.is_empty()).then_some(keyword))
}
