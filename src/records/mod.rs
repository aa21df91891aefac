use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::SpendlogError;

pub mod summary;

pub const DEFAULT_CATEGORY: &str = "General";

/// One purchase entry. Field names are fixed by the record file format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub id: u64,
    pub item_name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    pub purchase_date: NaiveDate,
}

/// Validated input for a new record, before it gets an id and a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    item_name: String,
    category: String,
    cost: Decimal,
}

impl RecordDraft {
    /// Trims both text fields, rejects an empty item name and substitutes
    /// [`DEFAULT_CATEGORY`] for a blank category.
    pub fn new(item_name: &str, category: &str, cost: Decimal) -> Result<Self, SpendlogError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(SpendlogError::EmptyField("item name"));
        }
        let category = category.trim();
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };
        Ok(Self {
            item_name: item_name.to_string(),
            category: category.to_string(),
            cost,
        })
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }
}

/// A partial update. `None` means keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub cost: Option<Decimal>,
}

/// The ordered in-memory collection of all purchase records for the session.
///
/// Ids are positions, not stable identifiers: after any removal the
/// surviving records are renumbered to the contiguous range 1..=N in their
/// current order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<PurchaseRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<PurchaseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&PurchaseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Appends a record dated `today` and returns its id, the successor of
    /// the last record's id (1 for an empty store).
    pub fn add(&mut self, draft: RecordDraft, today: NaiveDate) -> u64 {
        let id = self.records.last().map_or(1, |last| last.id + 1);
        self.records.push(PurchaseRecord {
            id,
            item_name: draft.item_name,
            category: draft.category,
            cost: draft.cost,
            purchase_date: today,
        });
        id
    }

    /// Replaces each field present in `patch`. The purchase date is
    /// refreshed to `today` only when the patch carries a cost different
    /// from the current one.
    pub fn apply_patch(
        &mut self,
        id: u64,
        patch: RecordPatch,
        today: NaiveDate,
    ) -> Result<&PurchaseRecord, SpendlogError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(SpendlogError::RecordNotFound(id))?;
        if let Some(item_name) = patch.item_name {
            record.item_name = item_name;
        }
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(cost) = patch.cost {
            if cost != record.cost {
                record.cost = cost;
                record.purchase_date = today;
            }
        }
        Ok(record)
    }

    /// Removes the record with the given id and renumbers the survivors to
    /// 1..=N in their current order.
    pub fn remove(&mut self, id: u64) -> Result<PurchaseRecord, SpendlogError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(SpendlogError::RecordNotFound(id))?;
        let removed = self.records.remove(index);
        for (index, record) in self.records.iter_mut().enumerate() {
            record.id = index as u64 + 1;
        }
        Ok(removed)
    }

    /// Records whose item name or category contains `keyword`,
    /// case-insensitively.
    pub fn search(&self, keyword: &str) -> Vec<&PurchaseRecord> {
        let needle = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.item_name.to_lowercase().contains(&needle)
                    || record.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod record_draft_tests {
    use rust_decimal::Decimal;

    use crate::errors::SpendlogError;

    use super::RecordDraft;

    #[test]
    fn rejects_empty_item_name() {
        let draft = RecordDraft::new("   ", "Groceries", Decimal::ONE);
        assert!(matches!(draft, Err(SpendlogError::EmptyField("item name"))));
    }

    #[test]
    fn blank_category_defaults_to_general() {
        let draft = RecordDraft::new("Milk", "  ", Decimal::ONE).unwrap();
        assert_eq!(draft.category, "General");
    }

    #[test]
    fn trims_both_text_fields() {
        let draft = RecordDraft::new(" Milk ", " Groceries ", Decimal::ONE).unwrap();
        assert_eq!(draft.item_name, "Milk");
        assert_eq!(draft.category, "Groceries");
    }
}
