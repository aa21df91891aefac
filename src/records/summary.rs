use rust_decimal::Decimal;

use super::PurchaseRecord;

#[derive(Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
}

impl CategoryTotal {
    pub fn average(&self) -> Decimal {
        self.total / Decimal::from(self.count as u64)
    }
}

/// Per-category spending totals plus the grand total across all records.
/// Categories appear in first-seen order and group by exact string match.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    categories: Vec<CategoryTotal>,
    grand_total: Decimal,
}

impl Summary {
    pub fn of(records: &[PurchaseRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.grand_total += record.cost;
            match summary
                .categories
                .iter_mut()
                .find(|line| line.category == record.category)
            {
                Some(line) => {
                    line.total += record.cost;
                    line.count += 1;
                }
                None => summary.categories.push(CategoryTotal {
                    category: record.category.clone(),
                    total: record.cost,
                    count: 1,
                }),
            }
        }
        summary
    }

    pub fn render(&self, currency: char) -> String {
        let rule = "-".repeat(55);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:<20} | {:>15} | {:>15}\n",
            "Category", "Total spent", "Avg item cost"
        ));
        out.push_str(&rule);
        out.push('\n');
        for line in &self.categories {
            out.push_str(&format!(
                "{:<20} | {currency}{:>14.2} | {currency}{:>14.2}\n",
                line.category,
                line.total,
                line.average(),
            ));
        }
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:<20} | {currency}{:>14.2} |\n",
            "GRAND TOTAL", self.grand_total
        ));
        out.push_str(&rule);
        out.push('\n');
        out
    }
}
