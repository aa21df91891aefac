use crate::records::PurchaseRecord;

const NAME_WIDTH: usize = 25;
const CATEGORY_WIDTH: usize = 15;

fn truncated(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Renders any sequence of records as a fixed-width table with a trailing
/// row count, or a no-records notice for an empty sequence.
pub fn render_records<'a>(
    records: impl IntoIterator<Item = &'a PurchaseRecord>,
    currency: char,
) -> String {
    let mut body = String::new();
    let mut rows = 0;
    for record in records {
        rows += 1;
        let cost = format!("{}{:.2}", currency, record.cost);
        body.push_str(&format!(
            "{:<4} | {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>10} | {}\n",
            record.id,
            truncated(&record.item_name, NAME_WIDTH),
            truncated(&record.category, CATEGORY_WIDTH),
            cost,
            record.purchase_date,
        ));
    }
    if rows == 0 {
        return "No purchases found matching your criteria.\n".to_string();
    }

    let rule = "-".repeat(70);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<4} | {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>10} | {:<10}\n",
        "ID", "Item Name", "Category", "Cost", "Date"
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&body);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Displayed purchases: {rows}\n"));
    out
}

#[cfg(test)]
mod table_tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::records::PurchaseRecord;

    use super::render_records;

    fn record(id: u64, item_name: &str, category: &str, cents: i64) -> PurchaseRecord {
        PurchaseRecord {
            id,
            item_name: item_name.to_string(),
            category: category.to_string(),
            cost: Decimal::new(cents, 2),
            purchase_date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
        }
    }

    #[test]
    fn renders_fixed_width_rows() {
        let records = vec![record(1, "Milk", "Groceries", 350)];
        let rendered = render_records(&records, '$');
        assert!(rendered
            .contains("1    | Milk                      | Groceries       |      $3.50 | 2024-05-04"));
    }

    #[test]
    fn truncates_long_text_columns() {
        let records = vec![record(
            1,
            "A very long item name that keeps going",
            "Miscellaneous household",
            100,
        )];
        let rendered = render_records(&records, '$');
        assert!(rendered.contains("A very long item name tha |"));
        assert!(rendered.contains("| Miscellaneous h |"));
        assert!(!rendered.contains("keeps going"));
    }

    #[test]
    fn counts_displayed_records() {
        let records = vec![record(1, "Milk", "Groceries", 350), record(2, "Pen", "Office", 120)];
        let rendered = render_records(&records, '$');
        assert!(rendered.contains("Displayed purchases: 2"));
    }

    #[test]
    fn empty_sequence_renders_a_notice_instead_of_a_table() {
        let rendered = render_records([], '$');
        assert_eq!(rendered, "No purchases found matching your criteria.\n");
        assert!(!rendered.contains("ID"));
    }
}
