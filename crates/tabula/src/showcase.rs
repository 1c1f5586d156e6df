//! Payments demo page.
//!
//! A small fixed dataset wired into a [`DataTable`] the way a demo page
//! would configure it: capitalized status, currency amounts, email search
//! and a per-row action menu.

use crate::widgets::{DataTable, RowAction};
use crate::{
    records_from_json, CellValue, ColumnDescriptor, ColumnKind, Record, Result, TableConfig,
    TextAlign,
};

/// Table options for the payments page.
const DEMO_CONFIG: &str = r"
page_size: 10
search_column: email
search_placeholder: Filter emails...
";

/// Payments shown on the page.
const PAYMENTS: &str = r#"[
    { "id": "m5gr84i9", "amount": 316, "status": "success", "email": "ken99@example.com" },
    { "id": "3u1reuv4", "amount": 242, "status": "success", "email": "Abe45@example.com" },
    { "id": "derv1ws0", "amount": 837, "status": "processing", "email": "Monserrat44@example.com" },
    { "id": "5kma53ae", "amount": 874, "status": "success", "email": "Silas22@example.com" },
    { "id": "bhqecj4p", "amount": 721, "status": "failed", "email": "carmella@example.com" }
]"#;

/// Action id for copying the payment id.
pub const COPY_PAYMENT_ID: &str = "copy-payment-id";
/// Action id for opening the customer.
pub const VIEW_CUSTOMER: &str = "view-customer";
/// Action id for opening the payment.
pub const VIEW_PAYMENT: &str = "view-payment";

/// The demo payments.
///
/// # Errors
///
/// Returns an error if the embedded data is not an array of records.
pub fn payments() -> Result<Vec<Record>> {
    records_from_json(PAYMENTS)
}

/// Format a number as US dollars, e.g. `$1,234.50`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{cents}")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Columns of the payments table.
#[must_use]
pub fn payment_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("status", "Status")
            .render(|value, _| capitalize(&value.display())),
        ColumnDescriptor::new("email", "Email")
            .sortable()
            .render(|value, _| value.display().to_lowercase()),
        ColumnDescriptor::new("amount", "Amount")
            .kind(ColumnKind::Number)
            .align(TextAlign::Right)
            .sortable()
            .render(|value, _| match value {
                CellValue::Number(n) => format_usd(*n),
                other => other.display(),
            }),
    ]
}

/// Table options for the payments page.
///
/// # Errors
///
/// Returns an error if the embedded YAML is invalid.
pub fn demo_config() -> Result<TableConfig> {
    TableConfig::from_yaml(DEMO_CONFIG)
}

/// Row actions of the payments table.
#[must_use]
pub fn payment_actions() -> Vec<RowAction> {
    vec![
        RowAction::label("Actions"),
        RowAction::action("Copy payment ID", COPY_PAYMENT_ID),
        RowAction::separator(),
        RowAction::action("View customer", VIEW_CUSTOMER),
        RowAction::action("View payment details", VIEW_PAYMENT),
    ]
}

/// The complete payments table.
///
/// # Errors
///
/// Returns an error if the embedded data or config cannot be loaded.
pub fn payments_table() -> Result<DataTable> {
    let config = demo_config()?;
    let records = payments()?;
    tracing::debug!(records = records.len(), "loaded payments");

    let table = payment_actions().into_iter().fold(
        DataTable::from_config(&config)
            .columns(payment_columns())
            .records(records)
            .accessible_name("Payments")
            .test_id("payments-table"),
        DataTable::row_action,
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordId;

    // ===== Data Tests =====

    #[test]
    fn test_payments_load() {
        let payments = payments().unwrap();
        assert_eq!(payments.len(), 5);
        assert_eq!(payments[0].id().as_str(), "m5gr84i9");
        assert_eq!(payments[0].value("amount"), &CellValue::Number(316.0));
        assert_eq!(payments[4].value("status"), &CellValue::from("failed"));
    }

    #[test]
    fn test_demo_config() {
        let config = demo_config().unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_column.as_deref(), Some("email"));
        assert_eq!(config.search_placeholder, "Filter emails...");
        assert!(config.selectable);
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(316.0), "$316.00");
        assert_eq!(format_usd(0.5), "$0.50");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-42.0), "-$42.00");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("success"), "Success");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_columns_render() {
        let columns = payment_columns();
        let record = Record::new("x")
            .cell("status", "processing")
            .cell("email", "Abe45@Example.com")
            .cell("amount", 837);
        let cells: Vec<String> = columns.iter().map(|c| c.render_cell(&record)).collect();
        assert_eq!(cells, vec!["Processing", "abe45@example.com", "$837.00"]);
        assert!(!columns[0].sortable);
        assert_eq!(columns[2].align, TextAlign::Right);
    }

    // ===== Table Tests =====

    #[test]
    fn test_payments_table_view() {
        let table = payments_table().unwrap();
        let view = table.view();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.pagination.total_pages, 1);
        assert_eq!(view.rows[0].cell("amount"), Some("$316.00"));
        assert_eq!(view.rows[0].cell("status"), Some("Success"));
        assert_eq!(view.summary(), "0 of 5 row(s) selected.");
    }

    #[test]
    fn test_search_is_email_only() {
        let mut table = payments_table().unwrap();
        table.set_search("success");
        assert!(table.view().is_empty());

        table.set_search("ABE");
        assert_eq!(table.view().row_ids(), vec!["3u1reuv4"]);
    }

    #[test]
    fn test_sort_by_amount_desc() {
        let mut table = payments_table().unwrap();
        table.sort_by("amount");
        table.sort_by("amount");
        assert_eq!(
            table.view().row_ids(),
            vec!["5kma53ae", "derv1ws0", "bhqecj4p", "m5gr84i9", "3u1reuv4"]
        );
    }

    #[test]
    fn test_copy_payment_id_action() {
        let table = payments_table().unwrap();
        let id = RecordId::new("derv1ws0");
        let selected = table.activate_action(&id, COPY_PAYMENT_ID).unwrap();
        assert_eq!(selected.record, id);
        assert_eq!(selected.action, COPY_PAYMENT_ID);
        assert!(table.activate_action(&id, "delete").is_none());
    }

    #[test]
    fn test_html_markup() {
        let html = payments_table().unwrap().to_html();
        assert!(html.contains(r#"data-testid="payments-table""#));
        assert!(html.contains(r#"placeholder="Filter emails...""#));
        assert!(html.contains("View payment details"));
    }
}
