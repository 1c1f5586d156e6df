//! HTML markup for a [`TableView`].
//!
//! Produces semantic, unstyled markup with `tabula-*` class hooks. All text
//! coming from records, columns or config is escaped.

use crate::menu::RowAction;
use crate::pagination::PageLink;
use crate::view::{RenderedRow, TableView};
use tabula_core::{CheckState, TextAlign};

/// Attributes for the table root.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOptions<'a> {
    /// `data-testid` of the root element
    pub test_id: &'a str,
    /// `aria-label` of the `<table>`
    pub accessible_name: Option<&'a str>,
}

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const fn align_class(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "tabula-align-left",
        TextAlign::Center => "tabula-align-center",
        TextAlign::Right => "tabula-align-right",
    }
}

fn checkbox(label: &str, state: CheckState) -> String {
    let attrs = match state {
        CheckState::Checked => " checked",
        CheckState::Indeterminate => r#" data-state="indeterminate""#,
        CheckState::Unchecked => "",
    };
    format!(
        r#"<input type="checkbox" class="tabula-checkbox" aria-label="{}"{attrs}/>"#,
        escape(label)
    )
}

fn action_menu(row: &RenderedRow) -> String {
    let Some(menu) = &row.actions else {
        return String::new();
    };
    let mut out = String::from(r#"<td class="tabula-row-actions"><menu>"#);
    for item in &menu.items {
        match item {
            RowAction::Label(label) => {
                out.push_str(&format!(r#"<li role="presentation">{}</li>"#, escape(label)));
            }
            RowAction::Action {
                label,
                action,
                destructive,
                disabled,
            } => {
                let class = if *destructive {
                    r#" class="tabula-destructive""#
                } else {
                    ""
                };
                let disabled = if *disabled { " disabled" } else { "" };
                out.push_str(&format!(
                    r#"<li><button type="button" data-action="{}" data-record="{}"{class}{disabled}>{}</button></li>"#,
                    escape(action),
                    escape(row.id.as_str()),
                    escape(label)
                ));
            }
            RowAction::Separator => out.push_str(r#"<li role="separator"></li>"#),
        }
    }
    out.push_str("</menu></td>");
    out
}

/// Render a table view.
#[must_use]
pub fn render(view: &TableView, options: &HtmlOptions<'_>) -> String {
    let mut out = format!(
        r#"<div class="tabula-data-table" data-testid="{}">"#,
        escape(options.test_id)
    );

    if let Some(search) = &view.search {
        out.push_str(&format!(
            r#"<input type="search" class="tabula-search" placeholder="{}" value="{}"/>"#,
            escape(&search.placeholder),
            escape(&search.query)
        ));
    }

    let label = options
        .accessible_name
        .map(|name| format!(r#" aria-label="{}""#, escape(name)))
        .unwrap_or_default();
    let striped = if view.striped { " tabula-striped" } else { "" };
    out.push_str(&format!(r#"<table class="tabula-table{striped}"{label}>"#));

    // Header
    let has_actions = view.rows.iter().any(|r| r.actions.is_some());
    out.push_str("<thead><tr>");
    if let Some(state) = view.select_all {
        out.push_str(&format!("<th>{}</th>", checkbox("Select all", state)));
    }
    for cell in &view.header {
        let aria = cell
            .sort
            .map(|d| format!(r#" aria-sort="{}""#, d.aria()))
            .unwrap_or_default();
        let sortable = if cell.sortable {
            r#" data-sortable="true""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<th scope="col" class="{}" data-key="{}"{aria}{sortable}>{}</th>"#,
            align_class(cell.align),
            escape(&cell.key),
            escape(&cell.label)
        ));
    }
    if has_actions {
        out.push_str(r#"<th><span class="tabula-sr-only">Actions</span></th>"#);
    }
    out.push_str("</tr></thead><tbody>");

    // Body
    if view.rows.is_empty() {
        let span = view.header.len()
            + usize::from(view.select_all.is_some())
            + usize::from(has_actions);
        out.push_str(&format!(
            r#"<tr><td class="tabula-empty" colspan="{}">No results.</td></tr>"#,
            span.max(1)
        ));
    }
    for row in &view.rows {
        let selected = if row.selected {
            r#" data-state="selected""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<tr data-id="{}"{selected}>"#,
            escape(row.id.as_str())
        ));
        if view.select_all.is_some() {
            let state = if row.selected {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
            out.push_str(&format!("<td>{}</td>", checkbox("Select row", state)));
        }
        for cell in &row.cells {
            out.push_str(&format!(
                r#"<td class="{}">{}</td>"#,
                align_class(cell.align),
                escape(&cell.text)
            ));
        }
        out.push_str(&action_menu(row));
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");

    // Footer
    out.push_str(&format!(
        r#"<div class="tabula-summary">{}</div>"#,
        escape(&view.summary())
    ));
    let pagination = &view.pagination;
    out.push_str(r#"<nav class="tabula-pagination" aria-label="pagination">"#);
    out.push_str(&format!(
        r#"<button type="button" data-page="previous"{}>Previous</button>"#,
        if pagination.has_previous { "" } else { " disabled" }
    ));
    for link in &pagination.links {
        match link {
            PageLink::Page { number, current } => {
                let current = if *current {
                    r#" aria-current="page""#
                } else {
                    ""
                };
                out.push_str(&format!(
                    r#"<button type="button" data-page="{number}"{current}>{number}</button>"#
                ));
            }
            PageLink::Ellipsis => out.push_str(r#"<span class="tabula-ellipsis">…</span>"#),
        }
    }
    out.push_str(&format!(
        r#"<button type="button" data-page="next"{}>Next</button>"#,
        if pagination.has_next { "" } else { " disabled" }
    ));
    out.push_str("</nav></div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataTable;
    use tabula_core::{ColumnDescriptor, Record, RecordId};

    fn table() -> DataTable {
        DataTable::new()
            .column(ColumnDescriptor::new("name", "Name").sortable())
            .page_size(1)
            .records([
                Record::new("1").cell("name", "<b>Kim</b>"),
                Record::new("2").cell("name", "Lee & Co"),
            ])
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom's & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Jerry&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_render_escapes_cells() {
        let html = table().to_html();
        assert!(html.contains("&lt;b&gt;Kim&lt;/b&gt;"));
        assert!(!html.contains("<b>Kim</b>"));
    }

    #[test]
    fn test_render_structure() {
        let html = table().accessible_name("People").to_html();
        assert!(html.starts_with(r#"<div class="tabula-data-table" data-testid="data-table">"#));
        assert!(html.contains(r#"aria-label="People""#));
        assert!(html.contains(r#"<input type="search""#));
        assert!(html.contains(r#"aria-label="Select all""#));
        assert!(html.contains(r#"data-sortable="true""#));
        assert!(html.contains(r#"data-page="previous" disabled"#));
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains("0 of 2 row(s) selected."));
        assert!(html.ends_with("</nav></div>"));
    }

    #[test]
    fn test_render_selected_and_sorted() {
        let mut table = table();
        table.toggle_row(&RecordId::new("1"), true);
        table.sort_by("name");
        let html = table.to_html();
        assert!(html.contains(r#"data-state="selected""#));
        assert!(html.contains(r#"aria-sort="ascending""#));
        assert!(html.contains(" checked"));
    }

    #[test]
    fn test_render_indeterminate_header() {
        let mut table = DataTable::new()
            .column(ColumnDescriptor::new("name", "Name"))
            .records([Record::new("1"), Record::new("2")]);
        table.toggle_row(&RecordId::new("2"), true);
        assert!(table.to_html().contains(r#"data-state="indeterminate""#));
    }

    #[test]
    fn test_render_empty() {
        let mut table = table();
        table.set_search("zzz");
        let html = table.to_html();
        assert!(html.contains(r#"colspan="2">No results."#));
    }

    #[test]
    fn test_render_row_actions() {
        let html = table()
            .row_action(RowAction::label("Actions"))
            .row_action(RowAction::action("Copy ID", "copy-id"))
            .row_action(RowAction::separator())
            .row_action(RowAction::action("Delete", "delete").destructive())
            .to_html();
        assert!(html.contains(r#"data-action="copy-id" data-record="1""#));
        assert!(html.contains(r#"class="tabula-destructive""#));
        assert!(html.contains(r#"role="separator""#));
        assert!(html.contains("tabula-sr-only"));
    }

    #[test]
    fn test_render_without_search_or_selection() {
        let html = table().searchable(false).selectable(false).to_html();
        assert!(!html.contains(r#"type="search""#));
        assert!(!html.contains(r#"type="checkbox""#));
    }
}
