//! Server-side HTML for the dashboard: filter form, the two charts and the
//! paginated table.

use std::fmt::Write;

use super::charts::{distribution_chart_svg, mean_chart_svg, EMPTY_MESSAGE};
use crate::data::filter::{Choice, FilterSelection};
use crate::data::model::{Dataset, Parameter};
use crate::error::ChartError;
use crate::pipeline::{table_cells, DashboardView, TABLE_COLUMNS};
use crate::ui::panels::TITLE;
use crate::ui::plot::{DISTRIBUTION_CHART_TITLE, MEAN_CHART_TITLE};

const STYLE: &str = r#"
body { margin: 0; font-family: Arial, sans-serif; background: #fafafa; color: #333; }
.header { background: #7e6c6c; color: white; padding: 14px 24px; }
.logo { font-size: 22px; font-weight: bold; }
.filters { display: flex; gap: 32px; padding: 16px 24px; flex-wrap: wrap; }
.filter-item { display: flex; flex-direction: column; gap: 4px; }
.label { font-weight: bold; }
.dropdown { min-width: 180px; padding: 4px; }
.graph-container { display: flex; flex-wrap: wrap; gap: 16px; padding: 0 24px; }
.graph { background: white; border: 1px solid #eee; padding: 8px; }
.graph h3 { text-align: center; font-size: 15px; margin: 4px 0 8px; }
.table-container { padding: 16px 24px; overflow-x: auto; }
table { border-collapse: collapse; width: 100%; background: white; }
th { background: #f87575; color: white; font-weight: bold; text-align: left; padding: 10px; }
td { text-align: left; padding: 10px; border-bottom: 1px solid #eee; }
.pager { display: flex; gap: 16px; align-items: center; margin-top: 8px; }
.muted { color: #999; }
"#;

/// Render the full dashboard page for `view`.
pub fn render_dashboard(
    dataset: &Dataset,
    view: &DashboardView,
    page_index: usize,
) -> Result<String, ChartError> {
    let mean_chart = mean_chart_svg(view)?;
    let dist_chart = distribution_chart_svg(view)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header class="header"><span class="logo">{title}</span></header>
{filters}
<div class="graph-container">
<div class="graph" id="mean-param-chart"><h3>{mean_title}</h3>{mean_chart}</div>
<div class="graph" id="param-distribution-chart"><h3>{dist_title}</h3>{dist_chart}</div>
</div>
<div class="table-container">
<h4 class="table-header">Filtered data</h4>
{table}
</div>
</body>
</html>"#,
        title = TITLE,
        filters = filter_form(dataset, &view.selection),
        mean_title = MEAN_CHART_TITLE,
        dist_title = DISTRIBUTION_CHART_TITLE,
        table = table_html(dataset, view, page_index),
    ))
}

// ---------------------------------------------------------------------------
// Filter form
// ---------------------------------------------------------------------------

fn filter_form(dataset: &Dataset, selection: &FilterSelection) -> String {
    let parameter_options: String = Parameter::ALL
        .into_iter()
        .map(|p| option_tag(p.key(), p.label(), p == selection.parameter))
        .collect();

    format!(
        r#"<form class="filters" method="get" action="/">
{}
{}
{}
<noscript><button type="submit">Apply</button></noscript>
</form>"#,
        select_block("Select parameter:", "parameter", &parameter_options),
        select_block(
            "Select sex:",
            "sex",
            &choice_options(dataset.sexes(), &selection.sex)
        ),
        select_block(
            "Select species:",
            "species",
            &choice_options(dataset.species(), &selection.species)
        ),
    )
}

fn select_block(label: &str, name: &str, options: &str) -> String {
    format!(
        r#"<div class="filter-item"><label class="label" for="{name}">{label}</label><select class="dropdown" id="{name}" name="{name}" onchange="this.form.submit()">{options}</select></div>"#
    )
}

fn choice_options(observed: &[String], current: &Choice) -> String {
    Choice::options(observed)
        .iter()
        .map(|c| {
            let value = c.to_string();
            option_tag(&value, &value, c == current)
        })
        .collect()
}

fn option_tag(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

fn table_html(dataset: &Dataset, view: &DashboardView, page_index: usize) -> String {
    let page = view.page(dataset, page_index);
    let mut html = String::from(r#"<table id="data-table"><thead><tr>"#);
    for title in TABLE_COLUMNS {
        let _ = write!(html, "<th>{title}</th>");
    }
    html.push_str("</tr></thead><tbody>");

    if page.rows.is_empty() {
        let _ = write!(
            html,
            r#"<tr><td colspan="{}" class="muted">{EMPTY_MESSAGE}</td></tr>"#,
            TABLE_COLUMNS.len()
        );
    }
    for record in &page.rows {
        html.push_str("<tr>");
        for cell in table_cells(record) {
            let _ = write!(html, "<td>{}</td>", escape(&cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    html.push_str(r#"<div class="pager">"#);
    if page.index > 0 {
        let _ = write!(
            html,
            r#"<a href="{}">&laquo; Previous</a>"#,
            page_href(&view.selection, page.index)
        );
    }
    let _ = write!(
        html,
        "<span>Page {} of {} ({} rows)</span>",
        page.index + 1,
        page.count,
        page.total_rows
    );
    if page.index + 1 < page.count {
        let _ = write!(
            html,
            r#"<a href="{}">Next &raquo;</a>"#,
            page_href(&view.selection, page.index + 2)
        );
    }
    html.push_str("</div>");
    html
}

/// Link to one-based `page` under the same selection.
fn page_href(selection: &FilterSelection, page: usize) -> String {
    format!(
        "/?parameter={}&amp;sex={}&amp;species={}&amp;page={page}",
        selection.parameter.key(),
        urlencoding::encode(&selection.sex.to_string()),
        urlencoding::encode(&selection.species.to_string()),
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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
