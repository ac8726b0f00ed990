//! # HTML Rendering
//!
//! Turns the dashboard view structs into markup. Each section is available
//! as a standalone fragment and as part of the full page. Styles are inline
//! so that fragments render the same when embedded elsewhere.
//!
//! All worksheet text (stock names, brokers, themes, forecast values) passes
//! through [`escape_html`] before it reaches the markup.

pub mod calendar;
pub mod profit;
pub mod weekly;

pub use calendar::{render_calendar, render_calendar_header};
pub use profit::render_profit;
pub use weekly::render_weekly;

use shared::DashboardView;

const PAGE_TITLE: &str = "공모주 대시보드";

const PAGE_STYLE: &str = r#"
html, body, * {
    font-family: 'Pretendard', sans-serif;
}
body {
    max-width: 1200px;
    margin: 24px auto;
    padding: 0 16px;
}
.font-mono {
    font-family: 'Roboto Mono', monospace;
}
"#;

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Full dashboard page: weekly cards, month header, calendar table, profit line
pub fn render_page(view: &DashboardView) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="https://cdn.jsdelivr.net/gh/orioncactus/pretendard/dist/web/static/pretendard.css" rel="stylesheet">
    <link href="https://fonts.googleapis.com/css2?family=Roboto+Mono:wght@400;600&display=swap" rel="stylesheet">
    <style>{style}</style>
</head>
<body>
<section id="weekly">{weekly}</section>
<section id="calendar">
{header}
{calendar}
</section>
<section id="profit">{profit}</section>
</body>
</html>
"##,
        title = PAGE_TITLE,
        style = PAGE_STYLE,
        weekly = render_weekly(&view.weekly),
        header = render_calendar_header(view.focus_date),
        calendar = render_calendar(&view.calendar),
        profit = render_profit(&view.profit),
    )
}
