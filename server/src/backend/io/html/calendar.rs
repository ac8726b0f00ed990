//! Month header with navigation buttons, and the Mon–Fri calendar table.

use shared::{CalendarCell, CalendarFocusDate, CalendarGrid};

use super::escape_html;
use super::weekly::kind_color;

const CALENDAR_ICON: &str = "https://cdn-icons-png.flaticon.com/128/7602/7602624.png";
const HOLIDAY_COLOR: &str = "#D32F2F";
const TODAY_BACKGROUND: &str = "#EEF1FA";

/// "YYYY년 M월 공모주 일정" heading with 이전달/다음달 forms
pub fn render_calendar_header(focus: CalendarFocusDate) -> String {
    format!(
        "<div style='display:flex; align-items:center; justify-content:space-between; margin-bottom:12px;'>\
         <h4 style='display:flex; align-items:center; gap:8px; margin:0;'>\
         <img src=\"{icon}\" alt=\"calendar\" width=\"24\" height=\"24\" style=\"vertical-align:middle;\" />\
         {year}년 {month}월 공모주 일정</h4>\
         <div style='display:flex; gap:8px;'>\
         <form method=\"post\" action=\"/calendar/previous\"><button type=\"submit\">이전달</button></form>\
         <form method=\"post\" action=\"/calendar/next\"><button type=\"submit\">다음달</button></form>\
         </div></div>",
        icon = CALENDAR_ICON,
        year = focus.year,
        month = focus.month,
    )
}

fn render_cell(cell: &CalendarCell) -> String {
    let day_color = if cell.is_holiday { HOLIDAY_COLOR } else { "black" };
    let background = if cell.is_today { TODAY_BACKGROUND } else { "transparent" };

    let mut content = String::new();
    for entry in &cell.entries {
        content.push_str(&format!(
            "<div style='margin-top:4px;'><span style='background:{}; color:white; padding:4px 10px; \
             border-radius:6px; font-size:13px; font-weight:600;'>{}</span></div>",
            kind_color(entry.kind),
            entry.kind.label()
        ));
        content.push_str(&format!(
            "<div style='margin-top:2px; font-size:14px; font-weight:500;'>{} \
             <span style='color:#999; font-size:12px;'>({})</span></div>",
            escape_html(&entry.name),
            escape_html(&entry.broker)
        ));
    }

    format!(
        "<div style='text-align:center; background:{}; border-radius:8px; padding:3px;'>\
         <div style='font-size:18px; font-weight:bold; color:{};'>{}</div>{}</div>",
        background, day_color, cell.day, content
    )
}

/// The calendar table. Empty rows are already dropped by the grid builder.
pub fn render_calendar(grid: &CalendarGrid) -> String {
    let header: String = grid
        .weekday_labels
        .iter()
        .map(|label| format!("<th><div style='text-align:center'><b>{}</b></div></th>", label))
        .collect();

    let mut body = String::new();
    for week in grid.rows.iter().filter(|week| !week.is_empty()) {
        body.push_str("<tr>");
        for cell in &week.cells {
            body.push_str("<td style='vertical-align:top;'>");
            if let Some(cell) = cell {
                body.push_str(&render_cell(cell));
            }
            body.push_str("</td>");
        }
        body.push_str("</tr>");
    }

    format!(
        "<div style='overflow-x:auto; width:100%;'>\
         <table style=\"width:100%; table-layout:fixed;\">\
         <thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>",
        header, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CalendarEntry, CalendarWeek, ScheduleKind};

    fn cell(day: u32, weekday: u32) -> CalendarCell {
        CalendarCell {
            day,
            weekday,
            week_of_month: 0,
            is_holiday: false,
            is_today: false,
            entries: Vec::new(),
        }
    }

    fn grid(rows: Vec<CalendarWeek>) -> CalendarGrid {
        CalendarGrid {
            year: 2025,
            month: 10,
            weekday_labels: shared::WEEKDAY_LABELS.map(str::to_string),
            rows,
        }
    }

    #[test]
    fn test_header_has_title_and_navigation() {
        let html = render_calendar_header(CalendarFocusDate { year: 2025, month: 6 });
        assert!(html.contains("2025년 6월 공모주 일정"));
        assert!(html.contains("action=\"/calendar/previous\""));
        assert!(html.contains("action=\"/calendar/next\""));
        assert!(html.contains("이전달"));
        assert!(html.contains("다음달"));
    }

    #[test]
    fn test_row_structure() {
        let mut holiday = cell(3, 4);
        holiday.is_holiday = true;
        let mut today = cell(1, 2);
        today.is_today = true;

        let html = render_calendar(&grid(vec![
            CalendarWeek {
                week_of_month: 0,
                cells: [None, None, Some(today), Some(cell(2, 3)), Some(holiday)],
            },
            CalendarWeek {
                week_of_month: 1,
                cells: [None, None, None, None, None],
            },
        ]));

        assert_eq!(html.matches("<tr>").count(), 2, "header row plus one week");
        assert_eq!(html.matches("<td").count(), 5);
        assert_eq!(html.matches("<th>").count(), 5);
        assert!(html.contains("<b>월</b>"));
        assert!(html.contains(&format!("color:{};'>3</div>", HOLIDAY_COLOR)));
        assert!(html.contains("color:black;'>2</div>"));
        assert!(html.contains(&format!("background:{};", TODAY_BACKGROUND)));
    }

    #[test]
    fn test_entry_badges_and_escaping() {
        let mut busy = cell(11, 2);
        busy.entries = vec![
            CalendarEntry {
                kind: ScheduleKind::Subscription,
                name: "A&B".to_string(),
                broker: "<KB>".to_string(),
            },
            CalendarEntry {
                kind: ScheduleKind::Listing,
                name: "상장주".to_string(),
                broker: "NH".to_string(),
            },
        ];
        let html = render_calendar(&grid(vec![CalendarWeek {
            week_of_month: 1,
            cells: [None, None, Some(busy), None, None],
        }]));

        let subscription = html.find("background:#6A5ACD").unwrap();
        let listing = html.find("background:#f4ca16").unwrap();
        assert!(subscription < listing);
        assert!(html.contains("A&amp;B"));
        assert!(html.contains("(&lt;KB&gt;)"));
        assert!(!html.contains("<KB>"));
    }
}
