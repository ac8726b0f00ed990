//! "이번주 공모주" card row.

use shared::{CardHighlight, Forecast, ScheduleKind, WeeklyCard, WeeklySchedule};

use super::escape_html;

const WEEKLY_ICON: &str = "https://cdn-icons-png.flaticon.com/128/18624/18624451.png";

/// Badge colour of a schedule kind, shared with the calendar cells
pub fn kind_color(kind: ScheduleKind) -> &'static str {
    match kind {
        ScheduleKind::Subscription => "#6A5ACD",
        ScheduleKind::Listing => "#f4ca16",
    }
}

/// (background, text) colour of the forecast badge
pub fn forecast_colors(forecast: Option<&Forecast>) -> (&'static str, &'static str) {
    match forecast {
        Some(Forecast::VeryGood) => ("#EAA600", "#fff"),
        Some(Forecast::Good) => ("#F8CEB9", "#6B3F1D"),
        Some(Forecast::Neutral) => ("#D6C6B4", "#5A4632"),
        Some(Forecast::Other(_)) | None => ("#EEE", "#666"),
    }
}

/// (border width, border colour) of a card
fn border_style(highlight: CardHighlight) -> (&'static str, &'static str) {
    match highlight {
        CardHighlight::Subscription => ("2px", kind_color(ScheduleKind::Subscription)),
        CardHighlight::Listing => ("2px", kind_color(ScheduleKind::Listing)),
        CardHighlight::None => ("1px", "#ddd"),
    }
}

/// The weekly section, or an empty string when nothing is scheduled this week
pub fn render_weekly(weekly: &WeeklySchedule) -> String {
    if weekly.cards.is_empty() {
        return String::new();
    }

    let cards: String = weekly.cards.iter().map(render_card).collect();
    format!(
        "<h4 style='display:flex; align-items:center; gap:8px; margin:0;'>\
         <img src=\"{icon}\" alt=\"calendar\" width=\"24\" height=\"24\" style=\"vertical-align:middle;\" />\
         이번주 공모주</h4>\
         <div style='display:flex;flex-wrap:wrap;gap:12px;margin-bottom:32px;'>{cards}</div>",
        icon = WEEKLY_ICON,
        cards = cards,
    )
}

fn render_row(label: &str, value_html: &str) -> String {
    format!(
        "<div style='display:flex;gap:8px;justify-content:flex-start;'>\
         <div style='color:#666;width:64px;'>{}</div><div style='color:#333;'>{}</div></div>",
        label, value_html
    )
}

fn render_badge(kind: ScheduleKind) -> String {
    format!(
        "<span style='background:{}; color:#fff; padding:2px 6px; border-radius:6px; \
         font-size:12px; font-weight:600; margin-left:8px;'>{}</span>",
        kind_color(kind),
        kind.label()
    )
}

fn render_card(card: &WeeklyCard) -> String {
    let (forecast_bg, forecast_fg) = forecast_colors(card.forecast.as_ref());
    let forecast_badge = format!(
        "<span style='background:{};color:{};padding:2px 8px;border-radius:4px;font-size:12px;font-weight:500;'>{}</span>",
        forecast_bg,
        forecast_fg,
        escape_html(&card.forecast_label)
    );

    let body = [
        render_row("청약일", &card.subscription_display),
        render_row("상장일", &card.listing_display),
        render_row("증권사", &escape_html(&card.broker)),
        render_row("테마", &escape_html(&card.theme)),
        render_row("공모가", &card.offer_price),
        render_row(card.detail.label(), card.detail.value()),
        format!(
            "<div style='display:flex;gap:8px;justify-content:flex-start;'>\
             <div style='color:#666;width:64px;'>예측</div><div>{}</div></div>",
            forecast_badge
        ),
    ]
    .concat();

    let badges: String = card.badges.iter().copied().map(render_badge).collect();
    let (border_width, border_color) = border_style(card.highlight);

    format!(
        "<div style='border:{border_width} solid {border_color}; border-radius:12px; padding:12px 16px; \
         width:220px; box-shadow:1px 1px 4px rgba(0,0,0,0.05);'>\
         <div style='display:flex; align-items:center; font-size:16px; font-weight:600; margin-bottom:8px; text-align:left;'>\
         <div>{name}</div>{badges}</div>\
         <div style='display:flex; flex-direction:column; gap:4px; text-align:left; font-size:14px;'>{body}</div></div>",
        border_width = border_width,
        border_color = border_color,
        name = escape_html(&card.name),
        badges = badges,
        body = body,
    )
}
