use shared::ProfitSummary;

/// "# YYYY년 공모주 수익: N 원" summary box
pub fn render_profit(summary: &ProfitSummary) -> String {
    format!(
        "<div style=' padding:12px 16px; margin-top:12px; background:#f5f5f5; border-radius:12px; \
         font-weight:500; font-size:16px; '># {}년 공모주 수익: {} 원</div>",
        summary.current_year, summary.formatted_year_profit
    )
}
