use water_monitor_lib::dashboard::dto::Statistics;
use water_monitor_lib::format;

use crate::chart::ChartModel;

/// The six readouts above the chart, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryText {
    pub today_liters: String,
    pub today_cost: String,
    pub total_liters: String,
    pub total_cost: String,
    pub avg_7days: String,
    pub cost_per_liter: String,
}

impl SummaryText {
    pub fn from_statistics(stats: &Statistics) -> Self {
        SummaryText {
            today_liters: format::liters(stats.today_liters),
            today_cost: format::currency(stats.today_cost),
            total_liters: format::liters(stats.total_liters),
            total_cost: format::currency(stats.total_cost),
            avg_7days: format::liters(stats.avg_7days),
            cost_per_liter: format::currency(stats.cost_per_liter),
        }
    }
}

/// Rendering surface the dashboard controller drives.
pub trait DashboardView {
    fn render_summary(&mut self, summary: SummaryText);
    fn render_chart(&mut self, chart: ChartModel);
    fn set_active_period(&mut self, days: u16);
    fn set_loading(&mut self, loading: bool);
    fn show_alert(&mut self, text: &str);
    fn show_notice(&mut self, text: &str);
    /// Drops the error banner, leaving a success notice in place.
    fn clear_alert(&mut self);
    fn clear_banners(&mut self);
    fn set_confirm_visible(&mut self, visible: bool);
}
