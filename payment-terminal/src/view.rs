use water_monitor_lib::billing::dto::MonthlyConsumption;
use water_monitor_lib::format;

/// Bill header values, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BillSummaryText {
    pub month_label: String,
    pub liters: String,
    pub price_per_liter: String,
    pub total_amount: String,
}

impl BillSummaryText {
    pub fn from_bill(bill: &MonthlyConsumption) -> Self {
        BillSummaryText {
            month_label: bill.display_label().to_string(),
            liters: format::liters(bill.liters),
            price_per_liter: format::price_per_liter(bill.price_per_liter),
            total_amount: format::bill_total(bill.total_amount),
        }
    }
}

/// One row of the daily breakdown table, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub date: String,
    pub liters: String,
    pub cost: String,
}

/// Rendering surface the billing controller drives. Mirrors the three screen
/// states (loading, data, error) plus the two result modals.
pub trait BillingView {
    fn show_loading(&mut self);
    fn show_data(&mut self);
    fn show_error(&mut self, text: &str);
    fn render_summary(&mut self, summary: BillSummaryText);
    fn render_breakdown(&mut self, rows: Vec<BreakdownRow>);
    fn set_breakdown_visible(&mut self, visible: bool);
    fn set_month_selector(&mut self, label: &str);
    fn set_selected_method(&mut self, idx: usize);
    fn set_payment_busy(&mut self, busy: bool);
    fn show_success_modal(&mut self, text: &str);
    fn show_error_modal(&mut self, text: &str);
    fn hide_success_modal(&mut self);
    fn hide_error_modal(&mut self);
}
