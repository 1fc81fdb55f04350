use log::error;
use meter_loader::errors::MeterApiError;
use meter_loader::MeterApi;
use tokio::sync::mpsc::UnboundedSender;
use water_monitor_lib::billing::dto::{MonthlyConsumption, PaymentRequest, PaymentResult};
use water_monitor_lib::format;
use water_monitor_lib::text::{self, Lang};

use crate::month::MonthCursor;
use crate::view::{BillSummaryText, BillingView, BreakdownRow};

/// Offered payment channels, in key order 1 to 4.
pub const PAYMENT_METHODS: [&str; 4] = ["Kaspi", "Halyk", "Apple Pay", "PayPal"];

/// Completions of spawned requests, handled by the UI loop.
#[derive(Debug)]
pub enum Msg {
    Bill(Result<MonthlyConsumption, MeterApiError>),
    Payment {
        method: String,
        amount: f64,
        result: Result<PaymentResult, MeterApiError>,
    },
}

pub struct BillingController<V: BillingView> {
    api: MeterApi,
    pub view: V,
    tx: UnboundedSender<Msg>,
    lang: Lang,
    month: MonthCursor,
    selected_method: Option<usize>,
    bill: Option<MonthlyConsumption>,
    payment_in_flight: bool,
}

impl<V: BillingView> BillingController<V> {
    pub fn new(api: MeterApi, view: V, tx: UnboundedSender<Msg>, lang: Lang) -> Self {
        let month = MonthCursor::current();
        let mut controller = BillingController {
            api,
            view,
            tx,
            lang,
            month,
            selected_method: None,
            bill: None,
            payment_in_flight: false,
        };
        controller.view.set_month_selector(&month.key());
        controller
    }

    pub fn month(&self) -> MonthCursor {
        self.month
    }

    pub fn has_bill(&self) -> bool {
        self.bill.is_some()
    }

    pub fn payment_in_flight(&self) -> bool {
        self.payment_in_flight
    }

    pub fn load_month(&mut self) {
        self.view.show_loading();
        let api = self.api.clone();
        let tx = self.tx.clone();
        let month = self.month.key();
        tokio::spawn(async move {
            let _ = tx.send(Msg::Bill(api.consumption(Some(&month)).await));
        });
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
        self.view.set_month_selector(&self.month.key());
        self.load_month();
    }

    /// Steps forward unless already on the current month.
    pub fn next_month(&mut self) {
        let next = self.month.next_clamped(MonthCursor::current());
        if next == self.month {
            return;
        }
        self.month = next;
        self.view.set_month_selector(&self.month.key());
        self.load_month();
    }

    pub fn select_method(&mut self, idx: usize) {
        if idx < PAYMENT_METHODS.len() {
            self.selected_method = Some(idx);
            self.view.set_selected_method(idx);
        }
    }

    /// Sends the payment for the loaded bill. Dropped while an earlier
    /// payment is still in flight.
    pub fn submit_payment(&mut self) {
        if self.payment_in_flight {
            return;
        }
        let method = match self.selected_method {
            Some(idx) => PAYMENT_METHODS[idx].to_string(),
            None => return,
        };
        let amount = match &self.bill {
            Some(bill) => bill.total_amount,
            None => {
                self.view.show_error_modal(text::no_bill_loaded(self.lang));
                return;
            }
        };

        self.payment_in_flight = true;
        self.view.set_payment_busy(true);
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let request = PaymentRequest {
                method: method.clone(),
                amount,
            };
            let result = api.pay(&request).await;
            let _ = tx.send(Msg::Payment {
                method,
                amount,
                result,
            });
        });
    }

    pub fn dismiss_modals(&mut self) {
        self.view.hide_success_modal();
        self.view.hide_error_modal();
    }

    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::Bill(Ok(bill)) => {
                self.view.render_summary(BillSummaryText::from_bill(&bill));
                let rows: Vec<BreakdownRow> = bill
                    .breakdown
                    .iter()
                    .map(|day| BreakdownRow {
                        date: format::long_date(&day.date, self.lang),
                        liters: format::liters(day.liters),
                        cost: format::row_cost(day.liters, bill.price_per_liter),
                    })
                    .collect();
                if rows.is_empty() {
                    self.view.set_breakdown_visible(false);
                } else {
                    self.view.render_breakdown(rows);
                    self.view.set_breakdown_visible(true);
                }
                self.view.show_data();
                self.bill = Some(bill);
            }
            Msg::Bill(Err(e)) => {
                error!("Failed to load the bill: {e:?}");
                self.bill = None;
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| text::bill_load_failed(self.lang).to_string());
                self.view.show_error(&message);
            }
            Msg::Payment {
                method,
                amount,
                result,
            } => {
                // Unlock before reporting, whatever the outcome was.
                self.payment_in_flight = false;
                self.view.set_payment_busy(false);
                match result {
                    Ok(outcome) if outcome.success => {
                        self.view.show_success_modal(&text::payment_success(
                            self.lang, amount, &method,
                        ));
                    }
                    Ok(outcome) => {
                        let message = outcome
                            .message
                            .unwrap_or_else(|| text::payment_failed(self.lang).to_string());
                        self.view.show_error_modal(&message);
                    }
                    Err(e) => {
                        error!("Payment request failed: {e:?}");
                        let message = e
                            .server_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| text::payment_failed(self.lang).to_string());
                        self.view.show_error_modal(&message);
                    }
                }
            }
        }
    }
}
