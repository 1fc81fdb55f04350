use log::error;
use meter_loader::errors::MeterApiError;
use meter_loader::MeterApi;
use tokio::sync::mpsc::UnboundedSender;
use water_monitor_lib::dashboard::dto::{ResetOutcome, Statistics};
use water_monitor_lib::text::{self, Lang};

use crate::chart::ChartModel;
use crate::view::{DashboardView, SummaryText};

/// Selectable trailing windows, in tab order.
pub const PERIODS: [u16; 3] = [7, 30, 90];
pub const DEFAULT_PERIOD: u16 = 7;

/// Events handled by the UI loop: scheduler ticks and completions of
/// spawned requests.
#[derive(Debug)]
pub enum Msg {
    AutoRefresh,
    Statistics(Result<Statistics, MeterApiError>),
    ResetDone(Result<ResetOutcome, MeterApiError>),
}

pub struct DashboardController<V: DashboardView> {
    api: MeterApi,
    pub view: V,
    tx: UnboundedSender<Msg>,
    lang: Lang,
    current_period: u16,
    confirm_open: bool,
}

impl<V: DashboardView> DashboardController<V> {
    pub fn new(api: MeterApi, view: V, tx: UnboundedSender<Msg>, lang: Lang) -> Self {
        let mut controller = DashboardController {
            api,
            view,
            tx,
            lang,
            current_period: DEFAULT_PERIOD,
            confirm_open: false,
        };
        controller.view.set_active_period(DEFAULT_PERIOD);
        controller
    }

    pub fn current_period(&self) -> u16 {
        self.current_period
    }

    pub fn confirm_open(&self) -> bool {
        self.confirm_open
    }

    /// Switches the trailing window and reloads. Reselecting the current
    /// period still reloads.
    pub fn select_period(&mut self, days: u16) {
        self.current_period = days;
        self.view.set_active_period(days);
        self.load_statistics();
    }

    pub fn refresh(&mut self) {
        self.load_statistics();
    }

    fn load_statistics(&mut self) {
        self.view.set_loading(true);
        let api = self.api.clone();
        let tx = self.tx.clone();
        let days = self.current_period;
        tokio::spawn(async move {
            let _ = tx.send(Msg::Statistics(api.statistics(days).await));
        });
    }

    /// Opens the confirmation dialog; nothing is sent until the user agrees.
    pub fn request_reset(&mut self) {
        self.confirm_open = true;
        self.view.set_confirm_visible(true);
    }

    pub fn confirm_reset(&mut self, confirmed: bool) {
        if !self.confirm_open {
            return;
        }
        self.confirm_open = false;
        self.view.set_confirm_visible(false);
        if !confirmed {
            return;
        }
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(Msg::ResetDone(api.reset().await));
        });
    }

    pub fn dismiss_banners(&mut self) {
        self.view.clear_banners();
    }

    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::AutoRefresh => self.load_statistics(),
            Msg::Statistics(Ok(stats)) => {
                self.view.set_loading(false);
                self.view.clear_alert();
                self.view
                    .render_summary(SummaryText::from_statistics(&stats));
                self.view
                    .render_chart(ChartModel::new(&stats.dates, &stats.liters));
            }
            Msg::Statistics(Err(e)) => {
                self.view.set_loading(false);
                error!("Failed to load statistics: {e:?}");
                self.view.show_alert(text::stats_load_failed(self.lang));
            }
            Msg::ResetDone(Ok(outcome)) if outcome.is_ok() => {
                self.view.show_notice(text::reset_done(self.lang));
                self.load_statistics();
            }
            Msg::ResetDone(result) => {
                if let Err(e) = result {
                    error!("Reset request failed: {e:?}");
                }
                self.view.show_alert(text::reset_failed(self.lang));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use meter_loader::config::Config;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    #[derive(Default)]
    struct RecordingView {
        summary: Option<SummaryText>,
        chart: Option<ChartModel>,
        active_period: Option<u16>,
        loading: Vec<bool>,
        alert: Option<String>,
        notice: Option<String>,
        confirm_visible: bool,
    }

    impl DashboardView for RecordingView {
        fn render_summary(&mut self, summary: SummaryText) {
            self.summary = Some(summary);
        }
        fn render_chart(&mut self, chart: ChartModel) {
            self.chart = Some(chart);
        }
        fn set_active_period(&mut self, days: u16) {
            self.active_period = Some(days);
        }
        fn set_loading(&mut self, loading: bool) {
            self.loading.push(loading);
        }
        fn show_alert(&mut self, text: &str) {
            self.alert = Some(text.to_string());
            self.notice = None;
        }
        fn show_notice(&mut self, text: &str) {
            self.notice = Some(text.to_string());
            self.alert = None;
        }
        fn clear_alert(&mut self) {
            self.alert = None;
        }
        fn clear_banners(&mut self) {
            self.alert = None;
            self.notice = None;
        }
        fn set_confirm_visible(&mut self, visible: bool) {
            self.confirm_visible = visible;
        }
    }

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn new_controller(
        base_url: &str,
    ) -> (
        DashboardController<RecordingView>,
        UnboundedReceiver<Msg>,
    ) {
        new_controller_with(base_url, RecordingView::default())
    }

    fn new_controller_with(
        base_url: &str,
        view: RecordingView,
    ) -> (
        DashboardController<RecordingView>,
        UnboundedReceiver<Msg>,
    ) {
        let api = MeterApi::new(Config::new(base_url)).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        (DashboardController::new(api, view, tx, Lang::Ru), rx)
    }

    fn stats_body() -> Value {
        json!({
            "dates": ["2025-10-14", "2025-10-15"],
            "liters": [10.0, 12.5],
            "today_liters": 12.5,
            "today_cost": 6.0,
            "total_liters": 22.5,
            "total_cost": 10.8,
            "avg_7days": 11.25,
            "cost_per_liter": 0.48
        })
    }

    fn stats_route(hits: Arc<AtomicUsize>) -> Router {
        Router::new().route(
            "/get_data",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(stats_body())
                }
            }),
        )
    }

    async fn pump(controller: &mut DashboardController<RecordingView>, rx: &mut UnboundedReceiver<Msg>) {
        let msg = rx.recv().await.unwrap();
        controller.apply(msg);
    }

    #[tokio::test]
    async fn starts_on_the_seven_day_period() {
        let (controller, _rx) = new_controller("http://127.0.0.1:9");
        assert_eq!(controller.current_period(), 7);
        assert_eq!(controller.view.active_period, Some(7));
    }

    #[tokio::test]
    async fn successful_load_renders_summary_and_chart() {
        let url = serve(stats_route(Arc::new(AtomicUsize::new(0)))).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.refresh();
        pump(&mut controller, &mut rx).await;

        let summary = controller.view.summary.as_ref().unwrap();
        assert_eq!(summary.today_liters, "12.50");
        assert_eq!(summary.today_cost, "6.0000");
        assert_eq!(summary.cost_per_liter, "0.4800");
        let chart = controller.view.chart.as_ref().unwrap();
        assert_eq!(chart.values, vec![10.0, 12.5]);
        assert_eq!(controller.view.loading, vec![true, false]);
        assert!(controller.view.alert.is_none());
    }

    #[tokio::test]
    async fn reselecting_a_period_still_reloads() {
        let hits = Arc::new(AtomicUsize::new(0));
        let url = serve(stats_route(hits.clone())).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.select_period(30);
        pump(&mut controller, &mut rx).await;
        controller.select_period(30);
        pump(&mut controller, &mut rx).await;

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(controller.view.active_period, Some(30));
    }

    #[tokio::test]
    async fn requests_use_the_selected_period() {
        let days = Arc::new(AtomicUsize::new(0));
        let seen = days.clone();
        let router = Router::new().route(
            "/get_data",
            get(
                move |axum::extract::Query(params): axum::extract::Query<
                    std::collections::HashMap<String, String>,
                >| {
                    let seen = seen.clone();
                    async move {
                        let got = params.get("days").and_then(|d| d.parse().ok()).unwrap_or(0);
                        seen.store(got, Ordering::SeqCst);
                        Json(stats_body())
                    }
                },
            ),
        );
        let url = serve(router).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.select_period(90);
        pump(&mut controller, &mut rx).await;

        assert_eq!(days.load(Ordering::SeqCst), 90);
    }

    #[tokio::test]
    async fn failed_load_alerts_and_keeps_previous_readouts() {
        let router = Router::new().route(
            "/get_data",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = serve(router).await;
        let seeded = RecordingView {
            summary: Some(SummaryText {
                today_liters: "12.50".into(),
                today_cost: "6.0000".into(),
                total_liters: "22.50".into(),
                total_cost: "10.8000".into(),
                avg_7days: "11.25".into(),
                cost_per_liter: "0.4800".into(),
            }),
            ..RecordingView::default()
        };
        let (mut controller, mut rx) = new_controller_with(&url, seeded);

        controller.refresh();
        pump(&mut controller, &mut rx).await;

        assert_eq!(
            controller.view.alert.as_deref(),
            Some("Ошибка при загрузке данных. Пожалуйста, попробуйте снова.")
        );
        assert_eq!(
            controller.view.summary.as_ref().unwrap().today_liters,
            "12.50"
        );
        assert_eq!(controller.view.loading, vec![true, false]);
    }

    #[tokio::test]
    async fn auto_refresh_tick_reloads() {
        let hits = Arc::new(AtomicUsize::new(0));
        let url = serve(stats_route(hits.clone())).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.apply(Msg::AutoRefresh);
        pump(&mut controller, &mut rx).await;

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(controller.view.summary.is_some());
    }

    #[tokio::test]
    async fn confirmed_reset_notifies_and_reloads() {
        let resets = Arc::new(AtomicUsize::new(0));
        let reset_hits = resets.clone();
        let router = stats_route(Arc::new(AtomicUsize::new(0))).route(
            "/reset",
            post(move || {
                let hits = reset_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "status": "ok" }))
                }
            }),
        );
        let url = serve(router).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.request_reset();
        assert!(controller.view.confirm_visible);
        controller.confirm_reset(true);
        assert!(!controller.view.confirm_visible);
        pump(&mut controller, &mut rx).await;
        pump(&mut controller, &mut rx).await;

        assert_eq!(resets.load(Ordering::SeqCst), 1);
        assert_eq!(
            controller.view.notice.as_deref(),
            Some("База данных успешно очищена!")
        );
        assert!(controller.view.summary.is_some());
    }

    #[tokio::test]
    async fn declined_reset_sends_nothing() {
        let (mut controller, mut rx) = new_controller("http://127.0.0.1:9");

        controller.request_reset();
        controller.confirm_reset(false);

        assert!(!controller.view.confirm_visible);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn rejected_reset_alerts_without_reloading() {
        let loads = Arc::new(AtomicUsize::new(0));
        let router = stats_route(loads.clone()).route(
            "/reset",
            post(|| async { Json(json!({ "status": "error" })) }),
        );
        let url = serve(router).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.request_reset();
        controller.confirm_reset(true);
        pump(&mut controller, &mut rx).await;

        assert_eq!(
            controller.view.alert.as_deref(),
            Some("Ошибка при очистке базы данных. Пожалуйста, попробуйте снова.")
        );
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn success_notice_survives_the_follow_up_load() {
        let router = stats_route(Arc::new(AtomicUsize::new(0)))
            .route("/reset", post(|| async { Json(json!({ "status": "ok" })) }));
        let url = serve(router).await;
        let (mut controller, mut rx) = new_controller(&url);

        controller.request_reset();
        controller.confirm_reset(true);
        pump(&mut controller, &mut rx).await;
        pump(&mut controller, &mut rx).await;

        assert!(controller.view.notice.is_some());
        assert!(controller.view.alert.is_none());
    }
}
