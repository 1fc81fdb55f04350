use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, BorderType, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Tabs, Wrap},
    Frame,
};
use water_monitor_lib::format;
use water_monitor_lib::text::{self, Lang};

use crate::chart::ChartModel;
use crate::controller::PERIODS;
use crate::view::{DashboardView, SummaryText};

/// Terminal rendering state. The controller mutates it through
/// [`DashboardView`]; `draw` paints the whole screen from it.
pub struct TerminalView {
    pub lang: Lang,
    pub summary: Option<SummaryText>,
    pub chart: ChartModel,
    pub active_period: u16,
    pub loading: bool,
    pub alert: Option<String>,
    pub notice: Option<String>,
    pub confirm_visible: bool,
    pub cursor: usize,
}

impl TerminalView {
    pub fn new(lang: Lang) -> Self {
        TerminalView {
            lang,
            summary: None,
            chart: ChartModel::default(),
            active_period: PERIODS[0],
            loading: false,
            alert: None,
            notice: None,
            confirm_visible: false,
            cursor: 0,
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if !self.chart.values.is_empty() {
            self.cursor = (self.cursor + 1).min(self.chart.values.len() - 1);
        }
    }
}

impl DashboardView for TerminalView {
    fn render_summary(&mut self, summary: SummaryText) {
        self.summary = Some(summary);
    }

    fn render_chart(&mut self, chart: ChartModel) {
        // Highlight the most recent day of the new series.
        self.cursor = chart.values.len().saturating_sub(1);
        self.chart = chart;
    }

    fn set_active_period(&mut self, days: u16) {
        self.active_period = days;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
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

pub fn draw(f: &mut Frame, view: &TerminalView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Period tabs
            Constraint::Length(3), // Readout cards
            Constraint::Min(8),    // Chart
            Constraint::Length(2), // Selected day detail
            Constraint::Length(1), // Banner
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    draw_title(f, view, chunks[0]);
    draw_periods(f, view, chunks[1]);
    draw_summary(f, view, chunks[2]);
    draw_chart(f, view, chunks[3]);
    draw_day_detail(f, view, chunks[4]);
    draw_banner(f, view, chunks[5]);

    let help = Paragraph::new(text::dashboard_help(view.lang))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[6]);

    if view.confirm_visible {
        draw_confirm_dialog(f, view);
    }
}

fn draw_title(f: &mut Frame, view: &TerminalView, area: Rect) {
    let mut title = text::dashboard_title(view.lang).to_string();
    if view.loading {
        title = format!("{} · {}", title, text::loading(view.lang));
    }
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_periods(f: &mut Frame, view: &TerminalView, area: Rect) {
    let titles: Vec<String> = PERIODS
        .iter()
        .map(|days| text::period_label(view.lang, *days))
        .collect();
    let selected = PERIODS
        .iter()
        .position(|days| *days == view.active_period)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_summary(f: &mut Frame, view: &TerminalView, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    let labels = text::stat_labels(view.lang);
    let values = match &view.summary {
        Some(summary) => [
            summary.today_liters.clone(),
            summary.today_cost.clone(),
            summary.total_liters.clone(),
            summary.total_cost.clone(),
            summary.avg_7days.clone(),
            summary.cost_per_liter.clone(),
        ],
        None => std::array::from_fn(|_| "-".to_string()),
    };

    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let card = Paragraph::new(value)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(*label)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(card, cells[i]);
    }
}

fn draw_chart(f: &mut Frame, view: &TerminalView, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", text::chart_series_label(view.lang)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if view.chart.is_empty() {
        let empty = Paragraph::new(text::no_data(view.lang))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let points = view.chart.points();
    let highlight = [(view.cursor as f64, view.chart.values[view.cursor])];
    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&highlight),
    ];

    let x_max = (view.chart.values.len() - 1).max(1) as f64;
    let x_labels: Vec<String> = match (view.chart.labels.first(), view.chart.labels.last()) {
        (Some(first), Some(last)) => vec![first.clone(), last.clone()],
        _ => Vec::new(),
    };
    let y_max = view.chart.y_upper();
    let unit = text::liters_unit(view.lang);
    let y_labels = vec![
        format!("0.0 {unit}"),
        format!("{:.1} {unit}", y_max / 2.0),
        format!("{:.1} {unit}", y_max),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn draw_day_detail(f: &mut Frame, view: &TerminalView, area: Rect) {
    let lines = match view.chart.tooltip(view.cursor, view.lang) {
        Some(lines) => lines,
        None => return,
    };
    let date = view
        .chart
        .labels
        .get(view.cursor)
        .map(|label| format::long_date(label, view.lang))
        .unwrap_or_default();
    let [consumption, cost] = lines;
    let detail = Paragraph::new(vec![
        Line::from(format!("{date}  ·  {consumption}")),
        Line::from(cost),
    ]);
    f.render_widget(detail, area);
}

fn draw_banner(f: &mut Frame, view: &TerminalView, area: Rect) {
    let (style, message) = if let Some(alert) = &view.alert {
        (Style::default().fg(Color::Red), alert.as_str())
    } else if let Some(notice) = &view.notice {
        (Style::default().fg(Color::Green), notice.as_str())
    } else {
        return;
    };
    let banner = Paragraph::new(message)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn draw_confirm_dialog(f: &mut Frame, view: &TerminalView) {
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![
        Line::from(text::reset_confirm(view.lang)),
        Line::from(""),
        Line::from(text::confirm_keys(view.lang)),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(format!(" {} ", text::reset_title(view.lang)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(dialog, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
