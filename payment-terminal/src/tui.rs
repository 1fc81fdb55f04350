use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use water_monitor_lib::text::{self, Lang};

use crate::controller::PAYMENT_METHODS;
use crate::view::{BillSummaryText, BillingView, BreakdownRow};

/// Which of the three screen states fills the main area.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenMode {
    Loading,
    Data,
    Error(String),
}

/// Terminal rendering state. The controller mutates it through
/// [`BillingView`]; `draw` paints the whole screen from it.
pub struct TerminalView {
    pub lang: Lang,
    pub mode: ScreenMode,
    pub summary: Option<BillSummaryText>,
    pub rows: Vec<BreakdownRow>,
    pub breakdown_visible: bool,
    pub month_label: String,
    pub selected_method: Option<usize>,
    pub payment_busy: bool,
    pub success_modal: Option<String>,
    pub error_modal: Option<String>,
}

impl TerminalView {
    pub fn new(lang: Lang) -> Self {
        TerminalView {
            lang,
            mode: ScreenMode::Loading,
            summary: None,
            rows: Vec::new(),
            breakdown_visible: false,
            month_label: String::new(),
            selected_method: None,
            payment_busy: false,
            success_modal: None,
            error_modal: None,
        }
    }

    pub fn modal_open(&self) -> bool {
        self.success_modal.is_some() || self.error_modal.is_some()
    }

    fn month_heading(&self) -> &str {
        match (&self.mode, &self.summary) {
            (ScreenMode::Data, Some(summary)) => &summary.month_label,
            _ => &self.month_label,
        }
    }
}

impl BillingView for TerminalView {
    fn show_loading(&mut self) {
        self.mode = ScreenMode::Loading;
    }

    fn show_data(&mut self) {
        self.mode = ScreenMode::Data;
    }

    fn show_error(&mut self, text: &str) {
        self.mode = ScreenMode::Error(text.to_string());
    }

    fn render_summary(&mut self, summary: BillSummaryText) {
        self.summary = Some(summary);
    }

    fn render_breakdown(&mut self, rows: Vec<BreakdownRow>) {
        self.rows = rows;
    }

    fn set_breakdown_visible(&mut self, visible: bool) {
        self.breakdown_visible = visible;
    }

    fn set_month_selector(&mut self, label: &str) {
        self.month_label = label.to_string();
    }

    fn set_selected_method(&mut self, idx: usize) {
        self.selected_method = Some(idx);
    }

    fn set_payment_busy(&mut self, busy: bool) {
        self.payment_busy = busy;
    }

    fn show_success_modal(&mut self, text: &str) {
        self.success_modal = Some(text.to_string());
    }

    fn show_error_modal(&mut self, text: &str) {
        self.error_modal = Some(text.to_string());
    }

    fn hide_success_modal(&mut self) {
        self.success_modal = None;
    }

    fn hide_error_modal(&mut self) {
        self.error_modal = None;
    }
}

pub fn draw(f: &mut Frame, view: &TerminalView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title with month selector
            Constraint::Length(5), // Bill summary
            Constraint::Min(6),    // Daily breakdown
            Constraint::Length(3), // Payment methods
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    draw_title(f, view, chunks[0]);
    draw_summary(f, view, chunks[1]);
    draw_breakdown(f, view, chunks[2]);
    draw_methods(f, view, chunks[3]);

    let help = Paragraph::new(text::billing_help(view.lang))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);

    if let Some(message) = &view.success_modal {
        draw_modal(
            f,
            text::success_title(view.lang),
            message,
            Color::Green,
            view.lang,
        );
    }
    if let Some(message) = &view.error_modal {
        draw_modal(
            f,
            text::error_title(view.lang),
            message,
            Color::Red,
            view.lang,
        );
    }
}

fn draw_title(f: &mut Frame, view: &TerminalView, area: Rect) {
    let heading = format!(
        "{}   {}: ◀ {} ▶",
        text::billing_title(view.lang),
        text::month_label(view.lang),
        view.month_heading()
    );
    let header = Paragraph::new(heading)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_summary(f: &mut Frame, view: &TerminalView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let body = match &view.mode {
        ScreenMode::Loading => Paragraph::new(text::loading(view.lang))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        ScreenMode::Error(message) => Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        ScreenMode::Data => {
            let summary = match &view.summary {
                Some(summary) => summary,
                None => return,
            };
            Paragraph::new(vec![
                Line::from(format!(
                    "{}: {}",
                    text::bill_liters_label(view.lang),
                    summary.liters
                )),
                Line::from(format!(
                    "{}: {}",
                    text::bill_price_label(view.lang),
                    summary.price_per_liter
                )),
                Line::from(Span::styled(
                    format!(
                        "{}: {}",
                        text::bill_total_label(view.lang),
                        summary.total_amount
                    ),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
            ])
        }
    };
    f.render_widget(body.block(block), area);
}

fn draw_breakdown(f: &mut Frame, view: &TerminalView, area: Rect) {
    if view.mode != ScreenMode::Data || !view.breakdown_visible {
        return;
    }

    let rows: Vec<Row> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 1 {
                Style::default().fg(Color::Gray)
            } else {
                Style::default()
            };
            Row::new(vec![row.date.clone(), row.liters.clone(), row.cost.clone()]).style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(
        Row::new(text::breakdown_headers(view.lang).to_vec())
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(table, area);
}

fn draw_methods(f: &mut Frame, view: &TerminalView, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, method) in PAYMENT_METHODS.iter().enumerate() {
        let style = if view.selected_method == Some(i) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, method), style));
        spans.push(Span::raw("   "));
    }
    let (action, action_color) = if view.payment_busy {
        (text::pay_busy(view.lang), Color::Yellow)
    } else {
        (text::pay_action(view.lang), Color::Green)
    };
    spans.push(Span::styled(
        format!("Enter: {action}"),
        Style::default().fg(action_color).add_modifier(Modifier::BOLD),
    ));

    let methods = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", text::methods_title(view.lang)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(methods, area);
}

fn draw_modal(f: &mut Frame, title: &str, message: &str, color: Color, lang: Lang) {
    let area = modal_rect(f.area());
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            text::modal_dismiss_hint(lang),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(dialog, area);
}

/// Where the result modal is drawn. Clicks outside of it dismiss the modal.
pub fn modal_rect(full: Rect) -> Rect {
    centered_rect(60, 30, full)
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
