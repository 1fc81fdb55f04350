use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use log::error;
use meter_loader::{config::Config, MeterApi};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use water_monitor_lib::text::Lang;

use crate::controller::{BillingController, Msg};
use crate::tui::TerminalView;

mod controller;
mod month;
mod tui;
mod view;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!(
        "Starting Water Payment Terminal (waterpay) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let lang = Lang::from_env();
    let api = match MeterApi::new(Config::from_env()) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to set up the meter API client: {e:?}");
            std::process::exit(1);
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller = BillingController::new(api, TerminalView::new(lang), tx, lang);
    controller.load_month();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut controller, &mut rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut BillingController<TerminalView>,
    rx: &mut UnboundedReceiver<Msg>,
) -> Result<()> {
    let mut events = EventStream::new();
    loop {
        terminal.draw(|f| tui::draw(f, &controller.view))?;

        tokio::select! {
            Some(msg) = rx.recv() => controller.apply(msg),
            Some(event) = events.next() => match event? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !on_key(controller, key.code) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        on_click(terminal, controller, mouse.column, mouse.row)?;
                    }
                }
                _ => {}
            },
        }
    }
}

/// A click outside the open modal dismisses it.
fn on_click(
    terminal: &Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut BillingController<TerminalView>,
    column: u16,
    row: u16,
) -> Result<()> {
    if !controller.view.modal_open() {
        return Ok(());
    }
    let size = terminal.size()?;
    let full = Rect::new(0, 0, size.width, size.height);
    if !tui::modal_rect(full).contains(Position::new(column, row)) {
        controller.dismiss_modals();
    }
    Ok(())
}

fn on_key(controller: &mut BillingController<TerminalView>, code: KeyCode) -> bool {
    if controller.view.modal_open() {
        match code {
            KeyCode::Esc => controller.dismiss_modals(),
            KeyCode::Char('q') => return false,
            _ => {}
        }
        return true;
    }
    match code {
        KeyCode::Char('q') => return false,
        KeyCode::Left => controller.prev_month(),
        KeyCode::Right => controller.next_month(),
        KeyCode::Char('1') => controller.select_method(0),
        KeyCode::Char('2') => controller.select_method(1),
        KeyCode::Char('3') => controller.select_method(2),
        KeyCode::Char('4') => controller.select_method(3),
        KeyCode::Enter => controller.submit_payment(),
        _ => {}
    }
    true
}
