use std::error::Error;
use std::io;

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange, Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use log::error;
use meter_loader::{config::Config, MeterApi};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_cron_scheduler::{Job, JobScheduler};
use water_monitor_lib::text::Lang;

use crate::controller::{DashboardController, Msg, PERIODS};
use crate::tui::TerminalView;

mod chart;
mod controller;
mod tui;
mod view;

#[tokio::main()]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!(
        "Starting Water Consumption Dashboard (waterdash) v{}",
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
    let mut controller = DashboardController::new(api, TerminalView::new(lang), tx.clone(), lang);

    // First load happens right away, the scheduler only keeps it fresh.
    controller.refresh();

    let sched = JobScheduler::new().await?;
    let refresh_tx = tx.clone();
    let refresh_job = Job::new_async("1/30 * * * * *", move |_, _| {
        let tx = refresh_tx.clone();
        Box::pin(async move {
            let _ = tx.send(Msg::AutoRefresh);
        })
    })?;
    sched.add(refresh_job).await?;
    sched.start().await?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut controller, &mut rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut DashboardController<TerminalView>,
    rx: &mut UnboundedReceiver<Msg>,
) -> anyhow::Result<()> {
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
                // Data may be stale after the terminal was in the background.
                Event::FocusGained => controller.refresh(),
                _ => {}
            },
        }
    }
}

fn on_key(controller: &mut DashboardController<TerminalView>, code: KeyCode) -> bool {
    if controller.confirm_open() {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => controller.confirm_reset(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                controller.confirm_reset(false)
            }
            _ => {}
        }
        return true;
    }
    match code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('r') => controller.refresh(),
        KeyCode::Char('R') => controller.request_reset(),
        KeyCode::Char('1') => controller.select_period(PERIODS[0]),
        KeyCode::Char('2') => controller.select_period(PERIODS[1]),
        KeyCode::Char('3') => controller.select_period(PERIODS[2]),
        KeyCode::Left => controller.view.cursor_left(),
        KeyCode::Right => controller.view.cursor_right(),
        KeyCode::Esc => controller.dismiss_banners(),
        _ => {}
    }
    true
}
