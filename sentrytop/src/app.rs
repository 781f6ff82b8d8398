//! App state and main loop: input handling, applying fetched snapshots, and drawing.

use std::{io, time::Duration};

use anyhow::Context;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::sleep;
use tracing::info;

use crate::charts::{render_label, ChartId};
use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::fetch::Fetcher;
use crate::format::metric_slot;
use crate::scheduler::{spawn_scheduler, Update};
use crate::screen::{Screen, OVERVIEW_METRICS, SYSTEM_FIELDS};
use crate::sink::TableId;
use crate::ui::{charts::draw_line_chart, fields::draw_fields, header::draw_header, tables::draw_table};
use crate::view::Panel;

const FRAME: Duration = Duration::from_millis(50);

pub struct App {
    dashboard: Dashboard,
    screen: Screen,
    // shown in the header
    target: String,
    should_quit: bool,
}

impl App {
    pub fn new(target: &str) -> Self {
        Self {
            dashboard: Dashboard::default(),
            screen: Screen::new(),
            target: target.to_string(),
            should_quit: false,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self, settings: &Settings) -> anyhow::Result<()> {
        let fetcher = Fetcher::new(settings.base_url.clone(), settings.limit, settings.timeout)
            .context("building http client")?;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = spawn_scheduler(fetcher, settings.interval, tx);
        info!(
            url = %settings.base_url,
            interval_ms = settings.interval.as_millis() as u64,
            limit = settings.limit,
            "polling started"
        );

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal, &mut rx).await;

        // Teardown
        scheduler.stop();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("polling stopped");

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &mut UnboundedReceiver<Update>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    self.handle_key(k);
                }
            }
            if self.should_quit {
                break;
            }

            self.drain_updates(rx);

            terminal.draw(|f| self.draw(f))?;

            sleep(FRAME).await;
        }
        Ok(())
    }

    /// Apply every update that has arrived since the last frame.
    pub fn drain_updates(&mut self, rx: &mut UnboundedReceiver<Update>) -> usize {
        let mut applied = 0;
        while let Ok(update) = rx.try_recv() {
            let label = render_label(Local::now());
            if self.dashboard.apply(update, &label, &mut self.screen) {
                applied += 1;
            }
        }
        applied
    }

    pub fn handle_key(&mut self, k: KeyEvent) {
        if k.kind != KeyEventKind::Press {
            return;
        }
        let active = self.dashboard.view().active();
        match k.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab | KeyCode::Right => self.dashboard.select_panel(active.next()),
            KeyCode::BackTab | KeyCode::Left => self.dashboard.select_panel(active.prev()),
            KeyCode::Char(c) => {
                if let Some(p) = Panel::from_digit(c) {
                    self.dashboard.select_panel(p);
                }
            }
            _ => {}
        }
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        // Root rows: header, active panel
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        draw_header(f, rows[0], self.dashboard.view(), &self.target);

        let body = rows[1];
        match self.dashboard.view().active() {
            Panel::Overview => {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(36), Constraint::Min(20)])
                    .split(body);
                let entries: Vec<(&str, String)> = OVERVIEW_METRICS
                    .iter()
                    .map(|(caption, name)| (*caption, metric_slot(name)))
                    .collect();
                draw_fields(f, cols[0], "Metrics", &entries, &self.screen);

                let charts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Ratio(1, 3),
                        Constraint::Ratio(1, 3),
                        Constraint::Ratio(1, 3),
                    ])
                    .split(cols[1]);
                for (id, rect) in ChartId::ALL.iter().zip(charts.iter()) {
                    draw_line_chart(f, *rect, *id, self.screen.chart(*id));
                }
            }
            Panel::Network => {
                let stack = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(body);
                draw_table(
                    f,
                    stack[0],
                    TableId::Connections,
                    self.screen.rows(TableId::Connections),
                );
                draw_table(f, stack[1], TableId::Hosts, self.screen.rows(TableId::Hosts));
            }
            Panel::System => {
                let entries: Vec<(&str, String)> = SYSTEM_FIELDS
                    .iter()
                    .map(|(caption, slot)| (*caption, slot.to_string()))
                    .collect();
                draw_fields(f, body, "System", &entries, &self.screen);
            }
        }
    }
}
