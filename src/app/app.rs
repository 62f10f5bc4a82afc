use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{
    api::{LiveQuoteDto, quotes},
    app::{Portfolio, calc, ui, utils},
    models::SectorAggregate,
};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum FetchMessage {
    Quotes(Vec<LiveQuoteDto>),
    Failed,
}

pub struct App {
    portfolio: Portfolio,
    sectors: Vec<SectorAggregate>,
    refresh_interval: Duration,
    table_state: TableState,
    selected: Option<usize>,
    fetch_tx: UnboundedSender<FetchMessage>,
    fetch_rx: UnboundedReceiver<FetchMessage>,
}

impl App {
    pub fn new(portfolio: Portfolio, refresh_interval: Duration) -> Self {
        let (fetch_tx, fetch_rx) = unbounded_channel();
        let sectors = calc::group_by_sector(calc::compute_holdings(portfolio.holdings()));

        Self {
            portfolio,
            sectors,
            refresh_interval,
            table_state: TableState::default(),
            selected: None,
            fetch_tx,
            fetch_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut next_refresh = Instant::now();

        loop {
            self.drain_fetch_results();

            if Instant::now() >= next_refresh {
                self.start_refresh();
                next_refresh = Instant::now() + self.refresh_interval;
            }

            self.table_state.select(
                self.selected
                    .map(|index| utils::visual_row_index(&self.sectors, index)),
            );
            terminal.draw(|frame| {
                ui::render(frame, &self.portfolio, &self.sectors, &mut self.table_state)
            })?;

            if event::poll(EVENT_POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('r') => {
                            self.start_refresh();
                            next_refresh = Instant::now() + self.refresh_interval;
                        }
                        KeyCode::Esc => self.selected = None,
                        KeyCode::Down => self.select_next(),
                        KeyCode::Up => self.select_prev(),
                        _ => {}
                    }
                }
            }
        }
    }

    /// Spawns a fetch cycle. Overlapping cycles are not guarded against; the
    /// most recently completing one wins.
    fn start_refresh(&mut self) {
        self.portfolio.set_loading(true);

        let tx = self.fetch_tx.clone();
        let client = self.portfolio.client().clone();
        let endpoint = self.portfolio.endpoint().to_string();
        let symbols = self.portfolio.symbols();

        tokio::spawn(async move {
            let message = match quotes::fetch_quotes(&symbols, &client, &endpoint).await {
                Ok(quotes) => FetchMessage::Quotes(quotes),
                Err(err) => {
                    tracing::warn!("Failed to fetch live quotes: {:#}", err);
                    FetchMessage::Failed
                }
            };

            // After teardown the receiver is gone and a late result is dropped.
            let _ = tx.send(message);
        });
    }

    fn drain_fetch_results(&mut self) {
        while let Ok(message) = self.fetch_rx.try_recv() {
            match message {
                FetchMessage::Quotes(quotes) => {
                    self.portfolio.apply_quotes(&quotes);
                    self.recompute();
                }
                FetchMessage::Failed => self.portfolio.set_loading(false),
            }
        }
    }

    fn recompute(&mut self) {
        self.sectors = calc::group_by_sector(calc::compute_holdings(self.portfolio.holdings()));
    }

    fn select_next(&mut self) {
        let count = utils::holding_count(&self.sectors);
        if count == 0 {
            return;
        }

        let i = match self.selected {
            Some(i) => {
                if i >= count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn select_prev(&mut self) {
        let count = utils::holding_count(&self.sectors);
        if count == 0 {
            return;
        }

        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }
}
