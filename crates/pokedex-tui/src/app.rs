//! Application core: event loop, global keys, action dispatch.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tui_input::{Input, InputRequest};

use pokedex_core::{
    EngineState, FilterField, Intent, IntentInbox, IntentQueue, Pokedex, intent_queue,
};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::catalog::CatalogScreen;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    screen: CatalogScreen,
    running: bool,
    help_visible: bool,
    search_active: bool,
    /// Search box contents. Every edit is pushed to the engine.
    search: Input,
    /// Latest snapshot, for the status bar and key gating.
    state: Arc<EngineState>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    dex: Pokedex,
    /// User intents, applied by the engine in the order they were sent.
    intents: IntentQueue,
    /// Handed to the intent processor when the loop starts.
    inbox: Option<IntentInbox>,
    data_cancel: CancellationToken,
}

impl App {
    pub fn new(dex: Pokedex) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (intents, inbox) = intent_queue();
        Self {
            screen: CatalogScreen::new(),
            running: true,
            help_visible: false,
            search_active: false,
            search: Input::default(),
            state: Arc::new(EngineState::default()),
            action_tx,
            action_rx,
            dex,
            intents,
            inbox: Some(inbox),
            data_cancel: CancellationToken::new(),
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.screen.init(self.action_tx.clone())?;
        self.screen.set_focused(true);

        let dex = self.dex.clone();
        let cancel = self.data_cancel.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            crate::data_bridge::spawn_data_bridge(dex, tx, cancel).await;
        });

        if let Some(inbox) = self.inbox.take() {
            let dex = self.dex.clone();
            tokio::spawn(async move { dex.process_intents(inbox).await });
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render | Event::Resize => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here; the
    /// rest go to the catalog screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.search_active {
            let request = match key.code {
                KeyCode::Esc | KeyCode::Enter => return Ok(Some(Action::CloseSearch)),
                KeyCode::Char(c) => InputRequest::InsertChar(c),
                KeyCode::Backspace => InputRequest::DeletePrevChar,
                KeyCode::Delete => InputRequest::DeleteNextChar,
                KeyCode::Left => InputRequest::GoToPrevChar,
                KeyCode::Right => InputRequest::GoToNextChar,
                KeyCode::Home => InputRequest::GoToStart,
                KeyCode::End => InputRequest::GoToEnd,
                _ => return Ok(None),
            };
            let changed = self.search.handle(request).is_some_and(|c| c.value);
            return Ok(changed.then(|| Action::SearchInput(self.search.value().to_owned())));
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?' | 'q') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        // Once the catalog has failed only quit and help remain
        if self.state.has_error() {
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('/') => Ok(Some(Action::OpenSearch)),
            KeyCode::Char('F') => Ok(Some(Action::ToggleFavouritesOnly)),
            KeyCode::Char('c') => Ok(Some(Action::ClearSearch)),
            _ => self.screen.handle_key_event(key),
        }
    }

    /// Queue an intent behind every one sent before it.
    fn submit(&self, intent: Intent) {
        if !self.intents.send(intent) {
            warn!("intent processor stopped, dropping intent");
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::OpenSearch => self.search_active = true,
            Action::CloseSearch => self.search_active = false,

            Action::SearchInput(query) => self.submit(Intent::Search(query.clone())),
            Action::ClearSearch => {
                self.search.reset();
                self.submit(Intent::Search(String::new()));
            }
            Action::ToggleFavouritesOnly => {
                self.submit(Intent::ToggleFilter(FilterField::Favourite, true));
            }
            Action::ToggleFavourite(resource) => {
                self.submit(Intent::ToggleFavourite(resource.name.clone()));
            }
            Action::ToggleType(ty) => {
                debug!(%ty, "toggling type");
                self.submit(Intent::ToggleType(*ty));
            }

            Action::StateUpdated(state) => {
                self.state = Arc::clone(state);
                self.forward(action)?;
            }
            Action::CatalogReady | Action::Tick => self.forward(action)?,
            Action::Render => {}
        }
        Ok(())
    }

    fn forward(&mut self, action: &Action) -> Result<()> {
        if let Some(follow_up) = self.screen.update(action)? {
            self.action_tx.send(follow_up)?;
        }
        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Min(1),    // screen
            Constraint::Length(1), // status bar
        ])
        .split(area);

        self.screen.render(frame, layout[0]);
        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::ELECTRIC_PURPLE)),
                Span::styled(self.search.value(), Style::default().fg(theme::NEON_CYAN)),
                Span::styled("█", Style::default().fg(theme::NEON_CYAN)),
                Span::styled("  Esc/Enter done  (case-sensitive)", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        if !self.state.query.is_empty() {
            spans.push(Span::styled(
                format!("/{} ", self.state.query),
                Style::default().fg(theme::NEON_CYAN),
            ));
        }
        spans.push(Span::styled(
            "? help  / search  F favourites only  c clear  q quit",
            theme::key_hint(),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 56u16.min(area.width.saturating_sub(4));
        let help_height = 17u16.min(area.height.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(help_width) / 2;
        let y = area.y + area.height.saturating_sub(help_height) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));

        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            entry("/", "Search by name"),
            entry("Esc", "Leave search"),
            entry("c", "Clear search"),
            entry("F", "Toggle favourites only"),
            entry("Tab", "Switch type selector / roster"),
            entry("h/l ←/→", "Move in type selector"),
            entry("Space Enter", "Toggle type (max 2)"),
            entry("j/k ↑/↓", "Move in roster"),
            entry("f", "Toggle favourite"),
            entry("?", "This help"),
            entry("q Ctrl+C", "Quit"),
            Line::from(""),
            Line::from(Span::styled("  Esc or ? to close", theme::key_hint())),
        ];

        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }
}
