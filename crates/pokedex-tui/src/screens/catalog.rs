//! Catalog screen: type selector above the filtered roster.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use pokedex_core::engine::MAX_SELECTED_TYPES;
use pokedex_core::{EngineState, FilterField, NamedResource, PokemonType, is_original_generation};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::type_chips::render_type_chips;

/// Which half of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Types,
    #[default]
    Roster,
}

pub struct CatalogScreen {
    focused: bool,
    pane: Pane,
    state: Arc<EngineState>,
    /// Startup loads have settled.
    ready: bool,
    table_state: TableState,
    type_cursor: usize,
    throbber_state: ThrobberState,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            pane: Pane::default(),
            state: Arc::new(EngineState::default()),
            ready: false,
            table_state: TableState::default().with_selected(Some(0)),
            type_cursor: 0,
            throbber_state: ThrobberState::default(),
        }
    }

    // ── Roster selection ────────────────────────────────────────

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.state.displayed.len();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.displayed.len();
        if len == 0 {
            return;
        }
        let next = self.selected_index().saturating_add_signed(delta);
        self.select(next.min(len - 1));
    }

    pub fn selected_resource(&self) -> Option<&NamedResource> {
        self.state.displayed.get(self.selected_index())
    }

    // ── Type cursor ─────────────────────────────────────────────

    fn move_type_cursor(&mut self, delta: isize) {
        let count = self.state.selectable_types().len();
        if count == 0 {
            return;
        }
        self.type_cursor = self
            .type_cursor
            .saturating_add_signed(delta)
            .min(count - 1);
    }

    fn cursor_type(&self) -> Option<PokemonType> {
        self.state.selectable_types().get(self.type_cursor).copied()
    }

    // ── Rendering ───────────────────────────────────────────────

    fn pane_border(&self, pane: Pane) -> Style {
        if self.focused && self.pane == pane {
            theme::border_focused()
        } else {
            theme::border_default()
        }
    }

    fn render_error(frame: &mut Frame, area: Rect, message: &str) {
        let block = Block::default()
            .title(" Error ")
            .title_style(Style::default().fg(theme::ERROR_RED).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ERROR_RED));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Something went wrong while loading the catalog.",
                Style::default().fg(theme::ERROR_RED).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(message.to_owned(), theme::table_row())),
            Line::from(""),
            Line::from(vec![
                Span::styled("q ", theme::key_hint_key()),
                Span::styled("quit", theme::key_hint()),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_throbber(&self, frame: &mut Frame, area: Rect, label: &'static str) {
        let rows = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        let throbber = Throbber::default()
            .label(label)
            .style(Style::default().fg(theme::NEON_CYAN))
            .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));

        frame.render_stateful_widget(throbber, rows[1], &mut self.throbber_state.clone());
    }

    fn render_types(&self, frame: &mut Frame, area: Rect) {
        let selected = &self.state.selected_types;
        let block = Block::default()
            .title(format!(" Types ({}/{MAX_SELECTED_TYPES}) ", selected.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.pane_border(Pane::Types));

        let cursor = (self.focused && self.pane == Pane::Types).then_some(self.type_cursor);
        let chips = render_type_chips(&self.state.selectable_types(), selected, cursor);

        frame.render_widget(
            Paragraph::new(chips).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn roster_title(&self) -> String {
        let mut title = format!(
            " Pokémon ({}) · ★ {} ",
            self.state.displayed.len(),
            self.state.favourites.len()
        );
        match self.state.filters.get(FilterField::Favourite) {
            Some(true) => title.push_str("· favourites only "),
            Some(false) => title.push_str("· hiding favourites "),
            None => {}
        }
        if !self.state.query.is_empty() {
            title.push_str(&format!("· \"{}\" ", self.state.query));
        }
        title
    }

    fn render_roster(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(self.roster_title())
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.pane_border(Pane::Roster));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.state.loading {
            self.render_throbber(frame, inner, "  Filtering by type...");
            return;
        }

        if self.state.displayed.is_empty() {
            let rows = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
            frame.render_widget(
                Paragraph::new(Span::styled("No Pokémon found", theme::key_hint()))
                    .alignment(Alignment::Center),
                rows[1],
            );
            return;
        }

        let header = Row::new(vec![
            Cell::from("#").style(theme::table_header()),
            Cell::from("Name").style(theme::table_header()),
            Cell::from("Types").style(theme::table_header()),
            Cell::from("Gen").style(theme::table_header()),
            Cell::from("★").style(theme::table_header()),
        ]);

        let selected_idx = self.selected_index();
        let rows: Vec<Row> = self
            .state
            .displayed
            .iter()
            .enumerate()
            .map(|(i, resource)| {
                let is_selected = i == selected_idx;
                let prefix = if is_selected { "▸" } else { " " };
                let id = resource
                    .id()
                    .map_or_else(|| "?".into(), |id| format!("{id:03}"));

                let types: Vec<Span> = self
                    .state
                    .types_of(&resource.name)
                    .unwrap_or_default()
                    .iter()
                    .map(|ty| {
                        Span::styled(format!("{ty} "), Style::default().fg(theme::type_color(*ty)))
                    })
                    .collect();

                let generation = if is_original_generation(resource) {
                    Span::styled("I", theme::key_hint())
                } else {
                    Span::raw("")
                };

                let star = if self.state.is_favourite(&resource.name) {
                    Span::styled("★", theme::favourite())
                } else {
                    Span::raw("")
                };

                Row::new(vec![
                    Cell::from(id),
                    Cell::from(format!("{prefix}{}", resource.name)),
                    Cell::from(Line::from(types)),
                    Cell::from(generation),
                    Cell::from(star),
                ])
                .style(if is_selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                })
            })
            .collect();

        let widths = [
            Constraint::Length(5),
            Constraint::Min(16),
            Constraint::Length(18),
            Constraint::Length(3),
            Constraint::Length(2),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state;
        frame.render_stateful_widget(table, inner, &mut state);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let mut spans = match self.pane {
            Pane::Types => vec![
                Span::styled("  h/l ", theme::key_hint_key()),
                Span::styled("move  ", theme::key_hint()),
                Span::styled("Space ", theme::key_hint_key()),
                Span::styled("toggle type  ", theme::key_hint()),
            ],
            Pane::Roster => vec![
                Span::styled("  j/k ", theme::key_hint_key()),
                Span::styled("navigate  ", theme::key_hint()),
                Span::styled("f ", theme::key_hint_key()),
                Span::styled("favourite  ", theme::key_hint()),
            ],
        };
        spans.extend([
            Span::styled("Tab ", theme::key_hint_key()),
            Span::styled("switch pane", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for CatalogScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The session is over once the engine reports an error
        if self.state.has_error() {
            return Ok(None);
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.pane = match self.pane {
                Pane::Types => Pane::Roster,
                Pane::Roster => Pane::Types,
            };
            return Ok(None);
        }

        let action = match (self.pane, key.code) {
            (Pane::Types, KeyCode::Char('h') | KeyCode::Left) => {
                self.move_type_cursor(-1);
                None
            }
            (Pane::Types, KeyCode::Char('l') | KeyCode::Right) => {
                self.move_type_cursor(1);
                None
            }
            (Pane::Types, KeyCode::Char(' ') | KeyCode::Enter) => {
                self.cursor_type().map(Action::ToggleType)
            }

            (Pane::Roster, KeyCode::Char('j') | KeyCode::Down) => {
                self.move_selection(1);
                None
            }
            (Pane::Roster, KeyCode::Char('k') | KeyCode::Up) => {
                self.move_selection(-1);
                None
            }
            (Pane::Roster, KeyCode::Char('g') | KeyCode::Home) => {
                self.select(0);
                None
            }
            (Pane::Roster, KeyCode::Char('G') | KeyCode::End) => {
                self.select(usize::MAX);
                None
            }
            (Pane::Roster, KeyCode::Char('f')) => {
                self.selected_resource().cloned().map(Action::ToggleFavourite)
            }

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::StateUpdated(state) => {
                self.state = Arc::clone(state);
                self.select(self.selected_index());
                self.move_type_cursor(0);
            }
            Action::CatalogReady => self.ready = true,
            Action::Tick => {
                if !self.ready || self.state.loading {
                    self.throbber_state.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref message) = self.state.error {
            Self::render_error(frame, area, message);
            return;
        }

        if !self.ready {
            self.render_throbber(frame, area, "  Loading catalog...");
            return;
        }

        let layout = Layout::vertical([
            Constraint::Length(4), // type selector
            Constraint::Min(3),    // roster
            Constraint::Length(1), // hints
        ])
        .split(area);

        self.render_types(frame, layout[0]);
        self.render_roster(frame, layout[1]);
        self.render_hints(frame, layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Catalog"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mon(name: &str, id: u32) -> NamedResource {
        NamedResource::new(name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
    }

    fn ty(name: &str, id: u32) -> NamedResource {
        NamedResource::new(name, format!("https://pokeapi.co/api/v2/type/{id}/"))
    }

    fn loaded_state() -> EngineState {
        let roster = vec![mon("bulbasaur", 1), mon("charmander", 4), mon("squirtle", 7)];
        EngineState {
            type_roster: vec![ty("fire", 10), ty("unknown", 10001), ty("water", 11)],
            displayed: roster.clone(),
            roster,
            ..EngineState::default()
        }
    }

    fn screen_with(state: EngineState) -> CatalogScreen {
        let mut screen = CatalogScreen::new();
        screen.set_focused(true);
        screen.update(&Action::StateUpdated(Arc::new(state))).unwrap();
        screen.update(&Action::CatalogReady).unwrap();
        screen
    }

    fn render_to_string(screen: &CatalogScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn favourite_key_targets_selected_row() {
        let mut screen = screen_with(loaded_state());
        screen.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        let action = screen.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        assert_eq!(action, Some(Action::ToggleFavourite(mon("charmander", 4))));
    }

    #[test]
    fn selection_stops_at_last_row() {
        let mut screen = screen_with(loaded_state());
        for _ in 0..10 {
            screen.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(screen.selected_resource(), Some(&mon("squirtle", 7)));
    }

    #[test]
    fn type_cursor_skips_unselectable_types() {
        let mut screen = screen_with(loaded_state());
        screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(screen.pane, Pane::Types);

        screen.handle_key_event(key(KeyCode::Char('l'))).unwrap();
        screen.handle_key_event(key(KeyCode::Char('l'))).unwrap();
        let action = screen.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(action, Some(Action::ToggleType(PokemonType::Water)));
    }

    #[test]
    fn shrinking_roster_clamps_selection() {
        let mut screen = screen_with(loaded_state());
        screen.handle_key_event(key(KeyCode::Char('G'))).unwrap();

        let mut narrowed = loaded_state();
        narrowed.displayed.truncate(1);
        screen.update(&Action::StateUpdated(Arc::new(narrowed))).unwrap();
        assert_eq!(screen.selected_resource(), Some(&mon("bulbasaur", 1)));
    }

    #[test]
    fn keys_are_ignored_after_error() {
        let mut state = loaded_state();
        state.error = Some("catalog unavailable".into());
        let mut screen = screen_with(state);
        let action = screen.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        assert_eq!(action, None);
        assert!(render_to_string(&screen).contains("Something went wrong"));
    }

    #[test]
    fn empty_roster_shows_placeholder() {
        let mut state = loaded_state();
        state.displayed.clear();
        let screen = screen_with(state);
        assert!(render_to_string(&screen).contains("No Pokémon found"));
    }

    #[test]
    fn first_generation_rows_are_marked() {
        let mut state = loaded_state();
        state.displayed.push(mon("chikorita", 152));
        let screen = screen_with(state);

        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect();
        let row_of = |name: &str| lines.iter().find(|l| l.contains(name)).unwrap().clone();

        assert!(row_of("bulbasaur").contains(" I "));
        assert!(!row_of("chikorita").contains(" I "));
    }

    #[test]
    fn title_counts_favourites() {
        let mut state = loaded_state();
        state.favourites.insert("squirtle");
        let screen = screen_with(state);
        let rendered = render_to_string(&screen);
        assert!(rendered.contains("Pokémon (3) · ★ 1"));
        assert!(rendered.contains("squirtle"));
    }

    #[test]
    fn loading_before_catalog_is_ready() {
        let mut screen = CatalogScreen::new();
        screen
            .update(&Action::StateUpdated(Arc::new(loaded_state())))
            .unwrap();
        assert!(render_to_string(&screen).contains("Loading catalog"));
    }
}
