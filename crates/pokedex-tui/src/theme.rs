//! Palette and semantic styles.

use ratatui::style::{Color, Modifier, Style};

use pokedex_core::PokemonType;

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

// ── Type colors ───────────────────────────────────────────────────────

/// Chip color for a type tag.
pub fn type_color(ty: PokemonType) -> Color {
    match ty {
        PokemonType::Bug => Color::Rgb(166, 185, 26),
        PokemonType::Dark => Color::Rgb(112, 87, 70),
        PokemonType::Dragon => Color::Rgb(111, 53, 252),
        PokemonType::Electric => Color::Rgb(247, 208, 44),
        PokemonType::Fairy => Color::Rgb(214, 133, 173),
        PokemonType::Fighting => Color::Rgb(194, 46, 40),
        PokemonType::Fire => Color::Rgb(238, 129, 48),
        PokemonType::Flying => Color::Rgb(169, 143, 243),
        PokemonType::Ghost => Color::Rgb(115, 87, 151),
        PokemonType::Grass => Color::Rgb(122, 199, 76),
        PokemonType::Ground => Color::Rgb(226, 191, 101),
        PokemonType::Ice => Color::Rgb(150, 217, 214),
        PokemonType::Normal => Color::Rgb(168, 167, 122),
        PokemonType::Poison => Color::Rgb(163, 62, 161),
        PokemonType::Psychic => Color::Rgb(249, 85, 135),
        PokemonType::Rock => Color::Rgb(182, 161, 54),
        PokemonType::Steel => Color::Rgb(183, 183, 206),
        PokemonType::Water => Color::Rgb(99, 144, 240),
    }
}

// ── Semantic Styles ───────────────────────────────────────────────────

pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(NEON_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

pub fn table_selected() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Favourite star.
pub fn favourite() -> Style {
    Style::default().fg(ELECTRIC_YELLOW)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}
