//! Type selector chips.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use pokedex_core::PokemonType;

use crate::theme;

/// Render one chip per selectable type.
///
/// Selected types are filled with their color; the others are outlined in
/// it. `cursor` marks the chip under the keyboard cursor, when the
/// selector has focus.
pub fn render_type_chips(
    types: &[PokemonType],
    selected: &[PokemonType],
    cursor: Option<usize>,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(types.len() * 2);

    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }

        let color = theme::type_color(*ty);
        let mut style = if selected.contains(ty) {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        let label = if cursor == Some(i) {
            style = style.add_modifier(Modifier::UNDERLINED);
            format!("[{ty}]")
        } else {
            format!(" {ty} ")
        };
        spans.push(Span::styled(label, style));
    }

    Line::from(spans)
}
