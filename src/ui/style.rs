//! Colors and text styles for the grid.
//!
//! Uses the basic ANSI palette so the terminal theme decides the exact
//! shades.

use ratatui::style::{Color, Modifier, Style};

/// Column headers and the `Row Sum` / `Actions` titles.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Clickable controls (`[x]`, `[del]`, `[ Add Row ]`).
pub fn control_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub fn add_row_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Style of a matrix cell given its amount and hover state.
pub fn cell_style(amount: i64, highlighted: bool, at_cursor: bool) -> Style {
    let mut style = if highlighted {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    } else if amount == 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    if at_cursor {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    style
}

/// Leading share of a cell filled in percentage display.
pub fn percent_fill_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

pub fn sum_style(hovered: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if hovered {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Labels for the average and median rows.
pub fn label_style() -> Style {
    Style::default()
        .fg(Color::Indexed(245))
        .add_modifier(Modifier::ITALIC)
}

pub fn median_style() -> Style {
    Style::default().fg(Color::Green)
}
