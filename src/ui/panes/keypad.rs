//! On-screen keypad rendering

use crate::ui::keypad::{Action, Button, KeyKind, KEYPAD, KEYPAD_COLUMNS};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key_color(kind: KeyKind, theme: &Theme) -> Color {
    match kind {
        KeyKind::Digit => theme.digit_key,
        KeyKind::Operator => theme.expression,
        KeyKind::Function => theme.function_key,
        KeyKind::Control => theme.control_key,
        KeyKind::Memory => theme.panel,
    }
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    button: &Button,
    pressed: bool,
    powered: bool,
    theme: &Theme,
) {
    let mut border_style = Style::default().fg(key_color(button.kind, theme));
    let mut label_style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    // Everything but the power key looks dead while switched off
    if !powered && button.action != Action::TogglePower {
        border_style = Style::default().fg(theme.border_normal);
        label_style = Style::default().fg(theme.dim);
    } else if pressed {
        border_style = border_style.add_modifier(Modifier::BOLD);
        label_style = label_style
            .bg(key_color(button.kind, theme))
            .add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(button.label)
        .alignment(Alignment::Center)
        .style(label_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

/// Render the keypad grid, highlighting the most recently pressed key
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    last_pressed: Option<Action>,
    powered: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, KEYPAD.len() as u32); KEYPAD.len()])
        .split(inner);

    for (row, row_area) in KEYPAD.iter().zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, KEYPAD_COLUMNS as u32); KEYPAD_COLUMNS])
            .split(*row_area);

        for (button, cell) in row.iter().zip(cells.iter()) {
            let pressed = last_pressed == Some(button.action);
            render_button(frame, *cell, button, pressed, powered, theme);
        }
    }
}
