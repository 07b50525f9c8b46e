//! Calculator display: mode indicators, expression line and result line

use crate::calculator::Calculator;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the display pane.
///
/// `result_text` is what the result line shows; `error` switches it to the
/// error color.
pub fn render_display_pane(
    frame: &mut Frame,
    area: Rect,
    calculator: &Calculator,
    result_text: &str,
    error: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" CALC-ARCADE ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.expression)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.display_bg));

    if !calculator.is_powered() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "OFF",
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Right)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let dim = Style::default().fg(theme.dim);
    let lit = Style::default()
        .fg(theme.expression)
        .add_modifier(Modifier::BOLD);

    // Memory indicator lights up once something is stored
    let memory_style = if calculator.memory_value() != "0" {
        lit
    } else {
        dim
    };

    let indicators = Line::from(vec![
        Span::styled(calculator.angle_mode().label(), lit),
        Span::styled("  ", dim),
        Span::styled("M", memory_style),
    ]);

    let expression = Line::from(Span::styled(
        calculator.expression().to_string(),
        Style::default().fg(theme.expression),
    ))
    .alignment(Alignment::Right);

    let result_color = if error { theme.error } else { theme.result };
    let result = Line::from(Span::styled(
        result_text.to_string(),
        Style::default()
            .fg(result_color)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    let paragraph = Paragraph::new(vec![indicators, expression, result]).block(block);
    frame.render_widget(paragraph, area);
}
