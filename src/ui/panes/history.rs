//! Calculation history pane

use crate::calculator::History;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render past calculations, newest first
pub fn render_history_pane(frame: &mut Frame, area: Rect, history: &History, theme: &Theme) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.function_key))
        .style(Style::default().bg(theme.bg));

    if history.is_empty() {
        let paragraph = Paragraph::new("(no calculations yet)")
            .block(block)
            .style(Style::default().fg(theme.dim));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let items: Vec<ListItem> = history
        .entries()
        .rev()
        .take(visible_height)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.expression.clone(), Style::default().fg(theme.expression)),
                Span::styled(" = ", Style::default().fg(theme.dim)),
                Span::styled(
                    entry.result.clone(),
                    Style::default()
                        .fg(theme.result)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
