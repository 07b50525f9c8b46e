//! Status bar rendering with keybindings and power indicator

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    powered: bool,
    is_error: bool,
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(theme.border_normal);

    // Left side: power badge and message
    let left_spans = vec![
        Span::styled(
            if powered { " ON " } else { " OFF " },
            Style::default()
                .bg(if powered { theme.expression } else { theme.dim })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar_style.fg(theme.dim)),
        Span::styled(
            format!(" {} ", message),
            bar_style.fg(if is_error { theme.error } else { theme.fg }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(theme.dim).fg(Color::Black);
    let desc_style = bar_style.fg(theme.fg);
    let sep_style = bar_style.fg(theme.dim);

    let right_spans = vec![
        Span::styled(" F1 ", key_style),
        Span::styled(" power ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" F2/F3 ", key_style),
        Span::styled(" deg/rad ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" F5-F8 ", key_style),
        Span::styled(" memory ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(" = ", desc_style),
        Span::styled("│", sep_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
