use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::StyleExt;
use crate::{keys, style::Style as AppStyle};

/// The welcome tab.
pub fn draw(frame: &mut Frame, style: &AppStyle, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.muted_color()));

    let key = |code: crossterm::event::KeyCode| {
        Span::styled(
            code.to_string().to_lowercase(),
            Style::default().fg(style.accent_color()),
        )
    };
    let text = |s: &'static str| Span::styled(s, Style::default().fg(style.text_color()));

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to tunesearch",
            Style::default()
                .fg(style.accent_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(text("Search the iTunes catalog for songs and browse them by genre.")),
        Line::default(),
        Line::from(vec![
            text("Press "),
            key(keys::KEY_NEXT_TAB),
            text(" to open the Search tab, type a term and press "),
            key(keys::KEY_SELECT),
            text("."),
        ]),
        Line::from(vec![
            text("Use "),
            key(keys::KEY_DOWN),
            text(" to move into the results and "),
            key(keys::KEY_SELECT),
            text(" to see a song's details."),
        ]),
        Line::from(vec![
            text("Press "),
            key(keys::KEY_MENU),
            text(" for the menu."),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
