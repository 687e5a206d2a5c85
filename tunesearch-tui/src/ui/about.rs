use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::StyleExt;
use crate::config::Config;

pub fn draw(frame: &mut Frame, config: &Config, area: Rect) {
    let style = &config.style;
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.muted_color()));

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{label:<10}"),
                Style::default().fg(style.muted_color()),
            ),
            Span::styled(value, Style::default().fg(style.text_color())),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("tunesearch {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(style.accent_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Song search results come from the iTunes Search API, fetched through a public relay.",
            Style::default().fg(style.text_color()),
        )),
        Line::default(),
        row("Endpoint", config.endpoint.search_url.clone()),
        row("Relay", config.endpoint.relay_host.clone()),
        row("Timeout", format!("{:?}", config.endpoint.timeout())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
