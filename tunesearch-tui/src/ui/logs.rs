use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{StyleExt, layout};
use crate::{keys::Action, log_buffer::LogBuffer, style::Style as AppStyle};

pub struct LogsState {
    pub log_buffer: LogBuffer,
    pub scroll_offset: usize,
}

impl LogsState {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            log_buffer,
            scroll_offset: 0,
        }
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_offset = self.log_buffer.len().saturating_sub(1);
    }
}

pub fn draw(frame: &mut Frame, logs: &mut LogsState, style: &AppStyle, area: Rect) {
    let entries = logs.log_buffer.get_entries();

    let block = Block::default()
        .title(format!(" Logs ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() {
        let empty =
            Paragraph::new("No log entries").style(Style::default().fg(style.muted_color()));
        frame.render_widget(empty, inner);
        return;
    }

    let text_color = style.text_color();
    let muted_color = style.muted_color();

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (level_str, level_color) = match entry.level {
                tracing::Level::ERROR => ("ERR", Color::Red),
                tracing::Level::WARN => ("WRN", Color::Yellow),
                tracing::Level::INFO => ("INF", Color::Cyan),
                tracing::Level::DEBUG => ("DBG", Color::Green),
                tracing::Level::TRACE => ("TRC", muted_color),
            };

            let target = if entry.target.len() > layout::LOG_TARGET_WIDTH {
                let start = entry.target.len() - layout::LOG_TARGET_SUFFIX_LEN;
                let cut = (start..entry.target.len())
                    .find(|&i| entry.target.is_char_boundary(i))
                    .unwrap_or(entry.target.len());
                format!("...{}", &entry.target[cut..])
            } else {
                entry.target.clone()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    level_str,
                    Style::default()
                        .fg(level_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{target:width$}", width = layout::LOG_TARGET_WIDTH),
                    Style::default().fg(muted_color),
                ),
                Span::raw(" "),
                Span::styled(entry.message.clone(), Style::default().fg(text_color)),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(style.selected_color())
            .add_modifier(Modifier::BOLD),
    );

    logs.scroll_offset = logs.scroll_offset.min(entries.len() - 1);
    let mut state = ListState::default();
    state.select(Some(logs.scroll_offset));

    frame.render_stateful_widget(list, inner, &mut state);
}

pub fn handle_key(logs: &mut LogsState, action: Action) {
    let last = logs.log_buffer.len().saturating_sub(1);
    match action {
        Action::MoveUp => logs.scroll_offset = logs.scroll_offset.saturating_sub(1),
        Action::MoveDown => logs.scroll_offset = (logs.scroll_offset + 1).min(last),
        Action::PageUp => {
            logs.scroll_offset = logs.scroll_offset.saturating_sub(layout::PAGE_SCROLL_SIZE);
        }
        Action::PageDown => {
            logs.scroll_offset = (logs.scroll_offset + layout::PAGE_SCROLL_SIZE).min(last);
        }
        Action::GotoTop => logs.scroll_offset = 0,
        Action::GotoBottom => logs.scroll_offset = last,
        _ => {}
    }
}
