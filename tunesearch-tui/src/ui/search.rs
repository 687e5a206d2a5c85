use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tunesearch_core::{
    SearchState, SearchStatus,
    tunesearch_state::{GenreGroup, Song, year_label},
};
use unicode_width::UnicodeWidthStr as _;

use super::{StyleExt, layout, string_to_color, truncate_to_width};
use crate::{keys::Action, style::Style as AppStyle};

/// Which part of the search tab has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    Results,
}

/// What the search tab asks of the rest of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Submit(String),
}

/// UI-side state of the search tab: the text being edited, the selection in
/// the results, and the detail screen pushed on top of them.
pub struct SearchView {
    pub input: String,
    pub focus: SearchFocus,
    /// Index into the songs in grouped order.
    pub selected_index: usize,
    pub detail: Option<Song>,
    seen_generation: u64,
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focus: SearchFocus::Input,
            selected_index: 0,
            detail: None,
            seen_generation: 0,
        }
    }

    /// Catch up with the controller. A new submit resets the selection and
    /// pops the detail screen.
    pub fn sync(&mut self, state: &SearchState) {
        if state.generation() != self.seen_generation {
            self.seen_generation = state.generation();
            self.selected_index = 0;
            self.detail = None;
        }
        let count = song_count(state.groups());
        if count == 0 {
            self.focus = SearchFocus::Input;
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }
}

/// Total number of songs across all groups.
pub fn song_count(groups: &[GenreGroup]) -> usize {
    groups.iter().map(|g| g.songs.len()).sum()
}

/// The song at `index` in grouped order.
pub fn song_at(groups: &[GenreGroup], index: usize) -> Option<&Song> {
    groups.iter().flat_map(|g| g.songs.iter()).nth(index)
}

/// The list row of the song at `index`, counting one heading row per group.
pub fn row_of(groups: &[GenreGroup], index: usize) -> usize {
    let mut remaining = index;
    let mut row = 0;
    for group in groups {
        row += 1;
        if remaining < group.songs.len() {
            return row + remaining;
        }
        remaining -= group.songs.len();
        row += group.songs.len();
    }
    row
}

pub fn handle_key(
    view: &mut SearchView,
    state: &SearchState,
    action: Action,
) -> Option<SearchAction> {
    if view.detail.is_some() {
        if action == Action::Back {
            view.detail = None;
        }
        return None;
    }

    let count = song_count(state.groups());
    match view.focus {
        SearchFocus::Input => match action {
            Action::Char(c) => view.input.push(c),
            Action::DeleteChar => {
                view.input.pop();
            }
            Action::ClearLine => view.input.clear(),
            Action::Submit => return Some(SearchAction::Submit(view.input.clone())),
            Action::MoveDown if count > 0 => view.focus = SearchFocus::Results,
            _ => {}
        },
        SearchFocus::Results => match action {
            Action::MoveUp => {
                if view.selected_index == 0 {
                    view.focus = SearchFocus::Input;
                } else {
                    view.selected_index -= 1;
                }
            }
            Action::MoveDown => {
                view.selected_index = (view.selected_index + 1).min(count.saturating_sub(1));
            }
            Action::PageUp => {
                view.selected_index = view
                    .selected_index
                    .saturating_sub(layout::PAGE_SCROLL_SIZE);
            }
            Action::PageDown => {
                view.selected_index =
                    (view.selected_index + layout::PAGE_SCROLL_SIZE).min(count.saturating_sub(1));
            }
            Action::GotoTop => view.selected_index = 0,
            Action::GotoBottom => view.selected_index = count.saturating_sub(1),
            Action::Select => {
                view.detail = song_at(state.groups(), view.selected_index).cloned();
            }
            Action::FocusInput => view.focus = SearchFocus::Input,
            _ => {}
        },
    }
    None
}

pub fn draw(
    frame: &mut Frame,
    view: &SearchView,
    state: &SearchState,
    style: &AppStyle,
    tick_count: u64,
    area: Rect,
) {
    let areas = layout::split_search(area);

    // Search input
    let input_focused = view.focus == SearchFocus::Input;
    let border_color = if input_focused {
        style.accent_color()
    } else {
        style.muted_color()
    };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(style.accent_color())),
        Span::styled(view.input.as_str(), Style::default().fg(style.text_color())),
    ];
    if input_focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(style.accent_color()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), areas.input);

    // Status
    let status_line = match &state.status {
        SearchStatus::Loading => Line::from(Span::styled(
            format!(
                "{} {}",
                spinner_frame(tick_count),
                SearchStatus::LOADING_MESSAGE
            ),
            Style::default().fg(style.accent_color()),
        )),
        SearchStatus::Error(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(style.error_color()),
        )),
        SearchStatus::Ready => Line::from(Span::styled(
            format!(
                "{} songs in {} genres",
                state.songs().len(),
                state.groups().len()
            ),
            Style::default().fg(style.muted_color()),
        )),
        status => Line::from(Span::styled(
            status.message().unwrap_or_default().to_string(),
            Style::default().fg(style.muted_color()),
        )),
    };
    frame.render_widget(Paragraph::new(status_line), areas.status);

    // Results
    if state.groups().is_empty() {
        return;
    }

    let width = areas.results.width as usize;
    let results_focused = view.focus == SearchFocus::Results;
    let mut items: Vec<ListItem> = vec![];
    let mut index = 0;
    for group in state.groups() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                group.genre.to_string(),
                Style::default()
                    .fg(string_to_color(&group.genre))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", group.songs.len()),
                Style::default().fg(style.muted_color()),
            ),
        ])));
        for song in &group.songs {
            let selected = results_focused && index == view.selected_index;
            items.push(song_item(song, style, width, selected));
            index += 1;
        }
    }

    let mut list_state = ListState::default();
    if results_focused {
        list_state.select(Some(row_of(state.groups(), view.selected_index)));
    }
    frame.render_stateful_widget(List::new(items), areas.results, &mut list_state);
}

/// One result row: indented title and artist on the left, year on the right.
fn song_item(song: &Song, style: &AppStyle, width: usize, selected: bool) -> ListItem<'static> {
    let year = year_label(&song.release_date);
    let available = width
        .saturating_sub(layout::SONG_INDENT)
        .saturating_sub(year.width() + 1);

    let title = truncate_to_width(&song.title, available);
    let artist = truncate_to_width(
        &format!(" \u{2014} {}", song.artist),
        available.saturating_sub(title.width()),
    );
    let used = layout::SONG_INDENT + title.width() + artist.width();
    let padding = width.saturating_sub(used + year.width());

    let line = Line::from(vec![
        Span::raw(" ".repeat(layout::SONG_INDENT)),
        Span::styled(title, Style::default().fg(style.text_color())),
        Span::styled(artist, Style::default().fg(style.artist_color())),
        Span::raw(" ".repeat(padding)),
        Span::styled(year, Style::default().fg(style.year_color())),
    ]);

    let item = ListItem::new(line);
    if selected {
        item.style(Style::default().bg(style.selected_color()))
    } else {
        item
    }
}

fn spinner_frame(tick_count: u64) -> char {
    const FRAMES: &[char] = &['\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}'];
    FRAMES[(tick_count as usize) % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use tunesearch_core::tunesearch_state::{SongId, group};

    use super::*;

    fn song(id: u64, genre: &str) -> Song {
        Song {
            id: SongId(id),
            title: format!("Song {id}"),
            artist: "Artist".to_string(),
            artwork_url: String::new(),
            release_date: "2001-01-01T00:00:00Z".to_string(),
            genre: Some(genre.to_string()),
            album: None,
            duration: None,
            store_url: None,
        }
    }

    #[test]
    fn test_row_of_skips_headings() {
        let groups = group(&[song(1, "Pop"), song(2, "Pop"), song(3, "Rock")]);
        assert_eq!(row_of(&groups, 0), 1);
        assert_eq!(row_of(&groups, 1), 2);
        assert_eq!(row_of(&groups, 2), 4);
        assert_eq!(song_at(&groups, 2).map(|s| s.id), Some(SongId(3)));
        assert_eq!(song_count(&groups), 3);
    }

    #[test]
    fn test_input_editing_and_submit() {
        let mut view = SearchView::new();
        let state = SearchState::default();
        for c in "abba".chars() {
            handle_key(&mut view, &state, Action::Char(c));
        }
        handle_key(&mut view, &state, Action::DeleteChar);
        assert_eq!(view.input, "abb");
        assert_eq!(
            handle_key(&mut view, &state, Action::Submit),
            Some(SearchAction::Submit("abb".to_string()))
        );

        // Nothing to move into yet.
        handle_key(&mut view, &state, Action::MoveDown);
        assert_eq!(view.focus, SearchFocus::Input);

        handle_key(&mut view, &state, Action::ClearLine);
        assert!(view.input.is_empty());
    }
}
