use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tunesearch_core::{
    tunesearch_state::{Song, year_label},
    util::duration_to_hms_string,
};

use super::{StyleExt, layout, string_to_color};
use crate::style::Style as AppStyle;

/// The song pushed on top of the results list.
pub fn draw(frame: &mut Frame, song: &Song, style: &AppStyle, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", song.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent_color()));

    let genre = song.genre_bucket();
    let mut lines = vec![
        Line::from(Span::styled(
            song.title.as_str(),
            Style::default()
                .fg(style.text_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            song.artist.as_str(),
            Style::default().fg(style.artist_color()),
        )),
        Line::default(),
    ];

    let mut field = |label: &str, value: Span<'static>| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label:width$}", width = layout::DETAIL_LABEL_WIDTH),
                Style::default().fg(style.muted_color()),
            ),
            value,
        ]));
    };
    if let Some(album) = &song.album {
        field("Album", Span::raw(album.clone()));
    }
    field(
        "Genre",
        Span::styled(genre.to_string(), Style::default().fg(string_to_color(genre))),
    );
    field(
        "Year",
        Span::styled(
            year_label(&song.release_date),
            Style::default().fg(style.year_color()),
        ),
    );
    if let Some(duration) = song.duration {
        field("Length", Span::raw(duration_to_hms_string(duration)));
    }
    field("Artwork", Span::raw(song.artwork_url.clone()));
    if let Some(store_url) = &song.store_url {
        field("Store", Span::raw(store_url.clone()));
    }
    field(
        "Track ID",
        Span::styled(song.id.to_string(), Style::default().fg(style.muted_color())),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
