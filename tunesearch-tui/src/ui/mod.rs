pub(crate) mod about;
pub(crate) mod detail;
pub(crate) mod home;
pub(crate) mod layout;
pub(crate) mod logs;
pub(crate) mod search;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
};
use smol_str::ToSmolStr as _;
use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

use crate::{
    app::{App, Destination, Tab},
    keys,
    style::{self as app_style, Hsv},
    ui::search::SearchFocus,
};

/// Extension trait for turning configured HSV colours into ratatui colours.
pub trait StyleExt {
    fn background_color(&self) -> Color;
    fn text_color(&self) -> Color;
    fn accent_color(&self) -> Color;
    fn muted_color(&self) -> Color;
    fn artist_color(&self) -> Color;
    fn year_color(&self) -> Color;
    fn selected_color(&self) -> Color;
    fn error_color(&self) -> Color;
}
impl StyleExt for app_style::Style {
    fn background_color(&self) -> Color {
        hsv_to_color(self.background_hsv)
    }
    fn text_color(&self) -> Color {
        hsv_to_color(self.text_hsv)
    }
    fn accent_color(&self) -> Color {
        hsv_to_color(self.accent_hsv)
    }
    fn muted_color(&self) -> Color {
        hsv_to_color(self.muted_hsv)
    }
    fn artist_color(&self) -> Color {
        hsv_to_color(self.artist_hsv)
    }
    fn year_color(&self) -> Color {
        hsv_to_color(self.year_hsv)
    }
    fn selected_color(&self) -> Color {
        hsv_to_color(self.selected_hsv)
    }
    fn error_color(&self) -> Color {
        hsv_to_color(self.error_hsv)
    }
}

/// HSV (all 0-1) to a gamma-corrected terminal colour.
fn hsv_to_color([h, s, v]: Hsv) -> Color {
    #![allow(clippy::many_single_char_names)]
    let h = (h.fract() + 1.0).fract(); // wrap
    let s = s.clamp(0.0, 1.0);

    let f = h * 6.0 - (h * 6.0).floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let [r, g, b] = match (h * 6.0).floor() as i32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    fn gamma_u8_from_linear_f32(l: f32) -> u8 {
        if l <= 0.0 {
            0
        } else if l <= 0.0031308 {
            (3294.6 * l + 0.5) as u8
        } else if l <= 1.0 {
            (269.025 * l.powf(1.0 / 2.4) - 14.025 + 0.5) as u8
        } else {
            255
        }
    }

    Color::Rgb(
        gamma_u8_from_linear_f32(r),
        gamma_u8_from_linear_f32(g),
        gamma_u8_from_linear_f32(b),
    )
}

/// Hashes a string to produce a stable colour, used for genre headings.
pub fn string_to_color(s: &str) -> Color {
    hsv_to_color(app_style::string_to_hsv(s))
}

/// Cut `s` to at most `max_width` display columns, ending in an ellipsis when
/// anything was removed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    let style = &app.config.style;

    let bg = Block::default().style(Style::default().bg(style.background_color()));
    frame.render_widget(bg, size);

    let main = layout::split_main(size);

    draw_header(frame, app, main.header);
    if app.destination == Destination::Search {
        draw_tabs(frame, app, main.tabs);
    }

    if app.logs_open {
        logs::draw(frame, &mut app.logs, &app.config.style, main.content);
    } else {
        match (app.destination, app.tab) {
            (Destination::About, _) => about::draw(frame, &app.config, main.content),
            (Destination::Search, Tab::Home) => home::draw(frame, &app.config.style, main.content),
            (Destination::Search, Tab::Search) => {
                if let Some(song) = &app.search.detail {
                    detail::draw(frame, song, &app.config.style, main.content);
                } else {
                    let state = app.logic.get_state();
                    let state = state.read().unwrap();
                    search::draw(
                        frame,
                        &app.search,
                        &state,
                        &app.config.style,
                        app.tick_count,
                        main.content,
                    );
                }
            }
        }
    }

    if let Some(selected) = app.drawer {
        draw_drawer(frame, &app.config.style, selected, main.content);
    }

    draw_help_bar(frame, app, main.help_bar);

    if app.quit_confirming {
        draw_quit_confirm(frame, &app.config.style, size);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let style = &app.config.style;
    let mut spans = vec![
        Span::styled(
            " tunesearch",
            Style::default()
                .fg(style.accent_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{00B7} ", Style::default().fg(style.muted_color())),
        Span::styled(
            app.destination.as_str(),
            Style::default().fg(style.text_color()),
        ),
    ];
    if app.destination == Destination::Search
        && app.tab == Tab::Search
        && let Some(song) = &app.search.detail
    {
        spans.push(Span::styled(
            " \u{203A} ",
            Style::default().fg(style.muted_color()),
        ));
        spans.push(Span::styled(
            truncate_to_width(&song.title, area.width as usize / 2),
            Style::default().fg(style.text_color()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let style = &app.config.style;
    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.as_str()))
        .select(app.tab.index())
        .style(Style::default().fg(style.muted_color()))
        .highlight_style(
            Style::default()
                .fg(style.accent_color())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, area);
}

fn draw_drawer(frame: &mut Frame, style: &app_style::Style, selected: usize, content: Rect) {
    let area = layout::drawer_rect(content);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent_color()))
        .style(Style::default().bg(style.background_color()));

    let items: Vec<ListItem> = Destination::ALL
        .iter()
        .map(|d| {
            ListItem::new(Line::from(Span::styled(
                format!(" {}", d.as_str()),
                Style::default().fg(style.text_color()),
            )))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(style.selected_color()));
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_help_bar(frame: &mut Frame, app: &App, area: Rect) {
    let style = &app.config.style;

    let help_actions: &[keys::Action] = if app.drawer.is_some() {
        keys::DRAWER_HELP
    } else if app.logs_open {
        keys::LOGS_HELP
    } else {
        match (app.destination, app.tab) {
            (Destination::About, _) => keys::ABOUT_HELP,
            (Destination::Search, Tab::Home) => keys::PAGE_HELP,
            (Destination::Search, Tab::Search) => {
                if app.search.detail.is_some() {
                    keys::DETAIL_HELP
                } else if app.search.focus == SearchFocus::Results {
                    keys::RESULTS_HELP
                } else {
                    keys::SEARCH_INPUT_HELP
                }
            }
        }
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for action in help_actions {
        if let Some((key, label)) = action.help_label() {
            spans.push(Span::styled(
                key.to_string(),
                Style::default().fg(style.accent_color()),
            ));
            spans.push(Span::styled(
                format!(":{label} "),
                Style::default().fg(style.muted_color()),
            ));
        }
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(style.background_color()));
    frame.render_widget(help, area);
}

fn draw_quit_confirm(frame: &mut Frame, style: &app_style::Style, size: Rect) {
    let yes = keys::KEY_CONFIRM_YES.to_smolstr();
    let no = keys::KEY_CONFIRM_NO.to_smolstr();
    let prompt = format!("Quit? {yes}/{no}");
    let popup_width = prompt.len() as u16 + 4; // border (2) + padding (2)
    let popup_height = 3_u16;
    let x = size.x + (size.width.saturating_sub(popup_width)) / 2;
    let y = size.y + (size.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width.min(size.width), popup_height.min(size.height));

    frame.render_widget(Clear, popup_area);
    let popup = Paragraph::new(format!(" {prompt}"))
        .block(Block::bordered().style(Style::default().fg(style.text_color())))
        .style(Style::default().fg(style.text_color()).bg(style.background_color()));
    frame.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly", 7), "exactly");
        assert_eq!(truncate_to_width("a longer title", 6), "a lon\u{2026}");
        assert_eq!(truncate_to_width("anything", 0), "");
        // Wide characters take two columns each.
        assert_eq!(truncate_to_width("日本語の歌", 5), "日本\u{2026}");
    }

    #[test]
    fn test_hsv_to_color() {
        assert_eq!(hsv_to_color([0.0, 0.0, 0.0]), Color::Rgb(0, 0, 0));
        assert_eq!(hsv_to_color([0.0, 0.0, 1.0]), Color::Rgb(255, 255, 255));
        assert_eq!(hsv_to_color([0.0, 1.0, 1.0]), Color::Rgb(255, 0, 0));
    }
}
