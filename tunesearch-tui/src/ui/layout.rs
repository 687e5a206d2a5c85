use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ── Main vertical layout ────────────────────────────────────────────────────

pub const HEADER_HEIGHT: u16 = 1;
pub const TABS_HEIGHT: u16 = 1;
pub const CONTENT_MIN_HEIGHT: u16 = 3;
pub const HELP_BAR_HEIGHT: u16 = 1;

pub struct MainLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub help_bar: Rect,
}

pub fn split_main(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(CONTENT_MIN_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);
    MainLayout {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        help_bar: chunks[3],
    }
}

// ── Search tab ──────────────────────────────────────────────────────────────

pub const SEARCH_INPUT_HEIGHT: u16 = 3;
pub const SEARCH_STATUS_HEIGHT: u16 = 1;
pub const SONG_INDENT: usize = 2;

pub struct SearchLayout {
    pub input: Rect,
    pub status: Rect,
    pub results: Rect,
}

pub fn split_search(area: Rect) -> SearchLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(SEARCH_STATUS_HEIGHT),
            Constraint::Min(1),
        ])
        .split(area);
    SearchLayout {
        input: chunks[0],
        status: chunks[1],
        results: chunks[2],
    }
}

// ── Drawer ──────────────────────────────────────────────────────────────────

pub const DRAWER_WIDTH: u16 = 20;

/// The drawer slides over the left edge of the content area.
pub fn drawer_rect(content: Rect) -> Rect {
    Rect::new(
        content.x,
        content.y,
        DRAWER_WIDTH.min(content.width),
        content.height,
    )
}

// ── Detail screen ───────────────────────────────────────────────────────────

pub const DETAIL_LABEL_WIDTH: usize = 10;

// ── Interaction constants ───────────────────────────────────────────────────

pub const PAGE_SCROLL_SIZE: usize = 20;

// ── Log view ────────────────────────────────────────────────────────────────

pub const LOG_TARGET_WIDTH: usize = 24;
pub const LOG_TARGET_SUFFIX_LEN: usize = 21;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_main_fills_area() {
        let main = split_main(Rect::new(0, 0, 80, 24));
        assert_eq!(main.header.height, HEADER_HEIGHT);
        assert_eq!(main.tabs.y, 1);
        assert_eq!(main.content.height, 24 - 3);
        assert_eq!(main.help_bar.y, 23);
    }

    #[test]
    fn test_drawer_rect_clamps_to_content() {
        let narrow = Rect::new(0, 2, 12, 10);
        assert_eq!(drawer_rect(narrow), Rect::new(0, 2, 12, 10));
        let wide = Rect::new(0, 2, 80, 10);
        assert_eq!(drawer_rect(wide).width, DRAWER_WIDTH);
    }
}
