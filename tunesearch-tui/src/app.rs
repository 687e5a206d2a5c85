use tunesearch_core as tc;

use crate::{
    config::Config,
    keys::Action,
    log_buffer::LogBuffer,
    ui::{logs::LogsState, search::SearchView},
};

/// Top-level destinations reachable from the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Search,
    About,
}
impl Destination {
    pub const ALL: [Destination; 2] = [Destination::Search, Destination::About];

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Search => "Search",
            Destination::About => "About",
        }
    }
}

/// Tabs under the search destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Search,
}
impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Search];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// The tab `delta` steps away, wrapping around.
    pub fn offset(&self, delta: i32) -> Tab {
        let len = Self::ALL.len() as i32;
        let index = (self.index() as i32 + delta).rem_euclid(len);
        Self::ALL[index as usize]
    }
}

pub struct App {
    pub logic: tc::Logic,
    pub config: Config,

    // Navigation
    pub destination: Destination,
    pub tab: Tab,
    /// The highlighted drawer entry, while the drawer is open.
    pub drawer: Option<usize>,
    pub logs_open: bool,

    pub quit_confirming: bool,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,

    pub search: SearchView,
    pub logs: LogsState,
}

impl App {
    pub fn new(config: Config, logic: tc::Logic, log_buffer: LogBuffer) -> Self {
        Self {
            logic,
            config,

            destination: Destination::Search,
            tab: Tab::Home,
            drawer: None,
            logs_open: false,

            quit_confirming: false,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,

            search: SearchView::new(),
            logs: LogsState::new(log_buffer),
        }
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let state = self.logic.get_state();
        let state = state.read().unwrap();
        self.search.sync(&state);

        // Keeps the loading indicator animated.
        self.needs_redraw = true;
    }

    pub fn open_drawer(&mut self) {
        let current = Destination::ALL
            .iter()
            .position(|d| *d == self.destination)
            .unwrap_or(0);
        self.drawer = Some(current);
    }

    /// Handle a key while the drawer is open.
    pub fn handle_drawer_action(&mut self, action: Action) {
        let Some(index) = self.drawer else {
            return;
        };
        let len = Destination::ALL.len();
        match action {
            Action::MoveUp => self.drawer = Some((index + len - 1) % len),
            Action::MoveDown => self.drawer = Some((index + 1) % len),
            Action::Select => {
                self.destination = Destination::ALL[index];
                self.drawer = None;
            }
            Action::Back => self.drawer = None,
            Action::Quit => self.quit_confirming = true,
            _ => {}
        }
    }

    /// Switch tabs. Only the search destination has tabs.
    pub fn switch_tab(&mut self, delta: i32) {
        if self.destination == Destination::Search {
            self.tab = self.tab.offset(delta);
        }
    }

    pub fn toggle_logs(&mut self) {
        self.logs_open = !self.logs_open;
        if self.logs_open {
            self.logs.scroll_to_end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_offset_wraps() {
        assert_eq!(Tab::Home.offset(1), Tab::Search);
        assert_eq!(Tab::Search.offset(1), Tab::Home);
        assert_eq!(Tab::Home.offset(-1), Tab::Search);
        assert_eq!(Tab::Search.offset(2), Tab::Search);
    }

    #[test]
    fn test_destination_labels() {
        let labels: Vec<&str> = Destination::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(labels, ["Search", "About"]);
    }
}
