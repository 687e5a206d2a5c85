use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use smol_str::{SmolStr, ToSmolStr};

/// Centrally defined key actions for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Menu,
    Logs,
    NextTab,
    PreviousTab,
    FocusInput,
    Submit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GotoTop,
    GotoBottom,
    Select,
    Back,
    ClearLine,
    Char(char),
    DeleteChar,
}

// ── Key code constants ───────────────────────────────────────────

pub const KEY_QUIT: KeyCode = KeyCode::Char('q');
pub const KEY_MENU: KeyCode = KeyCode::Char('m');
pub const KEY_FOCUS_INPUT: KeyCode = KeyCode::Char('/');
pub const KEY_NEXT_TAB: KeyCode = KeyCode::Tab;
pub const KEY_PREVIOUS_TAB: KeyCode = KeyCode::BackTab;
pub const KEY_SELECT: KeyCode = KeyCode::Enter;
pub const KEY_BACK: KeyCode = KeyCode::Esc;
pub const KEY_UP: KeyCode = KeyCode::Up;
pub const KEY_DOWN: KeyCode = KeyCode::Down;
pub const KEY_LEFT: KeyCode = KeyCode::Left;
pub const KEY_PAGE_UP: KeyCode = KeyCode::PageUp;
pub const KEY_PAGE_DOWN: KeyCode = KeyCode::PageDown;
pub const KEY_GOTO_TOP: KeyCode = KeyCode::Home;
pub const KEY_GOTO_BOTTOM: KeyCode = KeyCode::End;
pub const KEY_DELETE_CHAR: KeyCode = KeyCode::Backspace;
pub const KEY_CONFIRM_YES: KeyCode = KeyCode::Char('y');
pub const KEY_CONFIRM_NO: KeyCode = KeyCode::Char('n');

impl Action {
    /// Label shown in the help bar. Returns `None` for actions that
    /// shouldn't appear (navigation, text input, etc.).
    pub fn help_label(&self) -> Option<(SmolStr, SmolStr)> {
        let (key, desc): (SmolStr, &str) = match self {
            Action::Quit => (KEY_QUIT.to_smolstr(), "quit"),
            Action::Menu => (KEY_MENU.to_smolstr(), "menu"),
            Action::Logs => ("ctrl+l".into(), "logs"),
            Action::NextTab => (KEY_NEXT_TAB.to_smolstr(), "next tab"),
            Action::FocusInput => (KEY_FOCUS_INPUT.to_smolstr(), "edit"),
            Action::Submit => (KEY_SELECT.to_smolstr(), "search"),
            Action::Select => (KEY_SELECT.to_smolstr(), "open"),
            Action::Back => (KEY_BACK.to_smolstr(), "back"),
            Action::MoveDown => (KEY_DOWN.to_smolstr(), "results"),
            _ => return None,
        };
        Some((key.to_lowercase().into(), desc.into()))
    }
}

/// Keys that work regardless of context.
pub fn global_action(key: &KeyEvent) -> Option<Action> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('c') => Some(Action::Quit),
        KeyCode::Char('l') => Some(Action::Logs),
        _ => None,
    }
}

/// Resolve a key event into an action while the drawer is open.
pub fn drawer_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK | KEY_MENU | KEY_LEFT => Some(Action::Back),
        KEY_UP => Some(Action::MoveUp),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_SELECT => Some(Action::Select),
        KEY_QUIT => Some(Action::Quit),
        _ => None,
    }
}

/// Resolve a key event into an action on a screen with no text input.
pub fn page_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_QUIT => Some(Action::Quit),
        KEY_MENU => Some(Action::Menu),
        KEY_NEXT_TAB => Some(Action::NextTab),
        KEY_PREVIOUS_TAB => Some(Action::PreviousTab),
        KEY_BACK => Some(Action::Back),
        _ => None,
    }
}

/// Resolve a key event into an action while typing a search term.
pub fn search_input_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK => Some(Action::Menu),
        KEY_SELECT => Some(Action::Submit),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_NEXT_TAB => Some(Action::NextTab),
        KEY_PREVIOUS_TAB => Some(Action::PreviousTab),
        KEY_DELETE_CHAR => Some(Action::DeleteChar),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                Some(Action::Char(c))
            } else if c == 'u' {
                Some(Action::ClearLine)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Resolve a key event into an action while browsing results.
pub fn results_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_UP => Some(Action::MoveUp),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        KEY_GOTO_TOP => Some(Action::GotoTop),
        KEY_GOTO_BOTTOM => Some(Action::GotoBottom),
        KEY_SELECT => Some(Action::Select),
        KEY_FOCUS_INPUT | KEY_BACK => Some(Action::FocusInput),
        _ => page_action(key),
    }
}

/// Resolve a key event into an action on the song detail screen.
pub fn detail_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK | KEY_LEFT | KEY_DELETE_CHAR => Some(Action::Back),
        _ => page_action(key),
    }
}

/// Resolve a key event into an action in logs context.
pub fn logs_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK | KEY_QUIT => Some(Action::Back),
        KEY_UP => Some(Action::MoveUp),
        KEY_DOWN => Some(Action::MoveDown),
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        KEY_GOTO_TOP => Some(Action::GotoTop),
        KEY_GOTO_BOTTOM => Some(Action::GotoBottom),
        _ => None,
    }
}

/// Resolve a key event into an action in quit-confirmation context.
/// `y` / Enter confirms; any other key cancels.
pub fn quit_confirm_action(key: &KeyEvent) -> Action {
    match key.code {
        KEY_CONFIRM_YES | KEY_SELECT => Action::Select,
        _ => Action::Back,
    }
}

/// Help bar actions for each screen.
pub const DRAWER_HELP: &[Action] = &[Action::Select, Action::Back, Action::Quit];
pub const PAGE_HELP: &[Action] = &[Action::Quit, Action::Menu, Action::NextTab, Action::Logs];
pub const ABOUT_HELP: &[Action] = &[Action::Quit, Action::Menu, Action::Logs];
pub const SEARCH_INPUT_HELP: &[Action] = &[
    Action::Submit,
    Action::MoveDown,
    Action::NextTab,
    Action::Logs,
];
pub const RESULTS_HELP: &[Action] = &[
    Action::Select,
    Action::FocusInput,
    Action::Quit,
    Action::Menu,
    Action::NextTab,
    Action::Logs,
];
pub const DETAIL_HELP: &[Action] = &[Action::Back, Action::Quit, Action::Menu, Action::Logs];
pub const LOGS_HELP: &[Action] = &[Action::Back];
