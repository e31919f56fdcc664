//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppTab {
    #[default]
    SampleList,
    SimpleList,
    Codelab,
}

impl AppTab {
    pub const ALL: [AppTab; 3] = [AppTab::SampleList, AppTab::SimpleList, AppTab::Codelab];

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::SampleList => "Sample List",
            AppTab::SimpleList => "Simple List",
            AppTab::Codelab => "Layouts Codelab",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AppTab::SampleList => 0,
            AppTab::SimpleList => 1,
            AppTab::Codelab => 2,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SwitchTab(AppTab),

    // Greeting list
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorHome,
    CursorEnd,
    ActivateLabel,
    ClickCounter,

    // Image list
    ScrollToStart,
    ScrollToEnd,

    // Codelab
    Favorite,
    ClickCard,

    /// Rows available to each list after layout
    ViewportResized {
        name_rows: u16,
        image_rows: u16,
    },

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, active_tab: AppTab, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::SampleList)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::SimpleList)),
        KeyCode::Char('3') => return Some(UiEvent::SwitchTab(AppTab::Codelab)),
        _ => {}
    }

    match active_tab {
        AppTab::SampleList => handle_sample_list_keys(key),
        AppTab::SimpleList => handle_simple_list_keys(key),
        AppTab::Codelab => handle_codelab_keys(key),
    }
}

fn handle_sample_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
        KeyCode::PageUp => Some(UiEvent::PageUp),
        KeyCode::PageDown => Some(UiEvent::PageDown),
        KeyCode::Home => Some(UiEvent::CursorHome),
        KeyCode::End => Some(UiEvent::CursorEnd),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::ActivateLabel),
        KeyCode::Char('c') | KeyCode::Char('+') => Some(UiEvent::ClickCounter),
        _ => None,
    }
}

fn handle_simple_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('t') | KeyCode::Home => Some(UiEvent::ScrollToStart),
        KeyCode::Char('e') | KeyCode::End => Some(UiEvent::ScrollToEnd),
        _ => None,
    }
}

fn handle_codelab_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('f') => Some(UiEvent::Favorite),
        KeyCode::Enter => Some(UiEvent::ClickCard),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_depend_on_tab() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), AppTab::SampleList, false),
            Some(UiEvent::ActivateLabel)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), AppTab::Codelab, false),
            Some(UiEvent::ClickCard)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('e')), AppTab::SimpleList, false),
            Some(UiEvent::ScrollToEnd)
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Char('e')), AppTab::SampleList, false), None);
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('c')), AppTab::SampleList, true),
            Some(UiEvent::CloseHelp)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, AppTab::SampleList, true), Some(UiEvent::Quit));
    }
}
