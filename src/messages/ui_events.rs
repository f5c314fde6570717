//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The closed set of screens. Navigation is a direct assignment of the
/// current screen; there is no back-stack (Back always returns to Profile).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Profile,
    PersonalInfo,
    Notifications,
    TimeSpent,
    Following,
    Privacy,
    Terms,
    Faq,
    ApiData,
}

/// Menu rows on the profile screen, in display order.
pub const MENU_ITEMS: &[(&str, Screen)] = &[
    ("Personal Information", Screen::PersonalInfo),
    ("Notifications", Screen::Notifications),
    ("Time Spent", Screen::TimeSpent),
    ("Following", Screen::Following),
    ("Privacy Policy", Screen::Privacy),
    ("Terms & Conditions", Screen::Terms),
    ("FAQ", Screen::Faq),
    ("API Data", Screen::ApiData),
];

/// Editable field on the profile screen
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ProfileField {
    #[default]
    Name,
    Email,
    Publisher,
}

impl ProfileField {
    pub fn next(&self) -> ProfileField {
        match self {
            ProfileField::Name => ProfileField::Email,
            ProfileField::Email => ProfileField::Publisher,
            ProfileField::Publisher => ProfileField::Name,
        }
    }
}

/// Tabs on the API data screen
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ApiTab {
    #[default]
    Posts,
    Users,
}

impl ApiTab {
    pub fn next(&self) -> ApiTab {
        match self {
            ApiTab::Posts => ApiTab::Users,
            ApiTab::Users => ApiTab::Posts,
        }
    }
}

/// Input mode for the profile editor
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Navigation
    Back,
    MenuUp,
    MenuDown,
    SelectMenuItem,

    // Profile editing
    StartEditing,
    StopEditing,
    NextField,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    TogglePublisher,

    // API data screen
    SwitchApiTab(ApiTab),
    NextApiTab,
    ScrollUp,
    ScrollDown,
    Reload,

    // Logout dialog
    OpenLogoutDialog,
    ConfirmLogout,
    CancelLogout,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Map a keystroke to a UI event given the current screen context.
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    input_mode: InputMode,
    active_field: ProfileField,
    show_help: bool,
    show_logout_dialog: bool,
) -> Option<UiEvent> {
    // Ctrl+C quits everywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_logout_dialog {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmLogout),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::CancelLogout),
            _ => None,
        };
    }

    if screen == Screen::Profile && input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            // Space toggles the publisher switch, but only when it is the
            // active field; in text fields it is ordinary input.
            KeyCode::Char(' ') if active_field == ProfileField::Publisher => {
                Some(UiEvent::TogglePublisher)
            }
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    // Normal-mode keys shared by every screen
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        _ => {}
    }

    match screen {
        Screen::Profile => match key.code {
            KeyCode::Char('e') => Some(UiEvent::StartEditing),
            KeyCode::Char('l') => Some(UiEvent::OpenLogoutDialog),
            KeyCode::Up => Some(UiEvent::MenuUp),
            KeyCode::Down => Some(UiEvent::MenuDown),
            KeyCode::Enter => Some(UiEvent::SelectMenuItem),
            _ => None,
        },
        Screen::ApiData => match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Some(UiEvent::Back),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => Some(UiEvent::NextApiTab),
            KeyCode::Char('1') => Some(UiEvent::SwitchApiTab(ApiTab::Posts)),
            KeyCode::Char('2') => Some(UiEvent::SwitchApiTab(ApiTab::Users)),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            KeyCode::Char('r') => Some(UiEvent::Reload),
            _ => None,
        },
        // Static informational screens
        _ => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Enter => Some(UiEvent::Back),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn map(code: KeyCode, screen: Screen, mode: InputMode, field: ProfileField) -> Option<UiEvent> {
        key_to_ui_event(key(code), screen, mode, field, false, false)
    }

    #[test]
    fn test_quit_from_profile() {
        let event = map(
            KeyCode::Char('q'),
            Screen::Profile,
            InputMode::Normal,
            ProfileField::Name,
        );
        assert!(matches!(event, Some(UiEvent::Quit)));
    }

    #[test]
    fn test_editing_captures_chars() {
        let event = map(
            KeyCode::Char('q'),
            Screen::Profile,
            InputMode::Editing,
            ProfileField::Name,
        );
        assert!(matches!(event, Some(UiEvent::CharInput('q'))));
    }

    #[test]
    fn test_space_is_input_in_text_field() {
        let event = map(
            KeyCode::Char(' '),
            Screen::Profile,
            InputMode::Editing,
            ProfileField::Name,
        );
        assert!(matches!(event, Some(UiEvent::CharInput(' '))));
    }

    #[test]
    fn test_space_toggles_publisher_field() {
        let event = map(
            KeyCode::Char(' '),
            Screen::Profile,
            InputMode::Editing,
            ProfileField::Publisher,
        );
        assert!(matches!(event, Some(UiEvent::TogglePublisher)));
    }

    #[test]
    fn test_logout_dialog_takes_priority() {
        let event = key_to_ui_event(
            key(KeyCode::Char('y')),
            Screen::Profile,
            InputMode::Normal,
            ProfileField::Name,
            false,
            true,
        );
        assert!(matches!(event, Some(UiEvent::ConfirmLogout)));
    }

    #[test]
    fn test_static_screen_back() {
        let event = map(
            KeyCode::Esc,
            Screen::Faq,
            InputMode::Normal,
            ProfileField::Name,
        );
        assert!(matches!(event, Some(UiEvent::Back)));
    }

    #[test]
    fn test_api_screen_tab_switch() {
        let event = map(
            KeyCode::Char('2'),
            Screen::ApiData,
            InputMode::Normal,
            ProfileField::Name,
        );
        assert!(matches!(event, Some(UiEvent::SwitchApiTab(ApiTab::Users))));
    }
}
