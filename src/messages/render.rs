//! Render state - data structure sent from App layer to UI for rendering

use crate::loader::FetchState;
use crate::messages::ui_events::{ApiTab, InputMode, ProfileField, Screen};
use crate::models::{Post, Profile, User};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Navigation
    pub screen: Screen,

    // Profile editor
    pub profile: Profile,
    pub input_mode: InputMode,
    pub active_field: ProfileField,
    pub cursor_position: usize,
    pub selected_menu: usize,

    // API data screen
    pub posts: FetchState<Vec<Post>>,
    pub users: FetchState<Vec<User>>,
    pub api_tab: ApiTab,
    pub posts_scroll: u16,
    pub users_scroll: u16,

    // Popups
    pub show_logout_dialog: bool,
    pub show_help: bool,
}
