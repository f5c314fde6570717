//! App state - pure data structure with no I/O logic

use crate::loader::Loader;
use crate::messages::ui_events::{ApiTab, InputMode, ProfileField, Screen};
use crate::messages::RenderState;
use crate::models::{Post, Profile, User};
use crate::storage::Prefs;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation
    pub screen: Screen,
    pub selected_menu: usize,

    // Profile editor
    pub profile: Profile,
    pub input_mode: InputMode,
    pub active_field: ProfileField,
    pub cursor_position: usize,

    // Remote list loaders, one per data kind
    pub posts: Loader<Vec<Post>>,
    pub users: Loader<Vec<User>>,
    pub next_request_id: u64,

    // API data screen
    pub api_tab: ApiTab,
    pub posts_scroll: u16,
    pub users_scroll: u16,

    // Popups
    pub show_logout_dialog: bool,
    pub show_help: bool,

    // Storage (persisted profile)
    pub prefs: Prefs,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let prefs = Prefs::new();
        Self::with_prefs(prefs)
    }

    /// Build state around a given preferences store (tests use a tempdir).
    pub fn with_prefs(prefs: Prefs) -> Self {
        let profile = prefs.load();
        AppState {
            screen: Screen::Profile,
            selected_menu: 0,
            profile,
            input_mode: InputMode::Normal,
            active_field: ProfileField::Name,
            cursor_position: 0,
            posts: Loader::new(),
            users: Loader::new(),
            next_request_id: 1,
            api_tab: ApiTab::Posts,
            posts_scroll: 0,
            users_scroll: 0,
            show_logout_dialog: false,
            show_help: false,
            prefs,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_field {
            ProfileField::Name => &self.profile.name,
            ProfileField::Email => &self.profile.email,
            ProfileField::Publisher => "",
        }
    }

    /// Get mutable reference to the current text field, if the active
    /// field is one.
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            ProfileField::Name => Some(&mut self.profile.name),
            ProfileField::Email => Some(&mut self.profile.email),
            ProfileField::Publisher => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.screen,
            profile: self.profile.clone(),
            input_mode: self.input_mode,
            active_field: self.active_field,
            cursor_position: self.cursor_position,
            selected_menu: self.selected_menu,
            posts: self.posts.state().clone(),
            users: self.users.state().clone(),
            api_tab: self.api_tab,
            posts_scroll: self.posts_scroll,
            users_scroll: self.users_scroll,
            show_logout_dialog: self.show_logout_dialog,
            show_help: self.show_help,
        }
    }
}
