//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{ApiTab, InputMode, ProfileField, Screen, MENU_ITEMS};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    /// Direct screen assignment, no back-stack. Entering the API data
    /// screen kicks off both fetches; the returned commands must be
    /// forwarded to the network actor.
    pub fn navigate(&mut self, screen: Screen) -> Vec<NetworkCommand> {
        self.screen = screen;
        if screen == Screen::ApiData {
            self.start_fetches()
        } else {
            Vec::new()
        }
    }

    pub fn back(&mut self) -> Vec<NetworkCommand> {
        self.navigate(Screen::Profile)
    }

    pub fn menu_up(&mut self) {
        if self.selected_menu == 0 {
            self.selected_menu = MENU_ITEMS.len() - 1;
        } else {
            self.selected_menu -= 1;
        }
    }

    pub fn menu_down(&mut self) {
        self.selected_menu = (self.selected_menu + 1) % MENU_ITEMS.len();
    }

    pub fn select_menu_item(&mut self) -> Vec<NetworkCommand> {
        let (_, screen) = MENU_ITEMS[self.selected_menu];
        self.navigate(screen)
    }

    // ========================
    // Profile editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.active_field = ProfileField::Name;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.save_profile();
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
                self.save_profile();
            }
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
            self.save_profile();
        }
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn toggle_publisher(&mut self) {
        self.profile.is_publisher = !self.profile.is_publisher;
        self.save_profile();
    }

    /// Persist the profile. Failures are logged, never fatal.
    pub fn save_profile(&mut self) {
        if let Err(e) = self.prefs.save(&self.profile) {
            tracing::warn!(error = %e, "Failed to save preferences");
        }
    }

    // ========================
    // Remote data fetching
    // ========================

    /// Start both list fetches. Each loader enters `Loading` synchronously;
    /// the commands carry the actual work to the network actor.
    pub fn start_fetches(&mut self) -> Vec<NetworkCommand> {
        let mut commands = Vec::new();
        if self.posts.start() {
            commands.push(NetworkCommand::FetchPosts { id: self.next_id() });
        }
        if self.users.start() {
            commands.push(NetworkCommand::FetchUsers { id: self.next_id() });
        }
        commands
    }

    /// Apply a fetch completion to the matching loader. Completions are
    /// applied in arrival order; the last one to land wins.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Posts { id, outcome } => {
                tracing::debug!(id, ok = outcome.is_ok(), "Applying posts completion");
                self.posts.finish(outcome);
                self.posts_scroll = 0;
            }
            NetworkResponse::Users { id, outcome } => {
                tracing::debug!(id, ok = outcome.is_ok(), "Applying users completion");
                self.users.finish(outcome);
                self.users_scroll = 0;
            }
        }
    }

    // ========================
    // API data screen
    // ========================

    pub fn next_api_tab(&mut self) {
        self.api_tab = self.api_tab.next();
    }

    pub fn switch_api_tab(&mut self, tab: ApiTab) {
        self.api_tab = tab;
    }

    pub fn scroll_up(&mut self) {
        match self.api_tab {
            ApiTab::Posts => self.posts_scroll = self.posts_scroll.saturating_sub(1),
            ApiTab::Users => self.users_scroll = self.users_scroll.saturating_sub(1),
        }
    }

    pub fn scroll_down(&mut self) {
        match self.api_tab {
            ApiTab::Posts => self.posts_scroll = self.posts_scroll.saturating_add(1),
            ApiTab::Users => self.users_scroll = self.users_scroll.saturating_add(1),
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn open_logout_dialog(&mut self) {
        self.show_logout_dialog = true;
    }

    pub fn cancel_logout(&mut self) {
        self.show_logout_dialog = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{FetchError, FetchState};
    use crate::models::Post;
    use crate::storage::Prefs;
    use tempfile::tempdir;

    fn state_with_tempdir() -> (AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let state = AppState::with_prefs(Prefs::with_dir(dir.path()));
        (state, dir)
    }

    fn sample_post() -> Post {
        Post {
            user_id: 1,
            id: 1,
            title: String::from("a"),
            body: String::from("b"),
        }
    }

    #[test]
    fn test_entering_api_screen_starts_both_fetches() {
        let (mut state, _dir) = state_with_tempdir();
        assert_eq!(*state.posts.state(), FetchState::Idle);

        let commands = state.navigate(Screen::ApiData);
        assert_eq!(commands.len(), 2);
        assert!(state.posts.state().is_loading());
        assert!(state.users.state().is_loading());
    }

    #[test]
    fn test_navigation_is_direct_assignment() {
        let (mut state, _dir) = state_with_tempdir();
        let commands = state.navigate(Screen::Faq);
        assert!(commands.is_empty());
        assert_eq!(state.screen, Screen::Faq);

        state.back();
        assert_eq!(state.screen, Screen::Profile);
    }

    #[test]
    fn test_posts_success_applied_to_loader() {
        let (mut state, _dir) = state_with_tempdir();
        state.navigate(Screen::ApiData);
        state.handle_response(NetworkResponse::Posts {
            id: 1,
            outcome: Ok(vec![sample_post()]),
        });
        assert_eq!(
            *state.posts.state(),
            FetchState::Success(vec![sample_post()])
        );
        // The other loader is untouched.
        assert!(state.users.state().is_loading());
    }

    #[test]
    fn test_last_completion_wins_across_reloads() {
        let (mut state, _dir) = state_with_tempdir();
        state.navigate(Screen::ApiData);
        state.start_fetches();

        // First dispatch completes after the second: its result is the
        // one that sticks.
        state.handle_response(NetworkResponse::Posts {
            id: 2,
            outcome: Err(FetchError::new("timeout")),
        });
        state.handle_response(NetworkResponse::Posts {
            id: 1,
            outcome: Ok(vec![sample_post()]),
        });
        assert_eq!(
            *state.posts.state(),
            FetchState::Success(vec![sample_post()])
        );
    }

    #[test]
    fn test_editing_persists_on_every_change() {
        let (mut state, dir) = state_with_tempdir();
        state.start_editing();
        state.enter_char('!');
        assert!(state.profile.name.ends_with('!'));

        let reloaded = Prefs::with_dir(dir.path()).load();
        assert_eq!(reloaded.name, state.profile.name);
    }

    #[test]
    fn test_publisher_toggle_persists() {
        let (mut state, dir) = state_with_tempdir();
        state.toggle_publisher();
        assert!(state.profile.is_publisher);
        assert!(Prefs::with_dir(dir.path()).load().is_publisher);
    }

    #[test]
    fn test_menu_wraps() {
        let (mut state, _dir) = state_with_tempdir();
        state.menu_up();
        assert_eq!(state.selected_menu, MENU_ITEMS.len() - 1);
        state.menu_down();
        assert_eq!(state.selected_menu, 0);
    }

    #[test]
    fn test_scroll_is_per_tab() {
        let (mut state, _dir) = state_with_tempdir();
        state.scroll_down();
        state.scroll_down();
        state.switch_api_tab(ApiTab::Users);
        state.scroll_down();
        assert_eq!(state.posts_scroll, 2);
        assert_eq!(state.users_scroll, 1);
    }
}
