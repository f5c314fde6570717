//! MiniProfile TUI - terminal profile editor with a remote data demo
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async list fetches

mod app;
mod constants;
mod loader;
mod messages;
mod models;
mod network;
mod storage;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use loader::FetchState;
use messages::ui_events::{key_to_ui_event, ApiTab, InputMode, ProfileField, Screen, MENU_ITEMS};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::{Post, User};
use network::NetworkActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.screen,
                    current_state.input_mode,
                    current_state.active_field,
                    current_state.show_help,
                    current_state.show_logout_dialog,
                ) {
                    // Both quit paths end the UI loop; the app actor saves
                    // preferences and shuts the network actor down.
                    let is_exit = matches!(event, UiEvent::Quit | UiEvent::ConfirmLogout);
                    let _ = ui_tx.send(event);
                    if is_exit {
                        // The app actor drops its render sender once it has
                        // persisted and exited; drain until then so the save
                        // completes before the runtime is torn down.
                        while render_rx.recv().await.is_some() {}
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    match state.screen {
        Screen::Profile => draw_profile_screen(f, state, main_chunks[0]),
        Screen::PersonalInfo => draw_static_screen(
            f,
            " Personal Information ",
            vec![
                format!("Name: {}", state.profile.name),
                format!("Email: {}", state.profile.email),
            ],
            main_chunks[0],
        ),
        Screen::Notifications => draw_static_screen(
            f,
            " Notifications ",
            vec![String::from("Notification settings will appear here")],
            main_chunks[0],
        ),
        Screen::TimeSpent => draw_static_screen(
            f,
            " Time Spent ",
            vec![String::from("Time spent analytics will appear here")],
            main_chunks[0],
        ),
        Screen::Following => draw_static_screen(
            f,
            " Following ",
            vec![String::from("Following list will appear here")],
            main_chunks[0],
        ),
        Screen::Privacy => draw_static_screen(
            f,
            " Privacy Policy ",
            vec![String::from(
                "Your privacy is important to us. This privacy policy explains \
                 how we collect and use your information.",
            )],
            main_chunks[0],
        ),
        Screen::Terms => draw_static_screen(
            f,
            " Terms & Conditions ",
            vec![String::from(
                "By using this application, you agree to these terms and conditions.",
            )],
            main_chunks[0],
        ),
        Screen::Faq => draw_static_screen(
            f,
            " FAQ ",
            vec![
                String::from("Q: How do I update my profile?"),
                String::from("A: Press 'e' on the profile screen to start editing."),
            ],
            main_chunks[0],
        ),
        Screen::ApiData => draw_api_data_screen(f, state, main_chunks[0]),
    }

    draw_status_bar(f, state, main_chunks[1]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.show_logout_dialog {
        draw_logout_popup(f, area);
    }
}

fn draw_profile_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_editing = state.input_mode == InputMode::Editing;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + avatar indicator
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Publisher switch
            Constraint::Min(4),    // Menu
        ])
        .split(area);

    // Title bar with avatar indicator
    let avatar = match &state.profile.profile_image {
        Some(uri) => format!("image: {}", uri),
        None => String::from("no image"),
    };
    let title = Paragraph::new(format!("  {} ({})", state.profile.name, avatar))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" My Profile ")
                .title_style(Style::default().fg(Color::Magenta).bold()),
        );
    f.render_widget(title, chunks[0]);

    // Name and email fields
    let name_input = ui::render_input(
        &state.profile.name,
        " Name ",
        state.active_field == ProfileField::Name && is_editing,
        is_editing,
    );
    f.render_widget(name_input, chunks[1]);

    let email_input = ui::render_input(
        &state.profile.email,
        " Email ",
        state.active_field == ProfileField::Email && is_editing,
        is_editing,
    );
    f.render_widget(email_input, chunks[2]);

    // Cursor on the focused text field
    if is_editing {
        let field = match state.active_field {
            ProfileField::Name => Some((chunks[1], state.profile.name.as_str())),
            ProfileField::Email => Some((chunks[2], state.profile.email.as_str())),
            ProfileField::Publisher => None,
        };
        if let Some((field_area, content)) = field {
            let max_x = field_area.x + field_area.width.saturating_sub(2);
            let column = ui::cursor_column(content, state.cursor_position);
            let cursor_x = (field_area.x + column + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
        }
    }

    // Publisher switch
    let switch = if state.profile.is_publisher { "[on ]" } else { "[off]" };
    let switch_style = if state.active_field == ProfileField::Publisher && is_editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let publisher = Paragraph::new(format!("Publisher Account {}", switch)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(switch_style)
            .title(" Account Type "),
    );
    f.render_widget(publisher, chunks[3]);

    // Menu
    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (title, _))| {
            let style = if !is_editing && i == state.selected_menu {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(format!("  {} >", title)).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Menu (Enter:open l:logout) "),
    );
    f.render_widget(menu, chunks[4]);
}

fn draw_static_screen(f: &mut Frame, title: &str, body: Vec<String>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for text in body {
        lines.push(Line::from(text));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Esc/b: back",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Magenta).bold());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_api_data_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let selected_tab = match state.api_tab {
        ApiTab::Posts => 0,
        ApiTab::Users => 1,
    };
    let tabs = ui::render_tabs(&[" 1:Posts ", " 2:Users "], selected_tab);
    f.render_widget(tabs, chunks[0]);

    match state.api_tab {
        ApiTab::Posts => draw_posts_content(f, &state.posts, state.posts_scroll, chunks[1]),
        ApiTab::Users => draw_users_content(f, &state.users, state.users_scroll, chunks[1]),
    }
}

fn draw_posts_content(f: &mut Frame, fetch: &FetchState<Vec<Post>>, scroll: u16, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Posts (r:reload ↑/↓:scroll Esc:back) ");

    match fetch {
        FetchState::Idle => {
            let text = Paragraph::new("Ready to load posts")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(text, area);
        }
        FetchState::Loading => {
            let text = Paragraph::new("Loading posts...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(text, area);
        }
        FetchState::Success(posts) => {
            let mut lines: Vec<Line> = Vec::new();
            for post in posts {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("Post #{}", post.id),
                        Style::default().fg(Color::Cyan).bold(),
                    ),
                    Span::styled(
                        format!("  User {}", post.user_id),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    post.title.clone(),
                    Style::default().bold(),
                )));
                lines.push(Line::from(post.body.clone()));
                lines.push(Line::from(""));
            }
            let list = Paragraph::new(lines)
                .block(block.title_bottom(
                    Line::from(format!(" {} posts ", posts.len())).right_aligned(),
                ))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            f.render_widget(list, area);
        }
        FetchState::Error(message) => {
            let text = Paragraph::new(format!("[!] Error: {}", message))
                .style(Style::default().fg(Color::Red))
                .block(block)
                .wrap(Wrap { trim: false });
            f.render_widget(text, area);
        }
    }
}

fn draw_users_content(f: &mut Frame, fetch: &FetchState<Vec<User>>, scroll: u16, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Users (r:reload ↑/↓:scroll Esc:back) ");

    match fetch {
        FetchState::Idle => {
            let text = Paragraph::new("Ready to load users")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(text, area);
        }
        FetchState::Loading => {
            let text = Paragraph::new("Loading users...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(text, area);
        }
        FetchState::Success(users) => {
            let mut lines: Vec<Line> = Vec::new();
            for user in users {
                lines.push(Line::from(vec![
                    Span::styled(user.name.clone(), Style::default().bold()),
                    Span::styled(
                        format!("  @{}", user.username),
                        Style::default().fg(Color::Magenta),
                    ),
                ]));
                lines.push(Line::from(format!(
                    "  {} | {} | {}",
                    user.email, user.phone, user.website
                )));
                lines.push(Line::from(""));
            }
            let list = Paragraph::new(lines)
                .block(block.title_bottom(
                    Line::from(format!(" {} users ", users.len())).right_aligned(),
                ))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            f.render_widget(list, area);
        }
        FetchState::Error(message) => {
            let text = Paragraph::new(format!("[!] Error: {}", message))
                .style(Style::default().fg(Color::Red))
                .block(block)
                .wrap(Wrap { trim: false });
            f.render_widget(text, area);
        }
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " Esc/Enter:done editing | Tab:next field | Space:toggle publisher "
    } else {
        match state.screen {
            Screen::Profile => " ↑/↓:menu | Enter:open | e:edit | l:logout | ?:help | q:quit ",
            Screen::ApiData => " Tab:switch | r:reload | ↑/↓:scroll | Esc:back | q:quit ",
            _ => " Esc/b:back | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_logout_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Logout ")
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new("Are you sure you want to logout?\n\n  y/Enter: logout    n/Esc: cancel")
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 MINIPROFILE TUI - Keyboard Shortcuts

 PROFILE
   ↑ / ↓              Navigate menu
   Enter              Open selected screen
   e                  Edit profile fields
   l                  Logout (with confirmation)

 EDITING
   Tab                Next field (name/email/publisher)
   Space              Toggle publisher (on its field)
   Esc / Enter        Stop editing

 API DATA
   Tab / ← / →        Switch Posts/Users
   1 / 2              Jump to Posts/Users
   r                  Reload
   ↑ / ↓              Scroll

 GENERAL
   Esc / b            Back to profile
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
