//! Terminal user interface for ImageAI.

mod app;
mod components;
mod state;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position, Rect},
};

use crate::config::Config;
use crate::core::GenerationSession;
use crate::core::image::example_tiles;

pub use app::App;
use components::{
    GenerateView, SettingsTab, render_footer, render_generate, render_history, render_home,
    render_nav, render_profile, render_settings, render_toast,
};
pub use state::{Router, SessionReads, View};

/// Redraw interval.
const TICK: Duration = Duration::from_millis(80);

/// Run the TUI application.
///
/// `start_view` is a tab identifier; unknown identifiers keep the home view.
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the event loop encounters an error.
pub async fn run(config: Config, start_view: Option<&str>) -> anyhow::Result<()> {
    let mut app = App::new(config);
    if let Some(id) = start_view {
        if app.router.select_id(id).is_err() {
            eprintln!("unknown view '{id}', starting at home");
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            () = tokio::time::sleep(TICK) => {
                while event::poll(Duration::from_millis(0))? {
                    match event::read()? {
                        Event::Key(key) => {
                            // Some terminals report Release events; ignore them
                            if key.kind != KeyEventKind::Release
                                && handle_key(app, key.code, key.modifiers)
                            {
                                return Ok(());
                            }
                        }
                        Event::Paste(text) => {
                            if app.view() == View::Generate {
                                app.edit_prompt(|input| input.insert_str(&text));
                            }
                        }
                        _ => {}
                    }
                }
            }

            Some(notification) = app.notifications.recv() => {
                app.show(notification);
            }

            Some(()) = app.generation_done_rx.recv() => {
                app.on_generation_finished();
            }
        }
    }
}

fn draw(f: &mut Frame, app: &App) {
    let full_area = f.area();
    let area = Rect::new(
        full_area.x + 1,
        full_area.y,
        full_area.width.saturating_sub(2),
        full_area.height,
    );

    let [nav, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let view = app.view();
    render_nav(f, nav, view);

    let reads = view.reads();
    let cursor = if reads.history || reads.is_generating {
        app.controller
            .with_session(|session| draw_session_view(f, body, app, view, session))
    } else {
        draw_static_view(f, body, app, view);
        None
    };

    let generating = reads.is_generating && app.is_generating();
    render_footer(f, footer, view, generating);

    if let Some(toast) = app.toast.as_ref() {
        render_toast(f, body, toast);
    }

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }
}

/// Views that render session data. Called with the session locked.
fn draw_session_view(
    f: &mut Frame,
    body: Rect,
    app: &App,
    view: View,
    session: &GenerationSession,
) -> Option<Position> {
    match view {
        View::Generate => render_generate(
            f,
            body,
            &GenerateView {
                input: &app.input,
                placeholder: app.placeholder,
                generating: session.is_generating(),
                spinner: app.spinner(),
                history: session.history(),
                selected: app.selected_result,
            },
        ),
        View::History => {
            render_history(f, body, session.history(), app.selected_history);
            None
        }
        View::Profile => {
            render_profile(f, body, session.history().len(), &app.config.profile);
            None
        }
        View::Home | View::Settings => {
            draw_static_view(f, body, app, view);
            None
        }
    }
}

/// Views that read no session data.
fn draw_static_view(f: &mut Frame, body: Rect, app: &App, view: View) {
    match view {
        View::Home => render_home(
            f,
            body,
            &example_tiles(&app.config.generation.image_service),
        ),
        View::Settings => render_settings(f, body, &app.settings),
        View::Generate | View::History | View::Profile => {}
    }
}

/// Handle a key press. Returns `true` when the app should exit.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && code == KeyCode::Char('c') {
        return true;
    }

    match code {
        KeyCode::Tab => {
            app.router.next();
            return false;
        }
        KeyCode::BackTab => {
            app.router.previous();
            return false;
        }
        KeyCode::F(n @ 1..=5) => {
            app.router.select(View::ALL[usize::from(n - 1)]);
            return false;
        }
        _ => {}
    }

    match app.view() {
        View::Generate => handle_generate_key(app, code, ctrl),
        view => {
            if let KeyCode::Char(c @ '1'..='5') = code {
                let index = c as usize - '1' as usize;
                app.router.select(View::ALL[index]);
                return false;
            }
            if matches!(code, KeyCode::Char('q')) {
                return true;
            }
            match view {
                View::Home => handle_home_key(app, code),
                View::History => handle_history_key(app, code),
                View::Settings => handle_settings_key(app, code),
                View::Profile | View::Generate => {
                    if code == KeyCode::Esc {
                        app.router.select(View::Home);
                    }
                }
            }
            false
        }
    }
}

fn handle_home_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Enter {
        app.router.select(View::Generate);
    }
}

fn handle_generate_key(app: &mut App, code: KeyCode, ctrl: bool) -> bool {
    if ctrl {
        match code {
            KeyCode::Char('s') => {
                app.share_selected();
            }
            KeyCode::Char('y') => {
                app.copy_selected_link();
            }
            KeyCode::Char('r') => app.reuse_selected(),
            KeyCode::Char('w') => app.edit_prompt(components::PromptInput::delete_word),
            KeyCode::Char('u') => app.edit_prompt(components::PromptInput::clear),
            KeyCode::Char('a') => app.edit_prompt(components::PromptInput::move_home),
            KeyCode::Char('e') => app.edit_prompt(components::PromptInput::move_end),
            KeyCode::Left => app.edit_prompt(components::PromptInput::move_word_left),
            _ => {}
        }
        return false;
    }

    match code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.router.select(View::Home),
        KeyCode::Up => app.select_previous_image(),
        KeyCode::Down => app.select_next_image(),
        KeyCode::Char(c) => app.edit_prompt(|input| input.insert_char(c)),
        KeyCode::Backspace => app.edit_prompt(components::PromptInput::delete_char_before),
        KeyCode::Delete => app.edit_prompt(components::PromptInput::delete_char_after),
        KeyCode::Left => app.edit_prompt(components::PromptInput::move_left),
        KeyCode::Right => app.edit_prompt(components::PromptInput::move_right),
        KeyCode::Home => app.edit_prompt(components::PromptInput::move_home),
        KeyCode::End => app.edit_prompt(components::PromptInput::move_end),
        _ => {}
    }
    false
}

fn handle_history_key(app: &mut App, code: KeyCode) {
    let empty = app.controller.history_len() == 0;
    match code {
        KeyCode::Enter if empty => app.router.select(View::Generate),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_image(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_image(),
        KeyCode::Char('s') => {
            app.share_selected();
        }
        KeyCode::Char('c') => {
            app.copy_selected_link();
        }
        KeyCode::Char('r') => app.reuse_selected(),
        KeyCode::Esc => app.router.select(View::Home),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.settings.previous_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.settings.next_tab(),
        KeyCode::Up | KeyCode::Char('k') => app.settings.previous_row(),
        KeyCode::Down | KeyCode::Char('j') => app.settings.next_row(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.settings.activate() {
                tracing::debug!(tab = ?app.settings.tab, row = app.settings.row, "setting changed");
            }
        }
        KeyCode::Esc => {
            if app.settings.tab == SettingsTab::General {
                app.router.select(View::Home);
            } else {
                app.settings.tab = SettingsTab::General;
                app.settings.row = 0;
            }
        }
        _ => {}
    }
}
