// TUI event loop and terminal management
use crate::{App, InputMode};
use apidex_core::models::ApiRecord;
use apidex_core::state::Action;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// A completed search: the sequence stamp it was issued with plus its rows.
type SearchDone = (u64, Vec<ApiRecord>);

pub async fn run_tui(mut app: App, mouse_enabled: bool) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Searches run on spawned tasks and report back here. The channel plus
    // the session stamp is what keeps a slow stale search from clobbering a
    // fresher one.
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchDone>();

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        // Apply any completed searches, newest stamp wins.
        while let Ok((seq, results)) = rx.try_recv() {
            if app.session.accept(seq) {
                app.dispatch(Action::ResultsReady { seq, results });
            } else {
                tracing::debug!(seq, latest = app.session.latest(), "ignoring superseded search");
            }
        }

        // Poll with a timeout so completed searches still get drained when
        // the user is idle.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.clear_error();
                    match app.input_mode {
                        InputMode::Searching => match key.code {
                            KeyCode::Enter | KeyCode::Esc => {
                                app.enter_normal_mode();
                            }
                            KeyCode::Char(c) => {
                                let mut query = app.state.query.clone();
                                query.push(c);
                                app.dispatch(Action::QueryChanged(query));
                                trigger_search(&mut app, &tx);
                            }
                            KeyCode::Backspace => {
                                let mut query = app.state.query.clone();
                                query.pop();
                                app.dispatch(Action::QueryChanged(query));
                                trigger_search(&mut app, &tx);
                            }
                            KeyCode::Down => {
                                app.enter_normal_mode();
                                app.next_result();
                            }
                            _ => {}
                        },
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') => {
                                app.quit();
                            }
                            KeyCode::Char('/') => {
                                app.enter_search_mode();
                            }
                            KeyCode::Tab => {
                                let category = app.cycle_category();
                                app.dispatch(Action::CategorySelected(category));
                                trigger_search(&mut app, &tx);
                            }
                            KeyCode::Char('f') => {
                                app.toggle_selected_favorite();
                            }
                            KeyCode::Char('t') => {
                                app.dispatch(Action::ThemeToggled);
                            }
                            KeyCode::Char('c') => {
                                // Compare is stubbed; see the debug log.
                                app.compare_selected();
                            }
                            KeyCode::Char('j') | KeyCode::Down => {
                                app.next_result();
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                app.previous_result();
                            }
                            KeyCode::Enter => {
                                if !app.state.modal_open() {
                                    app.open_selected();
                                }
                            }
                            KeyCode::Esc => {
                                if app.state.modal_open() {
                                    app.dispatch(Action::ModalClosed);
                                }
                            }
                            _ => {}
                        },
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Stamp a search with the next sequence number and run it off the event
/// loop. The filter itself is instant at this catalog size; the boundary is
/// kept genuinely asynchronous so a remote catalog can slot in later without
/// changing the discipline.
fn trigger_search(app: &mut App, tx: &mpsc::UnboundedSender<SearchDone>) {
    let seq = app.session.begin();
    app.dispatch(Action::SearchStarted(seq));

    let catalog = app.catalog.clone();
    let query = app.state.query.clone();
    let category = app.state.category.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let results = apidex_core::filter(&catalog, &query, &category);
        // Receiver gone means we are shutting down; nothing to do.
        let _ = tx.send((seq, results));
    });
}
