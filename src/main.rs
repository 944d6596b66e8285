pub mod runtime;
pub mod session;
pub mod ui;
pub mod words;

use crate::runtime::{CrosstermEventSource, GameEvent, GameEventSource};
use crate::session::{GameKind, Phase, Session};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// dual-mode guessing game tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A small terminal guessing game with two rounds: guess the secret word, or home in on a secret number between 1 and 100. Five attempts each, with hints along the way."
)]
pub struct Cli {}

/// Bin-side state: the game session plus the input line being edited.
#[derive(Debug, Default)]
pub struct App {
    pub session: Session,
    pub input: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            input: String::new(),
        }
    }

    /// Apply one key event. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        match self.session.phase {
            Phase::Selection => match key.code {
                KeyCode::Char('w') | KeyCode::Char('1') => {
                    self.session.select_game(GameKind::Word);
                }
                KeyCode::Char('n') | KeyCode::Char('2') => {
                    self.session.select_game(GameKind::Number);
                }
                KeyCode::Char('q') | KeyCode::Esc => return false,
                _ => {}
            },
            Phase::Playing(kind) => match key.code {
                KeyCode::Enter => self.submit(kind),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Esc => {
                    self.session.back_to_selection();
                    self.input.clear();
                }
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            },
            Phase::GameOver { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('p') => {
                    self.session.play_again();
                    self.input.clear();
                }
                KeyCode::Char('q') | KeyCode::Esc => return false,
                _ => {}
            },
        }

        true
    }

    /// Submit the input line to the active game; rejected input stays in the
    /// line so it can be corrected.
    fn submit(&mut self, kind: GameKind) {
        let accepted = match kind {
            GameKind::Word => self.session.submit_word_guess(&self.input),
            GameKind::Number => self.session.submit_number_guess(&self.input),
        };

        if accepted.is_some() {
            self.input.clear();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, CrosstermEventSource::new());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend, E: GameEventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: E,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match events.next_event() {
            Some(GameEvent::Key(key)) => {
                if !app.handle_key(key) {
                    break;
                }
            }
            Some(GameEvent::Resize) => {}
            None => break,
        }
    }

    Ok(())
}
