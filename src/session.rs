use crate::words;
use std::cmp::Ordering;

/// Attempts granted per game per round.
pub const MAX_ATTEMPTS: u32 = 5;

/// Attempts-remaining level at which the word game reveals its letter hint.
pub const WORD_HINT_THRESHOLD: u32 = MAX_ATTEMPTS - 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameKind {
    Word,
    Number,
}

/// Result of a single accepted guess. The directional variants point at the
/// secret: `TooHigh` means the secret is higher than the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    TooHigh,
    TooLow,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintCategory {
    Error,
    Info,
    Hint,
}

/// Message for the hint line, tagged with a category the renderer maps to a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: String,
    pub category: HintCategory,
}

impl Hint {
    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: HintCategory::Error,
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: HintCategory::Info,
        }
    }

    fn hint(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: HintCategory::Hint,
        }
    }
}

/// One processed guess. Immutable once pushed; histories are only cleared by
/// a full reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub outcome: Outcome,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Selection,
    Playing(GameKind),
    GameOver { kind: GameKind, won: bool },
}

/// Contents of the game-over panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverReport {
    pub kind: GameKind,
    pub won: bool,
    pub title: String,
    pub message: String,
    pub secret: String,
    pub attempts_used: u32,
}

/// State machine for one play session: both secrets, both attempt counters,
/// both guess histories, and the current screen phase.
///
/// All methods run to completion synchronously; input problems are reported
/// through the per-game hint fields and never mutate the rest of the state.
#[derive(Debug)]
pub struct Session {
    pub phase: Phase,
    pub secret_word: String,
    pub secret_number: u32,
    pub word_attempts_remaining: u32,
    pub number_attempts_remaining: u32,
    pub word_history: Vec<GuessRecord>,
    pub number_history: Vec<GuessRecord>,
    pub word_hint: Option<Hint>,
    pub number_hint: Option<Hint>,
}

impl Session {
    /// Start a fresh round: new secrets, full attempt counters, empty
    /// histories, back on the selection screen.
    pub fn new() -> Self {
        Self {
            phase: Phase::Selection,
            secret_word: words::random_word().to_string(),
            secret_number: words::random_number(),
            word_attempts_remaining: MAX_ATTEMPTS,
            number_attempts_remaining: MAX_ATTEMPTS,
            word_history: Vec::new(),
            number_history: Vec::new(),
            word_hint: None,
            number_hint: None,
        }
    }

    pub fn select_game(&mut self, kind: GameKind) {
        self.phase = Phase::Playing(kind);
    }

    /// Leave the active game without touching secrets, attempts, or history.
    pub fn back_to_selection(&mut self) {
        self.phase = Phase::Selection;
    }

    /// Full reset; unlike `back_to_selection` this re-rolls both secrets and
    /// clears both histories and counters.
    pub fn play_again(&mut self) {
        *self = Session::new();
    }

    /// Process a word guess. Returns `None` when the input was rejected
    /// (empty after trimming, or no word round active); rejected input
    /// consumes no attempt and leaves the history untouched.
    pub fn submit_word_guess(&mut self, raw_input: &str) -> Option<Outcome> {
        if self.phase != Phase::Playing(GameKind::Word) {
            return None;
        }

        let guess = raw_input.trim().to_lowercase();
        if guess.is_empty() {
            self.word_hint = Some(Hint::error("Please enter a word to guess!"));
            return None;
        }

        let outcome = if guess == self.secret_word {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        let message = match outcome {
            Outcome::Correct => "Correct!",
            _ => "Incorrect!",
        };
        self.word_history.push(GuessRecord {
            guess,
            outcome,
            message: message.to_string(),
        });

        if outcome == Outcome::Correct {
            // win before any decrement
            self.phase = Phase::GameOver {
                kind: GameKind::Word,
                won: true,
            };
            return Some(outcome);
        }

        self.word_attempts_remaining -= 1;

        if self.word_attempts_remaining == 0 {
            self.phase = Phase::GameOver {
                kind: GameKind::Word,
                won: false,
            };
        } else if self.word_attempts_remaining == WORD_HINT_THRESHOLD {
            // fires exactly once per round, on the transition to the threshold
            let first = self.secret_word.chars().next().unwrap_or_default();
            let last = self.secret_word.chars().last().unwrap_or(first);
            self.word_hint = Some(Hint::hint(format!(
                "Hint: The secret word starts with '{first}' and ends with '{last}'"
            )));
        } else {
            self.word_hint = Some(Hint::info(format!(
                "Sorry, that's not it. You have {} attempts left.",
                self.word_attempts_remaining
            )));
        }

        Some(outcome)
    }

    /// Process a number guess. Returns `None` when the input was rejected
    /// (non-numeric, out of range, or no number round active).
    pub fn submit_number_guess(&mut self, raw_input: &str) -> Option<Outcome> {
        if self.phase != Phase::Playing(GameKind::Number) {
            return None;
        }

        let guess: u32 = match raw_input.trim().parse() {
            Ok(n) if words::SECRET_NUMBER_RANGE.contains(&n) => n,
            _ => {
                self.number_hint =
                    Some(Hint::error("Please enter a valid number between 1 and 100!"));
                return None;
            }
        };

        let outcome = match guess.cmp(&self.secret_number) {
            Ordering::Equal => Outcome::Correct,
            Ordering::Less => Outcome::TooHigh,
            Ordering::Greater => Outcome::TooLow,
        };
        let message = match outcome {
            Outcome::Correct => "Correct!",
            Outcome::TooHigh => "Higher!",
            _ => "Lower!",
        };
        self.number_history.push(GuessRecord {
            guess: guess.to_string(),
            outcome,
            message: message.to_string(),
        });

        if outcome == Outcome::Correct {
            self.phase = Phase::GameOver {
                kind: GameKind::Number,
                won: true,
            };
            return Some(outcome);
        }

        self.number_attempts_remaining -= 1;

        // the number game re-hints on every miss; only the word game's letter
        // reveal is one-shot
        self.number_hint = Some(Hint::hint(match outcome {
            Outcome::TooHigh => "Hint: The secret number is higher.",
            _ => "Hint: The secret number is lower.",
        }));

        if self.number_attempts_remaining == 0 {
            self.phase = Phase::GameOver {
                kind: GameKind::Number,
                won: false,
            };
        }

        Some(outcome)
    }

    pub fn attempts_remaining(&self, kind: GameKind) -> u32 {
        match kind {
            GameKind::Word => self.word_attempts_remaining,
            GameKind::Number => self.number_attempts_remaining,
        }
    }

    pub fn history(&self, kind: GameKind) -> &[GuessRecord] {
        match kind {
            GameKind::Word => &self.word_history,
            GameKind::Number => &self.number_history,
        }
    }

    pub fn hint(&self, kind: GameKind) -> Option<&Hint> {
        match kind {
            GameKind::Word => self.word_hint.as_ref(),
            GameKind::Number => self.number_hint.as_ref(),
        }
    }

    /// Title, message, and final summary for the game-over panel. `None`
    /// unless a game has actually ended.
    pub fn game_over_report(&self) -> Option<GameOverReport> {
        let Phase::GameOver { kind, won } = self.phase else {
            return None;
        };

        let message = if won {
            format!("You've successfully guessed the {kind}!")
        } else {
            "You've run out of attempts. Better luck next time!".to_string()
        };
        let secret = match kind {
            GameKind::Word => self.secret_word.clone(),
            GameKind::Number => self.secret_number.to_string(),
        };

        Some(GameOverReport {
            kind,
            won,
            title: if won { "Congratulations!" } else { "Game Over" }.to_string(),
            message,
            secret,
            attempts_used: MAX_ATTEMPTS - self.attempts_remaining(kind),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
