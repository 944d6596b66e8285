use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::session::{GameKind, HintCategory, Outcome, Phase, Session, MAX_ATTEMPTS};
use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.session.phase {
            Phase::Selection => render_selection(&self.session, area, buf),
            Phase::Playing(kind) => render_game(&self.session, kind, &self.input, area, buf),
            Phase::GameOver { .. } => render_game_over(&self.session, area, buf),
        }
    }
}

fn hint_style(category: HintCategory) -> Style {
    let color = match category {
        HintCategory::Error => Color::Red,
        HintCategory::Info => Color::Blue,
        HintCategory::Hint => Color::Yellow,
    };
    Style::default().fg(color)
}

fn instructions(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
}

fn render_selection(session: &Session, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("hunch", bold_style)),
        Line::default(),
        Line::from("Pick a game:"),
        Line::default(),
        Line::from(format!(
            "(w) guess the word      attempts left: {}",
            session.word_attempts_remaining
        )),
        Line::from(format!(
            "(n) guess the number    attempts left: {}",
            session.number_attempts_remaining
        )),
        Line::default(),
        Line::from(Span::styled(
            "(q) quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    menu.render(centered(area), buf);
}

fn render_game(session: &Session, kind: GameKind, input: &str, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(1), // input line
            Constraint::Length(2), // hint line
            Constraint::Min(3),    // history
            Constraint::Length(1), // instructions
        ])
        .split(area);

    let header = Paragraph::new(Span::styled(
        format!(
            "{} game   attempts left: {}/{}",
            kind,
            session.attempts_remaining(kind),
            MAX_ATTEMPTS
        ),
        bold_style,
    ))
    .alignment(Alignment::Center);
    header.render(chunks[0], buf);

    let prompt = match kind {
        GameKind::Word => "your word: ",
        GameKind::Number => "your number (1-100): ",
    };
    let input_line = Paragraph::new(Line::from(vec![
        Span::styled(prompt, Style::default().add_modifier(Modifier::DIM)),
        Span::styled(input.to_string(), bold_style),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .alignment(Alignment::Center);
    input_line.render(chunks[1], buf);

    if let Some(hint) = session.hint(kind) {
        let hint_line = Paragraph::new(Span::styled(hint.text.clone(), hint_style(hint.category)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        hint_line.render(chunks[2], buf);
    }

    let items: Vec<ListItem> = session
        .history(kind)
        .iter()
        .map(|record| {
            let message_style = match record.outcome {
                Outcome::Correct => Style::default().fg(Color::Green),
                _ => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("Guess: {}", record.guess), bold_style),
                Span::raw("   "),
                Span::styled(record.message.clone(), message_style),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} guesses", session.history(kind).len())),
    );
    history.render(chunks[3], buf);

    instructions("(enter) submit guess (esc) back to selection").render(chunks[4], buf);
}

fn render_game_over(session: &Session, area: Rect, buf: &mut Buffer) {
    let Some(report) = session.game_over_report() else {
        return;
    };

    let title_style = Style::default()
        .add_modifier(Modifier::BOLD)
        .fg(if report.won { Color::Green } else { Color::Red });
    let secret_label = match report.kind {
        GameKind::Word => "Secret Word",
        GameKind::Number => "Secret Number",
    };

    let lines = vec![
        Line::from(Span::styled(report.title, title_style)),
        Line::default(),
        Line::from(report.message),
        Line::default(),
        Line::from(format!("{}: {}", secret_label, report.secret)),
        Line::from(format!("Your Attempts: {}", report.attempts_used)),
        Line::default(),
        Line::from(Span::styled(
            "(enter) play again (q) quit",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    panel.render(centered(area), buf);
}

// Pull the content block toward the vertical middle of the terminal
fn centered(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(8),
            Constraint::Percentage(30),
        ])
        .split(area);
    chunks[1]
}

#[cfg(test)]
mod tests {
    use crate::session::GameKind;
    use crate::App;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(app, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_selection_screen() {
        let app = App::new();

        let content = draw(&app);

        assert!(content.contains("hunch"));
        assert!(content.contains("guess the word"));
        assert!(content.contains("guess the number"));
    }

    #[test]
    fn test_render_word_game_screen() {
        let mut app = App::new();
        app.session.secret_word = "python".to_string();
        app.session.select_game(GameKind::Word);
        app.session.submit_word_guess("java");
        app.input.push_str("ru");

        let content = draw(&app);

        assert!(content.contains("word game"));
        assert!(content.contains("attempts left: 4/5"));
        assert!(content.contains("Guess: java"));
        assert!(content.contains("Incorrect!"));
        assert!(content.contains("Sorry, that's not it."));
    }

    #[test]
    fn test_render_number_game_screen() {
        let mut app = App::new();
        app.session.secret_number = 42;
        app.session.select_game(GameKind::Number);
        app.session.submit_number_guess("50");

        let content = draw(&app);

        assert!(content.contains("number game"));
        assert!(content.contains("Guess: 50"));
        assert!(content.contains("Lower!"));
        assert!(content.contains("The secret number is lower."));
    }

    #[test]
    fn test_render_game_over_screen() {
        let mut app = App::new();
        app.session.secret_word = "python".to_string();
        app.session.select_game(GameKind::Word);
        app.session.submit_word_guess("python");

        let content = draw(&app);

        assert!(content.contains("Congratulations!"));
        assert!(content.contains("You've successfully guessed the word!"));
        assert!(content.contains("Secret Word: python"));
        assert!(content.contains("Your Attempts: 0"));
    }
}
