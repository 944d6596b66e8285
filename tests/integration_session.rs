use assert_matches::assert_matches;
use hunch::session::{GameKind, HintCategory, Outcome, Phase, Session, MAX_ATTEMPTS};
use hunch::words;

#[test]
fn fresh_sessions_always_start_within_bounds() {
    for _ in 0..20 {
        let session = Session::new();

        assert_eq!(session.word_attempts_remaining, MAX_ATTEMPTS);
        assert_eq!(session.number_attempts_remaining, MAX_ATTEMPTS);
        assert!(session.word_history.is_empty());
        assert!(session.number_history.is_empty());
        assert!(words::WORD_LIST.contains(&session.secret_word.as_str()));
        assert!(words::SECRET_NUMBER_RANGE.contains(&session.secret_number));
    }
}

#[test]
fn both_games_share_one_round_without_interfering() {
    let mut session = Session::new();
    session.secret_word = "python".to_string();
    session.secret_number = 42;

    session.select_game(GameKind::Word);
    session.submit_word_guess("java");
    session.back_to_selection();

    session.select_game(GameKind::Number);
    session.submit_number_guess("50");
    session.submit_number_guess("30");
    session.back_to_selection();

    // each game kept its own counter and history
    assert_eq!(session.word_attempts_remaining, MAX_ATTEMPTS - 1);
    assert_eq!(session.number_attempts_remaining, MAX_ATTEMPTS - 2);
    assert_eq!(session.word_history.len(), 1);
    assert_eq!(session.number_history.len(), 2);

    // and the word round is still winnable
    session.select_game(GameKind::Word);
    assert_eq!(session.submit_word_guess("python"), Some(Outcome::Correct));
    assert_matches!(session.phase, Phase::GameOver { won: true, .. });
}

#[test]
fn full_word_loss_reports_the_secret() {
    let mut session = Session::new();
    session.secret_word = "python".to_string();
    session.select_game(GameKind::Word);

    for guess in ["java", "ruby", "perl", "swift"] {
        session.submit_word_guess(guess);
    }
    // the letter hint from the second miss has been displaced by later info
    // messages, but the round is still live with one attempt left
    assert_eq!(session.word_attempts_remaining, 1);

    session.submit_word_guess("go");

    let report = session.game_over_report().expect("game is over");
    assert!(!report.won);
    assert_eq!(report.kind, GameKind::Word);
    assert_eq!(report.secret, "python");
    assert_eq!(report.attempts_used, MAX_ATTEMPTS);
    assert_eq!(
        report.message,
        "You've run out of attempts. Better luck next time!"
    );
}

#[test]
fn rejected_inputs_never_consume_attempts() {
    let mut session = Session::new();
    session.secret_number = 42;
    session.select_game(GameKind::Number);

    for raw in ["", "forty-two", "0", "101", "1000000"] {
        assert_eq!(session.submit_number_guess(raw), None);
    }
    assert_eq!(session.number_attempts_remaining, MAX_ATTEMPTS);
    assert!(session.number_history.is_empty());
    assert_eq!(
        session.number_hint.as_ref().map(|h| h.category),
        Some(HintCategory::Error)
    );

    session.back_to_selection();
    session.select_game(GameKind::Word);
    assert_eq!(session.submit_word_guess("  \t "), None);
    assert_eq!(session.word_attempts_remaining, MAX_ATTEMPTS);
    assert!(session.word_history.is_empty());
}

#[test]
fn play_again_rerolls_secrets_and_clears_everything() {
    let mut session = Session::new();
    session.secret_word = "python".to_string();
    session.secret_number = 42;
    session.select_game(GameKind::Number);
    for _ in 0..MAX_ATTEMPTS {
        session.submit_number_guess("99");
    }
    assert_matches!(session.phase, Phase::GameOver { won: false, .. });

    session.play_again();

    assert_eq!(session.phase, Phase::Selection);
    assert_eq!(session.word_attempts_remaining, MAX_ATTEMPTS);
    assert_eq!(session.number_attempts_remaining, MAX_ATTEMPTS);
    assert!(session.word_history.is_empty());
    assert!(session.number_history.is_empty());
    assert!(session.word_hint.is_none());
    assert!(session.number_hint.is_none());
    assert!(words::WORD_LIST.contains(&session.secret_word.as_str()));
    assert!(words::SECRET_NUMBER_RANGE.contains(&session.secret_number));
}

#[test]
fn attempts_counters_never_underflow() {
    let mut session = Session::new();
    session.secret_word = "python".to_string();
    session.select_game(GameKind::Word);

    for _ in 0..(MAX_ATTEMPTS + 3) {
        session.submit_word_guess("wrong");
    }

    assert_eq!(session.word_attempts_remaining, 0);
    assert_eq!(session.word_history.len(), MAX_ATTEMPTS as usize);
}
