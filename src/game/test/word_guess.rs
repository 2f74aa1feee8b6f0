use super::test_utils::*;
use crate::error::GameError;
use crate::game::{guess_matches, WinCondition};

#[test]
fn guesses_ignore_case() {
    assert!(guess_matches("PAROLA", "parola"));
    assert!(guess_matches("parola", "PAROLA"));
    assert!(!guess_matches("ALTRA", "parola"));
}

#[test]
fn guesses_ignore_surrounding_whitespace() {
    assert!(guess_matches("  gatto \t", "GATTO"));
    assert!(!guess_matches("gat to", "GATTO"));
    assert!(!guess_matches("", "GATTO"));
}

#[test]
fn accented_words_match_across_case() {
    assert!(guess_matches("caffè", "CAFFÈ"));
    assert!(!guess_matches("caffe", "CAFFÈ"));
}

#[test]
fn correct_guess_wins_for_citizens() {
    let (mut game, _) = create_game_with_word(4, &single_word_corpus(gatto()));
    let mut console = ScriptedConsole::with_inputs(&["gatto"]);
    assert_eq!(game.run_word_guess(&mut console).unwrap(), WinCondition::WordGuessed);
    assert!(console.has_line("Corretto! La parola era GATTO! I CITTADINI VINCONO!"));
    assert_eq!(game.state.guess.as_deref(), Some("gatto"));
    assert!(game.game_over());
}

#[test]
fn wrong_guess_wins_for_saboteur() {
    let (mut game, _) = create_game_with_word(4, &single_word_corpus(gatto()));
    let mut console = ScriptedConsole::with_inputs(&["CANE"]);
    assert_eq!(game.run_word_guess(&mut console).unwrap(), WinCondition::WordMissed);
    assert!(console.has_line("Sbagliato! La parola era GATTO! IL SABOTATORE VINCE!"));
}

#[test]
fn guess_needs_a_word() {
    let mut game = create_standard_game(0);
    let mut console = ScriptedConsole::with_inputs(&["GATTO"]);
    assert!(matches!(game.run_word_guess(&mut console), Err(GameError::InvalidAction)));
}

#[test]
fn closed_input_during_guess() {
    let (mut game, _) = create_game_with_word(4, &single_word_corpus(gatto()));
    let mut console = ScriptedConsole::default();
    assert!(matches!(game.run_word_guess(&mut console), Err(GameError::InputClosed)));
    assert!(!game.game_over());
}
