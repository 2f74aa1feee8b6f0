//! Whole rounds played end to end through a scripted console.

use super::test_utils::*;
use crate::game::words::ClueKind;
use crate::game::{GameMode, Team, WinCondition};

#[test]
fn hidden_saboteur_round() {
    let corpus = single_word_corpus(entry("GATTO", &["c1", "c2", "c3", "c4"], &[]));
    for seed in 0..50 {
        let mut game = create_standard_game(seed);
        let mut console = ScriptedConsole::with_inputs(&["1"]);
        let outcome = game.play(&corpus, &mut console).unwrap();
        let output = console.output();

        for name in default_names() {
            assert!(output.contains(&name), "missing {}", name);
        }
        assert!(console.has_line("La parola segreta è: GATTO"));

        let shown = ["c1", "c2", "c3", "c4"]
            .iter()
            .filter(|c| console.has_line(&format!("- {}", c)))
            .count();
        assert_eq!(shown, 3);

        let saboteur = &game.players[game.saboteur().unwrap()].name;
        assert!(console.lines.last().unwrap().contains(saboteur.as_str()));
        assert!(matches!(outcome, WinCondition::SaboteurUnmasked | WinCondition::SaboteurEscaped));
        assert_eq!(game.mode(), Some(GameMode::HiddenSaboteur));
        assert!(game.game_over());
    }
}

#[test]
fn informed_saboteur_round_after_a_retry() {
    let corpus = single_word_corpus(gatto());
    let mut game = create_standard_game(9);
    let mut console = ScriptedConsole::with_inputs(&["3", "2", "Gatto"]);
    let outcome = game.play(&corpus, &mut console).unwrap();

    assert_eq!(game.mode(), Some(GameMode::InformedSaboteur));
    assert_eq!(console.prompts.len(), 3);
    assert_eq!(console.unused_inputs(), 0);
    assert_eq!(outcome, WinCondition::WordGuessed);
    assert_eq!(outcome.winner(), Team::Citizens);

    let saboteur = &game.players[game.saboteur().unwrap()].name;
    assert!(console.has_line(&format!(
        "({}, la parola è 'GATTO'. Guida gli altri fuori strada!)",
        saboteur
    )));
    assert!(!console.has_line("La parola segreta è: GATTO"));

    let clues = game.clues();
    assert_eq!(clues.len(), 3);
    assert_eq!(clues.iter().filter(|c| c.kind == ClueKind::Bad).count(), 1);
    for clue in clues {
        assert!(console.has_line(&format!("- {}", clue.text)));
    }
}

#[test]
fn informed_saboteur_wins_on_a_wrong_guess() {
    let corpus = single_word_corpus(gatto());
    let mut game = create_standard_game(2);
    let mut console = ScriptedConsole::with_inputs(&["2", "TOPO"]);
    let outcome = game.play(&corpus, &mut console).unwrap();
    assert_eq!(outcome.winner(), Team::Saboteur);
    assert_eq!(console.lines.last().unwrap(), "Sbagliato! La parola era GATTO! IL SABOTATORE VINCE!");
}

#[test]
fn narration_is_paced() {
    let corpus = single_word_corpus(gatto());
    let mut game = create_standard_game(0);
    let mut console = ScriptedConsole::with_inputs(&["1"]);
    game.play(&corpus, &mut console).unwrap();
    // roles, word reveal, two for the challenge, one per vote
    assert_eq!(console.pauses.len(), 4 + game.num_players());
}

#[test]
fn same_seed_same_round() {
    let corpus = single_word_corpus(gatto());
    let run = |seed| {
        let mut game = create_standard_game(seed);
        let mut console = ScriptedConsole::with_inputs(&["1"]);
        game.play(&corpus, &mut console).unwrap();
        console.lines
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn missing_clues_abort_the_round() {
    let corpus = single_word_corpus(entry("GATTO", &["c1", "c2", "c3"], &[]));
    let mut game = create_standard_game(0);
    let mut console = ScriptedConsole::with_inputs(&["2", "GATTO"]);
    assert!(game.play(&corpus, &mut console).is_err());
    assert!(!game.game_over());
}

#[test]
fn summary_reports_the_round() {
    let corpus = single_word_corpus(gatto());
    let mut game = create_standard_game(31);
    let mut console = ScriptedConsole::with_inputs(&["1"]);
    let outcome = game.play(&corpus, &mut console).unwrap();

    let summary = game.get_summary_json();
    assert_eq!(summary["secretWord"], "GATTO");
    assert_eq!(summary["mode"], "hidden_saboteur");
    assert_eq!(summary["outcome"], outcome.to_string());
    assert_eq!(summary["gameOver"], true);

    let players = summary["players"].as_array().unwrap();
    assert_eq!(players.len(), 4);
    assert_eq!(players.iter().filter(|p| p["role"] == "Sabotatore").count(), 1);

    let saboteur = &game.players[game.saboteur().unwrap()].name;
    assert_eq!(summary["saboteur"], saboteur.as_str());

    let votes = summary["votes"].as_array().unwrap();
    assert_eq!(votes.len(), 4);
    let received: u64 = votes.iter().map(|v| v["received"].as_u64().unwrap()).sum();
    assert_eq!(received, 4);
    assert_eq!(summary["clues"].as_array().unwrap().len(), 3);
    assert!(summary["challenge"].is_object());
}
