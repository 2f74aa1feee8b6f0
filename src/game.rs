pub use self::mode::GameMode;
use self::player::{assign_saboteur, Player};
use self::votes::{pick_vote, vote_pool, Votes};
pub use self::words::{Clue, Corpus, WordEntry};
use crate::console::Console;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

mod json;
mod mode;
mod player;
mod votes;
mod words;

pub const MIN_PLAYERS: usize = 2;

const SHORT_PAUSE: Duration = Duration::from_secs(1);
const LONG_PAUSE: Duration = Duration::from_secs(2);

/// A single round of Guess the Bro.
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<Player>,
    state: GameState,
    rng: rand_chacha::ChaCha8Rng,
}

/// Everything decided so far during the round.
#[derive(Clone, Debug, Default)]
struct GameState {
    mode: Option<GameMode>,
    secret_word: String,
    saboteur: Option<usize>,
    /// Clues revealed to the table, in the order they were shown.
    clues: Vec<Clue>,
    /// The challenger and the challenged player.
    challenge: Option<(usize, usize)>,
    votes: Option<Votes>,
    guess: Option<String>,
    outcome: Option<WinCondition>,
}

/// The side that won the round.
#[derive(Clone, Copy, Serialize, PartialEq, Eq, Debug)]
pub enum Team {
    Citizens,
    Saboteur,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WinCondition {
    /// The vote landed on the saboteur.
    SaboteurUnmasked,
    /// The vote landed on a citizen.
    SaboteurEscaped,
    /// The citizens guessed the secret word.
    WordGuessed,
    /// The citizens guessed wrong.
    WordMissed,
}

impl WinCondition {
    pub fn winner(&self) -> Team {
        match self {
            WinCondition::SaboteurUnmasked | WinCondition::WordGuessed => Team::Citizens,
            WinCondition::SaboteurEscaped | WinCondition::WordMissed => Team::Saboteur,
        }
    }
}

impl ToString for WinCondition {
    fn to_string(&self) -> String {
        match self {
            WinCondition::SaboteurUnmasked => "SaboteurUnmasked",
            WinCondition::SaboteurEscaped => "SaboteurEscaped",
            WinCondition::WordGuessed => "WordGuessed",
            WinCondition::WordMissed => "WordMissed",
        }
        .to_string()
    }
}

/// Whether a guess names the secret word, ignoring case and surrounding whitespace.
pub fn guess_matches(guess: &str, secret_word: &str) -> bool {
    guess.trim().to_lowercase() == secret_word.trim().to_lowercase()
}

impl Game {
    /// Creates a new game; every player starts as a citizen.
    pub fn new(player_names: &[String], seed: u64) -> Result<Self, GameError> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = player_names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(GameError::DuplicatePlayer(dup.clone()));
        }

        Ok(Game {
            players: player_names.iter().map(|name| Player::new(name.clone())).collect(),
            state: GameState::default(),
            rng: rand_chacha::ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Plays a whole round, from the lobby to the final verdict.
    pub fn play(&mut self, corpus: &Corpus, console: &mut impl Console) -> Result<WinCondition, GameError> {
        log::info!("Starting a game with {} players", self.num_players());
        self.introduce(console)?;
        let mode = self.choose_mode(console)?;
        self.assign_roles(console)?;
        let entry = self.choose_word(corpus);

        let outcome = match mode {
            GameMode::HiddenSaboteur => self.play_hidden_saboteur(entry, console)?,
            GameMode::InformedSaboteur => self.play_informed_saboteur(entry, console)?,
        };
        log::info!("Game over: {}", outcome.to_string());
        log::debug!("Summary: {}", self.get_summary_json());
        Ok(outcome)
    }

    /// Greets the table and lists the lobby.
    pub fn introduce(&self, console: &mut impl Console) -> Result<(), GameError> {
        let names = self.player_names().collect::<Vec<_>>().join(", ");
        console.say("--- Benvenuto a Guess the Bro! ---")?;
        console.say(&format!("Simulazione: {} giocatori - {}", self.num_players(), names))?;
        console.say("")?;
        console.say(&format!("Giocatori nella lobby: {}", names))
    }

    /// Asks for the game mode until a valid choice is given.
    pub fn choose_mode(&mut self, console: &mut impl Console) -> Result<GameMode, GameError> {
        console.say("")?;
        console.say("Scegli la modalità di gioco:")?;
        console.say("1. Sabotatore Nascosto (I Cittadini devono trovare il Sabotatore)")?;
        console.say("2. Sabotatore Informato (I Cittadini devono indovinare la parola)")?;

        let mut answer = console.ask("Scegli 1 o 2: ")?;
        let mode = loop {
            if let Some(mode) = GameMode::from_choice(&answer) {
                break mode;
            }
            log::debug!("Rejected mode choice {:?}", answer);
            answer = console.ask("Selezione non valida. Scegli 1 o 2: ")?;
        };

        self.state.mode = Some(mode);
        Ok(mode)
    }

    /// Secretly picks the saboteur and tells each player their role.
    pub fn assign_roles(&mut self, console: &mut impl Console) -> Result<usize, GameError> {
        let saboteur = assign_saboteur(&mut self.players, &mut self.rng);
        self.state.saboteur = Some(saboteur);
        log::debug!("{} is the saboteur", self.players[saboteur].name);

        console.say("")?;
        console.say("--- I ruoli sono stati assegnati! ---")?;
        for player in &self.players {
            if player.is_saboteur() {
                console.say(&format!("Pss, {}... tu sei il Sabotatore! Mantieni il segreto.", player.name))?;
            } else {
                console.say(&format!("Pss, {}... tu sei un Cittadino.", player.name))?;
            }
        }
        console.pause(LONG_PAUSE);
        Ok(saboteur)
    }

    /// Picks the secret word for this round.
    pub fn choose_word<'c>(&mut self, corpus: &'c Corpus) -> &'c WordEntry {
        let entry = corpus.choose(&mut self.rng);
        self.state.secret_word = entry.word.clone();
        log::debug!("Secret word is {:?}", entry.word);
        entry
    }

    /// Everyone sees the word and three true clues, then the table votes.
    pub fn play_hidden_saboteur(&mut self, entry: &WordEntry, console: &mut impl Console) -> Result<WinCondition, GameError> {
        self.check_saboteur()?;
        console.say("")?;
        console.say(GameMode::HiddenSaboteur.banner())?;
        console.say(&format!("La parola segreta è: {}", self.state.secret_word))?;
        console.say("(Tutti la conoscono tranne il Sabotatore!)")?;
        console.say("")?;
        console.pause(LONG_PAUSE);

        let clues = entry.hidden_clues(&mut self.rng)?;
        console.say("Il sistema rivela 3 indizi anonimi:")?;
        self.reveal_clues(clues, console)?;

        console.say("")?;
        console.say("Ora discutete! Il Sabotatore cercherà di bluffare.")?;
        self.run_challenge(console)?;
        self.run_voting(console)
    }

    /// Only the saboteur sees the word; the table gets two true clues and a decoy, then guesses.
    pub fn play_informed_saboteur(&mut self, entry: &WordEntry, console: &mut impl Console) -> Result<WinCondition, GameError> {
        let saboteur = self.check_saboteur()?;
        console.say("")?;
        console.say(GameMode::InformedSaboteur.banner())?;
        console.say("Il Sabotatore conosce la parola segreta. I cittadini no.")?;
        console.say(&format!(
            "({}, la parola è '{}'. Guida gli altri fuori strada!)",
            self.players[saboteur].name, self.state.secret_word
        ))?;
        console.say("")?;
        console.pause(LONG_PAUSE);

        let clues = entry.informed_clues(&mut self.rng)?;
        console.say("Il sistema rivela 3 indizi anonimi (uno è fuorviante):")?;
        self.reveal_clues(clues, console)?;

        console.say("")?;
        console.say("Cittadini, discutete e provate a indovinare la parola.")?;
        self.run_challenge(console)?;
        self.run_word_guess(console)
    }

    /// A random player challenges another to explain a clue. Purely narrative.
    pub fn run_challenge(&mut self, console: &mut impl Console) -> Result<(usize, usize), GameError> {
        console.say("")?;
        console.say("Simulazione di una Challenge...")?;
        console.pause(SHORT_PAUSE);

        let num_players = self.num_players();
        let challenger = self.rng.gen_range(0..num_players);
        let targets: Vec<usize> = (0..num_players).filter(|p| *p != challenger).collect();
        let Some(&challenged) = targets.choose(&mut self.rng) else {
            return Err(GameError::TooFewPlayers);
        };
        self.state.challenge = Some((challenger, challenged));

        let (challenger_name, challenged_name) = (&self.players[challenger].name, &self.players[challenged].name);
        console.say(&format!("{} sfida {}!", challenger_name, challenged_name))?;
        console.say(&format!("{} deve spiegare un indizio...", challenged_name))?;
        console.pause(LONG_PAUSE);
        Ok((challenger, challenged))
    }

    /// Every player votes for someone else, leaning towards the saboteur.
    /// The citizens win if the most voted player is the saboteur.
    pub fn run_voting(&mut self, console: &mut impl Console) -> Result<WinCondition, GameError> {
        let saboteur = self.check_saboteur()?;
        console.say("")?;
        console.say("--- VOTAZIONE FINALE SIMULATA ---")?;

        let pool = vote_pool(self.num_players(), saboteur);
        let mut votes = Votes::new(self.num_players());
        for voter in 0..self.num_players() {
            let Some(target) = pick_vote(&pool, voter, &mut self.rng) else {
                return Err(GameError::TooFewPlayers);
            };
            votes.vote(voter, target);
            console.say(&format!("{} vota per... {}", self.players[voter].name, self.players[target].name))?;
            console.pause(SHORT_PAUSE);
        }
        log::debug!("Tally {:?} from {} votes", votes.tally(), votes.total());

        let most_voted = votes.most_voted().ok_or(GameError::InvalidAction)?;
        self.state.votes = Some(votes);

        let saboteur_name = &self.players[saboteur].name;
        console.say("")?;
        console.say(&format!("Il giocatore più votato è... {}!", self.players[most_voted].name))?;
        let outcome = if most_voted == saboteur {
            console.say(&format!("Corretto! {} era il Sabotatore! I CITTADINI VINCONO!", saboteur_name))?;
            WinCondition::SaboteurUnmasked
        } else {
            console.say(&format!("Sbagliato! Il vero Sabotatore era {}! IL SABOTATORE VINCE!", saboteur_name))?;
            WinCondition::SaboteurEscaped
        };
        self.state.outcome = Some(outcome);
        Ok(outcome)
    }

    /// The citizens get a single guess at the secret word.
    pub fn run_word_guess(&mut self, console: &mut impl Console) -> Result<WinCondition, GameError> {
        if self.state.secret_word.is_empty() {
            return Err(GameError::InvalidAction);
        }
        console.say("")?;
        console.say("--- INDOVINA LA PAROLA ---")?;
        let guess = console.ask("Cittadini, qual è la vostra ipotesi finale per la parola segreta? ")?;

        let word = &self.state.secret_word;
        let outcome = if guess_matches(&guess, word) {
            console.say(&format!("Corretto! La parola era {}! I CITTADINI VINCONO!", word))?;
            WinCondition::WordGuessed
        } else {
            console.say(&format!("Sbagliato! La parola era {}! IL SABOTATORE VINCE!", word))?;
            WinCondition::WordMissed
        };
        self.state.guess = Some(guess);
        self.state.outcome = Some(outcome);
        Ok(outcome)
    }

    fn reveal_clues(&mut self, clues: Vec<Clue>, console: &mut impl Console) -> Result<(), GameError> {
        for clue in &clues {
            console.say(&format!("- {}", clue.text))?;
        }
        self.state.clues = clues;
        Ok(())
    }

    fn check_saboteur(&self) -> Result<usize, GameError> {
        self.state.saboteur.ok_or(GameError::InvalidAction)
    }

    /// Gets the player names.
    pub fn player_names(&self) -> impl Iterator<Item = &'_ str> {
        self.players.iter().map(|p| &p.name[..])
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn saboteur(&self) -> Option<usize> {
        self.state.saboteur
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.state.mode
    }

    pub fn secret_word(&self) -> &str {
        &self.state.secret_word
    }

    pub fn clues(&self) -> &[Clue] {
        &self.state.clues
    }

    pub fn outcome(&self) -> Option<WinCondition> {
        self.state.outcome
    }

    pub fn game_over(&self) -> bool {
        self.state.outcome.is_some()
    }
}
