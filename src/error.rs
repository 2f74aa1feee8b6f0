use thiserror::Error;

/// The result of a failed attempt to set up or play a [Game](crate::game::Game).
#[derive(Error, Debug)]
pub enum GameError {
    #[error("could not read word corpus {path}: {source}")]
    CorpusUnreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("word corpus {path} is malformed: {source}")]
    CorpusMalformed {
        path: String,
        source: serde_json::Error,
    },
    #[error("word corpus contains no entries")]
    EmptyCorpus,
    #[error("word corpus entry {0} has a blank word")]
    BlankWord(usize),
    #[error("word {word:?} needs {needed} {kind} clues but only has {available}")]
    NotEnoughClues {
        word: String,
        kind: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("too few players in the game")]
    TooFewPlayers,
    #[error("player {0:?} appears more than once")]
    DuplicatePlayer(String),
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("this action cannot be performed during this phase of the game")]
    InvalidAction,
    #[error("console input was closed")]
    InputClosed,
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
