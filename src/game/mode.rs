use std::fmt;

/// The two ways a round can be played.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameMode {
    /// Everyone but the saboteur knows the word; the citizens vote to find the saboteur.
    HiddenSaboteur,
    /// Only the saboteur knows the word; the citizens must guess it.
    InformedSaboteur,
}

impl GameMode {
    /// Parses a menu choice: `1` for hidden, `2` for informed.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(GameMode::HiddenSaboteur),
            "2" => Some(GameMode::InformedSaboteur),
            _ => None,
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            GameMode::HiddenSaboteur => "--- MODALITÀ: SABOTATORE NASCOSTO ---",
            GameMode::InformedSaboteur => "--- MODALITÀ: SABOTATORE INFORMATO ---",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HiddenSaboteur => write!(f, "hidden_saboteur"),
            GameMode::InformedSaboteur => write!(f, "informed_saboteur"),
        }
    }
}
