use crate::error::GameError;

pub const DEFAULT_WORDS_FILE: &str = "words.json";
pub const DEFAULT_PLAYERS: [&str; 4] = ["Alice", "Bob", "Charlie", "David"];

/// Runtime settings, read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON word corpus.
    pub words_file: String,
    /// Names of the simulated players, in seating order.
    pub players: Vec<String>,
    /// Whether narration pauses between beats.
    pub pacing: bool,
    /// Fixed seed for the random source; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: DEFAULT_WORDS_FILE.to_string(),
            players: DEFAULT_PLAYERS.map(String::from).to_vec(),
            pacing: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable lookup; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut config = Self::default();

        if let Some(path) = lookup("GTB_WORDS_FILE").filter(|p| !p.trim().is_empty()) {
            config.words_file = path;
        }

        if let Some(list) = lookup("GTB_PLAYERS") {
            config.players = parse_players(&list);
        }

        if let Some(value) = lookup("GTB_PACING") {
            config.pacing = match value.trim().to_ascii_lowercase().as_str() {
                "on" | "true" | "1" | "yes" => true,
                "off" | "false" | "0" | "no" => false,
                _ => return Err(GameError::InvalidConfig { var: "GTB_PACING", value }),
            };
        }

        if let Some(value) = lookup("GTB_SEED") {
            let Ok(seed) = value.trim().parse::<u64>() else {
                return Err(GameError::InvalidConfig { var: "GTB_SEED", value });
            };
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

/// Splits a comma-separated roster, dropping blank names.
/// The roster itself is checked when the game is created.
pub fn parse_players(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_match_the_classic_table() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.players, ["Alice", "Bob", "Charlie", "David"]);
        assert_eq!(config.words_file, "words.json");
        assert!(config.pacing);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("GTB_WORDS_FILE", "data/parole.json"),
            ("GTB_PLAYERS", " Anna, Marco ,Luca "),
            ("GTB_PACING", "off"),
            ("GTB_SEED", "1234"),
        ]))
        .unwrap();
        assert_eq!(config.words_file, "data/parole.json");
        assert_eq!(config.players, ["Anna", "Marco", "Luca"]);
        assert!(!config.pacing);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("GTB_PACING", "sometimes")])),
            Err(GameError::InvalidConfig { var: "GTB_PACING", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("GTB_SEED", "-4")])),
            Err(GameError::InvalidConfig { var: "GTB_SEED", .. })
        ));
    }

    #[test]
    fn roster_is_split_and_trimmed() {
        assert_eq!(parse_players("Solo"), ["Solo"]);
        assert!(parse_players(" , ,").is_empty());
        assert_eq!(parse_players("Anna,, Marco ,Anna"), ["Anna", "Marco", "Anna"]);
    }
}
