use super::Game;
use serde_json::{json, Value};

impl Game {
    /// Everything that happened during the round, including the secrets.
    pub fn get_summary_json(&self) -> Value {
        json!({
            "players": self.get_players_json(),
            "mode": self.mode().map(|m| m.to_string()),
            "secretWord": self.secret_word(),
            "saboteur": self.saboteur().map(|i| self.players[i].name.clone()),
            "clues": self.clues(),
            "challenge": self.get_challenge_json(),
            "votes": self.get_votes_json(),
            "guess": self.state.guess,
            "gameOver": self.game_over(),
            "outcome": self.outcome().map(|o| o.to_string()),
            "winner": self.outcome().map(|o| o.winner()),
        })
    }

    fn get_players_json(&self) -> Value {
        self.players
            .iter()
            .map(|player| {
                json!({
                    "name": player.name,
                    "score": player.score,
                    "role": player.role.to_string(),
                })
            })
            .collect()
    }

    fn get_challenge_json(&self) -> Value {
        match self.state.challenge {
            Some((challenger, challenged)) => json!({
                "challenger": self.players[challenger].name,
                "challenged": self.players[challenged].name,
            }),
            None => Value::Null,
        }
    }

    fn get_votes_json(&self) -> Value {
        let Some(votes) = &self.state.votes else {
            return Value::Null;
        };
        self.players
            .iter()
            .zip(votes.ballots().iter().zip(votes.tally()))
            .map(|(player, (ballot, received))| {
                json!({
                    "voter": player.name,
                    "votedFor": ballot.map(|t| self.players[t].name.clone()),
                    "received": received,
                })
            })
            .collect()
    }
}
