use rand::Rng;
use std::fmt;

/// A simulated player.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub role: Role,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Citizen,
    Saboteur,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Citizen => write!(f, "Cittadino"),
            Role::Saboteur => write!(f, "Sabotatore"),
        }
    }
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            score: 0,
            role: Role::Citizen,
        }
    }

    pub fn is_saboteur(&self) -> bool {
        self.role == Role::Saboteur
    }
}

/// Makes one player, chosen uniformly at random, the saboteur; everyone else
/// becomes a citizen. Returns the saboteur's index.
pub fn assign_saboteur(players: &mut [Player], rng: &mut impl Rng) -> usize {
    let saboteur = rng.gen_range(0..players.len());
    for (idx, player) in players.iter_mut().enumerate() {
        player.role = if idx == saboteur { Role::Saboteur } else { Role::Citizen };
    }
    saboteur
}
