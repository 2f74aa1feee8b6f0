use rand::seq::SliceRandom;
use rand::Rng;

/// How many extra times the saboteur's name goes into the vote pool.
pub const SABOTEUR_EXTRA_WEIGHT: usize = 2;

/// Tracks who each player voted for and how many votes each player received.
#[derive(Clone, Debug)]
pub struct Votes {
    ballots: Vec<Option<usize>>,
    tally: Vec<usize>,
}

impl Votes {
    /// Creates an empty `Votes` for `num_players` players.
    pub fn new(num_players: usize) -> Self {
        Self {
            ballots: vec![None; num_players],
            tally: vec![0; num_players],
        }
    }

    /// Records the vote of a player.
    pub fn vote(&mut self, voter: usize, target: usize) {
        if let Some(previous) = self.ballots[voter].replace(target) {
            self.tally[previous] -= 1;
        }
        self.tally[target] += 1;
    }

    /// The player each player voted for, if they have voted.
    pub fn ballots(&self) -> &[Option<usize>] {
        &self.ballots
    }

    /// Number of votes received by each player.
    pub fn tally(&self) -> &[usize] {
        &self.tally
    }

    pub fn total(&self) -> usize {
        self.tally.iter().sum()
    }

    /// The player with the most votes; ties go to the lowest index.
    /// Returns `None` if nobody has voted.
    pub fn most_voted(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, count) in self.tally.iter().enumerate() {
            if *count > 0 && best.map_or(true, |b| *count > self.tally[b]) {
                best = Some(idx);
            }
        }
        best
    }
}

/// Every player once, plus the saboteur [SABOTEUR_EXTRA_WEIGHT] more times.
pub fn vote_pool(num_players: usize, saboteur: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..num_players).collect();
    pool.extend(std::iter::repeat(saboteur).take(SABOTEUR_EXTRA_WEIGHT));
    pool
}

/// Picks a vote for `voter` from the pool, never voting for themselves.
pub fn pick_vote(pool: &[usize], voter: usize, rng: &mut impl Rng) -> Option<usize> {
    let eligible: Vec<usize> = pool.iter().copied().filter(|p| *p != voter).collect();
    eligible.choose(rng).copied()
}
