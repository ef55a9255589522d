//! Moves, the strategy contract, and a library of built-in strategies

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::Turn;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// Both members, in a fixed order.
    pub const ALL: [Move; 2] = [Move::Cooperate, Move::Defect];

    /// The opposite move.
    pub fn flipped(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

/// A decision policy for one player.
///
/// `history` is this player's view of the game so far, oldest turn first;
/// it is empty on turn one. Implementations must return a move for any
/// well-formed history. They may keep internal state across turns of one
/// game — the tournament runner spawns a fresh instance per game, so state
/// never leaks between games.
///
/// Any `FnMut(&[Turn]) -> Move` closure is a strategy.
pub trait Strategy {
    /// Choose the next move given every turn played so far.
    fn next_move(&mut self, history: &[Turn]) -> Move;
}

impl<F> Strategy for F
where
    F: FnMut(&[Turn]) -> Move,
{
    fn next_move(&mut self, history: &[Turn]) -> Move {
        self(history)
    }
}

/// Never defects.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn next_move(&mut self, _history: &[Turn]) -> Move {
        Move::Cooperate
    }
}

/// Never cooperates.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn next_move(&mut self, _history: &[Turn]) -> Move {
        Move::Defect
    }
}

/// Copies the opponent's last move. Starts by cooperating.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn next_move(&mut self, history: &[Turn]) -> Move {
        history.last().map_or(Move::Cooperate, |turn| turn.their_move)
    }
}

/// Tit-for-Tat, but opens with a defection.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuspiciousTitForTat;

impl Strategy for SuspiciousTitForTat {
    fn next_move(&mut self, history: &[Turn]) -> Move {
        history.last().map_or(Move::Defect, |turn| turn.their_move)
    }
}

/// Retaliates only after two consecutive opponent defections.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTwoTats;

impl Strategy for TitForTwoTats {
    fn next_move(&mut self, history: &[Turn]) -> Move {
        match history {
            [.., a, b] if a.their_move == Move::Defect && b.their_move == Move::Defect => {
                Move::Defect
            }
            _ => Move::Cooperate,
        }
    }
}

/// Cooperates until the opponent's defections exceed a tolerance, then
/// defects for the rest of the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrimTrigger {
    /// Defections to forgive before triggering.
    pub tolerance: usize,
}

impl Strategy for GrimTrigger {
    fn next_move(&mut self, history: &[Turn]) -> Move {
        let defections = history
            .iter()
            .filter(|turn| turn.their_move == Move::Defect)
            .count();
        if defections > self.tolerance {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

/// Win-stay, lose-switch: repeats its last move after a good payoff, switches
/// after a bad one. A payoff of at least the classic mutual-cooperation
/// reward (3) counts as good. Starts by cooperating.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pavlov;

impl Strategy for Pavlov {
    fn next_move(&mut self, history: &[Turn]) -> Move {
        match history.last() {
            None => Move::Cooperate,
            Some(turn) if turn.my_score >= 3 => turn.my_move,
            Some(turn) => turn.my_move.flipped(),
        }
    }
}

/// Escalating retaliation: after the opponent's Nth defection, aims to have
/// answered with N(N+1)/2 defections in total, then returns to cooperation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gradual;

impl Strategy for Gradual {
    fn next_move(&mut self, history: &[Turn]) -> Move {
        let theirs = history
            .iter()
            .filter(|turn| turn.their_move == Move::Defect)
            .count();
        let mine = history
            .iter()
            .filter(|turn| turn.my_move == Move::Defect)
            .count();
        if mine < theirs * (theirs + 1) / 2 {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

/// Cooperates with a fixed probability each turn.
///
/// Seeded, so games stay reproducible: two instances built from the same
/// seed play identical move sequences.
#[derive(Clone, Debug)]
pub struct Random {
    rng: StdRng,
    cooperate_bias: u8,
}

impl Random {
    /// An unbiased coin flip per turn.
    pub fn seeded(seed: u64) -> Self {
        Self::with_bias(seed, 50)
    }

    /// Cooperate with `cooperate_bias` percent probability (0–100).
    pub fn with_bias(seed: u64, cooperate_bias: u8) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            cooperate_bias,
        }
    }
}

impl Strategy for Random {
    fn next_move(&mut self, _history: &[Turn]) -> Move {
        if self.rng.gen_range(0..100u8) < self.cooperate_bias {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }
}
