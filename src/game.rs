// Core state machine for one game of "Le Verger": a player racing a raven.
// The player empties the orchard, the raven assembles its puzzle, one die
// drives both. Everything nondeterministic comes in through RandomSource so
// the whole loop replays under a scripted source.

use crate::policy::Policy;
use crate::simulation::config::GameConfig;
use crate::trace::{TraceSink, TurnEvent};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Trees are numbered 1..=nb_trees, matching the die faces that harvest them.
pub type TreeId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Raven,
    Player,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Raven => write!(f, "Raven"),
            Winner::Player => write!(f, "Player"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Winner,
    pub turns_played: u32,
}

/// The single source of nondeterminism in a game. `run_game` draws die faces
/// from it and `RandomPick` draws basket choices from it, so substituting a
/// scripted implementation makes an entire playout deterministic.
pub trait RandomSource {
    /// Uniform face in `1..=faces`.
    fn roll(&mut self, faces: u8) -> u8;
    /// Uniform index in `0..len`. `len` is never 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapter over any rand RNG.
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll(&mut self, faces: u8) -> u8 {
        self.0.gen_range(1..=faces)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed script of die faces and basket picks. Panics when the
/// script runs dry, which in a test means the scenario was mis-counted.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    faces: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(faces: impl IntoIterator<Item = u8>, picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn roll(&mut self, _faces: u8) -> u8 {
        self.faces.pop_front().expect("face script exhausted")
    }

    fn pick(&mut self, _len: usize) -> usize {
        self.picks.pop_front().expect("pick script exhausted")
    }
}

#[derive(Debug, Clone)]
pub struct OrchardState {
    fruits: Vec<u8>, // index 0 holds tree 1
    pub puzzle_pieces: u8,
    pub fruits_collected: u16,
    pub turns_played: u32,
}

impl OrchardState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            fruits: vec![config.nb_fruits_per_tree; config.nb_trees as usize],
            puzzle_pieces: 0,
            fruits_collected: 0,
            turns_played: 0,
        }
    }

    pub fn fruits_on(&self, tree: TreeId) -> u8 {
        self.fruits[tree as usize - 1]
    }

    pub fn fruit_counts(&self) -> &[u8] {
        &self.fruits
    }

    pub fn remaining_total(&self) -> u16 {
        self.fruits.iter().map(|&f| f as u16).sum()
    }

    pub fn available_trees(&self) -> Vec<TreeId> {
        self.fruits
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f > 0)
            .map(|(i, _)| (i + 1) as TreeId)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn with_counts(counts: &[u8]) -> Self {
        Self {
            fruits: counts.to_vec(),
            puzzle_pieces: 0,
            fruits_collected: 0,
            turns_played: 0,
        }
    }

    /// Caller guarantees the tree still has fruit.
    fn harvest(&mut self, tree: TreeId) {
        debug_assert!(self.fruits_on(tree) > 0);
        self.fruits[tree as usize - 1] -= 1;
        self.fruits_collected += 1;
    }
}

/// Plays one game to completion and reports who won and after how many turns.
///
/// The config decides the board shape, the policy decides basket picks, the
/// random source decides everything random, and the sink watches each turn.
/// Total over valid configs; the only loop exit is one side finishing, and
/// the raven face keeps that almost surely finite.
pub fn run_game(
    config: &GameConfig,
    policy: &mut dyn Policy,
    random: &mut dyn RandomSource,
    trace: &mut dyn TraceSink,
) -> GameResult {
    let total_fruits = config.total_fruits();
    let mut state = OrchardState::new(config);

    while state.fruits_collected < total_fruits && state.puzzle_pieces < config.puzzle_size {
        let face = random.roll(config.die_faces);
        trace.record(&state, TurnEvent::Roll { face });

        if face == config.raven_face() {
            state.puzzle_pieces += 1;
            trace.record(&state, TurnEvent::RavenAdvance);
        } else if face <= config.nb_trees {
            // tree face: one fruit if the tree still has any, otherwise the
            // face is consumed with no effect (no retry)
            if state.fruits_on(face) > 0 {
                state.harvest(face);
                trace.record(&state, TurnEvent::Harvest { tree: face });
            } else {
                trace.record(&state, TurnEvent::EmptyTree { tree: face });
            }
        } else if face == config.basket_face() {
            trace.record(&state, TurnEvent::Basket);
            for _ in 0..config.fruits_if_panier {
                let available = state.available_trees();
                if available.is_empty() {
                    break;
                }
                let tree = policy.select_tree(&available, &state, random);
                state.harvest(tree);
                trace.record(&state, TurnEvent::BasketPick { tree });
            }
        } else {
            // dead face, only reachable when nb_trees + 2 < die_faces
            trace.record(&state, TurnEvent::DeadFace { face });
        }

        state.turns_played += 1;
    }

    // Puzzle checked first: the raven wins simultaneous completion.
    let winner = if state.puzzle_pieces == config.puzzle_size {
        Winner::Raven
    } else {
        Winner::Player
    };
    trace.record(&state, TurnEvent::Finished { winner });

    GameResult {
        winner,
        turns_played: state.turns_played,
    }
}
