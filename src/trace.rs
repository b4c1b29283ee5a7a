// Per-turn tracing is a presentation concern: the game loop reports what
// happened to a sink and never prints anything itself.

use crate::game::{OrchardState, TreeId, Winner};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Roll { face: u8 },
    RavenAdvance,
    Harvest { tree: TreeId },
    EmptyTree { tree: TreeId },
    Basket,
    BasketPick { tree: TreeId },
    DeadFace { face: u8 },
    Finished { winner: Winner },
}

pub trait TraceSink {
    fn record(&mut self, state: &OrchardState, event: TurnEvent);
}

/// Discards everything. The batch driver uses this so tracing costs nothing
/// across 100k games.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _state: &OrchardState, _event: TurnEvent) {}
}

/// Narrates a game through tracing, one line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, state: &OrchardState, event: TurnEvent) {
        match event {
            TurnEvent::Roll { face } => info!("Dice: {}", face),
            TurnEvent::RavenAdvance => {
                info!("Puzzle has {} piece(s)", state.puzzle_pieces)
            }
            TurnEvent::Harvest { tree } => info!(
                "Picked one fruit from tree {} - trees: {:?}, fruits picked: {}",
                tree,
                state.fruit_counts(),
                state.fruits_collected
            ),
            TurnEvent::EmptyTree { tree } => info!("Tree {} is already empty", tree),
            TurnEvent::Basket => info!("Basket!"),
            TurnEvent::BasketPick { tree } => info!(
                "Picked tree {} - trees: {:?}, fruits picked: {}",
                tree,
                state.fruit_counts(),
                state.fruits_collected
            ),
            TurnEvent::DeadFace { face } => info!("Face {} does nothing", face),
            TurnEvent::Finished { winner } => {
                info!("{} wins in {} turns", winner, state.turns_played)
            }
        }
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    /// Collects events so tests can assert on the exact turn sequence.
    #[derive(Debug, Default)]
    pub struct RecordingTrace {
        pub events: Vec<TurnEvent>,
    }

    impl TraceSink for RecordingTrace {
        fn record(&mut self, _state: &OrchardState, event: TurnEvent) {
            self.events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingTrace;
    use super::*;
    use crate::game::{ScriptedSource, run_game};
    use crate::policy::basket::GreedyPick;
    use crate::simulation::config::GameConfig;

    #[test]
    fn sink_sees_every_turn_in_order() {
        let config = GameConfig {
            nb_trees: 1,
            nb_fruits_per_tree: 1,
            puzzle_size: 1,
            ..GameConfig::default()
        };
        // Faces for 1 tree: 1 harvests, 2 is basket, 3 is raven. A dead face
        // first, then the raven ends it.
        let mut random = ScriptedSource::new([5, 3], []);
        let mut trace = RecordingTrace::default();
        run_game(&config, &mut GreedyPick, &mut random, &mut trace);

        assert_eq!(
            trace.events,
            vec![
                TurnEvent::Roll { face: 5 },
                TurnEvent::DeadFace { face: 5 },
                TurnEvent::Roll { face: 3 },
                TurnEvent::RavenAdvance,
                TurnEvent::Finished {
                    winner: Winner::Raven
                },
            ]
        );
    }
}
