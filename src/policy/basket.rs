use super::Policy;
use crate::game::{OrchardState, RandomSource, TreeId};

/// Uniform choice among the trees that still carry fruit, like a child
/// grabbing whatever looks nice.
#[derive(Debug, Clone, Copy)]
pub struct RandomPick;

impl Policy for RandomPick {
    fn select_tree(
        &mut self,
        available: &[TreeId],
        _state: &OrchardState,
        random: &mut dyn RandomSource,
    ) -> TreeId {
        available[random.pick(available.len())]
    }

    fn name(&self) -> &str {
        "random"
    }

    fn clone_box(&self) -> Box<dyn Policy> {
        Box::new(*self)
    }
}

/// Takes from the fullest tree, first one on ties. Scarce trees stay stocked
/// for the tree faces, so later basket draws waste fewer picks.
#[derive(Debug, Clone, Copy)]
pub struct GreedyPick;

impl Policy for GreedyPick {
    fn select_tree(
        &mut self,
        available: &[TreeId],
        state: &OrchardState,
        _random: &mut dyn RandomSource,
    ) -> TreeId {
        let mut best = available[0];
        for &tree in &available[1..] {
            if state.fruits_on(tree) > state.fruits_on(best) {
                best = tree;
            }
        }
        best
    }

    fn name(&self) -> &str {
        "greedy"
    }

    fn clone_box(&self) -> Box<dyn Policy> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedSource;

    #[test]
    fn greedy_takes_the_fullest_tree() {
        let state = OrchardState::with_counts(&[3, 7, 7, 1]);
        let mut random = ScriptedSource::default();
        let tree = GreedyPick.select_tree(&[1, 2, 3, 4], &state, &mut random);
        // first max wins the tie between trees 2 and 3
        assert_eq!(tree, 2);
    }

    #[test]
    fn greedy_ignores_unavailable_trees() {
        let state = OrchardState::with_counts(&[9, 0, 2]);
        let mut random = ScriptedSource::default();
        let tree = GreedyPick.select_tree(&[3], &state, &mut random);
        assert_eq!(tree, 3);
    }

    #[test]
    fn random_maps_the_drawn_index_onto_available() {
        let state = OrchardState::with_counts(&[1, 0, 1, 1]);
        let mut random = ScriptedSource::new([], [2]);
        let tree = RandomPick.select_tree(&[1, 3, 4], &state, &mut random);
        assert_eq!(tree, 4);
    }
}
