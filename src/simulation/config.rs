use crate::game::TreeId;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Board parameters for one game. Defaults match the physical game: four
/// trees of ten fruits, a nine-piece puzzle, two fruits per basket draw,
/// a six-sided die.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub nb_trees: u8,
    pub nb_fruits_per_tree: u8,
    pub puzzle_size: u8,
    pub fruits_if_panier: u8,
    pub die_faces: u8,
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            nb_trees: 4,
            nb_fruits_per_tree: 10,
            puzzle_size: 9,
            fruits_if_panier: 2,
            die_faces: 6,
            verbose: true,
        }
    }
}

impl GameConfig {
    pub fn total_fruits(&self) -> u16 {
        self.nb_trees as u16 * self.nb_fruits_per_tree as u16
    }

    /// Face that picks from the basket ("panier").
    pub fn basket_face(&self) -> u8 {
        self.nb_trees + 1
    }

    /// Face that hands the raven a puzzle piece.
    pub fn raven_face(&self) -> u8 {
        self.nb_trees + 2
    }

    pub fn with_trees(mut self, nb_trees: TreeId) -> Self {
        self.nb_trees = nb_trees;
        self
    }

    pub fn with_puzzle_size(mut self, puzzle_size: u8) -> Self {
        self.puzzle_size = puzzle_size;
        self
    }

    /// Fails fast on boards the die cannot express. Faces above the raven's
    /// are allowed and simply do nothing; a raven face beyond the die would
    /// make the game unwinnable for the raven, and possibly endless.
    pub fn validate(&self) -> Result<()> {
        if self.nb_trees == 0 {
            anyhow::bail!("at least one tree is required");
        }
        if self.nb_fruits_per_tree == 0 {
            anyhow::bail!("trees must start with at least one fruit");
        }
        if self.puzzle_size == 0 {
            anyhow::bail!("the raven's puzzle needs at least one piece");
        }
        if u16::from(self.nb_trees) + 2 > u16::from(self.die_faces) {
            anyhow::bail!(
                "{} trees need a die with at least {} faces (got {}): one face per tree, plus basket, plus raven",
                self.nb_trees,
                u16::from(self.nb_trees) + 2,
                self.die_faces
            );
        }
        Ok(())
    }
}
