use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout>;
}

/// How random mine positions are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Draw random cells, skipping ones that already hold a mine.
    #[default]
    Rejection,
    /// Partially shuffle every cell index and mine the first ones.
    Shuffle,
}
