use alloc::vec::Vec;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random mine placement from a seeded generator.
///
/// The generator keeps its state between boards, so consecutive games from the same seed differ from each other
/// but the whole sequence is reproducible.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            placement,
        }
    }

    fn place_by_rejection(&mut self, config: GameConfig, mines: &mut Array2<bool>) -> usize {
        let (rows, cols) = config.size;
        let mut mines_placed = 0;
        let mut draws = 0;

        while mines_placed < config.mines {
            let coords = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            draws += 1;

            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        draws
    }

    fn place_by_shuffle(&mut self, config: GameConfig, mines: &mut Array2<bool>) -> usize {
        let cols = CellCount::from(config.cols());
        let mut indices: Vec<CellCount> = (0..config.total_cells()).collect();
        let (chosen, _) = indices.partial_shuffle(&mut self.rng, config.mines.into());

        for &index in chosen.iter() {
            let coords = ((index / cols) as Coord, (index % cols) as Coord);
            mines[coords.to_nd_index()] = true;
        }

        chosen.len()
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        // also guarantees rejection sampling terminates
        config.validate()?;

        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let draws = match self.placement {
            Placement::Rejection => self.place_by_rejection(config, &mut mines),
            Placement::Shuffle => self.place_by_shuffle(config, &mut mines),
        };

        let layout = MineLayout::from_mine_mask(mines)?;
        log::debug!(
            "Placed {} mines on a {}x{} board in {} draws ({:?})",
            layout.mine_count(),
            config.rows(),
            config.cols(),
            draws,
            self.placement
        );
        Ok(layout)
    }
}
