use ndarray::Array2;

use super::*;

/// Purely random placement outside the excluded cells, reproducible from a seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig, excluded: &[Coord2]) -> Result<MineLayout> {
        use rand::prelude::*;

        // reserved cells are temporarily marked as mines so sampling skips them
        let mut mines: Array2<bool> = Array2::default(BOARD_SIZE.to_nd_index());
        for &coords in excluded {
            mines[validate_coords(coords)?.to_nd_index()] = true;
        }
        let reserved = mines.iter().filter(|&&cell| cell).count() as CellCount;
        check_capacity(config.mines, reserved)?;

        let mut free_cells = TOTAL_CELLS - reserved;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        // capacity was checked above, so free_cells stays positive here
        while mines_placed < config.mines {
            let mut place = rng.random_range(0..free_cells);
            for cell in mines.iter_mut() {
                if *cell {
                    continue;
                }
                if place == 0 {
                    *cell = true;
                    mines_placed += 1;
                    free_cells -= 1;
                    break;
                }
                place -= 1;
            }
        }

        // undo to make the reserved cells safe again
        for &coords in excluded {
            mines[coords.to_nd_index()] = false;
        }

        let layout = MineLayout::from_mine_mask(mines)?;
        log::debug!(
            "Placed {} mines with seed {} around {} reserved cells",
            layout.mine_count(),
            self.seed,
            reserved
        );
        Ok(layout)
    }
}
