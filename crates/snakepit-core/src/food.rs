use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::symbol::FOOD;

/// Deterministic food placement: one seeded generator, one uniformly
/// random empty cell per call. Suitable as the `place_food` callback for
/// [`crate::GameState::advance`].
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: ChaCha8Rng,
}

impl FoodSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Write one food symbol into a random empty cell.
    ///
    /// Returns `false` when the board has no empty cell left. Indexing
    /// into the collected free list terminates even on a nearly full
    /// board, unlike rejection sampling.
    pub fn place(&mut self, board: &mut Board) -> bool {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let cell = empty[self.rng.gen_range(0..empty.len())];
        board
            .set(cell.row, cell.col, FOOD)
            .expect("empty_cells only yields in-bounds cells");
        true
    }
}
