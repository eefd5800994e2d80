use alloc::collections::BTreeSet;

use super::*;

/// Places mines uniformly at random, without replacement, from a seeded generator.
///
/// The same seed and config always produce the same layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;
        use rand::seq::index;

        let size = config.size();
        let side = usize::from(size);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // a valid config always leaves a safe cell, so sampling can't run dry
        let mines: BTreeSet<Coord2> = index::sample(&mut rng, side * side, config.mines().into())
            .into_iter()
            .map(|pos| ((pos / side) as Coord, (pos % side) as Coord))
            .collect();

        log::debug!(
            "generated {}x{} layout with {} mines, seed: {}",
            size,
            size,
            mines.len(),
            self.seed
        );

        MineLayout::build(size, mines)
    }
}
