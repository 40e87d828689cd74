use super::*;
use rand::prelude::*;

/// Rejection sampler: draws uniformly random cells until enough mines are
/// placed, skipping cells that already hold a mine or sit in the safe zone.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    fn safe_zone(config: GameConfig, safe: Cell) -> SafeZone {
        let zone = config.safe_zone(safe);
        if zone == SafeZone::SingleCell {
            log::warn!(
                "Cannot keep neighbors of {:?} free of mines, {} mines on {} cells",
                safe,
                config.mines(),
                config.total_cells()
            );
        }
        zone
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig, safe: Cell) -> MineLayout {
        let zone = Self::safe_zone(config, safe);
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        let mut remaining = config.mines();
        let mut rejected: usize = 0;
        while remaining > 0 {
            let candidate = (
                self.rng.random_range(0..config.rows()),
                self.rng.random_range(0..config.cols()),
            );
            let slot = &mut mine_mask[candidate.to_nd_index()];
            if *slot || zone.contains(safe, candidate) {
                rejected += 1;
                continue;
            }
            *slot = true;
            remaining -= 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} around {:?} ({:?}), {} samples rejected",
            config.mines(),
            config.rows(),
            config.cols(),
            safe,
            zone,
            rejected
        );
        MineLayout::count_adjacent(&mine_mask, config.size())
    }
}
