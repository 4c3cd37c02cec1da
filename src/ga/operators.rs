//! Genetic operators on week grids.
//!
//! [`crossover`] swaps a contiguous day range between parents;
//! [`mutate`] relocates or swaps a single placed course. Both thread an
//! explicit `Rng` so runs are reproducible under a fixed seed.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{Grid, DAYS, MUTATION_RATE, PERIODS};

/// Two-point day-range crossover.
///
/// Picks `point1` in `[0, DAYS - 2]` and `point2` in `[point1 + 1,
/// DAYS - 1]`, then builds the child as a copy of `parent_a` with the
/// half-open day range `[point1, point2)` overwritten wholesale (all
/// periods, all rooms) from `parent_b`.
///
/// Requires `DAYS >= 2`; the constant satisfies this.
pub fn crossover<R: Rng>(parent_a: &Grid, parent_b: &Grid, rng: &mut R) -> Grid {
    debug_assert_eq!(parent_a.rooms(), parent_b.rooms());

    let point1 = rng.random_range(0..=DAYS - 2);
    let point2 = rng.random_range(point1 + 1..=DAYS - 1);

    let mut child = parent_a.clone();
    for day in point1..point2 {
        for period in 0..PERIODS {
            for room in 0..child.rooms() {
                child.set(day, period, room, parent_b.get(day, period, room));
            }
        }
    }
    child
}

/// Relocate-or-swap mutation.
///
/// With probability [`MUTATION_RATE`] per call (gated once, not per cell),
/// picks one occupied cell uniformly and one target cell uniformly over the
/// whole grid, then swaps their contents. The target may equal the source,
/// may be empty (a relocation), or may be occupied (a true swap that moves
/// the displaced course back to the source cell). No-op on an empty grid.
pub fn mutate<R: Rng>(grid: &mut Grid, rng: &mut R) {
    if rng.random::<f64>() >= MUTATION_RATE {
        return;
    }

    let occupied: Vec<(usize, usize, usize)> =
        grid.occupied().map(|(d, p, r, _)| (d, p, r)).collect();
    let Some(&(src_day, src_period, src_room)) = occupied.choose(rng) else {
        return;
    };

    let dst_day = rng.random_range(0..DAYS);
    let dst_period = rng.random_range(0..PERIODS);
    let dst_room = rng.random_range(0..grid.rooms());

    let moved = grid.get(src_day, src_period, src_room);
    let displaced = grid.get(dst_day, dst_period, dst_room);
    grid.set(dst_day, dst_period, dst_room, moved);
    grid.set(src_day, src_period, src_room, displaced);
}
