//! Direction pruning for JPS+ expansion.

use jumpgrid_core::{Direction, Point};

use crate::scan::JumpPoint;

use Direction::*;

/// Continuation directions after arriving along a given direction.
///
/// Travelling straight keeps that direction and the two diagonals next to
/// it. Travelling diagonally keeps the diagonal and its two cardinal
/// components.
pub fn natural_directions(incoming: Direction) -> &'static [Direction] {
    match incoming {
        South => &[SouthWest, South, SouthEast],
        East => &[SouthEast, East, NorthEast],
        North => &[NorthEast, North, NorthWest],
        West => &[NorthWest, West, SouthWest],
        SouthEast => &[South, SouthEast, East],
        NorthEast => &[East, NorthEast, North],
        NorthWest => &[North, NorthWest, West],
        SouthWest => &[West, SouthWest, South],
    }
}

/// Directions worth expanding from `current` when it was reached from
/// `parent`, written into `out`.
///
/// Without a parent (the start node) all eight directions are kept. If
/// `current` has recorded forced neighbours, the direction toward each of
/// them is added, along with the sum of the incoming and forced directions
/// clamped to a unit step.
pub fn pruned_directions(
    current: Point,
    parent: Option<Point>,
    jump_point: Option<&JumpPoint>,
    out: &mut Vec<Direction>,
) {
    out.clear();
    let Some(incoming) = parent.and_then(|p| Direction::between(p, current)) else {
        out.extend_from_slice(&Direction::ALL);
        return;
    };

    out.extend_from_slice(natural_directions(incoming));

    let Some(jp) = jump_point else {
        return;
    };
    for &forced in jp.forced_neighbors() {
        let Some(toward) = Direction::between(current, forced) else {
            continue;
        };
        push_unique(out, toward);
        // Opposite axes cancel to zero, which is not a direction.
        if let Some(combined) = Direction::from_offset((incoming.offset() + toward.offset()).signum())
        {
            push_unique(out, combined);
        }
    }
}

#[inline]
fn push_unique(out: &mut Vec<Direction>, d: Direction) {
    if !out.contains(&d) {
        out.push(d);
    }
}
