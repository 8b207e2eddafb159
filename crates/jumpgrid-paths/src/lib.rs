//! Pathfinding on obstacle grids.
//!
//! Four search strategies share one best-first loop in [`PathFinder`]:
//!
//! - **Uniform cost** ([`Mode::UniformCost`]) expands by accumulated cost
//! - **Greedy best-first** ([`Mode::Greedy`]) expands by heuristic only
//! - **A\*** ([`Mode::AStar`]) expands by cost plus heuristic
//! - **JPS+** ([`Mode::JpsPlus`]) jumps between precomputed jump points
//!   recorded in a [`ScanIndex`]
//!
//! [`Engine`] bundles a grid, its scan index and a path finder, and drops
//! the index whenever the grid changes.
//!
//! Searches report every node entering the frontier to a [`FrontierSink`],
//! such as an [`EventLog`] or a closure, so callers can visualise a search
//! without the search knowing about it.

mod cone;
mod distance;
mod engine;
mod events;
mod jps;
mod mode;
mod path;
mod pathfinder;
mod prune;
mod scan;

pub use cone::GoalCone;
pub use distance::{DIAGONAL_COST, manhattan};
pub use engine::Engine;
pub use events::{EventLog, FrontierEvent, FrontierEventKind, FrontierSink};
pub use mode::{Mode, ParseModeError};
pub use path::Path;
pub use pathfinder::PathFinder;
pub use prune::{natural_directions, pruned_directions};
pub use scan::{JumpPoint, ScanIndex};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use jumpgrid_core::{Grid, Point};

    #[test]
    fn mode_round_trip() {
        for mode in Mode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            let back: Mode = serde_json::from_str(&json).unwrap();
            assert_eq!(mode, back);
        }
    }

    #[test]
    fn path_round_trip() {
        let mut engine = Engine::new(Grid::new(4, 4));
        let path = engine
            .find_path(Point::new(0, 0), Point::new(3, 2), Mode::AStar)
            .unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn event_round_trip() {
        let mut log = EventLog::new();
        let mut engine = Engine::new(Grid::new(3, 3));
        engine.find_path_with(Point::new(0, 0), Point::new(2, 2), Mode::Greedy, &mut log);
        let events: Vec<FrontierEvent> = log.drain().collect();
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<FrontierEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }
}
