use std::collections::BinaryHeap;

use gridpath_core::Cell;
use log::{debug, trace};

use crate::engine::{NodeRef, PathEngine, STEP_COST, SearchArena};
use crate::error::SearchError;
use crate::path::Path;
use crate::traits::AstarPather;

/// Shortest path from `start` to `goal` with an unbounded [`PathEngine`].
pub fn search<P: AstarPather>(pather: &P, start: Cell, goal: Cell) -> Result<Path, SearchError> {
    PathEngine::new().search(pather, start, goal)
}

impl PathEngine {
    /// Compute a shortest path from `start` to `goal` using A*.
    ///
    /// Returns the full path (both endpoints included), or an empty path if
    /// the goal cannot be reached. Fails only if an endpoint is outside
    /// `pather.bounds()` or the expansion budget runs out.
    ///
    /// The start cell is used as the origin without consulting the pather
    /// about it, while the goal must be offered as a neighbour to be
    /// reached: an impassable start still yields routes out of it, an
    /// impassable goal yields an empty path. `start == goal` short-circuits
    /// to `[start]`.
    ///
    /// Each call allocates one arena node per cell of `pather.bounds()`, so
    /// the cost of a search grows with the map area, not the path length.
    pub fn search<P: AstarPather>(
        &self,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> Result<Path, SearchError> {
        trace!("astar: search start={start} goal={goal}");

        let bounds = pather.bounds();
        let start_idx = bounds
            .index_of(start)
            .ok_or(SearchError::OutOfBounds(start))?;
        let goal_idx = bounds
            .index_of(goal)
            .ok_or(SearchError::OutOfBounds(goal))?;

        if start_idx == goal_idx {
            return Ok(Path::from(vec![start]));
        }

        let mut arena = SearchArena::new(bounds);
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;

        let h = pather.estimate(start, goal);
        arena.nodes[start_idx].g = 0;
        open.push(NodeRef {
            idx: start_idx,
            f: h,
            h,
            g: 0,
            seq,
        });

        let mut nbuf: Vec<Cell> = Vec::with_capacity(4);
        let mut expanded: usize = 0;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if current.g > arena.nodes[ci].g {
                continue;
            }

            if ci == goal_idx {
                let path = arena.reconstruct(goal_idx);
                trace!(
                    "astar: found path of {} steps after expanding {expanded} nodes",
                    path.steps()
                );
                return Ok(path);
            }

            if let Some(limit) = self.config().max_expansions {
                if expanded >= limit {
                    debug!("astar: budget of {limit} expansions exhausted");
                    return Err(SearchError::BudgetExceeded { expanded });
                }
            }
            expanded += 1;

            let current_cell = bounds.cell_at(ci);
            nbuf.clear();
            pather.neighbors(current_cell, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = bounds.index_of(nc) else {
                    continue;
                };
                let tentative_g = current.g + STEP_COST;

                let n = &mut arena.nodes[ni];
                if tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.parent = ci;

                let h = pather.estimate(nc, goal);
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + h,
                    h,
                    g: tentative_g,
                    seq,
                });
            }
        }

        debug!("astar: no path from {start} to {goal} after expanding {expanded} nodes");
        Ok(Path::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::distance::manhattan;
    use crate::neighbors::push_cardinal;
    use crate::traits::Pather;
    use gridpath_core::Bounds;
    use rand::{RngExt, SeedableRng};
    use std::collections::{HashSet, VecDeque};

    struct TestMap {
        bounds: Bounds,
        walls: HashSet<Cell>,
    }

    impl TestMap {
        fn new(width: i32, height: i32) -> Self {
            Self {
                bounds: Bounds::with_size(width, height),
                walls: HashSet::new(),
            }
        }

        fn with_walls(mut self, walls: &[(i32, i32)]) -> Self {
            self.walls.extend(walls.iter().map(|&w| Cell::from(w)));
            self
        }

        fn passable(&self, c: Cell) -> bool {
            self.bounds.contains(c) && !self.walls.contains(&c)
        }

        /// Reference shortest distance by breadth-first search, using the
        /// same start/goal rules as the engine.
        fn bfs_steps(&self, start: Cell, goal: Cell) -> Option<usize> {
            if start == goal {
                return Some(0);
            }
            let mut dist = vec![usize::MAX; self.bounds.len()];
            let mut queue = VecDeque::new();
            dist[self.bounds.index_of(start)?] = 0;
            queue.push_back(start);
            while let Some(c) = queue.pop_front() {
                let d = dist[self.bounds.index_of(c)?];
                for n in c.neighbors_4() {
                    if !self.passable(n) {
                        continue;
                    }
                    let ni = self.bounds.index_of(n)?;
                    if dist[ni] != usize::MAX {
                        continue;
                    }
                    if n == goal {
                        return Some(d + 1);
                    }
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
            None
        }
    }

    impl Pather for TestMap {
        fn bounds(&self) -> Bounds {
            self.bounds
        }

        fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
            push_cardinal(c, buf, |n| self.passable(n));
        }
    }

    impl AstarPather for TestMap {
        fn estimate(&self, from: Cell, to: Cell) -> i32 {
            manhattan(from, to)
        }
    }

    fn assert_walkable(map: &TestMap, path: &Path, start: Cell, goal: Cell) {
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.goal(), Some(goal));
        for pair in path.cells().windows(2) {
            assert!(
                pair[0].is_orthogonal_neighbor(pair[1]),
                "{} -> {} is not a single orthogonal step",
                pair[0],
                pair[1]
            );
        }
        for &c in &path.cells()[1..] {
            assert!(map.passable(c), "path crosses blocked cell {c}");
        }
    }

    #[test]
    fn start_equals_goal_returns_single_cell() {
        let map = TestMap::new(4, 4);
        let p = search(&map, Cell::new(2, 1), Cell::new(2, 1)).unwrap();
        assert_eq!(p.cells(), &[Cell::new(2, 1)]);
    }

    #[test]
    fn start_equals_goal_on_wall_still_returns_single_cell() {
        let map = TestMap::new(4, 4).with_walls(&[(2, 1)]);
        let p = search(&map, Cell::new(2, 1), Cell::new(2, 1)).unwrap();
        assert_eq!(p.cells(), &[Cell::new(2, 1)]);
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let map = TestMap::new(5, 5);
        assert_eq!(
            search(&map, Cell::new(-1, 0), Cell::new(1, 1)),
            Err(SearchError::OutOfBounds(Cell::new(-1, 0)))
        );
        assert_eq!(
            search(&map, Cell::new(0, 0), Cell::new(5, 2)),
            Err(SearchError::OutOfBounds(Cell::new(5, 2)))
        );
    }

    #[test]
    fn open_grid_path_matches_manhattan() {
        let map = TestMap::new(8, 6);
        let start = Cell::new(1, 5);
        let goal = Cell::new(6, 0);
        let p = search(&map, start, goal).unwrap();
        assert_eq!(p.steps() as i32, manhattan(start, goal));
        assert_walkable(&map, &p, start, goal);
    }

    #[test]
    fn routes_around_short_wall_without_extra_cost() {
        let map = TestMap::new(10, 10).with_walls(&[(3, 3), (3, 4), (3, 5)]);
        let start = Cell::new(0, 0);
        let goal = Cell::new(7, 8);
        let p = search(&map, start, goal).unwrap();
        assert_eq!(p.steps(), 15);
        assert_eq!(p.len(), 16);
        assert_walkable(&map, &p, start, goal);
        for w in [(3, 3), (3, 4), (3, 5)] {
            assert!(!p.contains(Cell::from(w)));
        }
    }

    #[test]
    fn detour_costs_extra_steps() {
        // Vertical wall with a single gap at the bottom.
        let map = TestMap::new(5, 5).with_walls(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let start = Cell::new(0, 0);
        let goal = Cell::new(4, 0);
        let p = search(&map, start, goal).unwrap();
        assert_eq!(p.steps(), 12);
        assert!(p.steps() as i32 > manhattan(start, goal));
        assert!(p.contains(Cell::new(2, 4)));
        assert_walkable(&map, &p, start, goal);
    }

    #[test]
    fn enclosed_goal_yields_empty_path() {
        let map = TestMap::new(3, 3).with_walls(&[(1, 0), (0, 1), (2, 1), (1, 2)]);
        for start in [(0, 0), (2, 0), (0, 2), (2, 2)] {
            let p = search(&map, Cell::from(start), Cell::new(1, 1)).unwrap();
            assert!(p.is_empty(), "start {start:?} should not reach the centre");
        }
    }

    #[test]
    fn blocked_goal_yields_empty_path() {
        let map = TestMap::new(4, 4).with_walls(&[(3, 3)]);
        let p = search(&map, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn blocked_start_is_still_an_origin() {
        let map = TestMap::new(4, 1).with_walls(&[(0, 0)]);
        let p = search(&map, Cell::new(0, 0), Cell::new(3, 0)).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.start(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn ties_break_towards_first_neighbour_direction() {
        let map = TestMap::new(2, 2);
        let p = search(&map, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(
            p.cells(),
            &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }

    #[test]
    fn repeated_searches_are_identical() {
        let map = TestMap::new(12, 12).with_walls(&[(4, 2), (4, 3), (4, 4), (5, 4), (6, 4)]);
        let first = search(&map, Cell::new(0, 0), Cell::new(11, 11)).unwrap();
        for _ in 0..10 {
            assert_eq!(search(&map, Cell::new(0, 0), Cell::new(11, 11)).unwrap(), first);
        }
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let map = TestMap::new(20, 20);
        let engine = PathEngine::with_config(SearchConfig::unbounded().with_max_expansions(5));
        let res = engine.search(&map, Cell::new(0, 0), Cell::new(19, 19));
        assert_eq!(res, Err(SearchError::BudgetExceeded { expanded: 5 }));
    }

    #[test]
    fn budget_large_enough_finds_path() {
        let map = TestMap::new(6, 1);
        // A corridor expands exactly one node per step before the goal.
        let engine = PathEngine::with_config(SearchConfig::unbounded().with_max_expansions(5));
        let p = engine.search(&map, Cell::new(0, 0), Cell::new(5, 0)).unwrap();
        assert_eq!(p.steps(), 5);
    }

    #[test]
    fn budget_does_not_mask_unreachable_goal() {
        let map = TestMap::new(3, 3).with_walls(&[(1, 0), (0, 1), (2, 1), (1, 2)]);
        let engine = PathEngine::with_config(SearchConfig::unbounded().with_max_expansions(100));
        let p = engine.search(&map, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn random_grids_match_breadth_first_distance() {
        const W: i32 = 14;
        const H: i32 = 10;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let mut map = TestMap::new(W, H);
            for c in Bounds::with_size(W, H) {
                if rng.random_range(0..100) < 30 {
                    map.walls.insert(c);
                }
            }
            let start = Cell::new(rng.random_range(0..W), rng.random_range(0..H));
            let goal = Cell::new(rng.random_range(0..W), rng.random_range(0..H));
            map.walls.remove(&start);
            map.walls.remove(&goal);

            let p = search(&map, start, goal).unwrap();
            match map.bfs_steps(start, goal) {
                None => assert!(p.is_empty(), "found a path BFS could not: {start} -> {goal}"),
                Some(d) => {
                    assert_eq!(p.steps(), d, "suboptimal path {start} -> {goal}");
                    assert!(p.steps() as i32 >= manhattan(start, goal));
                    assert_walkable(&map, &p, start, goal);
                    assert_eq!(search(&map, start, goal).unwrap(), p);
                }
            }
        }
    }
}
