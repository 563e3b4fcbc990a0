use gridpath_core::{Bounds, Cell};

use crate::traits::{AstarPather, Pather};

/// A pather that additionally refuses cells matching a predicate.
///
/// Used to treat transient things, such as other units, as obstacles for a
/// single search without touching the underlying map.
pub struct Blocked<'a, P, F> {
    inner: &'a P,
    blocked: F,
}

impl<'a, P, F> Blocked<'a, P, F>
where
    P: Pather,
    F: Fn(Cell) -> bool,
{
    /// Wrap `inner`; cells for which `blocked` returns `true` are never
    /// offered as neighbours.
    pub fn new(inner: &'a P, blocked: F) -> Self {
        Self { inner, blocked }
    }
}

impl<P, F> Pather for Blocked<'_, P, F>
where
    P: Pather,
    F: Fn(Cell) -> bool,
{
    fn bounds(&self) -> Bounds {
        self.inner.bounds()
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let from = buf.len();
        self.inner.neighbors(c, buf);
        let mut kept = from;
        for i in from..buf.len() {
            if !(self.blocked)(buf[i]) {
                buf[kept] = buf[i];
                kept += 1;
            }
        }
        buf.truncate(kept);
    }
}

impl<P, F> AstarPather for Blocked<'_, P, F>
where
    P: AstarPather,
    F: Fn(Cell) -> bool,
{
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        self.inner.estimate(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{manhattan, push_cardinal, search};

    struct Open(Bounds);

    impl Pather for Open {
        fn bounds(&self) -> Bounds {
            self.0
        }

        fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
            push_cardinal(c, buf, |n| self.0.contains(n));
        }
    }

    impl AstarPather for Open {
        fn estimate(&self, from: Cell, to: Cell) -> i32 {
            manhattan(from, to)
        }
    }

    #[test]
    fn filters_blocked_neighbours() {
        let open = Open(Bounds::with_size(3, 3));
        let b = Blocked::new(&open, |c| c == Cell::new(1, 2));
        let mut buf = Vec::new();
        b.neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Cell::new(2, 1), Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn search_routes_around_blocked_cells() {
        let open = Open(Bounds::with_size(3, 2));
        let p = search(&open, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert_eq!(p.steps(), 2);

        let b = Blocked::new(&open, |c| c == Cell::new(1, 0));
        let p = search(&b, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert_eq!(p.steps(), 4);
        assert!(!p.contains(Cell::new(1, 0)));
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let open = Open(Bounds::with_size(3, 3));
        let b = Blocked::new(&open, |c| c == Cell::new(2, 2));
        let p = search(&b, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(p.is_empty());
    }
}
