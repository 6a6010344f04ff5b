//! Animated Dijkstra / A* over a [`Board`].

use std::fmt;

use pathviz_core::Point;

use crate::board::{Board, CellState};
use crate::distance::manhattan;
use crate::error::{PathError, Precondition};
use crate::frontier::Frontier;

/// Sentinel g-score for spots not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Which search to run. The only difference is the heuristic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Whether the Manhattan heuristic is added to the priority key.
    #[inline]
    pub const fn heuristic_enabled(self) -> bool {
        matches!(self, Self::AStar)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shortest path, start and end inclusive.
    Found(Vec<Point>),
    /// End unreachable, or the run was cancelled.
    NotFound,
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Outcome plus bookkeeping about how the run went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Number of spots popped and expanded (one `on_step` call each).
    pub expanded: usize,
    /// Whether the run stopped because `is_cancelled` returned true.
    pub cancelled: bool,
}

/// Per-run search state: frontier, g-scores, predecessors and membership
/// flags, all indexed by the board's flat spot index.
///
/// Built by [`SearchState::new`], which checks the preconditions, and
/// consumed by [`SearchState::run`].
pub struct SearchState {
    start: usize,
    goal: usize,
    goal_pos: Point,
    heuristic: bool,
    frontier: Frontier,
    g_score: Vec<i32>,
    came_from: Vec<Option<usize>>,
    queued: Vec<bool>,
    closed: Vec<bool>,
    nbuf: Vec<Point>,
    expanded: usize,
}

impl SearchState {
    /// Prepare a search from `start` to `end`.
    ///
    /// Fails with [`PathError::PreconditionViolated`] when the board's
    /// adjacency is stale or an endpoint is outside the board or a barrier.
    pub fn new(
        board: &Board,
        start: Point,
        end: Point,
        heuristic_enabled: bool,
    ) -> Result<Self, PathError> {
        if board.adjacency_is_stale() {
            return Err(Precondition::StaleAdjacency.into());
        }
        let start_idx = board
            .idx(start)
            .ok_or(Precondition::EndpointOutOfBounds(start))?;
        let goal_idx = board.idx(end).ok_or(Precondition::EndpointOutOfBounds(end))?;
        for (p, i) in [(start, start_idx), (end, goal_idx)] {
            if board.spot_at(i).is_barrier() {
                return Err(Precondition::EndpointIsBarrier(p).into());
            }
        }

        let len = board.len();
        Ok(Self {
            start: start_idx,
            goal: goal_idx,
            goal_pos: end,
            heuristic: heuristic_enabled,
            frontier: Frontier::new(),
            g_score: vec![UNREACHABLE; len],
            came_from: vec![None; len],
            queued: vec![false; len],
            closed: vec![false; len],
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        })
    }

    /// Run the search to completion, exhaustion or cancellation.
    ///
    /// `on_step` is called once per expanded spot, after its neighbors were
    /// scanned, and once per spot marked `Path` during reconstruction.
    /// `is_cancelled` is checked before every pop; once it returns true the
    /// run stops with [`Outcome::NotFound`] and the board keeps whatever
    /// coloring it had.
    pub fn run(
        mut self,
        board: &mut Board,
        mut on_step: impl FnMut(&Board),
        mut is_cancelled: impl FnMut() -> bool,
    ) -> SearchReport {
        if self.start == self.goal {
            let only = board.spot_at(self.start).pos();
            return self.finish(Outcome::Found(vec![only]), false);
        }

        self.g_score[self.start] = 0;
        let priority = self.estimate(board.spot_at(self.start).pos());
        self.frontier.push(priority, self.start);
        self.queued[self.start] = true;

        loop {
            if is_cancelled() {
                return self.finish(Outcome::NotFound, true);
            }
            let Some(entry) = self.frontier.pop() else {
                return self.finish(Outcome::NotFound, false);
            };
            let ci = entry.idx;

            // Lazy deletion: an older entry for a spot already expanded.
            if self.closed[ci] {
                continue;
            }
            self.queued[ci] = false;

            if ci == self.goal {
                let path = self.reconstruct(board, &mut on_step);
                return self.finish(Outcome::Found(path), false);
            }

            self.relax_neighbors(board, ci);
            self.expanded += 1;
            on_step(board);

            self.closed[ci] = true;
            if ci != self.start {
                board.mark(ci, CellState::Visited);
            }
        }
    }

    fn estimate(&self, p: Point) -> i32 {
        if self.heuristic {
            manhattan(p, self.goal_pos)
        } else {
            0
        }
    }

    fn relax_neighbors(&mut self, board: &mut Board, ci: usize) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(board.spot_at(ci).neighbors());

        // Uniform edge weight.
        let tentative = self.g_score[ci] + 1;
        for &np in nbuf.iter() {
            let Some(ni) = board.idx(np) else {
                continue;
            };
            if tentative >= self.g_score[ni] {
                continue;
            }
            self.came_from[ni] = Some(ci);
            self.g_score[ni] = tentative;
            self.frontier.push(tentative + self.estimate(np), ni);
            if !self.queued[ni] {
                self.queued[ni] = true;
                board.mark(ni, CellState::Frontier);
            }
        }

        self.nbuf = nbuf;
    }

    /// Walk predecessors from the goal back to the start, marking the spots
    /// in between as `Path`. Returns the path start-first.
    fn reconstruct(&self, board: &mut Board, on_step: &mut impl FnMut(&Board)) -> Vec<Point> {
        let mut path = vec![board.spot_at(self.goal).pos()];
        let mut cur = self.goal;
        while let Some(prev) = self.came_from[cur] {
            path.push(board.spot_at(prev).pos());
            if prev != self.start {
                board.mark(prev, CellState::Path);
                on_step(board);
            }
            cur = prev;
        }
        path.reverse();
        path
    }

    fn finish(self, outcome: Outcome, cancelled: bool) -> SearchReport {
        log::debug!(
            "search finished: found={} path_len={} expanded={} cancelled={} queued={}",
            outcome.is_found(),
            outcome.path().map_or(0, <[Point]>::len),
            self.expanded,
            cancelled,
            self.frontier.len(),
        );
        SearchReport {
            outcome,
            expanded: self.expanded,
            cancelled,
        }
    }
}

/// Search `board` from `start` to `end`.
///
/// Dijkstra when `heuristic_enabled` is false, A* with the Manhattan
/// heuristic otherwise. Ties in priority go to the spot queued first, so the
/// expansion order is reproducible for identical inputs.
///
/// The caller must refresh adjacency after editing barriers and should clear
/// leftover search coloring first; the engine never clears it.
pub fn search(
    board: &mut Board,
    start: Point,
    end: Point,
    heuristic_enabled: bool,
    on_step: impl FnMut(&Board),
    is_cancelled: impl FnMut() -> bool,
) -> Result<Outcome, PathError> {
    let state = SearchState::new(board, start, end, heuristic_enabled)?;
    log::debug!(
        "search {} -> {} (heuristic: {heuristic_enabled})",
        start,
        end
    );
    Ok(state.run(board, on_step, is_cancelled).outcome)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn rc(row: i32, col: i32) -> Point {
        Point::from_row_col(row, col)
    }

    /// Board with start, end and barriers painted and adjacency refreshed.
    fn board(n: i32, start: Point, end: Point, barriers: &[Point]) -> Board {
        let mut b = Board::build(n).unwrap();
        b.paint(start).unwrap();
        b.paint(end).unwrap();
        for &p in barriers {
            b.paint(p).unwrap();
        }
        b.refresh_adjacency();
        b
    }

    fn run(b: &mut Board, algorithm: Algorithm) -> SearchReport {
        let (start, end) = (b.start().unwrap(), b.end().unwrap());
        SearchState::new(b, start, end, algorithm.heuristic_enabled())
            .unwrap()
            .run(b, |_| {}, || false)
    }

    #[test]
    fn corner_to_corner_on_empty_board() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut b = board(5, rc(0, 0), rc(4, 4), &[]);
            let report = run(&mut b, algorithm);
            let path = report.outcome.path().unwrap();
            assert_eq!(path.len(), 9, "{algorithm}");
            assert_eq!(path[0], rc(0, 0));
            assert_eq!(path[8], rc(4, 4));
            for w in path.windows(2) {
                let d = w[1] - w[0];
                assert!(d == Point::new(0, 1) || d == Point::new(1, 0), "{algorithm}: {d}");
            }
        }
    }

    #[test]
    fn barrier_column_forces_the_gap() {
        let wall: Vec<_> = [0, 1, 3, 4].iter().map(|&r| rc(r, 2)).collect();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut b = board(5, rc(0, 0), rc(4, 4), &wall);
            let report = run(&mut b, algorithm);
            let path = report.outcome.path().unwrap();
            assert!(path.contains(&rc(2, 2)), "{algorithm}");
            assert_eq!(path.len(), 9, "{algorithm}");
        }
    }

    #[test]
    fn straight_line_length() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut b = board(7, rc(3, 0), rc(3, 6), &[]);
            let path = run(&mut b, algorithm).outcome.path().unwrap().to_vec();
            assert_eq!(path, (0..7).map(|c| rc(3, c)).collect::<Vec<_>>());
        }
    }

    #[test]
    fn ties_break_in_insertion_order() {
        // Down is discovered before right, so the path hugs the left edge.
        let mut b = board(3, rc(0, 0), rc(2, 2), &[]);
        let report = run(&mut b, Algorithm::Dijkstra);
        assert_eq!(
            report.outcome,
            Outcome::Found(vec![rc(0, 0), rc(1, 0), rc(2, 0), rc(2, 1), rc(2, 2)])
        );
        assert_eq!(report.expanded, 8);
        assert!(!report.cancelled);
    }

    #[test]
    fn astar_expands_fewer_spots_than_dijkstra() {
        let mut b = board(10, rc(0, 0), rc(0, 9), &[]);
        let dijkstra = run(&mut b, Algorithm::Dijkstra);
        b.clear_search_marks();
        let astar = run(&mut b, Algorithm::AStar);
        assert_eq!(dijkstra.outcome, astar.outcome);
        assert_eq!(astar.expanded, 9);
        assert!(dijkstra.expanded > astar.expanded);
    }

    #[test]
    fn start_equals_end_is_a_single_cell_path() {
        let mut b = Board::build(4).unwrap();
        b.paint(rc(1, 1)).unwrap();
        b.refresh_adjacency();
        let steps = Cell::new(0);
        let outcome = search(&mut b, rc(1, 1), rc(1, 1), true, |_| steps.set(steps.get() + 1), || false);
        assert_eq!(outcome.unwrap(), Outcome::Found(vec![rc(1, 1)]));
        assert_eq!(steps.get(), 0);
    }

    #[test]
    fn walled_off_end_exhausts_the_frontier() {
        let mut b = board(5, rc(0, 0), rc(4, 4), &[rc(3, 4), rc(4, 3)]);
        let report = run(&mut b, Algorithm::AStar);
        assert_eq!(report.outcome, Outcome::NotFound);
        assert!(!report.cancelled);
        // 25 spots - 2 barriers - end - start.
        assert_eq!(report.expanded, 22);
        assert_eq!(b.count(CellState::Visited), 21);
        assert_eq!(b.count(CellState::Frontier), 0);
        assert_eq!(b.state(rc(0, 0)), Some(CellState::Start));
        assert_eq!(b.state(rc(4, 4)), Some(CellState::End));
    }

    #[test]
    fn found_path_is_marked_and_animated() {
        let mut b = board(5, rc(0, 0), rc(4, 4), &[]);
        let steps = Cell::new(0);
        let (start, end) = (b.start().unwrap(), b.end().unwrap());
        let report = SearchState::new(&b, start, end, false)
            .unwrap()
            .run(&mut b, |_| steps.set(steps.get() + 1), || false);
        let path = report.outcome.path().unwrap();
        assert_eq!(b.count(CellState::Path), path.len() - 2);
        assert_eq!(steps.get(), report.expanded + path.len() - 2);
        for p in &path[1..path.len() - 1] {
            assert_eq!(b.state(*p), Some(CellState::Path));
        }
        assert_eq!(b.state(start), Some(CellState::Start));
        assert_eq!(b.state(end), Some(CellState::End));
    }

    #[test]
    fn on_step_sees_the_board_mid_search() {
        let mut b = board(5, rc(0, 0), rc(4, 4), &[]);
        let mut frontier_sizes = Vec::new();
        let outcome = search(
            &mut b,
            rc(0, 0),
            rc(4, 4),
            false,
            |board| frontier_sizes.push(board.count(CellState::Frontier)),
            || false,
        )
        .unwrap();
        assert!(outcome.is_found());
        // First expansion of the corner discovers two spots.
        assert_eq!(frontier_sizes[0], 2);
    }

    #[test]
    fn cancellation_stops_within_one_iteration() {
        let k = 5;
        let mut b = board(10, rc(0, 0), rc(9, 9), &[]);
        let steps = Cell::new(0);
        let (start, end) = (b.start().unwrap(), b.end().unwrap());
        let report = SearchState::new(&b, start, end, false).unwrap().run(
            &mut b,
            |_| steps.set(steps.get() + 1),
            || steps.get() >= k,
        );
        assert_eq!(report.outcome, Outcome::NotFound);
        assert!(report.cancelled);
        assert_eq!(report.expanded, k);
        // Partial coloring is left in place.
        assert!(b.count(CellState::Visited) > 0);
        assert_eq!(b.count(CellState::Path), 0);
    }

    #[test]
    fn cancelled_before_first_pop() {
        let mut b = board(5, rc(0, 0), rc(4, 4), &[]);
        let outcome = search(&mut b, rc(0, 0), rc(4, 4), true, |_| {}, || true);
        assert_eq!(outcome.unwrap(), Outcome::NotFound);
    }

    #[test]
    fn rerun_after_clearing_is_idempotent() {
        let wall = [rc(1, 1), rc(2, 1), rc(3, 1), rc(1, 3), rc(2, 3)];
        let mut b = board(6, rc(0, 0), rc(5, 5), &wall);
        let first = run(&mut b, Algorithm::AStar);
        b.clear_search_marks();
        let second = run(&mut b, Algorithm::AStar);
        assert_eq!(first, second);
    }

    #[test]
    fn preconditions_are_checked() {
        let mut b = Board::build(5).unwrap();
        assert_eq!(
            search(&mut b, rc(0, 0), rc(4, 4), false, |_| {}, || false).unwrap_err(),
            PathError::PreconditionViolated(Precondition::StaleAdjacency)
        );

        b.refresh_adjacency();
        assert_eq!(
            search(&mut b, rc(0, 0), rc(5, 0), false, |_| {}, || false).unwrap_err(),
            PathError::PreconditionViolated(Precondition::EndpointOutOfBounds(rc(5, 0)))
        );

        b.paint(rc(0, 0)).unwrap();
        b.paint(rc(4, 4)).unwrap();
        b.paint(rc(2, 2)).unwrap();
        b.refresh_adjacency();
        assert_eq!(
            search(&mut b, rc(0, 0), rc(2, 2), false, |_| {}, || false).unwrap_err(),
            PathError::PreconditionViolated(Precondition::EndpointIsBarrier(rc(2, 2)))
        );
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra");
        assert_eq!(Algorithm::AStar.name(), "A*");
        assert!(!Algorithm::Dijkstra.heuristic_enabled());
        assert!(Algorithm::AStar.heuristic_enabled());
    }
}
