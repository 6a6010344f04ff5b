//! The [`Board`]: an N×N grid of [`Spot`]s with explicit search states.

use pathviz_core::{Point, Range};

use crate::error::PathError;

/// What a spot currently represents.
///
/// `Start`, `End` and `Barrier` are placed by the user; `Frontier`,
/// `Visited` and `Path` are left behind by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered and queued, not yet expanded ("open").
    Frontier,
    /// Fully expanded ("closed").
    Visited,
    /// Part of the reconstructed shortest path.
    Path,
}

impl CellState {
    /// Whether the state was placed by the user (start, end, barrier).
    #[inline]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Barrier)
    }

    /// Whether the state is coloring left behind by a search.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }

    /// Whether the state is one of the two endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// One board position.
#[derive(Debug, Clone)]
pub struct Spot {
    pos: Point,
    state: CellState,
    neighbors: Vec<Point>,
}

impl Spot {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Identity of the spot (`x` = column, `y` = row).
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row()
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col()
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Traversable neighbors as of the last adjacency refresh.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
}

/// Result of [`Board::paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Painted {
    Start,
    End,
    Barrier,
    /// The spot is the start or end and was left alone.
    Unchanged,
}

/// An N×N row-major grid of [`Spot`]s.
///
/// The board keeps the start/end bookkeeping so that at most one spot is
/// `Start` and at most one is `End`. Neighbor lists are a cache: any
/// barrier edit marks them stale until [`refresh_adjacency`](Board::refresh_adjacency)
/// runs again, and [`search`](crate::search) refuses a stale board.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    spots: Vec<Spot>,
    start: Option<Point>,
    end: Option<Point>,
    stale: bool,
}

impl Board {
    /// Build an `n`×`n` board of empty spots.
    ///
    /// The new board's adjacency is stale until the first refresh.
    pub fn build(n: i32) -> Result<Self, PathError> {
        if n <= 0 {
            return Err(PathError::InvalidSize(n));
        }
        let spots = Range::new(0, 0, n, n).iter().map(Spot::new).collect();
        Ok(Self {
            size: n,
            spots,
            start: None,
            end: None,
            stale: true,
        })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The board rectangle `[0, N) × [0, N)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// Number of spots (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// The spot at (`row`, `col`).
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Spot, PathError> {
        let p = Point::from_row_col(row, col);
        self.spot(p).ok_or(PathError::OutOfBounds(p))
    }

    /// The spot at `p`, if inside the board.
    pub fn spot(&self, p: Point) -> Option<&Spot> {
        self.idx(p).map(|i| &self.spots[i])
    }

    /// State of the spot at `p`, if inside the board.
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.spot(p).map(Spot::state)
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether a barrier changed since the last adjacency refresh.
    #[inline]
    pub fn adjacency_is_stale(&self) -> bool {
        self.stale
    }

    /// Row-major iterator over every spot.
    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter()
    }

    /// Number of spots currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.spots.iter().filter(|s| s.state == state).count()
    }

    /// Recompute every spot's neighbor list: the in-bounds cardinal
    /// neighbors (down, up, right, left) that are not barriers.
    pub fn refresh_adjacency(&mut self) {
        for i in 0..self.spots.len() {
            let p = self.spots[i].pos;
            let mut neighbors = std::mem::take(&mut self.spots[i].neighbors);
            neighbors.clear();
            neighbors.extend(
                p.neighbors_4()
                    .into_iter()
                    .filter(|&q| self.state(q).is_some_and(|s| s != CellState::Barrier)),
            );
            self.spots[i].neighbors = neighbors;
        }
        self.stale = false;
    }

    /// Set the spot to `Empty` unless it is the start or end.
    pub fn reset(&mut self, p: Point) -> Result<(), PathError> {
        let i = self.idx(p).ok_or(PathError::OutOfBounds(p))?;
        if !self.spots[i].state.is_endpoint() {
            self.set(i, CellState::Empty);
        }
        Ok(())
    }

    /// Paint the spot: it becomes the start if none is set, else the end if
    /// none is set, else a barrier. The current start and end are never
    /// overwritten.
    pub fn paint(&mut self, p: Point) -> Result<Painted, PathError> {
        let i = self.idx(p).ok_or(PathError::OutOfBounds(p))?;
        let state = self.spots[i].state;
        let painted = if self.start.is_none() && state != CellState::End {
            self.set(i, CellState::Start);
            self.start = Some(p);
            Painted::Start
        } else if self.end.is_none() && state != CellState::Start {
            self.set(i, CellState::End);
            self.end = Some(p);
            Painted::End
        } else if !state.is_endpoint() {
            self.set(i, CellState::Barrier);
            Painted::Barrier
        } else {
            Painted::Unchanged
        };
        Ok(painted)
    }

    /// Set the spot to `Empty`, dropping the start/end bookkeeping if it
    /// held either. Returns the previous state.
    pub fn erase(&mut self, p: Point) -> Result<CellState, PathError> {
        let i = self.idx(p).ok_or(PathError::OutOfBounds(p))?;
        let prev = self.spots[i].state;
        self.set(i, CellState::Empty);
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        Ok(prev)
    }

    /// Return every `Frontier`, `Visited` and `Path` spot to `Empty`.
    pub fn clear_search_marks(&mut self) {
        for spot in &mut self.spots {
            if spot.state.is_search_mark() {
                spot.state = CellState::Empty;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Crate-internal access for the search engine
    // -----------------------------------------------------------------------

    /// Flat row-major index of `p`, or `None` outside the board.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y as usize) * (self.size as usize) + (p.x as usize))
    }

    #[inline]
    pub(crate) fn spot_at(&self, i: usize) -> &Spot {
        &self.spots[i]
    }

    /// Mark a spot with search coloring. Start and end keep their tags.
    #[inline]
    pub(crate) fn mark(&mut self, i: usize, state: CellState) {
        let spot = &mut self.spots[i];
        if !spot.state.is_endpoint() {
            spot.state = state;
        }
    }

    fn set(&mut self, i: usize, state: CellState) {
        let spot = &mut self.spots[i];
        if (spot.state == CellState::Barrier) != (state == CellState::Barrier) {
            self.stale = true;
        }
        spot.state = state;
    }
}
