//! The screen [`Grid`] of styled [`Cell`]s, and frame diffing.
//!
//! A `Grid` is a view onto shared storage: clones and [`slice`](Grid::slice)s
//! write to the same cells, so a renderer can hand out a narrowed view (the
//! header band, say) and keep drawing on the whole.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cell::Cell;
use crate::geom::{Point, Range};
use crate::style::Style;

/// Row-major cell storage, `width` cells per row.
#[derive(Debug)]
struct Cells {
    width: i32,
    data: Vec<Cell>,
}

impl Cells {
    /// Index of `p`; the caller has already checked it against the bounds.
    #[inline]
    fn offset(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

/// A rectangular view of screen cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Rc<RefCell<Cells>>,
    view: Range,
}

impl Grid {
    /// A blank `width` × `height` grid. Negative sizes count as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let view = Range::new(0, 0, width.max(0), height.max(0));
        let data = vec![Cell::default(); view.iter().count()];
        Self {
            cells: Rc::new(RefCell::new(Cells {
                width: view.width(),
                data,
            })),
            view,
        }
    }

    /// The area this view covers.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.view
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.view.size()
    }

    /// A view restricted to `r`, clipped to this one.
    pub fn slice(&self, r: Range) -> Grid {
        Grid {
            cells: Rc::clone(&self.cells),
            view: self.view.intersect(r),
        }
    }

    /// The cell at `p`; a blank outside the view.
    pub fn at(&self, p: Point) -> Cell {
        if !self.view.contains(p) {
            return Cell::default();
        }
        let cells = self.cells.borrow();
        cells.data[cells.offset(p)]
    }

    /// Replace the cell at `p`. Ignored outside the view.
    pub fn set(&self, p: Point, cell: Cell) {
        if self.view.contains(p) {
            let mut cells = self.cells.borrow_mut();
            let i = cells.offset(p);
            cells.data[i] = cell;
        }
    }

    pub fn fill(&self, cell: Cell) {
        for p in self.view.iter() {
            self.set(p, cell);
        }
    }

    /// Write `text` rightwards from `p` until the view's edge. Returns how
    /// many characters fit.
    pub fn text(&self, p: Point, text: &str, style: Style) -> usize {
        let mut written = 0;
        for (ch, q) in text.chars().zip((p.x..).map(|x| Point::new(x, p.y))) {
            if !self.view.contains(q) {
                break;
            }
            self.set(q, Cell::new(ch, style));
            written += 1;
        }
        written
    }
}

/// A cell to repaint and where.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub pos: Point,
    pub cell: Cell,
}

/// The cells that changed since the previous frame.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

/// Every cell of `curr` that differs from `prev` at the same position.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    let cells = curr
        .bounds()
        .iter()
        .filter_map(|pos| {
            let cell = curr.at(pos);
            (cell != prev.at(pos)).then_some(FrameCell { pos, cell })
        })
        .collect();
    Frame { cells }
}
