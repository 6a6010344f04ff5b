//! Back-end plumbing: the [`Driver`] trait, the [`Context`] cancellation
//! token, and the [`Screen`] presenter that diffs frames before flushing.

use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::cell::Cell;
use crate::grid::{Frame, Grid, compute_frame};
use crate::messages::Msg;

/// Result type used by drivers and the loops built on them.
pub type DriverResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Cooperative cancellation flag. Clones share the flag.
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Ask every holder of this context to stop.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

/// A back-end (e.g. a terminal) that shows frames and reports input.
pub trait Driver {
    /// Take over the output device.
    fn init(&mut self) -> DriverResult;

    /// Send pending input through `tx`.
    ///
    /// Called once per rendered frame, also while a search is animating, so
    /// it must not block for long. Should return early once `ctx.is_done()`.
    fn poll_msgs(&mut self, ctx: &Context, tx: Sender<Msg>) -> DriverResult;

    /// Draw the changed cells.
    fn flush(&mut self, frame: Frame) -> DriverResult;

    /// Give the output device back. Must cope with a partly failed `init`.
    fn close(&mut self);
}

/// Owns a [`Driver`] plus the previous and current screen grids.
///
/// [`present`](Screen::present) redraws the current grid from scratch,
/// flushes only the cells that changed since the last frame, and keeps the
/// result as the new baseline. [`poll`](Screen::poll) drains pending input.
pub struct Screen<D: Driver> {
    driver: D,
    prev: Grid,
    curr: Grid,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
    ctx: Context,
    open: bool,
    frames: u64,
}

impl<D: Driver> Screen<D> {
    /// Wrap `driver` with a `width` × `height` screen.
    pub fn new(driver: D, width: i32, height: i32) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            driver,
            prev: Grid::new(width, height),
            curr: Grid::new(width, height),
            tx,
            rx,
            ctx: Context::new(),
            open: false,
            frames: 0,
        }
    }

    /// Initialise the driver. On failure the driver is closed again before
    /// the error is returned.
    pub fn init(&mut self) -> DriverResult {
        self.open = true;
        if let Err(err) = self.driver.init() {
            self.close();
            return Err(err);
        }
        Ok(())
    }

    /// Poll the driver once and return every message it produced.
    pub fn poll(&mut self) -> DriverResult<Vec<Msg>> {
        self.driver.poll_msgs(&self.ctx, self.tx.clone())?;
        Ok(self.rx.try_iter().collect())
    }

    /// Redraw with `draw`, then flush the difference to the driver.
    ///
    /// Returns the number of cells that changed.
    pub fn present(&mut self, draw: impl FnOnce(&Grid)) -> DriverResult<usize> {
        self.curr.fill(Cell::default());
        draw(&self.curr);
        let frame = compute_frame(&self.prev, &self.curr);
        let changed = frame.cells.len();
        if changed > 0 {
            self.driver.flush(frame)?;
        }
        // The next present repaints `curr` from blank, so swapping suffices.
        mem::swap(&mut self.prev, &mut self.curr);
        self.frames += 1;
        Ok(changed)
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Close the driver. Safe to call more than once.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.ctx.cancel();
            self.driver.close();
        }
    }
}

impl<D: Driver> Drop for Screen<D> {
    fn drop(&mut self) {
        self.close();
    }
}
