//! The session controller: owns the board and the screen, dispatches input
//! commands, and animates searches.

use std::thread;
use std::time::{Duration, Instant};

use pathviz_core::{Context, Driver, DriverResult, Msg, Point, Screen};
use pathviz_paths::{Algorithm, Board, PathError, SearchReport, SearchState};

use crate::config::VisualizerConfig;
use crate::input::{self, Command};
use crate::view::{self, Current, Header, Layout, Status, Summary};

/// What a held mouse button does to the cells it passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Paint,
    Erase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Painting(Brush),
    Running(Algorithm),
    /// A stop was requested from inside the step hook; the engine has not
    /// returned yet.
    Cancelling,
}

/// Why a running search is being stopped. Later variants win when several
/// arrive in the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Interrupt {
    Abort,
    Clear,
    Quit,
}

/// Input handling between animation frames. Only stop requests are
/// honoured; board edits wait until the search returns.
struct RunControl<'a> {
    algorithm: Algorithm,
    layout: Layout,
    ctx: &'a Context,
    phase: &'a mut Phase,
    interrupt: Option<Interrupt>,
}

impl RunControl<'_> {
    fn observe(&mut self, msgs: Vec<Msg>) {
        for msg in msgs {
            let stop = match input::translate(&msg, self.layout) {
                Some(Command::Abort) => Interrupt::Abort,
                Some(Command::Clear) => Interrupt::Clear,
                Some(Command::Quit) => Interrupt::Quit,
                Some(cmd) => {
                    log::trace!("ignoring {cmd:?} during {}", self.algorithm);
                    continue;
                }
                None => continue,
            };
            log::debug!("{stop:?} during {}", self.algorithm);
            self.interrupt = self.interrupt.max(Some(stop));
            *self.phase = Phase::Cancelling;
            self.ctx.cancel();
        }
    }
}

/// An interactive visualizer session over a [`Driver`].
pub struct Session<D: Driver> {
    config: VisualizerConfig,
    layout: Layout,
    board: Board,
    screen: Screen<D>,
    phase: Phase,
    status: Status,
    current: Current,
    elapsed: Duration,
    quit: bool,
}

impl<D: Driver> Session<D> {
    /// Build a session with an empty board. Fails only for a non-positive
    /// board size.
    pub fn new(driver: D, config: VisualizerConfig) -> Result<Self, PathError> {
        let board = Board::build(config.rows)?;
        let layout = Layout::new(config.rows);
        let size = layout.screen_size();
        Ok(Self {
            screen: Screen::new(driver, size.x, size.y),
            config,
            layout,
            board,
            phase: Phase::Idle,
            status: Status::Ready,
            current: Current::Nothing,
            elapsed: Duration::ZERO,
            quit: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn current(&self) -> Current {
        self.current
    }

    pub fn screen(&self) -> &Screen<D> {
        &self.screen
    }

    /// Initialise the driver and process input until a quit command. The
    /// driver is closed before returning, on success and on error alike.
    pub fn run(&mut self) -> DriverResult {
        let (title, rows) = (&self.config.title, self.config.rows);
        log::info!("{title} started ({rows}x{rows} board)");
        let result = self.event_loop();
        self.screen.close();
        log::info!("{} stopped", self.config.title);
        result
    }

    fn event_loop(&mut self) -> DriverResult {
        self.screen.init()?;
        self.redraw()?;
        while !self.quit {
            let msgs = self.screen.poll()?;
            if msgs.is_empty() {
                continue;
            }
            for msg in msgs {
                if let Some(cmd) = input::translate(&msg, self.layout) {
                    self.handle(cmd)?;
                }
                if self.quit {
                    return Ok(());
                }
            }
            self.redraw()?;
        }
        Ok(())
    }

    /// Apply one command. Searches run to completion inside this call.
    pub fn handle(&mut self, cmd: Command) -> DriverResult {
        match (cmd, self.phase) {
            // A press while already painting means the release was lost.
            (Command::Paint(p), Phase::Idle | Phase::Painting(_)) => self.press(Brush::Paint, p),
            (Command::Erase(p), Phase::Idle | Phase::Painting(_)) => self.press(Brush::Erase, p),
            (Command::Drag(p), Phase::Painting(brush)) => self.apply(brush, p),
            (Command::Release, Phase::Painting(_)) => self.phase = Phase::Idle,
            (Command::Run(algorithm), Phase::Idle) => self.animate(algorithm)?,
            (Command::Compare, Phase::Idle) => self.compare(),
            (Command::Clear, _) => self.clear()?,
            (Command::Quit, _) => {
                log::info!("quit requested");
                self.quit = true;
            }
            (cmd, phase) => log::trace!("ignoring {cmd:?} while {phase:?}"),
        }
        Ok(())
    }

    /// Start a stroke at `p`. Every press over the board starts one, also
    /// when the brush leaves `p` as it is (an endpoint under the paint
    /// brush), so dragging on from there still edits the cells passed over.
    fn press(&mut self, brush: Brush, p: Point) {
        self.phase = Phase::Painting(brush);
        self.apply(brush, p);
    }

    fn apply(&mut self, brush: Brush, p: Point) {
        let result = match brush {
            Brush::Paint => self
                .board
                .paint(p)
                .map(|painted| log::trace!("painted {painted:?} at {p}")),
            Brush::Erase => self
                .board
                .erase(p)
                .map(|prev| log::trace!("erased {prev:?} at {p}")),
        };
        if let Err(err) = result {
            log::error!("{brush:?} rejected: {err}");
            debug_assert!(false, "input translated to an off-board cell: {err}");
        }
    }

    /// Discard the board and start over with no endpoints.
    fn clear(&mut self) -> DriverResult {
        self.board = Board::build(self.config.rows)?;
        self.phase = Phase::Idle;
        self.status = Status::Cleared;
        self.elapsed = Duration::ZERO;
        log::info!("board cleared");
        Ok(())
    }

    /// Wipe previous search marks and bring adjacency up to date.
    fn prepare_board(&mut self) {
        self.board.clear_search_marks();
        self.board.refresh_adjacency();
    }

    /// Start a search between the painted endpoints, or explain why not.
    fn prepare(&mut self, algorithm: Algorithm) -> Option<SearchState> {
        let (Some(start), Some(end)) = (self.board.start(), self.board.end()) else {
            log::warn!("{algorithm} requested without both endpoints");
            self.status = Status::NeedEndpoints;
            return None;
        };
        self.prepare_board();
        match SearchState::new(&self.board, start, end, algorithm.heuristic_enabled()) {
            Ok(state) => Some(state),
            Err(err) => {
                log::error!("cannot start {algorithm}: {err}");
                debug_assert!(false, "search preconditions broken: {err}");
                None
            }
        }
    }

    /// Run `algorithm` with one frame per step, polling input in between.
    fn animate(&mut self, algorithm: Algorithm) -> DriverResult {
        let Some(state) = self.prepare(algorithm) else {
            return Ok(());
        };
        log::info!("running {algorithm}");
        self.current = Current::One(algorithm);
        self.status = Status::Running(algorithm);
        self.phase = Phase::Running(algorithm);

        let ctx = Context::new();
        let mut failure = None;
        let began = Instant::now();

        let Self {
            board,
            screen,
            layout,
            config,
            phase,
            status,
            current,
            ..
        } = self;
        let (layout, delay, current, status) = (*layout, config.step_delay, *current, &*status);
        let mut control = RunControl {
            algorithm,
            layout,
            ctx: &ctx,
            phase,
            interrupt: None,
        };

        let on_step = |board: &Board| {
            if ctx.is_done() {
                return;
            }
            let header = Header {
                current,
                elapsed: began.elapsed(),
                status,
            };
            let polled = screen
                .present(|grid| view::draw(grid, layout, board, &header))
                .and_then(|_| {
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    screen.poll()
                });
            match polled {
                Ok(msgs) => control.observe(msgs),
                Err(err) => {
                    failure = Some(err);
                    ctx.cancel();
                }
            }
        };
        let report = state.run(board, on_step, || ctx.is_done());
        let interrupt = control.interrupt;

        self.elapsed = began.elapsed();
        self.phase = Phase::Idle;
        if let Some(err) = failure {
            return Err(err);
        }
        self.status = if report.cancelled {
            Status::Aborted(algorithm)
        } else {
            Status::Finished(Summary::new(algorithm, &report, self.elapsed))
        };
        log_report(algorithm, &report, self.elapsed);

        match interrupt {
            Some(Interrupt::Clear) => self.clear()?,
            Some(Interrupt::Quit) => self.quit = true,
            Some(Interrupt::Abort) | None => {}
        }
        Ok(())
    }

    /// Run every algorithm back to back without animation and report each.
    ///
    /// The board is left showing the marks of the last run.
    fn compare(&mut self) {
        let began = Instant::now();
        let mut summaries = Vec::with_capacity(2);
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let Some(state) = self.prepare(algorithm) else {
                return;
            };
            let t = Instant::now();
            let report = state.run(&mut self.board, |_| {}, || false);
            let elapsed = t.elapsed();
            log_report(algorithm, &report, elapsed);
            summaries.push(Summary::new(algorithm, &report, elapsed));
        }
        self.elapsed = began.elapsed();
        self.current = Current::All;
        self.status = Status::Compared(summaries);
    }

    fn redraw(&mut self) -> DriverResult {
        let header = Header {
            current: self.current,
            elapsed: self.elapsed,
            status: &self.status,
        };
        let (layout, board) = (self.layout, &self.board);
        self.screen
            .present(|grid| view::draw(grid, layout, board, &header))?;
        Ok(())
    }
}

fn log_report(algorithm: Algorithm, report: &SearchReport, elapsed: Duration) {
    match report.outcome.path() {
        _ if report.cancelled => log::info!(
            "{algorithm} aborted after {} expansions",
            report.expanded
        ),
        Some(path) => log::info!(
            "{algorithm} found a {}-cell path ({} expanded, {:.4}s)",
            path.len(),
            report.expanded,
            elapsed.as_secs_f64()
        ),
        None => log::info!(
            "{algorithm} found no path ({} expanded, {:.4}s)",
            report.expanded,
            elapsed.as_secs_f64()
        ),
    }
}
