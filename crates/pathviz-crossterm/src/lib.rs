//! Crossterm terminal driver for pathviz.
//!
//! [`CrosstermDriver`] implements [`pathviz_core::Driver`]: frames are written
//! as coloured terminal cells, and key presses, mouse buttons and drags come
//! back as [`Msg`] values in screen-cell coordinates.

use std::io::{self, Stdout, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{
    Point,
    app::{Context, Driver, DriverResult},
    grid::Frame,
    messages::{Key, MouseAction, Msg},
    style::Color,
};

/// How long a poll waits for the first event.
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

fn to_ct_color(c: Color) -> CtColor {
    match c.rgb() {
        Some((r, g, b)) => CtColor::Rgb { r, g, b },
        None => CtColor::Reset,
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Button presses, releases and drags. Bare pointer motion is dropped so
/// hovering never paints.
fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Main),
        MouseEventKind::Down(MouseButton::Right) => Some(MouseAction::Secondary),
        MouseEventKind::Up(_) => Some(MouseAction::Release),
        MouseEventKind::Drag(_) => Some(MouseAction::Move),
        _ => None,
    }
}

fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => to_key(code).map(|key| Msg::KeyDown {
            key,
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
        }),
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => to_mouse_action(kind)
            .map(|action| Msg::mouse(action, Point::new(column.into(), row.into()))),
        Event::Resize(width, height) => Some(Msg::Screen {
            width: width.into(),
            height: height.into(),
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm. Mouse capture is always on.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    title: Option<String>,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terminal window title on init.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn write_frame(out: &mut Stdout, frame: &Frame) -> io::Result<()> {
        for fc in &frame.cells {
            let style = fc.cell.style;
            queue!(
                out,
                cursor::MoveTo(fc.pos.x as u16, fc.pos.y as u16),
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;
            if style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            write!(out, "{}", fc.cell.ch)?;
            if style.bold {
                queue!(out, SetAttribute(Attribute::Reset))?;
            }
        }
        out.flush()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> DriverResult {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        if let Some(title) = &self.title {
            execute!(stdout, terminal::SetTitle(title))?;
        }
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(&mut self, ctx: &Context, tx: Sender<Msg>) -> DriverResult {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(());
        }
        while !ctx.is_done() && event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg).ok();
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> DriverResult {
        Self::write_frame(&mut io::stdout(), &frame)?;
        Ok(())
    }

    // Every step is attempted even if init stopped part way.
    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
