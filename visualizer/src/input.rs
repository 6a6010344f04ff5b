//! Translation of driver [`Msg`]s into session [`Command`]s.

use pathviz_core::{Key, MouseAction, Msg, Point};
use pathviz_paths::Algorithm;

use crate::view::Layout;

/// A user intent, with mouse positions already converted to board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Left button pressed over a board cell.
    Paint(Point),
    /// Right button pressed over a board cell.
    Erase(Point),
    /// Pointer dragged over a board cell with a button held.
    Drag(Point),
    Release,
    Run(Algorithm),
    Compare,
    Clear,
    /// Stop the running search.
    Abort,
    Quit,
}

/// Map one message to a command. Positions off the board, unbound keys and
/// resize notifications yield `None`.
pub fn translate(msg: &Msg, layout: Layout) -> Option<Command> {
    match msg {
        Msg::Quit => Some(Command::Quit),
        Msg::KeyDown { key, ctrl } => translate_key(*key, *ctrl),
        Msg::Mouse { action, pos } => translate_mouse(*action, *pos, layout),
        Msg::Screen { .. } => None,
    }
}

fn translate_key(key: Key, ctrl: bool) -> Option<Command> {
    match key {
        Key::Char('c') if ctrl => Some(Command::Quit),
        Key::Char('1') => Some(Command::Run(Algorithm::Dijkstra)),
        Key::Char('2') => Some(Command::Run(Algorithm::AStar)),
        Key::Char('3') => Some(Command::Compare),
        Key::Char('c' | 'C') => Some(Command::Clear),
        Key::Char('q' | 'Q') => Some(Command::Quit),
        Key::Escape => Some(Command::Abort),
        Key::Char(_) => None,
    }
}

fn translate_mouse(action: MouseAction, pos: Point, layout: Layout) -> Option<Command> {
    if action == MouseAction::Release {
        return Some(Command::Release);
    }
    let Some(cell) = layout.board_pos(pos) else {
        if matches!(action, MouseAction::Main | MouseAction::Secondary) {
            log::warn!("ignoring click outside the board at {pos}");
        }
        return None;
    };
    match action {
        MouseAction::Main => Some(Command::Paint(cell)),
        MouseAction::Secondary => Some(Command::Erase(cell)),
        MouseAction::Move => Some(Command::Drag(cell)),
        MouseAction::Release => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Layout = Layout::new(5);

    fn key(k: Key) -> Option<Command> {
        translate(&Msg::key(k), LAYOUT)
    }

    #[test]
    fn keys() {
        assert_eq!(key(Key::Char('1')), Some(Command::Run(Algorithm::Dijkstra)));
        assert_eq!(key(Key::Char('2')), Some(Command::Run(Algorithm::AStar)));
        assert_eq!(key(Key::Char('3')), Some(Command::Compare));
        assert_eq!(key(Key::Char('c')), Some(Command::Clear));
        assert_eq!(key(Key::Char('C')), Some(Command::Clear));
        assert_eq!(key(Key::Char('q')), Some(Command::Quit));
        assert_eq!(key(Key::Escape), Some(Command::Abort));
        assert_eq!(key(Key::Char('x')), None);
    }

    #[test]
    fn ctrl_c_quits_instead_of_clearing() {
        let msg = Msg::ctrl_key(Key::Char('c'));
        assert_eq!(translate(&msg, LAYOUT), Some(Command::Quit));
        assert_eq!(translate(&Msg::Quit, LAYOUT), Some(Command::Quit));
    }

    #[test]
    fn mouse_over_board() {
        let at = |action, x, y| translate(&Msg::mouse(action, Point::new(x, y)), LAYOUT);
        let cell = Point::from_row_col(1, 3);
        assert_eq!(at(MouseAction::Main, 6, 3), Some(Command::Paint(cell)));
        assert_eq!(at(MouseAction::Main, 7, 3), Some(Command::Paint(cell)));
        assert_eq!(at(MouseAction::Secondary, 6, 3), Some(Command::Erase(cell)));
        assert_eq!(at(MouseAction::Move, 6, 3), Some(Command::Drag(cell)));
    }

    #[test]
    fn mouse_off_board_is_rejected_but_release_is_not() {
        let at = |action, x, y| translate(&Msg::mouse(action, Point::new(x, y)), LAYOUT);
        assert_eq!(at(MouseAction::Main, 4, 0), None);
        assert_eq!(at(MouseAction::Move, 40, 40), None);
        assert_eq!(at(MouseAction::Release, 40, 40), Some(Command::Release));
    }

    #[test]
    fn resize_is_ignored() {
        let msg = Msg::Screen {
            width: 10,
            height: 10,
        };
        assert_eq!(translate(&msg, LAYOUT), None);
    }
}
