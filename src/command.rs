use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Restart,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }

    /// Return the heading requested by a directional command
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::North),
            Command::Down => Some(Direction::South),
            Command::Left => Some(Direction::West),
            Command::Right => Some(Direction::East),
            _ => None,
        }
    }
}

/// Commands received from the user during a single frame, oldest first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct InputQueue(VecDeque<Command>);

impl InputQueue {
    pub(crate) fn new() -> InputQueue {
        InputQueue::default()
    }

    pub(crate) fn push(&mut self, cmd: Command) {
        self.0.push_back(cmd);
    }

    /// Remove all directional commands from the queue and return the heading
    /// of the first one
    pub(crate) fn take_turn(&mut self) -> Option<Direction> {
        let mut turn = None;
        self.0.retain(|cmd| match cmd.direction() {
            Some(d) => {
                turn.get_or_insert(d);
                false
            }
            None => true,
        });
        turn
    }

    /// Remove all restart commands from the queue, returning `true` if there
    /// were any
    pub(crate) fn take_restart(&mut self) -> bool {
        let before = self.0.len();
        self.0.retain(|&cmd| cmd != Command::Restart);
        self.0.len() != before
    }

    pub(crate) fn quit_requested(&self) -> bool {
        self.0
            .iter()
            .any(|&cmd| matches!(cmd, Command::Quit | Command::Q))
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl Extend<Command> for InputQueue {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
