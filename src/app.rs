use crate::command::{Command, InputQueue};
use crate::consts;
use crate::game::Session;
use crate::render::Board;
use crate::theme::Theme;
use crossterm::event::{poll, read};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The running program: a game session plus the means of drawing it
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    theme: Theme,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(session: Session<R>, theme: Theme) -> App<R> {
        App { session, theme }
    }

    /// Run frames until the user quits.  Each frame draws the session, then
    /// collects input until the frame's time is up, then hands that input to
    /// the session.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut input = InputQueue::new();
        loop {
            let deadline = Instant::now() + consts::FRAME_PERIOD;
            self.draw(&mut terminal)?;
            collect_input(deadline, &mut input)?;
            if input.quit_requested() {
                info!("Quitting");
                break;
            }
            self.session.update(Instant::now(), &mut input);
            input.clear();
        }
        Ok(())
    }
}

impl<R> App<R> {
    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let snapshot = self.session.snapshot();
        let board = Board::new(&snapshot, self.session.field(), &self.theme);
        terminal.draw(|frame| frame.render_widget(board, frame.area()))?;
        Ok(())
    }
}

/// Read terminal events into `input` until `deadline`
fn collect_input(deadline: Instant, input: &mut InputQueue) -> io::Result<()> {
    loop {
        let wait = deadline.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            return Ok(());
        }
        if let Some(cmd) = read()?
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            debug!("Received command {cmd:?}");
            input.push(cmd);
        }
    }
}
