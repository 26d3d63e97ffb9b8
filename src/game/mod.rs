mod chain;
mod clock;
mod direction;
mod field;
mod food;
mod settings;
pub(crate) use self::chain::Role;
use self::chain::SegmentChain;
use self::clock::{Blink, TickClock};
pub(crate) use self::direction::Direction;
pub(crate) use self::field::Field;
pub(crate) use self::food::{Food, Placement};
pub(crate) use self::settings::Settings;
use crate::command::InputQueue;
use crate::vector::Vector2D;
use log::{debug, info, trace};
use rand::Rng;
use std::time::Instant;

/// A game in progress: the snake, the apple, and the score.
///
/// The session is driven by calling [`Session::update()`] once per frame; it
/// decides for itself when enough time has passed for the snake to move.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    settings: Settings,
    chain: SegmentChain,
    food: Food,
    score: u32,
    state: SessionState,
    clock: TickClock,
    blink: Blink,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Session::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(settings: Settings, mut rng: R) -> Session<R> {
        let chain = new_chain(&settings);
        let food = Food::place(settings.placement, &mut rng, &settings.field, &chain);
        info!(
            "Starting new game: {} segments at {}, field {}x{} cells",
            chain.len(),
            settings.start,
            settings.field.size().width,
            settings.field.size().height,
        );
        Session {
            rng,
            settings,
            chain,
            food,
            score: 0,
            state: SessionState::Playing,
            clock: TickClock::new(settings.tick_period),
            blink: Blink::new(settings.blink_period),
        }
    }

    /// Process one frame's worth of input, and move the snake if a tick is
    /// due at `now`
    pub(crate) fn update(&mut self, now: Instant, input: &mut InputQueue) {
        match self.state {
            SessionState::Playing => {
                if let Some(direction) = input.take_turn() {
                    if !self.chain.set_direction(direction) {
                        trace!("Ignoring reversal from {:?}", self.chain.heading());
                    }
                }
                if self.clock.due(now) {
                    self.tick();
                }
                self.food.spin();
            }
            SessionState::GameOver => {
                let _ = input.take_turn();
                if input.take_restart() {
                    self.restart();
                } else {
                    self.blink.update(now);
                }
            }
        }
    }

    fn tick(&mut self) {
        let field = self.settings.field;
        self.chain.advance(&field);
        if self.chain.head_collides() {
            info!(
                "Snake ran into itself at {}; final score: {}",
                self.chain.head().position,
                self.score
            );
            self.state = SessionState::GameOver;
            return;
        }
        if self
            .food
            .contains(self.chain.head().position, field.cell_size())
        {
            self.chain.grow(&field);
            self.score += 1;
            self.food = Food::place(self.settings.placement, &mut self.rng, &field, &self.chain);
            debug!(
                "Ate apple; score is now {}, next apple at {}",
                self.score, self.food.position
            );
        }
    }

    /// Start over with a new snake and apple
    fn restart(&mut self) {
        info!("Restarting after game over with score {}", self.score);
        self.chain = new_chain(&self.settings);
        self.food = Food::place(
            self.settings.placement,
            &mut self.rng,
            &self.settings.field,
            &self.chain,
        );
        self.score = 0;
        self.clock.reset();
        self.blink.reset();
        self.state = SessionState::Playing;
    }
}

impl<R> Session<R> {
    pub(crate) fn field(&self) -> Field {
        self.settings.field
    }

    pub(crate) fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Return a copy of everything needed to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self
                .chain
                .segments()
                .map(|(seg, role)| SegmentView {
                    position: seg.position,
                    direction: seg.direction,
                    role,
                })
                .collect(),
            food: self.food,
            score: self.score,
            over: self.is_over(),
            blink: self.blink.lit(),
        }
    }
}

fn new_chain(settings: &Settings) -> SegmentChain {
    SegmentChain::new(
        settings.start,
        settings.start_length,
        Direction::East,
        &settings.field,
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SessionState {
    Playing,
    GameOver,
}

/// Read-only view of a session for drawing
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snapshot {
    /// The snake's segments from tail to head
    pub(crate) segments: Vec<SegmentView>,
    pub(crate) food: Food,
    pub(crate) score: u32,
    pub(crate) over: bool,

    /// Whether the "game over" text is currently lit
    pub(crate) blink: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SegmentView {
    pub(crate) position: Vector2D,
    pub(crate) direction: Direction,
    pub(crate) role: Role,
}
