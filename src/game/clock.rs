use std::time::{Duration, Instant};

/// Fixed-timestep gate for advancing the game.
///
/// The clock starts on the first call to [`TickClock::due()`]; afterwards a
/// tick is due whenever at least one period has elapsed since the last one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl TickClock {
    pub(crate) fn new(period: Duration) -> TickClock {
        TickClock {
            period,
            last_tick: None,
        }
    }

    /// Returns `true` if a tick should happen at `now`, in which case `now`
    /// becomes the time of the last tick
    pub(crate) fn due(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.period => false,
            Some(_) => {
                self.last_tick = Some(now);
                true
            }
            None => {
                self.last_tick = Some(now);
                false
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.last_tick = None;
    }
}

/// Timer toggling the "game over" text on and off
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Blink {
    period: Duration,
    last_toggle: Option<Instant>,
    lit: bool,
}

impl Blink {
    pub(crate) fn new(period: Duration) -> Blink {
        Blink {
            period,
            last_toggle: None,
            lit: true,
        }
    }

    pub(crate) fn update(&mut self, now: Instant) {
        match self.last_toggle {
            Some(last) if now.saturating_duration_since(last) < self.period => (),
            Some(_) => {
                self.lit = !self.lit;
                self.last_toggle = Some(now);
            }
            None => self.last_toggle = Some(now),
        }
    }

    pub(crate) fn lit(&self) -> bool {
        self.lit
    }

    pub(crate) fn reset(&mut self) {
        self.last_toggle = None;
        self.lit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(40);

    #[test]
    fn tick_clock() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD);
        assert!(!clock.due(start));
        assert!(!clock.due(start + Duration::from_millis(39)));
        assert!(clock.due(start + PERIOD));
        assert!(!clock.due(start + Duration::from_millis(79)));
        assert!(clock.due(start + Duration::from_millis(100)));
        assert!(!clock.due(start + Duration::from_millis(120)));
        clock.reset();
        assert!(!clock.due(start + Duration::from_millis(500)));
        assert!(clock.due(start + Duration::from_millis(540)));
    }

    #[test]
    fn blink() {
        let start = Instant::now();
        let mut blink = Blink::new(PERIOD);
        assert!(blink.lit());
        blink.update(start);
        assert!(blink.lit());
        blink.update(start + PERIOD);
        assert!(!blink.lit());
        blink.update(start + Duration::from_millis(50));
        assert!(!blink.lit());
        blink.update(start + Duration::from_millis(80));
        assert!(blink.lit());
        blink.update(start + Duration::from_millis(120));
        assert!(!blink.lit());
        blink.reset();
        assert!(blink.lit());
    }
}
