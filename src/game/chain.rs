use super::direction::Direction;
use super::field::Field;
use crate::vector::Vector2D;
use std::collections::VecDeque;

/// A direction change waiting to happen for one segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PendingTurn {
    /// The position at which the segment will turn.  This is where the head
    /// was when the turn was issued.
    pub(crate) trigger: Vector2D,

    /// The direction the segment will face after turning
    pub(crate) direction: Direction,
}

/// One cell-sized piece of the snake
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Segment {
    pub(crate) position: Vector2D,
    pub(crate) direction: Direction,

    /// Turns issued by the head that this segment has yet to reach, oldest
    /// first
    pub(crate) pending: VecDeque<PendingTurn>,
}

impl Segment {
    fn new(position: Vector2D, direction: Direction) -> Segment {
        Segment {
            position,
            direction,
            pending: VecDeque::new(),
        }
    }

    /// If the segment is standing on the trigger of its oldest pending turn,
    /// take that turn.
    fn promote_turn(&mut self) {
        if let Some(turn) = self.pending.front().copied() {
            if turn.trigger == self.position {
                self.direction = turn.direction;
                let _ = self.pending.pop_front();
            }
        }
    }

    fn step(&mut self, field: &Field) {
        self.position = field.wrap(self.position + self.direction.to_vector() * field.step());
    }
}

/// What part of the snake a segment is, for display purposes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Role {
    Tail,
    Body,
    Head,
}

/// The snake: a chain of segments, each of which retraces the path taken by
/// the head.
///
/// Rather than recording the head's full path, every turn of the head is
/// queued on each of the other segments along with the position at which it
/// happened.  A segment takes a turn once it arrives at that position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SegmentChain {
    /// The leading segment
    pub(crate) head: Segment,

    /// All segments other than the head, with the tail at the front and the
    /// segment directly behind the head at the back
    pub(crate) body: VecDeque<Segment>,

    /// The direction most recently chosen for the head
    pub(crate) heading: Direction,

    /// Whether a turn has been queued since the last advance
    turn_queued: bool,
}

impl SegmentChain {
    /// Create a chain of `length` segments (at least one) facing `heading`,
    /// with the tail at `tail` and each following segment one cell further
    /// along `heading`.
    pub(crate) fn new(
        tail: Vector2D,
        length: usize,
        heading: Direction,
        field: &Field,
    ) -> SegmentChain {
        let offset = heading.to_vector() * field.cell_size();
        let mut body = VecDeque::with_capacity(length);
        let mut pos = field.wrap(tail);
        for _ in 1..length {
            body.push_back(Segment::new(pos, heading));
            pos = field.wrap(pos + offset);
        }
        SegmentChain {
            head: Segment::new(pos, heading),
            body,
            heading,
            turn_queued: false,
        }
    }

    pub(crate) fn head(&self) -> &Segment {
        &self.head
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the segments from tail to head along with their roles
    pub(crate) fn segments(&self) -> impl Iterator<Item = (&Segment, Role)> + '_ {
        self.body
            .iter()
            .enumerate()
            .map(|(i, seg)| (seg, if i == 0 { Role::Tail } else { Role::Body }))
            .chain(std::iter::once((&self.head, Role::Head)))
    }

    /// Point the head in `direction` and queue the turn on every other
    /// segment.
    ///
    /// Reversing the current heading is refused; in that case nothing
    /// changes and `false` is returned.  Only one turn can be taken per
    /// advance: if a turn has already been queued since the last advance, it
    /// is replaced.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.heading.reverse() {
            return false;
        }
        self.heading = direction;
        self.head.direction = direction;
        if self.turn_queued {
            for seg in &mut self.body {
                if let Some(turn) = seg.pending.back_mut() {
                    turn.direction = direction;
                }
            }
        } else {
            let turn = PendingTurn {
                trigger: self.head.position,
                direction,
            };
            for seg in self.body.iter_mut().rev() {
                seg.pending.push_back(turn);
            }
            self.turn_queued = true;
        }
        true
    }

    /// Move every segment forwards one tick, first letting each segment take
    /// a pending turn if it has reached it
    pub(crate) fn advance(&mut self, field: &Field) {
        for seg in self.body.iter_mut().chain(std::iter::once(&mut self.head)) {
            seg.promote_turn();
            seg.step(field);
        }
        self.turn_queued = false;
    }

    /// Lengthen the chain by one segment, added behind the current tail.  The
    /// new tail inherits the old tail's pending turns so that it follows the
    /// same path.
    pub(crate) fn grow(&mut self, field: &Field) {
        let tail = self.body.front().unwrap_or(&self.head);
        let new_tail = Segment {
            position: field.wrap(tail.position - tail.direction.to_vector() * field.cell_size()),
            direction: tail.direction,
            pending: tail.pending.clone(),
        };
        self.body.push_front(new_tail);
    }

    /// Returns `true` if the head occupies exactly the same position as any
    /// other segment
    pub(crate) fn head_collides(&self) -> bool {
        self.body
            .iter()
            .any(|seg| seg.position == self.head.position)
    }
}
