use super::chain::SegmentChain;
use super::field::Field;
use crate::vector::Vector2D;
use rand::{seq::IteratorRandom, Rng};
use serde::Deserialize;

/// How new apples are positioned
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Placement {
    /// Any cell of the field, including ones under the snake
    #[default]
    Anywhere,

    /// Only cells not occupied by a segment, unless there are none left
    AvoidSnake,
}

/// An apple waiting to be eaten
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Food {
    /// Top-left corner of the cell the apple occupies
    pub(crate) position: Vector2D,

    /// Purely cosmetic spin, in degrees
    pub(crate) rotation: f64,
}

impl Food {
    pub(crate) fn new(position: Vector2D) -> Food {
        Food {
            position,
            rotation: 0.0,
        }
    }

    /// Place an apple at a uniformly random point on the field, snapped down
    /// to the grid
    pub(crate) fn generate<R: Rng>(rng: &mut R, field: &Field) -> Food {
        let cell = field.cell_units();
        let x = rng.random_range(0..field.width());
        let y = rng.random_range(0..field.height());
        Food::new(Vector2D::new(
            f64::from(x - x % cell),
            f64::from(y - y % cell),
        ))
    }

    pub(crate) fn place<R: Rng>(
        placement: Placement,
        rng: &mut R,
        field: &Field,
        chain: &SegmentChain,
    ) -> Food {
        match placement {
            Placement::Anywhere => Food::generate(rng, field),
            Placement::AvoidSnake => {
                let cell_size = field.cell_size();
                field
                    .cell_origins()
                    .filter(|&origin| {
                        !chain
                            .segments()
                            .any(|(seg, _)| covers(origin, cell_size, seg.position))
                    })
                    .choose(rng)
                    .map_or_else(|| Food::generate(rng, field), Food::new)
            }
        }
    }

    /// Returns `true` if `point` lies within the apple's cell
    pub(crate) fn contains(&self, point: Vector2D, cell_size: f64) -> bool {
        covers(self.position, cell_size, point)
    }

    /// Turn the apple by one degree
    pub(crate) fn spin(&mut self) {
        self.rotation += 1.0;
        if self.rotation > 360.0 {
            self.rotation = 0.0;
        }
    }
}

fn covers(origin: Vector2D, size: f64, point: Vector2D) -> bool {
    (origin.x..origin.x + size).contains(&point.x) && (origin.y..origin.y + size).contains(&point.y)
}
