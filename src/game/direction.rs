use crate::vector::Vector2D;
use enum_map::Enum;

/// One of the four headings a segment can have.  North is up the screen.
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the unit vector for this direction in world coordinates
    pub(crate) fn to_vector(self) -> Vector2D {
        match self {
            Direction::North => Vector2D::new(0.0, -1.0),
            Direction::East => Vector2D::new(1.0, 0.0),
            Direction::South => Vector2D::new(0.0, 1.0),
            Direction::West => Vector2D::new(-1.0, 0.0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Return the direction nearest to a rotation of `degrees` away from
    /// east.  As `y` grows downwards, positive rotations turn towards south.
    /// Exact ties go to the earlier of east, south, west, north.
    pub(crate) fn from_rotation(degrees: f64) -> Direction {
        let facing = Direction::East
            .to_vector()
            .rotate(degrees.to_radians())
            .normalize();
        [
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North,
        ]
        .into_iter()
        .min_by(|a, b| {
            facing
                .angle_between(a.to_vector())
                .total_cmp(&facing.angle_between(b.to_vector()))
        })
        .unwrap_or(Direction::East)
    }
}
