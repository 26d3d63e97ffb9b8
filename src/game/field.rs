use crate::vector::Vector2D;
use ratatui::layout::{Position, Size};
use thiserror::Error;

/// Geometry of the playing field.
///
/// The field is `columns` × `rows` cells of `cell_size` world units each.
/// Segments move `step` units per tick, and the field wraps around at its
/// edges with an extra `edge_padding` units of travel before re-entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    columns: u16,
    rows: u16,
    cell_size: u32,
    step: u32,
    edge_padding: u32,
    width: u32,
    height: u32,
}

impl Field {
    /// Validate the given geometry.
    ///
    /// Positions are compared exactly, so `step` has to evenly divide both
    /// the cell size and the distance travelled around the field in each
    /// axis; otherwise segments would overshoot the points where the head
    /// turned.
    pub(crate) fn new(
        columns: u16,
        rows: u16,
        cell_size: u32,
        step: u32,
        edge_padding: u32,
    ) -> Result<Field, GeometryError> {
        if columns == 0 || rows == 0 {
            return Err(GeometryError::Empty);
        }
        if cell_size == 0 {
            return Err(GeometryError::ZeroCellSize);
        }
        if step == 0 {
            return Err(GeometryError::ZeroStep);
        }
        let width = u32::from(columns)
            .checked_mul(cell_size)
            .ok_or(GeometryError::TooLarge)?;
        let height = u32::from(rows)
            .checked_mul(cell_size)
            .ok_or(GeometryError::TooLarge)?;
        if cell_size % step != 0 {
            return Err(GeometryError::CellMisaligned { cell_size, step });
        }
        for extent in [width, height] {
            let period = extent
                .checked_add(edge_padding)
                .ok_or(GeometryError::TooLarge)?;
            if period % step != 0 {
                return Err(GeometryError::WrapMisaligned { period, step });
            }
        }
        Ok(Field {
            columns,
            rows,
            cell_size,
            step,
            edge_padding,
            width,
            height,
        })
    }

    /// Return the size of the field in terminal cells
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.columns,
            height: self.rows,
        }
    }

    /// Width of the field in world units
    pub(crate) fn width(self) -> u32 {
        self.width
    }

    /// Height of the field in world units
    pub(crate) fn height(self) -> u32 {
        self.height
    }

    pub(crate) fn cell_size(self) -> f64 {
        f64::from(self.cell_size)
    }

    pub(crate) fn cell_units(self) -> u32 {
        self.cell_size
    }

    /// Distance travelled by a segment in one tick
    pub(crate) fn step(self) -> f64 {
        f64::from(self.step)
    }

    /// Return the world position of the top-left corner of the given cell
    pub(crate) fn cell_origin(self, column: u16, row: u16) -> Vector2D {
        Vector2D::new(
            f64::from(column) * self.cell_size(),
            f64::from(row) * self.cell_size(),
        )
    }

    /// Iterate over the world positions of the top-left corners of all cells,
    /// row by row
    pub(crate) fn cell_origins(self) -> impl Iterator<Item = Vector2D> {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| self.cell_origin(x, y)))
    }

    /// Apply toroidal wrap-around to a position.
    ///
    /// A coordinate beyond the far edge loses one wrap period; a coordinate
    /// beyond the padding on the near edge gains one.  A coordinate lying
    /// exactly on the far edge is left alone.
    pub(crate) fn wrap(self, pos: Vector2D) -> Vector2D {
        let padding = f64::from(self.edge_padding);
        let (width, height) = (f64::from(self.width), f64::from(self.height));
        let wrapped = Vector2D::new(
            wrap_coord(pos.x, width, padding),
            wrap_coord(pos.y, height, padding),
        );
        debug_assert!(
            wrapped.approx_eq(Vector2D::new(
                wrap_coord(wrapped.x, width, padding),
                wrap_coord(wrapped.y, height, padding),
            )),
            "position {pos} should be within one wrap period of the field"
        );
        wrapped
    }

    /// Return the terminal cell, relative to the top-left of the field, in
    /// which a world position is drawn
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn cell_of(self, pos: Vector2D) -> Position {
        // rem_euclid() keeps both values in 0..columns and 0..rows, so the
        // casts cannot truncate.  It also puts x = width in column 0, the
        // same column as x = 0, although the two positions never compare
        // equal.
        let x = (pos.x / self.cell_size())
            .floor()
            .rem_euclid(f64::from(self.columns));
        let y = (pos.y / self.cell_size())
            .floor()
            .rem_euclid(f64::from(self.rows));
        Position::new(x as u16, y as u16)
    }
}

fn wrap_coord(c: f64, extent: f64, padding: f64) -> f64 {
    if c > extent {
        c - (extent + padding)
    } else if c < -padding {
        c + (extent + padding)
    } else {
        c
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GeometryError {
    #[error("field must be at least one cell wide and one cell high")]
    Empty,
    #[error("cell size must be nonzero")]
    ZeroCellSize,
    #[error("movement step must be nonzero")]
    ZeroStep,
    #[error("field dimensions are too large")]
    TooLarge,
    #[error("movement step {step} does not evenly divide cell size {cell_size}")]
    CellMisaligned { cell_size: u32, step: u32 },
    #[error("movement step {step} does not evenly divide wrap-around distance {period}")]
    WrapMisaligned { period: u32, step: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field() -> Field {
        Field::new(10, 10, 16, 16, 0).unwrap()
    }

    #[rstest]
    #[case(0, 10, 16, 16, 0, GeometryError::Empty)]
    #[case(10, 0, 16, 16, 0, GeometryError::Empty)]
    #[case(10, 10, 0, 16, 0, GeometryError::ZeroCellSize)]
    #[case(10, 10, 16, 0, 0, GeometryError::ZeroStep)]
    #[case(10, 10, 16, 5, 0, GeometryError::CellMisaligned { cell_size: 16, step: 5 })]
    #[case(10, 10, 16, 8, 4, GeometryError::WrapMisaligned { period: 164, step: 8 })]
    #[case(u16::MAX, 10, u32::MAX, 1, 0, GeometryError::TooLarge)]
    fn invalid_geometry(
        #[case] columns: u16,
        #[case] rows: u16,
        #[case] cell_size: u32,
        #[case] step: u32,
        #[case] edge_padding: u32,
        #[case] err: GeometryError,
    ) {
        assert_eq!(
            Field::new(columns, rows, cell_size, step, edge_padding),
            Err(err)
        );
    }

    #[test]
    fn dimensions() {
        let f = Field::new(40, 18, 16, 4, 0).unwrap();
        assert_eq!(f.width(), 640);
        assert_eq!(f.height(), 288);
        assert_eq!(f.size(), Size::new(40, 18));
        assert_eq!(f.step(), 4.0);
        assert_eq!(f.cell_origin(3, 2), Vector2D::new(48.0, 32.0));
        assert_eq!(f.cell_origins().count(), 40 * 18);
    }

    #[rstest]
    #[case(Vector2D::new(80.0, 80.0), Vector2D::new(80.0, 80.0))]
    #[case(Vector2D::new(160.0, 0.0), Vector2D::new(160.0, 0.0))]
    #[case(Vector2D::new(176.0, 0.0), Vector2D::new(16.0, 0.0))]
    #[case(Vector2D::new(0.0, 176.0), Vector2D::new(0.0, 16.0))]
    #[case(Vector2D::new(-16.0, 32.0), Vector2D::new(144.0, 32.0))]
    #[case(Vector2D::new(32.0, -16.0), Vector2D::new(32.0, 144.0))]
    #[case(Vector2D::new(0.0, 0.0), Vector2D::new(0.0, 0.0))]
    fn wrap(#[case] before: Vector2D, #[case] after: Vector2D) {
        assert_eq!(field().wrap(before), after);
    }

    #[test]
    fn wrap_with_padding() {
        let f = Field::new(10, 10, 16, 4, 8).unwrap();
        assert_eq!(f.wrap(Vector2D::new(164.0, 0.0)), Vector2D::new(-4.0, 0.0));
        assert_eq!(f.wrap(Vector2D::new(-8.0, 0.0)), Vector2D::new(-8.0, 0.0));
        assert_eq!(f.wrap(Vector2D::new(-12.0, 0.0)), Vector2D::new(156.0, 0.0));
    }

    #[test]
    fn wrap_preserves_overshoot() {
        let f = field();
        let edge = Vector2D::new(160.0, 48.0);
        let east = f.wrap(edge + Vector2D::new(f.step(), 0.0));
        assert_eq!(east, Vector2D::new(f.step(), 48.0));
        let west = f.wrap(Vector2D::new(-f.step(), 48.0));
        assert_eq!(west, Vector2D::new(160.0 - f.step(), 48.0));
    }

    #[rstest]
    #[case(Vector2D::new(0.0, 0.0), Position::new(0, 0))]
    #[case(Vector2D::new(15.0, 31.0), Position::new(0, 1))]
    #[case(Vector2D::new(48.0, 16.0), Position::new(3, 1))]
    #[case(Vector2D::new(160.0, 0.0), Position::new(0, 0))]
    #[case(Vector2D::new(-4.0, 0.0), Position::new(9, 0))]
    fn cell_of(#[case] pos: Vector2D, #[case] cell: Position) {
        assert_eq!(field().cell_of(pos), cell);
    }
}
