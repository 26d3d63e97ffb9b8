use super::field::{Field, GeometryError};
use super::food::Placement;
use crate::config::{FieldConfig, GameConfig};
use crate::vector::Vector2D;
use std::time::Duration;
use thiserror::Error;

/// Validated parameters for a game session
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Settings {
    pub(crate) field: Field,

    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    /// Position of a new snake's tail
    pub(crate) start: Vector2D,

    /// Number of segments in a new snake
    pub(crate) start_length: usize,

    pub(crate) placement: Placement,
    pub(crate) blink_period: Duration,
}

impl Settings {
    /// Check the configured values and convert them to `Settings`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the field geometry is unusable, the tick rate or
    /// starting length is zero, the starting snake is longer than the field
    /// is wide, or the starting cell lies outside the field.
    pub(crate) fn new(field: &FieldConfig, game: &GameConfig) -> Result<Settings, SettingsError> {
        let field = Field::new(
            field.columns,
            field.rows,
            field.cell_size,
            field.step,
            field.edge_padding,
        )?;
        if game.tick_rate == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        if game.start_length == 0 {
            return Err(SettingsError::ZeroLength);
        }
        let size = field.size();
        // The snake starts out heading east in a single row.
        if game.start_length > usize::from(size.width) {
            return Err(SettingsError::TooLong {
                length: game.start_length,
                max: size.width,
            });
        }
        if game.start_column >= size.width || game.start_row >= size.height {
            return Err(SettingsError::StartOutside {
                column: game.start_column,
                row: game.start_row,
            });
        }
        Ok(Settings {
            field,
            tick_period: Duration::from_secs(1) / game.tick_rate,
            start: field.cell_origin(game.start_column, game.start_row),
            start_length: game.start_length,
            placement: game.placement,
            blink_period: Duration::from_millis(game.blink_ms),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("invalid field geometry")]
    Geometry(#[from] GeometryError),
    #[error("tick rate must be nonzero")]
    ZeroTickRate,
    #[error("snake must start with at least one segment")]
    ZeroLength,
    #[error("snake of {length} segments does not fit in {max} columns")]
    TooLong { length: usize, max: u16 },
    #[error("starting cell ({column}, {row}) is outside the field")]
    StartOutside { column: u16, row: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::chain::SegmentChain;
    use super::super::direction::Direction;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::new(&FieldConfig::default(), &GameConfig::default()).unwrap();
        assert_eq!(settings.start, Vector2D::new(48.0, 48.0));
        assert_eq!(settings.start_length, 5);
        assert_eq!(settings.tick_period, Duration::from_secs(1) / 26);
        assert_eq!(settings.placement, Placement::Anywhere);
    }

    #[test]
    fn zero_tick_rate() {
        let game = GameConfig {
            tick_rate: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            Settings::new(&FieldConfig::default(), &game),
            Err(SettingsError::ZeroTickRate)
        );
    }

    #[test]
    fn zero_length() {
        let game = GameConfig {
            start_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            Settings::new(&FieldConfig::default(), &game),
            Err(SettingsError::ZeroLength)
        );
    }

    #[rstest]
    #[case(11)]
    #[case(41)]
    #[case(usize::MAX)]
    fn too_long(#[case] start_length: usize) {
        let field = FieldConfig {
            columns: 10,
            ..FieldConfig::default()
        };
        let game = GameConfig {
            start_length,
            start_column: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            Settings::new(&field, &game),
            Err(SettingsError::TooLong {
                length: start_length,
                max: 10
            })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(9)]
    fn full_row_does_not_collide(#[case] start_column: u16) {
        let field = FieldConfig {
            columns: 10,
            ..FieldConfig::default()
        };
        let game = GameConfig {
            start_length: 10,
            start_column,
            ..GameConfig::default()
        };
        let settings = Settings::new(&field, &game).unwrap();
        let chain = SegmentChain::new(
            settings.start,
            settings.start_length,
            Direction::East,
            &settings.field,
        );
        assert_eq!(chain.len(), 10);
        assert!(!chain.head_collides());
    }

    #[test]
    fn start_outside() {
        let game = GameConfig {
            start_column: 40,
            ..GameConfig::default()
        };
        assert_eq!(
            Settings::new(&FieldConfig::default(), &game),
            Err(SettingsError::StartOutside { column: 40, row: 3 })
        );
    }

    #[test]
    fn bad_geometry() {
        let field = FieldConfig {
            rows: 0,
            ..FieldConfig::default()
        };
        assert_eq!(
            Settings::new(&field, &GameConfig::default()),
            Err(SettingsError::Geometry(GeometryError::Empty))
        );
    }
}
