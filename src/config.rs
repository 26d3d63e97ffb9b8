use crate::consts;
use crate::game::Placement;
use log::LevelFilter;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size and granularity of the playing field
    #[serde(default)]
    pub(crate) field: FieldConfig,

    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Overrides for the glyphs used to draw the game
    #[serde(default)]
    pub(crate) theme: ThemeConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Field geometry.  See [`crate::game::Field`] for the constraints on these
/// values, which are checked when a game starts.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FieldConfig {
    pub(crate) columns: u16,
    pub(crate) rows: u16,
    pub(crate) cell_size: u32,
    pub(crate) step: u32,
    pub(crate) edge_padding: u32,
}

impl Default for FieldConfig {
    fn default() -> FieldConfig {
        FieldConfig {
            columns: consts::FIELD_COLUMNS,
            rows: consts::FIELD_ROWS,
            cell_size: consts::CELL_SIZE,
            step: consts::STEP,
            edge_padding: consts::EDGE_PADDING,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Movements of the snake per second
    pub(crate) tick_rate: u32,

    /// Number of segments in a new snake
    pub(crate) start_length: usize,

    /// Column of the cell holding a new snake's tail
    pub(crate) start_column: u16,

    /// Row of the cell holding a new snake's tail
    pub(crate) start_row: u16,

    pub(crate) placement: Placement,

    /// Milliseconds between toggles of the "game over" text
    pub(crate) blink_ms: u64,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        let (start_column, start_row) = consts::SNAKE_START_CELL;
        GameConfig {
            tick_rate: consts::TICK_RATE,
            start_length: consts::INITIAL_SNAKE_LENGTH,
            start_column,
            start_row,
            placement: Placement::default(),
            blink_ms: u64::try_from(consts::BLINK_PERIOD.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct ThemeConfig {
    pub(crate) body_symbol: Option<String>,
    pub(crate) tail_symbol: Option<String>,
    pub(crate) snake_color: Color,
    pub(crate) apple_color: Color,
    pub(crate) collision_color: Color,
}

impl Default for ThemeConfig {
    fn default() -> ThemeConfig {
        ThemeConfig {
            body_symbol: None,
            tail_symbol: None,
            snake_color: consts::SNAKE_COLOR,
            apple_color: consts::APPLE_COLOR,
            collision_color: consts::COLLISION_COLOR,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// Log file; defaults to [`LogConfig::default_file()`]
    pub(crate) file: Option<PathBuf>,
    pub(crate) level: LevelFilter,
}

impl LogConfig {
    /// Return the path to log to when none is configured
    pub(crate) fn default_file() -> Option<PathBuf> {
        dirs::cache_dir().map(|p| {
            p.join(consts::APP_NAME)
                .join(format!("{}.log", consts::APP_NAME))
        })
    }

    pub(crate) fn file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(LogConfig::default_file)
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(src: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(src.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn empty_file() {
        let tmp = write_config("");
        assert_eq!(Config::load(tmp.path(), false).unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let tmp = write_config(concat!(
            "[field]\n",
            "columns = 10\n",
            "rows = 10\n",
            "cell-size = 16\n",
            "step = 16\n",
            "edge-padding = 0\n",
            "\n",
            "[game]\n",
            "tick-rate = 8\n",
            "start-length = 3\n",
            "start-column = 0\n",
            "start-row = 1\n",
            "placement = \"avoid-snake\"\n",
            "blink-ms = 250\n",
            "\n",
            "[theme]\n",
            "body-symbol = \"o\"\n",
            "snake-color = \"cyan\"\n",
            "apple-color = \"#FF8800\"\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/snake.log\"\n",
            "level = \"debug\"\n",
        ));
        let cfg = Config::load(tmp.path(), false).unwrap();
        assert_eq!(
            cfg,
            Config {
                field: FieldConfig {
                    columns: 10,
                    rows: 10,
                    cell_size: 16,
                    step: 16,
                    edge_padding: 0,
                },
                game: GameConfig {
                    tick_rate: 8,
                    start_length: 3,
                    start_column: 0,
                    start_row: 1,
                    placement: Placement::AvoidSnake,
                    blink_ms: 250,
                },
                theme: ThemeConfig {
                    body_symbol: Some(String::from("o")),
                    tail_symbol: None,
                    snake_color: Color::Cyan,
                    apple_color: Color::Rgb(0xFF, 0x88, 0x00),
                    collision_color: consts::COLLISION_COLOR,
                },
                log: LogConfig {
                    file: Some(PathBuf::from("/tmp/snake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
    }

    #[test]
    fn partial_section() {
        let tmp = write_config("[field]\ncolumns = 20\n");
        let cfg = Config::load(tmp.path(), false).unwrap();
        assert_eq!(
            cfg.field,
            FieldConfig {
                columns: 20,
                ..FieldConfig::default()
            }
        );
        assert_eq!(cfg.game, GameConfig::default());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn bad_file() {
        let tmp = write_config("[field]\ncolumns = \"many\"\n");
        assert!(matches!(
            Config::load(tmp.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn explicit_log_file() {
        let log = LogConfig {
            file: Some(PathBuf::from("snake.log")),
            level: LevelFilter::Warn,
        };
        assert_eq!(log.file(), Some(PathBuf::from("snake.log")));
    }
}
