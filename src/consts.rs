//! Assorted constants & default configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Time between redraws of the screen.  Input is collected for this long
/// before each update of the game.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Default number of ticks (movements of the snake) per second
pub(crate) const TICK_RATE: u32 = 26;

/// Default width of the field in cells
pub(crate) const FIELD_COLUMNS: u16 = 40;

/// Default height of the field in cells
pub(crate) const FIELD_ROWS: u16 = 18;

/// Default size of a cell in world units
pub(crate) const CELL_SIZE: u32 = 16;

/// Default distance moved by each segment per tick, in world units
pub(crate) const STEP: u32 = 4;

/// Default distance a segment may travel past the near edges of the field
/// before it wraps around
pub(crate) const EDGE_PADDING: u32 = 0;

/// Number of segments in a new snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 5;

/// Default cell in which a new snake's tail starts, as `(column, row)`
pub(crate) const SNAKE_START_CELL: (u16, u16) = (3, 3);

/// Default time between toggles of the blinking "game over" text
pub(crate) const BLINK_PERIOD: Duration = Duration::from_millis(400);

/// Name used for the configuration & log directories
pub(crate) const APP_NAME: &str = "trailsnake";

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the last segment of the snake
pub(crate) const SNAKE_TAIL_SYMBOL: char = '∘';

/// Glyphs for the apple, indexed by which way it is currently turned
pub(crate) const APPLE_NORTH_SYMBOL: char = '◓';
pub(crate) const APPLE_EAST_SYMBOL: char = '◑';
pub(crate) const APPLE_SOUTH_SYMBOL: char = '◒';
pub(crate) const APPLE_WEST_SYMBOL: char = '◐';

/// Glyph for the snake's head when it's collided with itself
pub(crate) const COLLISION_SYMBOL: char = '×';

pub(crate) const SNAKE_COLOR: Color = Color::Green;

pub(crate) const APPLE_COLOR: Color = Color::LightRed;

pub(crate) const COLLISION_COLOR: Color = Color::LightRed;

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "game over" text while it is lit
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
