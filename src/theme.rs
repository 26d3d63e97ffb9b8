//! The registry of glyphs used to draw the game
use crate::config::ThemeConfig;
use crate::consts;
use crate::game::Direction;
use enum_map::{enum_map, Enum, EnumMap};
use ratatui::style::{Modifier, Style};
use thiserror::Error;

/// Something that can be drawn in a single cell of the field
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Sprite {
    Head(Direction),
    Body,
    Tail,
    /// The apple, turned to face the given direction
    Apple(Direction),
    /// The snake's head after it has run into itself
    Collision,
}

/// How to draw a [`Sprite`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Glyph {
    pub(crate) symbol: char,
    pub(crate) style: Style,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Theme(EnumMap<Sprite, Glyph>);

impl Theme {
    /// Build the registry from the user's configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a configured symbol is not exactly one character.
    pub(crate) fn new(cfg: &ThemeConfig) -> Result<Theme, ThemeError> {
        let body = single_char("body-symbol", cfg.body_symbol.as_deref())?
            .unwrap_or(consts::SNAKE_BODY_SYMBOL);
        let tail = single_char("tail-symbol", cfg.tail_symbol.as_deref())?
            .unwrap_or(consts::SNAKE_TAIL_SYMBOL);
        let snake = Style::new().fg(cfg.snake_color).add_modifier(Modifier::BOLD);
        let apple = Style::new().fg(cfg.apple_color);
        let collision = Style::new()
            .fg(cfg.collision_color)
            .add_modifier(Modifier::REVERSED);
        let glyph = |symbol, style| Glyph { symbol, style };
        Ok(Theme(enum_map! {
            Sprite::Head(Direction::North) => glyph(consts::SNAKE_HEAD_NORTH_SYMBOL, snake),
            Sprite::Head(Direction::East) => glyph(consts::SNAKE_HEAD_EAST_SYMBOL, snake),
            Sprite::Head(Direction::South) => glyph(consts::SNAKE_HEAD_SOUTH_SYMBOL, snake),
            Sprite::Head(Direction::West) => glyph(consts::SNAKE_HEAD_WEST_SYMBOL, snake),
            Sprite::Body => glyph(body, snake),
            Sprite::Tail => glyph(tail, snake),
            Sprite::Apple(Direction::North) => glyph(consts::APPLE_NORTH_SYMBOL, apple),
            Sprite::Apple(Direction::East) => glyph(consts::APPLE_EAST_SYMBOL, apple),
            Sprite::Apple(Direction::South) => glyph(consts::APPLE_SOUTH_SYMBOL, apple),
            Sprite::Apple(Direction::West) => glyph(consts::APPLE_WEST_SYMBOL, apple),
            Sprite::Collision => glyph(consts::COLLISION_SYMBOL, collision),
        }))
    }

    pub(crate) fn get(&self, sprite: Sprite) -> Glyph {
        self.0[sprite]
    }
}

impl Default for Theme {
    fn default() -> Theme {
        let cfg = ThemeConfig::default();
        Theme::new(&cfg).expect("default theme should be valid")
    }
}

fn single_char(key: &'static str, s: Option<&str>) -> Result<Option<char>, ThemeError> {
    let Some(s) = s else {
        return Ok(None);
    };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Some(ch)),
        _ => Err(ThemeError::Symbol {
            key,
            value: s.to_owned(),
        }),
    }
}

/// Returned by [`Theme::new()`] when the configuration describes a glyph that
/// cannot be drawn
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ThemeError {
    #[error("theme setting {key} must be exactly one character, got {value:?}")]
    Symbol { key: &'static str, value: String },
}
