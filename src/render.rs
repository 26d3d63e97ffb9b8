//! Drawing a game session in the terminal
use crate::consts;
use crate::game::{Direction, Field, Role, Snapshot};
use crate::theme::{Sprite, Theme};
use crate::util::center_rect;
use crate::vector::Vector2D;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// The game screen: score bar, playing field, and (once the game is over) a
/// prompt to restart or quit
#[derive(Clone, Copy, Debug)]
pub(crate) struct Board<'a> {
    snapshot: &'a Snapshot,
    field: Field,
    theme: &'a Theme,
}

impl<'a> Board<'a> {
    pub(crate) fn new(snapshot: &'a Snapshot, field: Field, theme: &'a Theme) -> Board<'a> {
        Board {
            snapshot,
            field,
            theme,
        }
    }

    fn draw_sprite(&self, canvas: &mut Canvas<'_>, pos: Vector2D, sprite: Sprite) {
        let glyph = self.theme.get(sprite);
        canvas.draw_cell(self.field.cell_of(pos), glyph.symbol, glyph.style);
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let field_size = self.field.size();
        let display = center_rect(
            area,
            Size {
                width: area.width,
                height: field_size.height.saturating_add(5),
            },
        );
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.snapshot.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            block_area,
            Size {
                width: field_size.width.saturating_add(2),
                height: field_size.height.saturating_add(2),
            },
        );
        DottedBorder.render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        let food = self.snapshot.food;
        self.draw_sprite(
            &mut canvas,
            food.position,
            Sprite::Apple(Direction::from_rotation(food.rotation)),
        );
        for seg in &self.snapshot.segments {
            let sprite = match seg.role {
                Role::Tail => Sprite::Tail,
                Role::Body => Sprite::Body,
                // Drawn below
                Role::Head => continue,
            };
            self.draw_sprite(&mut canvas, seg.position, sprite);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(head) = self.snapshot.segments.last() {
            let sprite = if self.snapshot.over {
                Sprite::Collision
            } else {
                Sprite::Head(head.direction)
            };
            self.draw_sprite(&mut canvas, head.position, sprite);
        }

        if self.snapshot.over {
            if self.snapshot.blink {
                Line::from(Span::styled("GAME OVER", consts::GAME_OVER_STYLE))
                    .centered()
                    .render(msg1_area, buf);
            }
            Line::from_iter([
                Span::raw("Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .centered()
            .render(msg2_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn cell_at(&mut self, pos: Position) -> Option<&mut Cell> {
        if pos.x >= self.area.width || pos.y >= self.area.height {
            return None;
        }
        let x = self.area.x.checked_add(pos.x)?;
        let y = self.area.y.checked_add(pos.y)?;
        self.buf.cell_mut((x, y))
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.cell_at(pos) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.cell_at(pos) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Border drawn around the field to show that it wraps around
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::ORIGIN, '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Food, SegmentView};
    use pretty_assertions::assert_eq;

    fn segment(x: f64, y: f64, direction: Direction, role: Role) -> SegmentView {
        SegmentView {
            position: Vector2D::new(x, y),
            direction,
            role,
        }
    }

    #[test]
    fn playing() {
        let field = Field::new(10, 3, 16, 4, 0).unwrap();
        let theme = Theme::default();
        let snapshot = Snapshot {
            segments: vec![
                segment(0.0, 0.0, Direction::East, Role::Tail),
                segment(16.0, 0.0, Direction::East, Role::Body),
                segment(32.0, 0.0, Direction::East, Role::Head),
            ],
            food: Food::new(Vector2D::new(80.0, 32.0)),
            score: 2,
            over: false,
            blink: true,
        };
        let area = Rect::new(0, 0, 12, 8);
        let mut buffer = Buffer::empty(area);
        Board::new(&snapshot, field, &theme).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 2",
            "·⋯⋯⋯⋯⋯⋯⋯⋯⋯⋯·",
            "⋮∘⚬<       ⋮",
            "⋮          ⋮",
            "⋮     ◑    ⋮",
            "·⋯⋯⋯⋯⋯⋯⋯⋯⋯⋯·",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 12, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(1, 2, 1, 1), theme.get(Sprite::Tail).style);
        expected.set_style(Rect::new(2, 2, 1, 1), theme.get(Sprite::Body).style);
        expected.set_style(
            Rect::new(3, 2, 1, 1),
            theme.get(Sprite::Head(Direction::East)).style,
        );
        expected.set_style(
            Rect::new(6, 4, 1, 1),
            theme.get(Sprite::Apple(Direction::East)).style,
        );
        assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over() {
        let field = Field::new(10, 3, 16, 4, 0).unwrap();
        let theme = Theme::default();
        let snapshot = Snapshot {
            segments: vec![
                segment(0.0, 16.0, Direction::East, Role::Tail),
                segment(16.0, 16.0, Direction::East, Role::Body),
                segment(16.0, 16.0, Direction::North, Role::Head),
            ],
            food: Food {
                position: Vector2D::new(144.0, 0.0),
                rotation: 90.0,
            },
            score: 4,
            over: true,
            blink: true,
        };
        let area = Rect::new(0, 0, 24, 8);
        let mut buffer = Buffer::empty(area);
        Board::new(&snapshot, field, &theme).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 4",
            "      ·⋯⋯⋯⋯⋯⋯⋯⋯⋯⋯·      ",
            "      ⋮         ◒⋮      ",
            "      ⋮∘×        ⋮      ",
            "      ⋮          ⋮      ",
            "      ·⋯⋯⋯⋯⋯⋯⋯⋯⋯⋯·      ",
            "       GAME OVER",
            "  Restart (r) Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 24, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(
            Rect::new(16, 2, 1, 1),
            theme.get(Sprite::Apple(Direction::South)).style,
        );
        expected.set_style(Rect::new(7, 3, 1, 1), theme.get(Sprite::Tail).style);
        expected.set_style(Rect::new(8, 3, 1, 1), theme.get(Sprite::Collision).style);
        expected.set_style(Rect::new(7, 6, 9, 1), consts::GAME_OVER_STYLE);
        expected.set_style(Rect::new(11, 7, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(20, 7, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over_text_blinks() {
        let field = Field::new(10, 3, 16, 4, 0).unwrap();
        let theme = Theme::default();
        let snapshot = Snapshot {
            segments: vec![segment(0.0, 0.0, Direction::East, Role::Head)],
            food: Food::new(Vector2D::new(144.0, 32.0)),
            score: 0,
            over: true,
            blink: false,
        };
        let area = Rect::new(0, 0, 24, 8);
        let mut buffer = Buffer::empty(area);
        Board::new(&snapshot, field, &theme).render(area, &mut buffer);
        let row = (0..24u16)
            .map(|x| buffer[(x, 6u16)].symbol().to_owned())
            .collect::<String>();
        assert_eq!(row.trim(), "");
        assert_eq!(buffer[(7u16, 2u16)].symbol(), "×");
    }
}
