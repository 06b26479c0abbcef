use alloc::string::String;
use core::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Rows/columns taken by the header line and the two separator lines.
const FRAME_MARGIN: usize = 3;

/// Characters drawn for each cell state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub unexplored: char,
    pub flagged: char,
    pub empty: char,
    pub mine: char,
    pub border: char,
    pub separator: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            unexplored: '.',
            flagged: '*',
            empty: '/',
            mine: 'X',
            border: '|',
            separator: '—',
        }
    }
}

/// Draws sessions as a bordered text grid with 1-indexed headers.
///
/// ```text
///  |123456789|
/// —|—————————|
/// 1|.........|
/// ...
/// 9|.........|
/// —|—————————|
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    glyphs: Glyphs,
    frame: Array2<char>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_glyphs(Glyphs::default())
    }

    /// Builds the static header, borders and separators once.
    pub fn with_glyphs(glyphs: Glyphs) -> Self {
        let (rows, columns) = BOARD_SIZE;
        let height = usize::from(rows) + FRAME_MARGIN;
        let width = usize::from(columns) + FRAME_MARGIN;
        let mut frame = Array2::from_elem((height, width), glyphs.unexplored);

        for ((y, x), cell) in frame.indexed_iter_mut() {
            let is_border = x == 1 || x == width - 1;
            *cell = match y {
                0 if x == 0 => ' ',
                0 if is_border => glyphs.border,
                0 => DIGITS[x - 1],
                _ if y == 1 || y == height - 1 => {
                    if is_border {
                        glyphs.border
                    } else {
                        glyphs.separator
                    }
                }
                _ if x == 0 => DIGITS[y - 1],
                _ if is_border => glyphs.border,
                _ => glyphs.unexplored,
            };
        }

        Self { glyphs, frame }
    }

    pub fn glyph_at(&self, session: &GameSession, coords: Coord2) -> char {
        let content = session.content_at(coords);
        if session.outcome() == Outcome::Lost && content == Some(CellContent::Mine) {
            return self.glyphs.mine;
        }

        match session.cell_at(coords) {
            CellView::Unexplored => self.glyphs.unexplored,
            CellView::Flagged => self.glyphs.flagged,
            CellView::Revealed => match content {
                Some(CellContent::Hint(0)) => self.glyphs.empty,
                Some(CellContent::Hint(count)) => DIGITS[usize::from(count)],
                // a revealed cell always has generated content
                Some(CellContent::Mine) | None => self.glyphs.mine,
            },
        }
    }

    pub fn render(&self, session: &GameSession) -> String {
        let mut grid = self.frame.clone();
        for coords in iter_board() {
            let [row, column] = coords.to_nd_index();
            grid[[row + 2, column + 2]] = self.glyph_at(session, coords);
        }

        let mut out = String::with_capacity(grid.len() * 3 + grid.nrows());
        for line in grid.rows() {
            out.extend(line.iter());
            out.push('\n');
        }
        out
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::new().render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn lines(rendered: &str) -> Vec<&str> {
        rendered.lines().collect()
    }

    fn wall_session() -> GameSession {
        let wall: Vec<_> = (0..9).map(|row| (row, 3)).collect();
        GameSession::from_layout(MineLayout::from_mine_coords(&wall).unwrap())
    }

    #[test]
    fn fresh_session_renders_unexplored_grid() {
        let session = GameSession::new(GameConfig::new(10).unwrap(), 0);
        let rendered = Renderer::new().render(&session);

        let expected = [
            " |123456789|",
            "—|—————————|",
            "1|.........|",
            "2|.........|",
            "3|.........|",
            "4|.........|",
            "5|.........|",
            "6|.........|",
            "7|.........|",
            "8|.........|",
            "9|.........|",
            "—|—————————|",
        ];
        assert_eq!(lines(&rendered), expected);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn revealed_cells_show_hints_and_empty_glyph() {
        let mut session = wall_session();
        session.claim_free_cell((0, 0)).unwrap();
        session.toggle_flag((0, 3)).unwrap();

        let rendered = Renderer::new().render(&session);
        let lines = lines(&rendered);

        assert_eq!(lines[2], "1|//2*.....|");
        assert_eq!(lines[6], "5|//3......|");
        assert_eq!(lines[10], "9|//2......|");
    }

    #[test]
    fn loss_reveals_every_mine() {
        let mut session = wall_session();
        session.toggle_flag((0, 3)).unwrap();
        session.toggle_flag((5, 5)).unwrap();
        session.claim_free_cell((4, 3)).unwrap();

        let rendered = Renderer::new().render(&session);
        let lines = lines(&rendered);

        assert_eq!(session.outcome(), Outcome::Lost);
        for row in 0..9 {
            assert_eq!(lines[row + 2].chars().nth(5), Some('X'), "row {row}");
        }
        // non-mine cells keep the player's view
        assert_eq!(lines[7], "6|...X.*...|");
    }

    #[test]
    fn display_matches_default_renderer() {
        let mut session = wall_session();
        session.claim_free_cell((8, 8)).unwrap();

        assert_eq!(session.to_string(), Renderer::default().render(&session));
    }

    #[test]
    fn custom_glyphs_are_used() {
        let glyphs = Glyphs {
            unexplored: '#',
            ..Glyphs::default()
        };
        let session = GameSession::new(GameConfig::new(10).unwrap(), 0);
        let rendered = Renderer::with_glyphs(glyphs).render(&session);

        assert_eq!(lines(&rendered)[2], "1|#########|");
    }
}
