use std::fmt;
use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::symbol::{EMPTY, FOOD, WALL};

const DEFAULT_ROWS: usize = 18;
const DEFAULT_COLS: usize = 20;

/// Coordinates of a board cell, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The character surface holding the whole game state.
///
/// Owns every cell; all other components go through the bounds-checked
/// accessors. Rows may differ in width, and line terminators are stripped
/// at parse time so a newline is never an addressable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<u8>>,
}

impl Board {
    /// Parse a board from newline-separated text.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let rows: Vec<Vec<u8>> = text.lines().map(|line| line.as_bytes().to_vec()).collect();
        if rows.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        Ok(Self { rows })
    }

    /// Read a board line by line until EOF.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, GameError> {
        let mut rows = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            rows.push(line.as_bytes().to_vec());
        }
        if rows.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        Ok(Self { rows })
    }

    /// An empty rectangle of the given dimensions enclosed by a wall.
    pub fn bordered(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < 3 || cols < 3 {
            return Err(GameError::BoardTooSmall { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows);
        cells.push(vec![WALL; cols]);
        for _ in 1..rows - 1 {
            let mut row = vec![EMPTY; cols];
            row[0] = WALL;
            row[cols - 1] = WALL;
            cells.push(row);
        }
        cells.push(vec![WALL; cols]);
        Ok(Self { rows: cells })
    }

    /// The classic opening arena: 18x20 walls around one three-segment
    /// snake heading right, with one food cell ahead of it.
    pub fn default_board() -> Self {
        let mut board = Self::bordered(DEFAULT_ROWS, DEFAULT_COLS)
            .expect("default dimensions hold a border");
        board.rows[2][9] = FOOD;
        board.rows[2][2] = b'd';
        board.rows[2][3] = b'>';
        board.rows[2][4] = b'D';
        board
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Addressable width of one row, or `None` past the last row.
    pub fn row_width(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<u8, GameError> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(GameError::OutOfBounds { row, col })
    }

    pub fn set(&mut self, row: usize, col: usize, symbol: u8) -> Result<(), GameError> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(GameError::OutOfBounds { row, col })?;
        *cell = symbol;
        Ok(())
    }

    /// All cells in scan order, rows outer and columns inner.
    pub fn cells(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &symbol)| (Point { row, col }, symbol))
        })
    }

    /// Every cell currently holding the empty symbol, in scan order.
    pub fn empty_cells(&self) -> Vec<Point> {
        self.cells()
            .filter(|&(_, symbol)| symbol == EMPTY)
            .map(|(point, _)| point)
            .collect()
    }

    /// The board as newline-terminated text.
    pub fn render(&self) -> String {
        let capacity = self.rows.iter().map(|line| line.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.rows {
            out.extend(line.iter().map(|&symbol| symbol as char));
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        for line in &self.rows {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
