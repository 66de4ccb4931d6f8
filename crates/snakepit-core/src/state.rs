use serde::{Deserialize, Serialize};

use crate::board::{Board, Point};
use crate::error::GameError;
use crate::symbol::{self, Role, DEAD_HEAD, EMPTY, FOOD, WALL};

/// Cached endpoints of one snake's chain.
///
/// The board symbols are the source of truth for the body shape; this
/// record only pins the two ends so the engine reaches them in O(1). Every
/// board mutation of a head or tail cell updates the matching field here
/// in the same operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    head: Point,
    tail: Point,
    live: bool,
}

impl Snake {
    pub fn head(&self) -> Point {
        self.head
    }

    pub fn tail(&self) -> Point {
        self.tail
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}

/// Outcome counts for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    pub moved: usize,
    pub grew: usize,
    pub died: usize,
}

/// Full simulation state: the board plus one record per snake.
///
/// Snakes are never removed. Death flips the liveness flag, stamps the
/// head cell with [`DEAD_HEAD`], and freezes the corpse on the board.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snakes: Vec<Snake>,
}

impl GameState {
    /// The classic opening state on the default board.
    pub fn new() -> Self {
        Self {
            board: Board::default_board(),
            snakes: vec![Snake {
                head: Point::new(2, 4),
                tail: Point::new(2, 2),
                live: true,
            }],
        }
    }

    /// Rebuild snake records by tracing a board whose only snake markers
    /// are tail symbols, one per snake.
    ///
    /// Snakes come out ordered by the scan order of their tails (rows
    /// outer, columns inner). Every located snake is live; a chain that
    /// leaves the board, never terminates, or ends in a dead head is
    /// rejected as malformed input.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        let tails: Vec<Point> = board
            .cells()
            .filter(|&(_, symbol)| symbol::role_of(symbol) == Role::Tail)
            .map(|(point, _)| point)
            .collect();
        let mut snakes = Vec::with_capacity(tails.len());
        for tail in tails {
            let head = trace_head(&board, tail)?;
            snakes.push(Snake {
                head,
                tail,
                live: true,
            });
        }
        Ok(Self { board, snakes })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// Advance every live snake by one cell.
    ///
    /// Snakes are processed in list order, which pins down the order of
    /// `place_food` invocations on ticks where several snakes grow. The
    /// callback runs once per snake that eats; it may mutate the board but
    /// must leave snake records alone.
    pub fn advance(
        &mut self,
        mut place_food: impl FnMut(&mut Board) -> bool,
    ) -> Result<TickSummary, GameError> {
        let mut summary = TickSummary::default();
        for index in 0..self.snakes.len() {
            if !self.snakes[index].live {
                continue;
            }
            let destination = self.next_square(index)?;
            if destination == WALL || symbol::is_snake_part(destination) {
                // The snake stops where it is; whatever it hit is untouched.
                let head = self.snakes[index].head;
                self.board.set(head.row, head.col, DEAD_HEAD)?;
                self.snakes[index].live = false;
                summary.died += 1;
            } else if destination == FOOD {
                self.update_head(index)?;
                let _ = place_food(&mut self.board);
                summary.grew += 1;
            } else {
                self.update_head(index)?;
                self.update_tail(index)?;
                summary.moved += 1;
            }
        }
        Ok(summary)
    }

    /// Symbol in the cell the snake's head points at. Read-only.
    fn next_square(&self, index: usize) -> Result<u8, GameError> {
        let head = self.snakes[index].head;
        let symbol = self.board.get(head.row, head.col)?;
        let next = step(head, symbol).ok_or(GameError::OutOfBounds {
            row: head.row,
            col: head.col,
        })?;
        self.board.get(next.row, next.col)
    }

    /// Write the head symbol into the destination cell, demote the old
    /// head cell to its body form, and move the cached head coordinate.
    fn update_head(&mut self, index: usize) -> Result<(), GameError> {
        let head = self.snakes[index].head;
        let symbol = self.board.get(head.row, head.col)?;
        let next = step(head, symbol).ok_or(GameError::OutOfBounds {
            row: head.row,
            col: head.col,
        })?;
        let body = symbol::body_form(symbol)
            .expect("a live snake's head cell holds a live head symbol");
        self.board.set(next.row, next.col, symbol)?;
        self.board.set(head.row, head.col, body)?;
        self.snakes[index].head = next;
        Ok(())
    }

    /// Blank the old tail cell, promote the next chain cell from body form
    /// to tail form, and move the cached tail coordinate.
    fn update_tail(&mut self, index: usize) -> Result<(), GameError> {
        let tail = self.snakes[index].tail;
        let symbol = self.board.get(tail.row, tail.col)?;
        let next = step(tail, symbol).ok_or(GameError::OutOfBounds {
            row: tail.row,
            col: tail.col,
        })?;
        let chain = self.board.get(next.row, next.col)?;
        let promoted = symbol::tail_form(chain)
            .expect("the cell after the tail holds a body symbol");
        self.board.set(next.row, next.col, promoted)?;
        self.board.set(tail.row, tail.col, EMPTY)?;
        self.snakes[index].tail = next;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The adjacent cell a symbol points at, or `None` when the step would
/// leave the addressable plane entirely.
fn step(point: Point, symbol: u8) -> Option<Point> {
    let (row_delta, col_delta) = symbol::symbol_delta(symbol);
    let row = point.row.checked_add_signed(row_delta)?;
    let col = point.col.checked_add_signed(col_delta)?;
    Some(Point::new(row, col))
}

/// Walk a chain from its tail, following each cell's encoded direction,
/// until a head symbol. A valid chain never revisits a cell, so the walk
/// is bounded by the total cell count.
fn trace_head(board: &Board, tail: Point) -> Result<Point, GameError> {
    let malformed = || GameError::MalformedChain {
        row: tail.row,
        col: tail.col,
    };
    let step_limit = board.cells().count();
    let mut current = tail;
    for _ in 0..=step_limit {
        let symbol = board
            .get(current.row, current.col)
            .map_err(|_| malformed())?;
        if symbol::role_of(symbol) == Role::Head {
            if symbol == DEAD_HEAD {
                return Err(GameError::DeadHeadAtLoad {
                    row: tail.row,
                    col: tail.col,
                });
            }
            return Ok(current);
        }
        current = step(current, symbol).ok_or_else(malformed)?;
    }
    Err(malformed())
}
