use serde::{Deserialize, Serialize};

/// Wall cell.
pub const WALL: u8 = b'#';
/// Unoccupied cell.
pub const EMPTY: u8 = b' ';
/// Food cell.
pub const FOOD: u8 = b'*';
/// Head of a snake that has died. Head-shaped for collision purposes but
/// encodes no direction, so it never moves again.
pub const DEAD_HEAD: u8 = b'x';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// (row, col) offset of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
        }
    }

    pub fn head_symbol(self) -> u8 {
        match self {
            Self::Up => b'W',
            Self::Left => b'A',
            Self::Down => b'S',
            Self::Right => b'D',
        }
    }

    pub fn body_symbol(self) -> u8 {
        match self {
            Self::Up => b'^',
            Self::Left => b'<',
            Self::Down => b'v',
            Self::Right => b'>',
        }
    }

    pub fn tail_symbol(self) -> u8 {
        match self {
            Self::Up => b'w',
            Self::Left => b'a',
            Self::Down => b's',
            Self::Right => b'd',
        }
    }

    /// Direction encoded by any of the twelve directional symbols.
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'W' | b'^' | b'w' => Some(Self::Up),
            b'A' | b'<' | b'a' => Some(Self::Left),
            b'S' | b'v' | b's' => Some(Self::Down),
            b'D' | b'>' | b'd' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Structural role a cell plays in a snake chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    None,
    Tail,
    Body,
    Head,
}

pub fn role_of(symbol: u8) -> Role {
    match symbol {
        b'w' | b'a' | b's' | b'd' => Role::Tail,
        b'^' | b'<' | b'v' | b'>' => Role::Body,
        b'W' | b'A' | b'S' | b'D' | DEAD_HEAD => Role::Head,
        _ => Role::None,
    }
}

/// True for all thirteen symbols a snake can occupy, including a dead head.
pub fn is_snake_part(symbol: u8) -> bool {
    role_of(symbol) != Role::None
}

/// Head symbol to the body symbol of the same direction. `None` for
/// anything that is not a live head.
pub fn body_form(head: u8) -> Option<u8> {
    match head {
        b'W' => Some(b'^'),
        b'A' => Some(b'<'),
        b'S' => Some(b'v'),
        b'D' => Some(b'>'),
        _ => None,
    }
}

/// Body symbol to the tail symbol of the same direction. `None` for
/// anything that is not a body symbol.
pub fn tail_form(body: u8) -> Option<u8> {
    match body {
        b'^' => Some(b'w'),
        b'<' => Some(b'a'),
        b'v' => Some(b's'),
        b'>' => Some(b'd'),
        _ => None,
    }
}

/// One step in the direction a symbol points; (0, 0) for non-movement
/// symbols. A body symbol always points at the next chain cell toward the
/// head, so the same offsets drive both head advancement and tail tracing.
pub fn symbol_delta(symbol: u8) -> (isize, isize) {
    Direction::from_symbol(symbol).map_or((0, 0), Direction::delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    #[test]
    fn head_body_tail_round_trip_covers_every_direction() {
        for dir in ALL_DIRECTIONS {
            let body = body_form(dir.head_symbol()).expect("every live head has a body form");
            assert_eq!(body, dir.body_symbol());
            let tail = tail_form(body).expect("every body symbol has a tail form");
            assert_eq!(tail, dir.tail_symbol());
        }
    }

    #[test]
    fn roles_partition_the_snake_alphabet() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(role_of(dir.head_symbol()), Role::Head);
            assert_eq!(role_of(dir.body_symbol()), Role::Body);
            assert_eq!(role_of(dir.tail_symbol()), Role::Tail);
        }
        for symbol in [WALL, EMPTY, FOOD, b'?'] {
            assert_eq!(role_of(symbol), Role::None);
            assert!(!is_snake_part(symbol));
        }
    }

    #[test]
    fn dead_head_is_head_shaped_but_directionless() {
        assert_eq!(role_of(DEAD_HEAD), Role::Head);
        assert!(is_snake_part(DEAD_HEAD));
        assert_eq!(Direction::from_symbol(DEAD_HEAD), None);
        assert_eq!(symbol_delta(DEAD_HEAD), (0, 0));
    }

    #[test]
    fn deltas_agree_across_head_body_and_tail_forms() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(symbol_delta(dir.head_symbol()), dir.delta());
            assert_eq!(symbol_delta(dir.body_symbol()), dir.delta());
            assert_eq!(symbol_delta(dir.tail_symbol()), dir.delta());
        }
    }

    #[test]
    fn conversions_reject_foreign_symbols() {
        assert_eq!(body_form(b'^'), None);
        assert_eq!(body_form(DEAD_HEAD), None);
        assert_eq!(body_form(FOOD), None);
        assert_eq!(tail_form(b'D'), None);
        assert_eq!(tail_form(b'w'), None);
    }
}
