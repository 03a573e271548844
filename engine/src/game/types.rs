use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stone {
    Empty,
    Computer,
    Human,
}

impl Stone {
    pub fn opponent(&self) -> Option<Stone> {
        match self {
            Stone::Computer => Some(Stone::Human),
            Stone::Human => Some(Stone::Computer),
            Stone::Empty => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Stone::Empty => ' ',
            Stone::Computer => 'O',
            Stone::Human => 'X',
        }
    }
}

/// Board coordinate. This is the identity used for frontier membership;
/// search scores are carried separately on [`ScoredMove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A move returned by the search, together with the value of the node
/// that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Position,
    pub value: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    ComputerWon,
    HumanWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    Computer,
    Human,
    Random,
}
