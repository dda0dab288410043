//! Pieces module - tetromino shape matrices and rotation
//!
//! Every kind owns a square boolean matrix (2x2 for O, 4x4 for I, 3x3 for the
//! rest). Matrices are stored in fixed 4x4 storage so rotation never changes
//! the allocation, only the occupied cells inside the `size x size` window.

use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Largest matrix side (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from 0/1 rows; only the top-left `size x size` window is read.
    pub const fn from_bits(size: u8, bits: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < size as usize {
            let mut x = 0;
            while x < size as usize {
                rows[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { size, rows }
    }

    /// Matrix side length.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (`col`, `row`) is occupied.
    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        col < self.size && row < self.size && self.rows[row as usize][col as usize]
    }

    /// Occupied cells as `(col, row)` offsets from the matrix origin, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.rows[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise: `new[x][N-1-y] = old[y][x]`.
    ///
    /// Returns a new matrix; `self` is left untouched.
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size as usize;
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                rows[x][n - 1 - y] = self.rows[y][x];
            }
        }
        Shape {
            size: self.size,
            rows,
        }
    }
}

/// Static definition of a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Opaque color token handed to renderers (`#rrggbb`).
    pub color: &'static str,
}

/// Lookup table indexed by [`PieceKind::index`].
pub const PIECE_TABLE: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: Shape::from_bits(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#06b6d4",
    },
    PieceDef {
        kind: PieceKind::J,
        shape: Shape::from_bits(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#3b82f6",
    },
    PieceDef {
        kind: PieceKind::L,
        shape: Shape::from_bits(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#f97316",
    },
    PieceDef {
        kind: PieceKind::O,
        shape: Shape::from_bits(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#eab308",
    },
    PieceDef {
        kind: PieceKind::S,
        shape: Shape::from_bits(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#22c55e",
    },
    PieceDef {
        kind: PieceKind::T,
        shape: Shape::from_bits(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#a855f7",
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: Shape::from_bits(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "#ef4444",
    },
];

/// Table entry for a kind.
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &PIECE_TABLE[kind.index()]
}

/// Canonical spawn shape for a kind.
pub fn get_shape(kind: PieceKind) -> Shape {
    piece_def(kind).shape
}

/// Color token for a kind.
pub fn piece_color(kind: PieceKind) -> &'static str {
    piece_def(kind).color
}

/// A piece: kind, current matrix and the grid position of the matrix origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a fresh piece at the spawn position with the canonical shape.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Candidate shape after a clockwise turn. The piece itself is not changed.
    pub fn rotate(&self) -> Shape {
        self.shape.rotated_cw()
    }

    pub fn color(&self) -> &'static str {
        piece_color(self.kind)
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
