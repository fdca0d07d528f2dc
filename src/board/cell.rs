//! Cells and the static board graph.
//!
//! The board is an arena: cells live in a `Vec` indexed by their dense
//! cell index, and neighbour links are plain indices into that same vector.
//! Nothing here changes after setup.

use super::error::BoardError;

/// Dense cell identifier, `0..board.len()`.
pub type CellIndex = usize;

/// Number of cells on the standard board, and the upper bound for any board.
pub const BOARD_CELLS: usize = 37;

/// Highest richness tier. Tier 0 is barren.
pub const MAX_RICHNESS: u8 = 3;

/// One of the six hex directions, numbered as the feed numbers neighbour slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

/// All six directions in feed order.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::East,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::West,
    Direction::SouthWest,
    Direction::SouthEast,
];

impl Direction {
    /// Returns the neighbour slot used for this direction.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        ALL_DIRECTIONS[(self as usize + 3) % 6]
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: CellIndex,
    pub richness: u8,
    pub neighbours: [Option<CellIndex>; 6],
}

impl Cell {
    /// Returns the neighbour in `direction`, if the board continues that way.
    #[inline]
    pub fn neighbour(&self, direction: Direction) -> Option<CellIndex> {
        self.neighbours[direction.slot()]
    }

    /// Returns true if nothing can be seeded here.
    #[inline]
    pub fn is_barren(&self) -> bool {
        self.richness == 0
    }
}

/// The static cell graph for a whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

/// Cube-coordinate offsets, one per direction in feed order.
const CUBE_OFFSETS: [(i32, i32, i32); 6] = [
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    (-1, 1, 0),
    (-1, 0, 1),
    (0, -1, 1),
];

impl Board {
    /// Builds a board from cells listed in index order.
    ///
    /// Rejects boards that are empty or larger than [`BOARD_CELLS`], cells
    /// out of order, richness above [`MAX_RICHNESS`], dangling neighbour
    /// indices, and links that are not mirrored by the opposite direction.
    pub fn new(cells: Vec<Cell>) -> Result<Board, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::Empty);
        }
        if cells.len() > BOARD_CELLS {
            return Err(BoardError::TooManyCells(cells.len()));
        }

        for (position, cell) in cells.iter().enumerate() {
            if cell.index != position {
                return Err(BoardError::MisplacedCell {
                    position,
                    index: cell.index,
                });
            }
            if cell.richness > MAX_RICHNESS {
                return Err(BoardError::RichnessOutOfRange {
                    cell: cell.index,
                    richness: cell.richness,
                });
            }
            for n in cell.neighbours.iter().flatten() {
                if *n >= cells.len() {
                    return Err(BoardError::CellOutOfRange(*n));
                }
            }
        }

        for cell in &cells {
            for dir in ALL_DIRECTIONS {
                if let Some(n) = cell.neighbour(dir) {
                    if cells[n].neighbour(dir.opposite()) != Some(cell.index) {
                        return Err(BoardError::AsymmetricLink {
                            from: cell.index,
                            to: n,
                            direction: dir.slot(),
                        });
                    }
                }
            }
        }

        Ok(Board { cells })
    }

    /// The standard 37-cell board: a hexagon of radius 3.
    pub fn standard() -> Board {
        Board::hexagon(3)
    }

    /// Builds a hexagonal board of the given radius.
    ///
    /// Cell 0 is the centre. Each ring starts at the cell reached by walking
    /// east from the centre and proceeds counter-clockwise. Rings 0 and 1
    /// have richness 3, ring 2 has richness 2, outer rings have richness 1.
    /// Radius 3 reproduces the standard layout exactly. Larger radii are
    /// capped at 3, since no board may exceed `BOARD_CELLS` cells.
    pub fn hexagon(radius: u8) -> Board {
        let radius = radius.min(3) as i32;
        let mut coords = vec![(0, 0, 0)];
        for ring in 1..=radius {
            let (dx, dy, dz) = CUBE_OFFSETS[0];
            let mut coord = (dx * ring, dy * ring, dz * ring);
            for side in 0..6 {
                for _ in 0..ring {
                    coords.push(coord);
                    let step = CUBE_OFFSETS[(side + 2) % 6];
                    coord = (coord.0 + step.0, coord.1 + step.1, coord.2 + step.2);
                }
            }
        }

        let cells = coords
            .iter()
            .enumerate()
            .map(|(index, &(x, y, z))| {
                let ring = x.abs().max(y.abs()).max(z.abs());
                let richness = match ring {
                    0 | 1 => 3,
                    2 => 2,
                    _ => 1,
                };
                let mut neighbours = [None; 6];
                for (slot, (dx, dy, dz)) in CUBE_OFFSETS.iter().enumerate() {
                    let target = (x + dx, y + dy, z + dz);
                    neighbours[slot] = coords.iter().position(|&c| c == target);
                }
                Cell {
                    index,
                    richness,
                    neighbours,
                }
            })
            .collect();

        Board { cells }
    }

    /// Returns a copy of this board with one cell's richness replaced.
    pub fn with_richness(mut self, cell: CellIndex, richness: u8) -> Result<Board, BoardError> {
        if richness > MAX_RICHNESS {
            return Err(BoardError::RichnessOutOfRange { cell, richness });
        }
        match self.cells.get_mut(cell) {
            Some(c) => c.richness = richness,
            None => return Err(BoardError::CellOutOfRange(cell)),
        }
        Ok(self)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell < self.cells.len()
    }

    /// Returns the cell at `index`, or `None` if it is off the board.
    #[inline]
    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Richness of `cell`; off-board cells read as barren.
    #[inline]
    pub fn richness(&self, cell: CellIndex) -> u8 {
        self.cells.get(cell).map_or(0, |c| c.richness)
    }

    /// Neighbour of `cell` in `direction`.
    #[inline]
    pub fn neighbour(&self, cell: CellIndex, direction: Direction) -> Option<CellIndex> {
        self.cells.get(cell).and_then(|c| c.neighbour(direction))
    }

    /// Iterates over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
