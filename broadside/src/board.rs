// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types that make up the game board.

use std::fmt;

use crate::ships::ShipId;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{PlacementError, VolleyError},
    grid::Cell,
};

mod coordinate;
mod errors;
mod grid;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Result recorded on a cell once a volley lands on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VolleyOutcome {
    /// The volley struck a ship segment.
    Hit,
    /// The volley landed in open water.
    Miss,
}

impl fmt::Display for VolleyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            VolleyOutcome::Hit => "Hit",
            VolleyOutcome::Miss => "Miss",
        })
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CellRef {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Snapshot of the cell's contents.
    cell: Cell,
}

impl CellRef {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The ship that occupies this cell, if any.
    pub fn occupant(&self) -> Option<ShipId> {
        self.cell.occupant
    }

    /// The volley recorded on this cell, if any.
    pub fn volley(&self) -> Option<VolleyOutcome> {
        self.cell.volley
    }

    /// Whether this cell has been fired upon previously.
    pub fn fired_upon(&self) -> bool {
        self.cell.fired_upon()
    }
}

/// A single side's 10x10 ocean: which ship occupies each cell and which cells have
/// been fired upon.
///
/// The board only knows ship IDs. Lengths, kinds and hit counts live in the
/// [`Fleet`][crate::fleet::Fleet] that the IDs index into.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Cells of this board.
    grid: Grid,
}

impl Board {
    /// Create an empty board with no ships and no volleys.
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Get the ship occupying the given cell. Returns `None` for empty or out of bounds
    /// cells.
    pub fn occupant_at(&self, coord: Coordinate) -> Option<ShipId> {
        self.grid.get(coord).and_then(|cell| cell.occupant)
    }

    /// Get the volley recorded at the given cell, if any.
    pub fn volley_at(&self, coord: Coordinate) -> Option<VolleyOutcome> {
        self.grid.get(coord).and_then(|cell| cell.volley)
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(coord).map(|cell| CellRef { coord, cell: *cell })
    }

    /// Commit the given cells to the ship with the given ID.
    ///
    /// Every cell is checked before any is written, so on error the board is left
    /// untouched.
    pub fn place(&mut self, id: ShipId, cells: &[Coordinate]) -> Result<(), PlacementError> {
        for &coord in cells {
            match self.grid.get(coord) {
                None => return Err(PlacementError::OutOfBounds(coord)),
                Some(Cell {
                    occupant: Some(occupant),
                    ..
                }) => {
                    return Err(PlacementError::Overlap {
                        coord,
                        occupant: *occupant,
                    })
                }
                Some(_) => {}
            }
        }
        // Already ensured that every position is valid and not occupied.
        for &coord in cells {
            self.grid[coord].occupant = Some(id);
        }
        Ok(())
    }

    /// Check that a volley could be recorded at the given cell without recording it.
    pub fn check_volley(&self, coord: Coordinate) -> Result<(), VolleyError> {
        match self.grid.get(coord) {
            None => Err(VolleyError::OutOfBounds(coord)),
            Some(cell) if cell.fired_upon() => Err(VolleyError::AlreadyFired(coord)),
            Some(_) => Ok(()),
        }
    }

    /// Record the outcome of a volley on the given cell.
    pub fn record_volley(
        &mut self,
        coord: Coordinate,
        outcome: VolleyOutcome,
    ) -> Result<(), VolleyError> {
        self.check_volley(coord)?;
        self.grid[coord].volley = Some(outcome);
        Ok(())
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// cells of that row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellRef> + '_> + '_ {
        (0..BOARD_SIZE).map(move |row| {
            (0..BOARD_SIZE).map(move |col| {
                let coord = Coordinate::new(row, col);
                CellRef {
                    coord,
                    cell: self.grid[coord],
                }
            })
        })
    }

    /// Iterate the coordinates of all cells held by the given ship.
    pub fn cells_of(&self, id: ShipId) -> impl Iterator<Item = Coordinate> + '_ {
        self.grid
            .iter()
            .filter(move |(_, cell)| cell.occupant == Some(id))
            .map(|(coord, _)| coord)
    }

    /// Snapshot of which ship occupies each cell, indexed `[row][col]`.
    pub fn occupant_map(&self) -> [[Option<ShipId>; BOARD_SIZE]; BOARD_SIZE] {
        let mut map = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (coord, cell) in self.grid.iter() {
            map[coord.row][coord.col] = cell.occupant;
        }
        map
    }

    /// Snapshot of the volley recorded on each cell, indexed `[row][col]`.
    pub fn volley_map(&self) -> [[Option<VolleyOutcome>; BOARD_SIZE]; BOARD_SIZE] {
        let mut map = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (coord, cell) in self.grid.iter() {
            map[coord.row][coord.col] = cell.volley;
        }
        map
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_cells(row: usize, cols: std::ops::Range<usize>) -> Vec<Coordinate> {
        cols.map(|col| Coordinate::new(row, col)).collect()
    }

    #[test]
    fn place_marks_every_cell() {
        let mut board = Board::new();
        board.place(ShipId::new(0), &row_cells(0, 0..5)).unwrap();
        for col in 0..5 {
            assert_eq!(
                board.occupant_at(Coordinate::new(0, col)),
                Some(ShipId::new(0))
            );
        }
        assert_eq!(board.occupant_at(Coordinate::new(0, 5)), None);
        assert_eq!(board.cells_of(ShipId::new(0)).count(), 5);
    }

    #[test]
    fn overlap_leaves_board_untouched() {
        let mut board = Board::new();
        board.place(ShipId::new(0), &row_cells(0, 0..5)).unwrap();
        let before = board.clone();
        let cells = vec![
            Coordinate::new(1, 2),
            Coordinate::new(0, 2),
            Coordinate::new(2, 2),
        ];
        assert_eq!(
            board.place(ShipId::new(1), &cells),
            Err(PlacementError::Overlap {
                coord: Coordinate::new(0, 2),
                occupant: ShipId::new(0),
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_leaves_board_untouched() {
        let mut board = Board::new();
        let err = board.place(ShipId::new(0), &row_cells(3, 8..11)).unwrap_err();
        assert_eq!(err, PlacementError::OutOfBounds(Coordinate::new(3, 10)));
        assert_eq!(err.coord(), Coordinate::new(3, 10));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn volleys_are_recorded_once() {
        let mut board = Board::new();
        let coord = Coordinate::new(4, 4);
        board.record_volley(coord, VolleyOutcome::Miss).unwrap();
        assert_eq!(board.volley_at(coord), Some(VolleyOutcome::Miss));
        assert_eq!(
            board.record_volley(coord, VolleyOutcome::Hit),
            Err(VolleyError::AlreadyFired(coord))
        );
        assert_eq!(board.volley_at(coord), Some(VolleyOutcome::Miss));
        assert_eq!(
            board.record_volley(Coordinate::new(0, 10), VolleyOutcome::Miss),
            Err(VolleyError::OutOfBounds(Coordinate::new(0, 10)))
        );
    }

    #[test]
    fn maps_and_rows_agree() {
        let mut board = Board::new();
        board.place(ShipId::new(3), &row_cells(6, 2..4)).unwrap();
        board
            .record_volley(Coordinate::new(6, 3), VolleyOutcome::Hit)
            .unwrap();

        let occupants = board.occupant_map();
        let volleys = board.volley_map();
        assert_eq!(occupants[6][2], Some(ShipId::new(3)));
        assert_eq!(occupants[6][4], None);
        assert_eq!(volleys[6][3], Some(VolleyOutcome::Hit));

        for (r, row) in board.rows().enumerate() {
            for (c, cell) in row.enumerate() {
                assert_eq!(cell.coord(), Coordinate::new(r, c));
                assert_eq!(cell.occupant(), occupants[r][c]);
                assert_eq!(cell.volley(), volleys[r][c]);
            }
        }
    }
}
