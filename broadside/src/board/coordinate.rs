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
use std::fmt;

use crate::board::BOARD_SIZE;

/// The coordinates of a cell in the board. Both values are zero-based.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row of the cell, `A` in the textual notation is row 0.
    pub row: usize,
    /// Column of the cell, `1` in the textual notation is column 0.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`. No bounds checks are
    /// performed.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if this coordinate lies inside the 10x10 board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Convert to a linear index into the board's cells. Returns `None` if the
    /// coordinate is out of bounds.
    pub(crate) fn linearize(&self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * BOARD_SIZE + self.col)
        } else {
            None
        }
    }

    /// Get back a coordinate from a linearized index.
    pub(crate) fn un_linearize(idx: usize) -> Self {
        Self {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats in the input notation, e.g. `C8`. Coordinates outside of the lettered rows
    /// fall back to the numeric pair.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.row < 26 {
            write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
