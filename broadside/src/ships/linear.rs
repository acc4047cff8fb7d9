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
use crate::{
    board::{Coordinate, BOARD_SIZE},
    ships::Orientation,
};

/// Cells covered by a ship, starting from its origin. This is a simple typedef of a
/// `Vec`.
pub type ShapeProjection = Vec<Coordinate>;

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project the line onto the board from `start` in the given orientation. Returns
    /// `None` if the last cell would fall off the board.
    ///
    /// Only the far end along the placement direction is checked. A `start` whose other
    /// axis is out of bounds is passed through so the board can report it.
    pub fn project(&self, start: Coordinate, orientation: Orientation) -> Option<ShapeProjection> {
        let last = self.0 - 1;
        let end = match orientation {
            Orientation::Horizontal => start.col.checked_add(last)?,
            Orientation::Vertical => start.row.checked_add(last)?,
        };
        if end >= BOARD_SIZE {
            return None;
        }
        Some(
            (0..self.0)
                .map(|i| match orientation {
                    Orientation::Horizontal => Coordinate::new(start.row, start.col + i),
                    Orientation::Vertical => Coordinate::new(start.row + i, start.col),
                })
                .collect(),
        )
    }
}
