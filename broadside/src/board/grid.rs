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
//! Defines the flat cell storage behind a [`Board`][crate::board::Board].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{Coordinate, VolleyOutcome, BOARD_SIZE},
    ships::ShipId,
};

/// A single cell in a side's grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Cell {
    /// The ID of the ship that occupies this cell, if any. Set at most once.
    pub(crate) occupant: Option<ShipId>,

    /// Outcome of the volley that landed on this cell, if one has.
    pub(crate) volley: Option<VolleyOutcome>,
}

impl Cell {
    /// The ship occupying this cell, if any.
    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    /// The outcome of the volley fired at this cell, if any.
    pub fn volley(&self) -> Option<VolleyOutcome> {
        self.volley
    }

    /// Whether a volley has landed on this cell.
    pub fn fired_upon(&self) -> bool {
        self.volley.is_some()
    }
}

/// Row-major storage for the 10x10 cells of a board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        coord.borrow().linearize().and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        coord
            .borrow()
            .linearize()
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate all cells together with their coordinates, in row-major order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coordinate::un_linearize(i), cell))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
