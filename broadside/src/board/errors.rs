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
//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{board::Coordinate, ships::ShipId};

/// Error caused when trying to commit a ship's cells to the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// One of the cells lies outside of the grid.
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coordinate),

    /// One of the cells is already occupied by another ship.
    #[error("cell {coord} is already occupied by ship {occupant}")]
    Overlap {
        /// The contested cell.
        coord: Coordinate,
        /// The ship that already holds the cell.
        occupant: ShipId,
    },
}

impl PlacementError {
    /// Get the coordinate that caused placement to fail.
    pub fn coord(&self) -> Coordinate {
        match *self {
            PlacementError::OutOfBounds(coord) | PlacementError::Overlap { coord, .. } => coord,
        }
    }
}

/// Error returned when a volley cannot be recorded on a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum VolleyError {
    /// The target cell lies outside of the grid.
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coordinate),

    /// A volley has already landed on the target cell.
    #[error("cell {0} was already fired upon")]
    AlreadyFired(Coordinate),
}

impl VolleyError {
    /// Get the coordinate of the rejected volley.
    pub fn coord(&self) -> Coordinate {
        match *self {
            VolleyError::OutOfBounds(coord) | VolleyError::AlreadyFired(coord) => coord,
        }
    }
}
