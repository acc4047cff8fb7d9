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
//! Types used for defining ships: the fixed catalog of kinds and placed ships.
use std::fmt;

use crate::board::Coordinate;

pub use self::linear::{Line, ShapeProjection};

mod linear;

/// Number of ships in a complete fleet.
pub const FLEET_SIZE: usize = 5;

/// Total number of cells covered by a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Index of a ship within its side's [`Fleet`][crate::fleet::Fleet]. Stable for the
/// lifetime of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShipId(usize);

impl ShipId {
    /// Construct a [`ShipId`] for the given fleet index.
    pub fn new(index: usize) -> Self {
        ShipId(index)
    }

    /// Position of the ship in its fleet.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The five kinds of ship, declared in catalog order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ShipKind {
    /// Aircraft Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Submarine: length 3.
    Submarine,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipKind {
    /// Every kind in the order ships are placed.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Submarine,
        ShipKind::Cruiser,
        ShipKind::Destroyer,
    ];

    /// Get the length of this ship kind.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Get the shape of this ship kind.
    pub fn shape(self) -> Line {
        Line::new(self.len())
    }

    /// Name used when reporting on this kind, e.g. in "You sunk my Aircraft Carrier".
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Two letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            ShipKind::Carrier => "cv",
            ShipKind::Battleship => "bb",
            ShipKind::Submarine => "ss",
            ShipKind::Cruiser => "cl",
            ShipKind::Destroyer => "dd",
        }
    }

    /// Position of this kind in the catalog.
    pub fn catalog_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Placement orientation of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends along the row, towards higher columns.
    Horizontal,
    /// The ship extends along the column, towards higher rows.
    Vertical,
}

/// Where a ship should go: its first cell and the direction it extends in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipPlacement {
    /// First cell of the ship.
    pub origin: Coordinate,
    /// Direction the remaining cells extend in.
    pub orientation: Orientation,
}

impl ShipPlacement {
    /// Construct a placement from an origin and orientation.
    pub fn new(origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }
}

/// A ship placed on a side's board, tracking the hits it has taken.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    origin: Coordinate,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    pub(crate) fn new(kind: ShipKind, placement: ShipPlacement) -> Self {
        Self {
            kind,
            origin: placement.origin,
            orientation: placement.orientation,
            hits: 0,
        }
    }

    /// Kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// First cell of this ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells this ship covers.
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// Number of distinct segments that have been hit.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.hits == self.len()
    }

    /// Get the cells covered by this ship.
    pub fn cells(&self) -> ShapeProjection {
        // The placement was validated when the ship was created.
        self.kind
            .shape()
            .project(self.origin, self.orientation)
            .unwrap_or_default()
    }

    /// Record one more hit. Hits saturate at the ship's length.
    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.len() {
            self.hits += 1;
        }
    }
}
