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
//! A side's fleet, and placement of its ships onto a [`Board`].

use std::fmt::{self, Debug};

use log::debug;
use thiserror::Error;

use crate::{
    board::{Board, PlacementError},
    ships::{Ship, ShipId, ShipKind, ShipPlacement},
};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship's last cell would fall off the board.
    #[error("the ship extends off the board")]
    ExtendsOffBoard,
    /// One of the ship's cells is outside of the board.
    #[error("the ship lies outside of the board")]
    OutOfBounds,
    /// One of the ship's cells is already occupied by another ship.
    #[error("the ship overlaps another ship")]
    Overlap,
    /// Every ship in the catalog has already been placed.
    #[error("the fleet is already complete")]
    FleetComplete,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place {kind}: {reason}")]
pub struct PlaceShipError {
    reason: CannotPlaceReason,
    kind: ShipKind,
    placement: ShipPlacement,
    #[source]
    source: Option<PlacementError>,
}

impl Debug for PlaceShipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceShipError {
    fn new(reason: CannotPlaceReason, kind: ShipKind, placement: ShipPlacement) -> Self {
        Self {
            reason,
            kind,
            placement,
            source: None,
        }
    }

    fn from_board(err: PlacementError, kind: ShipKind, placement: ShipPlacement) -> Self {
        let reason = match err {
            PlacementError::OutOfBounds(_) => CannotPlaceReason::OutOfBounds,
            PlacementError::Overlap { .. } => CannotPlaceReason::Overlap,
        };
        Self {
            reason,
            kind,
            placement,
            source: Some(err),
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the kind of ship that could not be placed.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Get the placement that was attempted.
    pub fn placement(&self) -> ShipPlacement {
        self.placement
    }
}

/// Ordered list of the ships placed for one side.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Number of ships placed so far.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if no ship has been placed.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Returns true once every kind in the catalog has been placed.
    pub fn is_complete(&self) -> bool {
        self.ships.len() == ShipKind::ALL.len()
    }

    /// The kind that will be placed next, if the fleet is not yet complete.
    pub fn next_kind(&self) -> Option<ShipKind> {
        ShipKind::ALL.get(self.ships.len()).copied()
    }

    /// Get the ship with the given ID.
    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.index())
    }

    /// Get an iterator over the ships and their IDs, in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| (ShipId::new(i), ship))
    }

    /// Returns true if the fleet has ships and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::sunk)
    }

    /// Total number of hits taken across all ships.
    pub fn total_hits(&self) -> usize {
        self.ships.iter().map(Ship::hits).sum()
    }
}

/// Place the next ship in catalog order onto the board and add it to the fleet.
///
/// The board is only modified if every cell is valid, so on error both the board and
/// the fleet are left as they were.
pub fn place_ship(
    board: &mut Board,
    fleet: &mut Fleet,
    placement: ShipPlacement,
) -> Result<ShipId, PlaceShipError> {
    let kind = match fleet.next_kind() {
        Some(kind) => kind,
        None => {
            return Err(PlaceShipError::new(
                CannotPlaceReason::FleetComplete,
                ShipKind::Destroyer,
                placement,
            ))
        }
    };
    let cells = kind
        .shape()
        .project(placement.origin, placement.orientation)
        .ok_or_else(|| PlaceShipError::new(CannotPlaceReason::ExtendsOffBoard, kind, placement))?;
    let id = ShipId::new(fleet.len());
    board
        .place(id, &cells)
        .map_err(|err| PlaceShipError::from_board(err, kind, placement))?;
    fleet.ships.push(Ship::new(kind, placement));
    debug!(
        "placed {} {} at {} ({:?})",
        kind, id, placement.origin, placement.orientation
    );
    Ok(id)
}
