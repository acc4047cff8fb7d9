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
//! One side's share of the game: its board, its fleet and the volleys fired at it.
use std::collections::HashSet;

use crate::{
    board::{Board, Coordinate, VolleyError, VolleyOutcome},
    fleet::{place_ship, Fleet, PlaceShipError},
    game::{ShotOutcome, Volley},
    ships::ShipPlacement,
};

/// Board, fleet and incoming volley log for a single side.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Ocean {
    board: Board,
    fleet: Fleet,
    volleys: Vec<Volley>,
}

impl Ocean {
    /// Create an ocean with no ships and no volleys.
    pub fn new() -> Self {
        Default::default()
    }

    /// Build an ocean holding the given ships, placed in catalog order. Nothing is
    /// returned unless every ship could be placed.
    pub(super) fn deploy(placements: &[ShipPlacement]) -> Result<Self, PlaceShipError> {
        let mut ocean = Self::new();
        for &placement in placements {
            place_ship(&mut ocean.board, &mut ocean.fleet, placement)?;
        }
        Ok(ocean)
    }

    /// The board of this side.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The fleet of this side.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Volleys fired at this side, oldest first.
    pub fn volleys(&self) -> &[Volley] {
        &self.volleys
    }

    /// Check that every coordinate could be fired at, in order, without firing any of
    /// them. Repeats within `coords` count as already fired.
    pub(super) fn check_volleys(&self, coords: &[Coordinate]) -> Result<(), VolleyError> {
        let mut seen = HashSet::with_capacity(coords.len());
        for &coord in coords {
            self.board.check_volley(coord)?;
            if !seen.insert(coord) {
                return Err(VolleyError::AlreadyFired(coord));
            }
        }
        Ok(())
    }

    /// Resolve a single volley against this side.
    pub(super) fn resolve(&mut self, coord: Coordinate) -> Result<ShotOutcome, VolleyError> {
        let occupant = self.board.occupant_at(coord);
        let recorded = match occupant {
            Some(_) => VolleyOutcome::Hit,
            None => VolleyOutcome::Miss,
        };
        // Recording first means a rejected volley leaves the fleet untouched.
        self.board.record_volley(coord, recorded)?;
        let outcome = match occupant {
            None => ShotOutcome::Miss,
            Some(id) => {
                let ship = self
                    .fleet
                    .get_mut(id)
                    .expect("every occupied cell belongs to a ship in the fleet");
                ship.register_hit();
                if ship.sunk() {
                    ShotOutcome::Sunk(ship.kind())
                } else {
                    ShotOutcome::Hit(ship.kind())
                }
            }
        };
        self.volleys.push(Volley::new(coord, recorded));
        Ok(outcome)
    }
}
