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

use crate::{
    board::{Coordinate, VolleyOutcome},
    ships::ShipKind,
};

/// Entry in a side's log of incoming volleys.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Volley {
    coord: Coordinate,
    outcome: VolleyOutcome,
}

impl Volley {
    pub(super) fn new(coord: Coordinate, outcome: VolleyOutcome) -> Self {
        Self { coord, outcome }
    }

    /// Cell the volley landed on.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Row of the cell the volley landed on.
    pub fn row(&self) -> usize {
        self.coord.row
    }

    /// Column of the cell the volley landed on.
    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// Whether the volley hit or missed.
    pub fn outcome(&self) -> VolleyOutcome {
        self.outcome
    }
}

/// Outcome of a successfully-fired shot.
///
/// Displays as the reply the targeted side gives: `Hit`, `Miss` or
/// `You sunk my <ship>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// Nothing was hit.
    Miss,
    /// The given ship was hit but it was not sunk.
    Hit(ShipKind),
    /// The given ship was hit and that hit sank it.
    Sunk(ShipKind),
}

impl ShotOutcome {
    /// Get the kind of ship that was hit.
    pub fn ship(&self) -> Option<ShipKind> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(kind) | ShotOutcome::Sunk(kind) => Some(kind),
        }
    }

    /// The outcome as recorded on the board and in the volley log.
    pub fn volley_outcome(&self) -> VolleyOutcome {
        match self {
            ShotOutcome::Miss => VolleyOutcome::Miss,
            ShotOutcome::Hit(_) | ShotOutcome::Sunk(_) => VolleyOutcome::Hit,
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotOutcome::Miss => f.pad("Miss"),
            ShotOutcome::Hit(_) => f.pad("Hit"),
            ShotOutcome::Sunk(kind) => write!(f, "You sunk my {}", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies() {
        assert_eq!(ShotOutcome::Miss.to_string(), "Miss");
        assert_eq!(ShotOutcome::Hit(ShipKind::Cruiser).to_string(), "Hit");
        assert_eq!(
            ShotOutcome::Sunk(ShipKind::Carrier).to_string(),
            "You sunk my Aircraft Carrier"
        );
        assert_eq!(
            ShotOutcome::Sunk(ShipKind::Destroyer).to_string(),
            "You sunk my Destroyer"
        );
    }

    #[test]
    fn recorded_outcome() {
        assert_eq!(ShotOutcome::Miss.volley_outcome(), VolleyOutcome::Miss);
        assert_eq!(
            ShotOutcome::Sunk(ShipKind::Submarine).volley_outcome(),
            VolleyOutcome::Hit
        );
        assert_eq!(ShotOutcome::Hit(ShipKind::Submarine).ship(), Some(ShipKind::Submarine));
        assert_eq!(ShotOutcome::Miss.ship(), None);
    }
}
