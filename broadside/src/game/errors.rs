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
use thiserror::Error;

use crate::{
    board::VolleyError,
    fleet::{CannotPlaceReason, PlaceShipError},
    game::Side,
    parse::ParseError,
};

/// Coarse classification of a [`GameError`], for callers that only need to know what
/// kind of rule was broken.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The input text did not follow the grammar.
    Parse,
    /// A coordinate was outside of the board.
    OutOfBounds,
    /// A ship would extend past the edge of the board.
    ExtendsOffBoard,
    /// A ship would share a cell with another ship.
    Overlap,
    /// The targeted side has not placed its fleet.
    FleetNotReady,
    /// The targeted cell was already fired upon.
    AlreadyFired,
    /// The side's fleet was already placed.
    AlreadyPlaced,
}

/// Error returned by the operations on [`Game`][crate::game::Game]. A failed operation
/// never changes the game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// One of the ships in a fleet could not be placed.
    #[error("placing {side} fleet: {source}")]
    Placement {
        /// The side whose fleet was rejected.
        side: Side,
        /// Why placement failed.
        source: PlaceShipError,
    },

    /// A volley could not be fired.
    #[error("firing at {target} fleet: {source}")]
    Volley {
        /// The side that was fired upon.
        target: Side,
        /// Why the volley was rejected.
        source: VolleyError,
    },

    /// Volleys were fired at a side before its fleet was placed.
    #[error("cannot fire at the {0} fleet before it is placed")]
    FleetNotReady(Side),

    /// A side tried to place its fleet a second time.
    #[error("the {0} fleet was already placed")]
    AlreadyPlaced(Side),
}

impl GameError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::Parse(ParseError::OutOfRange(_)) => ErrorKind::OutOfBounds,
            GameError::Parse(_) => ErrorKind::Parse,
            GameError::Placement { source, .. } => match source.reason() {
                CannotPlaceReason::ExtendsOffBoard => ErrorKind::ExtendsOffBoard,
                CannotPlaceReason::OutOfBounds => ErrorKind::OutOfBounds,
                CannotPlaceReason::Overlap => ErrorKind::Overlap,
                CannotPlaceReason::FleetComplete => ErrorKind::AlreadyPlaced,
            },
            GameError::Volley { source, .. } => match source {
                VolleyError::OutOfBounds(_) => ErrorKind::OutOfBounds,
                VolleyError::AlreadyFired(_) => ErrorKind::AlreadyFired,
            },
            GameError::FleetNotReady(_) => ErrorKind::FleetNotReady,
            GameError::AlreadyPlaced(_) => ErrorKind::AlreadyPlaced,
        }
    }
}
