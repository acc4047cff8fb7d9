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
//! Rules engine for a two-sided game of Battleship on 10x10 boards.
//!
//! Each side places five ships, Aircraft Carrier through Destroyer, from a single line
//! of text such as `A1H;B8V;E3H;G3V;H8H`. Volleys such as `A1;B1;C8` are then resolved
//! against the opposing fleet as hits, misses and sinks.
//!
//! ```
//! use broadside::game::{Game, ShotOutcome};
//! use broadside::ships::ShipKind;
//!
//! let mut game = Game::new();
//! game.load_enemy_fleet("A1H;B8V;E3H;G3V;H8H").unwrap();
//! game.load_player_volleys("A1;A2;A3;A4").unwrap();
//! let outcome = game.fire_as_player("A5").unwrap();
//! assert_eq!(outcome, ShotOutcome::Sunk(ShipKind::Carrier));
//! assert_eq!(outcome.to_string(), "You sunk my Aircraft Carrier");
//! ```

pub mod board;
pub mod fleet;
pub mod game;
pub mod parse;
pub mod ships;

pub use crate::{
    board::{Board, Coordinate},
    fleet::Fleet,
    game::{ErrorKind, Game, GameError, ShotOutcome, Side},
    parse::Grammar,
    ships::{Orientation, ShipKind},
};
