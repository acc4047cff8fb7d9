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
//! Implementation of the game as a whole: two sides, each with a board, a fleet and a
//! log of the volleys fired at it.
//!
//! A side's fleet is placed exactly once, all five ships at a time. Volleys can only be
//! fired at a side once its fleet is placed. Every operation either succeeds completely
//! or leaves the game as it was.
use std::fmt;

use enumflags2::BitFlags;
use log::{debug, info, warn};

use crate::{
    board::{Board, Coordinate},
    fleet::Fleet,
    parse::{self, Grammar},
    ships::{ShipPlacement, FLEET_SIZE},
};

pub use self::{
    errors::{ErrorKind, GameError},
    ocean::Ocean,
    volley::{ShotOutcome, Volley},
};

mod errors;
mod ocean;
mod volley;

/// One of the two sides of the game.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Side {
    /// The local player.
    Player = 0b01,
    /// The opposing player.
    Enemy = 0b10,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        })
    }
}

/// Log a rejected operation and pass the error through.
fn rejected(err: GameError) -> GameError {
    warn!("{}", err);
    err
}

/// Two-sided game of battleship on 10x10 boards.
///
/// Volleys are addressed by the side being fired upon, and each side's volley log is its
/// history of incoming shots. `load_player_volleys` and `fire_as_player` therefore land
/// on the enemy's board and in the enemy's log.
#[derive(Debug, Clone)]
pub struct Game {
    /// Grammar used to read placement and volley text.
    grammar: Grammar,

    player: Ocean,
    enemy: Ocean,

    /// Sides whose fleet has been placed.
    placed: BitFlags<Side>,
}

impl Game {
    /// Create a game with no fleets placed, reading input with the standard grammar.
    pub fn new() -> Self {
        Self::with_grammar(Grammar::standard())
    }

    /// Create a game with no fleets placed, reading input with the given grammar.
    pub fn with_grammar(grammar: Grammar) -> Self {
        Self {
            grammar,
            player: Ocean::new(),
            enemy: Ocean::new(),
            placed: BitFlags::empty(),
        }
    }

    /// The grammar used to read input.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Get the board, fleet and volley log of the given side.
    pub fn ocean(&self, side: Side) -> &Ocean {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn ocean_mut(&mut self, side: Side) -> &mut Ocean {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Get the board of the given side.
    pub fn board(&self, side: Side) -> &Board {
        self.ocean(side).board()
    }

    /// Get the fleet of the given side.
    pub fn fleet(&self, side: Side) -> &Fleet {
        self.ocean(side).fleet()
    }

    /// Get the volleys fired at the given side, oldest first.
    pub fn volleys(&self, side: Side) -> &[Volley] {
        self.ocean(side).volleys()
    }

    /// Returns true once the given side's fleet has been placed.
    pub fn is_placed(&self, side: Side) -> bool {
        self.placed.contains(side)
    }

    /// Returns true if every ship of the given side has been sunk.
    pub fn defeated(&self, side: Side) -> bool {
        self.fleet(side).all_sunk()
    }

    /// Get the side that has sunk the entire opposing fleet while still having ships
    /// afloat, if any.
    pub fn winner(&self) -> Option<Side> {
        match (self.defeated(Side::Player), self.defeated(Side::Enemy)) {
            (false, true) => Some(Side::Player),
            (true, false) => Some(Side::Enemy),
            _ => None,
        }
    }

    /// Place a side's whole fleet, one placement per ship in catalog order.
    pub fn place_fleet(
        &mut self,
        side: Side,
        placements: &[ShipPlacement; FLEET_SIZE],
    ) -> Result<(), GameError> {
        if self.is_placed(side) {
            return Err(rejected(GameError::AlreadyPlaced(side)));
        }
        let ocean = Ocean::deploy(placements)
            .map_err(|source| rejected(GameError::Placement { side, source }))?;
        *self.ocean_mut(side) = ocean;
        self.placed.insert(side);
        debug!("{} fleet placed", side);
        Ok(())
    }

    /// Parse and place a side's fleet, e.g. `A1H;B8V;E3H;G3V;H8H`.
    pub fn load_fleet(&mut self, side: Side, input: &str) -> Result<(), GameError> {
        if self.is_placed(side) {
            return Err(rejected(GameError::AlreadyPlaced(side)));
        }
        let placements =
            parse::parse_fleet(&self.grammar, input).map_err(|err| rejected(err.into()))?;
        self.place_fleet(side, &placements)
    }

    /// Place the player's fleet.
    pub fn load_player_fleet(&mut self, input: &str) -> Result<(), GameError> {
        self.load_fleet(Side::Player, input)
    }

    /// Place the enemy's fleet.
    pub fn load_enemy_fleet(&mut self, input: &str) -> Result<(), GameError> {
        self.load_fleet(Side::Enemy, input)
    }

    fn ensure_ready(&self, target: Side) -> Result<(), GameError> {
        if self.is_placed(target) {
            Ok(())
        } else {
            Err(rejected(GameError::FleetNotReady(target)))
        }
    }

    /// Fire a single volley at the target side.
    pub fn fire_at(&mut self, target: Side, coord: Coordinate) -> Result<ShotOutcome, GameError> {
        self.ensure_ready(target)?;
        let outcome = self
            .ocean_mut(target)
            .resolve(coord)
            .map_err(|source| rejected(GameError::Volley { target, source }))?;
        self.report(target, coord, outcome);
        Ok(outcome)
    }

    /// Parse and fire a single volley token, e.g. `C8`, at the target side.
    pub fn fire(&mut self, target: Side, token: &str) -> Result<ShotOutcome, GameError> {
        self.ensure_ready(target)?;
        let coord =
            parse::parse_volley(&self.grammar, token).map_err(|err| rejected(err.into()))?;
        self.fire_at(target, coord)
    }

    /// Fire a sequence of volleys at the target side, discarding their outcomes.
    ///
    /// The whole sequence is checked first, so if any volley would be rejected none
    /// are fired.
    pub fn fire_volleys(&mut self, target: Side, coords: &[Coordinate]) -> Result<(), GameError> {
        self.ensure_ready(target)?;
        self.ocean(target)
            .check_volleys(coords)
            .map_err(|source| rejected(GameError::Volley { target, source }))?;
        for &coord in coords {
            self.fire_at(target, coord)?;
        }
        Ok(())
    }

    /// Parse and fire a `;` separated list of volleys at the target side, discarding
    /// their outcomes.
    pub fn load_volleys(&mut self, target: Side, input: &str) -> Result<(), GameError> {
        self.ensure_ready(target)?;
        let coords =
            parse::parse_volleys(&self.grammar, input).map_err(|err| rejected(err.into()))?;
        self.fire_volleys(target, &coords)
    }

    /// Replay the player's volleys against the enemy fleet.
    pub fn load_player_volleys(&mut self, input: &str) -> Result<(), GameError> {
        self.load_volleys(Side::Enemy, input)
    }

    /// Replay the enemy's volleys against the player fleet.
    pub fn load_enemy_volleys(&mut self, input: &str) -> Result<(), GameError> {
        self.load_volleys(Side::Player, input)
    }

    /// Fire one volley from the player at the enemy fleet.
    pub fn fire_as_player(&mut self, token: &str) -> Result<ShotOutcome, GameError> {
        self.fire(Side::Enemy, token)
    }

    /// Fire one volley from the enemy at the player fleet.
    pub fn fire_as_enemy(&mut self, token: &str) -> Result<ShotOutcome, GameError> {
        self.fire(Side::Player, token)
    }

    fn report(&self, target: Side, coord: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Sunk(kind) => {
                info!(
                    "{} fired at {}: sunk the {} {}",
                    target.opponent(),
                    coord,
                    target,
                    kind
                );
                if self.defeated(target) {
                    info!("the {} fleet has been defeated", target);
                }
            }
            _ => debug!("{} fired at {}: {}", target.opponent(), coord, outcome),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
