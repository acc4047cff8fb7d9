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
//! Parsing of the textual placement and firing notation.
//!
//! Ship tokens look like `B8V`: a row letter, a one-based column number and an
//! orientation letter. Volley tokens drop the orientation, e.g. `C8`. Tokens are joined
//! with `;`. Every function here is pure and takes the [`Grammar`] to match against, so
//! no compiled patterns are shared between callers.

use std::convert::TryInto;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::{
    board::{Coordinate, BOARD_SIZE},
    ships::{Orientation, ShipPlacement, FLEET_SIZE},
};

/// Error caused by input that does not follow the grammar.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A ship token did not match the ship pattern.
    #[error("unable to parse ship position {0:?}")]
    MalformedShip(String),

    /// A volley token did not match the volley pattern.
    #[error("unable to parse volley position {0:?}")]
    MalformedVolley(String),

    /// The token matched but its row or column lies outside of the board.
    #[error("position {0:?} is out of range")]
    OutOfRange(String),

    /// The input had the wrong number of tokens.
    #[error("expected {expected} positions, found {found}")]
    TokenCount {
        /// Number of tokens required.
        expected: usize,
        /// Number of tokens present.
        found: usize,
    },
}

/// Error returned when building a [`Grammar`] from caller-supplied patterns.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// One of the patterns failed to compile.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// One of the patterns lacks a required named group.
    #[error("pattern {pattern:?} is missing the named group {group:?}")]
    MissingGroup {
        /// The offending pattern.
        pattern: String,
        /// The group that was expected.
        group: &'static str,
    },
}

/// The token patterns used to read placements and volleys.
///
/// The ship pattern must have the named groups `row`, `col` and `dir`. The volley
/// pattern must have `row` and `col`. `row` is a single letter counted from `A`, `col`
/// is a one-based decimal number and `dir` is `H` or `V`.
#[derive(Debug, Clone)]
pub struct Grammar {
    ship: Regex,
    volley: Regex,
    separator: char,
}

impl Grammar {
    /// Pattern for ship tokens in the standard grammar.
    pub const STANDARD_SHIP: &'static str = r"^(?P<row>[A-J])(?P<col>[0-9]{1,2})(?P<dir>[HV])$";
    /// Pattern for volley tokens in the standard grammar.
    pub const STANDARD_VOLLEY: &'static str = r"^(?P<row>[A-J])(?P<col>[0-9]{1,2})$";

    /// Build a grammar from the given patterns and token separator.
    pub fn new(ship: &str, volley: &str, separator: char) -> Result<Self, GrammarError> {
        let ship_re = Regex::new(ship)?;
        let volley_re = Regex::new(volley)?;
        check_groups(&ship_re, ship, &["row", "col", "dir"])?;
        check_groups(&volley_re, volley, &["row", "col"])?;
        Ok(Self {
            ship: ship_re,
            volley: volley_re,
            separator,
        })
    }

    /// The grammar used by the game's textual notation, e.g. `A1H;B8V;E3H;G3V;H8H`.
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_SHIP, Self::STANDARD_VOLLEY, ';')
            .expect("standard grammar patterns are valid")
    }

    /// The character separating tokens.
    pub fn separator(&self) -> char {
        self.separator
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_groups(re: &Regex, pattern: &str, groups: &[&'static str]) -> Result<(), GrammarError> {
    for &group in groups {
        if !re.capture_names().any(|name| name == Some(group)) {
            return Err(GrammarError::MissingGroup {
                pattern: pattern.to_owned(),
                group,
            });
        }
    }
    Ok(())
}

/// Read the `row` and `col` groups of a matched token into a zero-based coordinate.
fn coordinate(caps: &Captures, token: &str) -> Result<Coordinate, ParseError> {
    let out_of_range = || ParseError::OutOfRange(token.to_owned());
    let row = caps
        .name("row")
        .and_then(|m| m.as_str().bytes().next())
        .and_then(|letter| letter.checked_sub(b'A'))
        .map(usize::from)
        .ok_or_else(out_of_range)?;
    let col = caps
        .name("col")
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(out_of_range)?;
    let coord = Coordinate::new(row, col);
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(out_of_range());
    }
    Ok(coord)
}

/// Split an input on the grammar's separator.
fn tokens<'a>(grammar: &Grammar, input: &'a str) -> impl Iterator<Item = &'a str> {
    input.split(grammar.separator).map(str::trim)
}

/// Parse a single ship token such as `B8V`.
pub fn parse_ship(grammar: &Grammar, token: &str) -> Result<ShipPlacement, ParseError> {
    let token = token.trim();
    let caps = grammar
        .ship
        .captures(token)
        .ok_or_else(|| ParseError::MalformedShip(token.to_owned()))?;
    let origin = coordinate(&caps, token)?;
    let orientation = match caps.name("dir").map(|m| m.as_str()) {
        Some("H") => Orientation::Horizontal,
        Some("V") => Orientation::Vertical,
        _ => return Err(ParseError::MalformedShip(token.to_owned())),
    };
    Ok(ShipPlacement::new(origin, orientation))
}

/// Parse a single volley token such as `C8`.
pub fn parse_volley(grammar: &Grammar, token: &str) -> Result<Coordinate, ParseError> {
    let token = token.trim();
    let caps = grammar
        .volley
        .captures(token)
        .ok_or_else(|| ParseError::MalformedVolley(token.to_owned()))?;
    coordinate(&caps, token)
}

/// Parse a full fleet: exactly one ship token per catalog entry, in catalog order.
pub fn parse_fleet(
    grammar: &Grammar,
    input: &str,
) -> Result<[ShipPlacement; FLEET_SIZE], ParseError> {
    let placements = tokens(grammar, input)
        .map(|token| parse_ship(grammar, token))
        .collect::<Result<Vec<_>, _>>()?;
    placements
        .try_into()
        .map_err(|placements: Vec<_>| ParseError::TokenCount {
            expected: FLEET_SIZE,
            found: placements.len(),
        })
}

/// Parse one or more volley tokens.
pub fn parse_volleys(grammar: &Grammar, input: &str) -> Result<Vec<Coordinate>, ParseError> {
    tokens(grammar, input)
        .map(|token| parse_volley(grammar, token))
        .collect()
}
