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
use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use thiserror::Error;

use broadside::{
    board::{CellRef, VolleyOutcome, BOARD_SIZE},
    game::{Game, GameError, Side},
    ships::ShipKind,
};

mod logging;

/// Error that ends the program.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    logging::init_logging();
    let matches = app().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

/// Build the argument parser.
fn app() -> App<'static, 'static> {
    App::new("broadside")
        .version("0.1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Replay and play out a game of battleship from its textual notation.")
        .arg(
            Arg::with_name("player_fleet")
                .short("p")
                .long("player-fleet")
                .value_name("FLEET")
                .help("placement of the player's fleet, e.g. A1H;B8V;E3H;G3V;H8H")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("enemy_fleet")
                .short("e")
                .long("enemy-fleet")
                .value_name("FLEET")
                .help("placement of the enemy's fleet")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("player_volleys")
                .long("player-volleys")
                .value_name("VOLLEYS")
                .help("volleys already fired by the player, e.g. A1;B1;C8")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("enemy_volleys")
                .long("enemy-volleys")
                .value_name("VOLLEYS")
                .help("volleys already fired by the enemy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fire")
                .short("f")
                .long("fire")
                .value_name("COORD")
                .help("fire a single shot as the player and print the reply; may be repeated")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("interactive")
                .short("i")
                .long("interactive")
                .help("read shots from stdin until the enemy fleet is sunk"),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the positions of the enemy's ships"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let mut game = Game::new();
    // Both arguments are required, so clap has already rejected their absence.
    game.load_player_fleet(matches.value_of("player_fleet").unwrap_or_default())?;
    game.load_enemy_fleet(matches.value_of("enemy_fleet").unwrap_or_default())?;
    if let Some(volleys) = matches.value_of("player_volleys") {
        game.load_player_volleys(volleys)?;
    }
    if let Some(volleys) = matches.value_of("enemy_volleys") {
        game.load_enemy_volleys(volleys)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(shots) = matches.values_of("fire") {
        for shot in shots {
            let outcome = game.fire_as_player(shot)?;
            writeln!(out, "{}: {}", shot.trim(), outcome)?;
        }
    }
    if matches.is_present("interactive") {
        let stdin = io::stdin();
        let mut input = InputReader::new(stdin.lock());
        play(&mut game, &mut input, &mut out)?;
    }

    show_game(&mut out, &game, matches.is_present("reveal"))?;
    Ok(())
}

/// Fire shots read from the input until it runs out, the player quits, or the enemy
/// fleet is sunk. Rejected shots are reported and do not end the loop.
fn play(
    game: &mut Game,
    input: &mut InputReader<impl BufRead>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "Fire at a cell such as C8. Type quit to stop.")?;
    while !game.defeated(Side::Enemy) {
        let line = match input.read_line(out, "fire>")? {
            Some(line) => line,
            None => break,
        };
        match line {
            "" => continue,
            "quit" | "q" | "exit" => break,
            shot => match game.fire_as_player(shot) {
                Ok(outcome) => writeln!(out, "{}", outcome)?,
                Err(err) => writeln!(out, "Invalid shot: {}", err)?,
            },
        }
    }
    if game.defeated(Side::Enemy) {
        info!("enemy fleet sunk after {} shots", game.volleys(Side::Enemy).len());
        writeln!(out, "You sunk the whole enemy fleet!")?;
    } else {
        debug!("interactive play ended");
    }
    Ok(())
}

/// Print both boards followed by the state of both fleets.
fn show_game(out: &mut impl Write, game: &Game, reveal: bool) -> io::Result<()> {
    writeln!(out, "Your board:")?;
    show_revealed_board(out, game, Side::Player)?;
    writeln!(out)?;
    writeln!(out, "Enemy board:")?;
    if reveal {
        show_revealed_board(out, game, Side::Enemy)?;
    } else {
        show_obfuscated_board(out, game, Side::Enemy)?;
    }
    writeln!(out)?;
    show_fleet_status(out, game, Side::Player)?;
    show_fleet_status(out, game, Side::Enemy)?;
    if let Some(winner) = game.winner() {
        writeln!(out, "The {} wins.", winner)?;
    }
    Ok(())
}

/// Kind and sunk state of the ship on a cell, if any.
fn ship_on(game: &Game, side: Side, cell: &CellRef) -> Option<(ShipKind, bool)> {
    cell.occupant()
        .and_then(|id| game.fleet(side).get(id))
        .map(|ship| (ship.kind(), ship.sunk()))
}

/// Display helper for a ship cell that was hit: `x` followed by the abbreviation, or
/// `X` once the ship is sunk.
struct Struck {
    kind: ShipKind,
    sunk: bool,
}

impl fmt::Display for Struck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mark = if self.sunk { 'X' } else { 'x' };
        f.pad(&format!("{}{}", mark, self.kind.abbrev()))
    }
}

/// Print out the fully-revealed board for the given side.
fn show_revealed_board(out: &mut impl Write, game: &Game, side: Side) -> io::Result<()> {
    enum RevealedCell {
        Empty,
        Shot,
        NotShot(ShipKind),
        Struck(Struck),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::NotShot(kind) => f.pad(kind.abbrev()),
                RevealedCell::Struck(struck) => fmt::Display::fmt(struck, f),
            }
        }
    }
    show_board(
        out,
        game.board(side).rows().map(|row| {
            row.map(|cell| match (ship_on(game, side, &cell), cell.volley()) {
                (None, Some(_)) => RevealedCell::Shot,
                (None, None) => RevealedCell::Empty,
                (Some((kind, _)), None) => RevealedCell::NotShot(kind),
                (Some((kind, sunk)), Some(_)) => RevealedCell::Struck(Struck { kind, sunk }),
            })
        }),
    )
}

/// Print out the board for the given side, showing only where volleys landed.
fn show_obfuscated_board(out: &mut impl Write, game: &Game, side: Side) -> io::Result<()> {
    enum HiddenCell {
        NotShot,
        Miss,
        Struck(Struck),
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HiddenCell::NotShot => f.pad("~~"),
                HiddenCell::Miss => f.pad("x"),
                HiddenCell::Struck(struck) => fmt::Display::fmt(struck, f),
            }
        }
    }
    show_board(
        out,
        game.board(side).rows().map(|row| {
            row.map(|cell| match cell.volley() {
                None => HiddenCell::NotShot,
                Some(VolleyOutcome::Miss) => HiddenCell::Miss,
                Some(VolleyOutcome::Hit) => match ship_on(game, side, &cell) {
                    Some((kind, sunk)) => HiddenCell::Struck(Struck { kind, sunk }),
                    None => HiddenCell::Miss,
                },
            })
        }),
    )
}

/// Show the board by printing the grid, rows labelled `A` to `J` and columns `1` to
/// `10`. Takes an iterator over the rows of iterators over the cells.
fn show_board(
    out: &mut impl Write,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) -> io::Result<()> {
    write!(out, "  ")?;
    for col in 1..=BOARD_SIZE {
        write!(out, "{:^4}", col)?;
    }
    writeln!(out)?;
    for (letter, row) in (b'A'..).map(char::from).zip(rows) {
        write!(out, "{} ", letter)?;
        for cell in row {
            write!(out, "{:^4}", cell)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print one line per ship of the given side.
fn show_fleet_status(out: &mut impl Write, game: &Game, side: Side) -> io::Result<()> {
    writeln!(out, "{} fleet:", side)?;
    for (_, ship) in game.fleet(side).iter() {
        let state = if ship.sunk() { "sunk" } else { "afloat" };
        writeln!(
            out,
            "  {:<16} {}/{} hits, {}",
            ship.kind(),
            ship.hits(),
            ship.len(),
            state
        )?;
    }
    Ok(())
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Print the prompt and read one trimmed line. Returns `None` at end of input.
    fn read_line(&mut self, out: &mut impl Write, prompt: &str) -> io::Result<Option<&str>> {
        write!(out, "{} ", prompt)?;
        out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }
}
