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
use broadside::{
    board::VolleyOutcome,
    game::{ErrorKind, Game, ShotOutcome, Side},
    ships::{Orientation, ShipId, ShipKind},
    Coordinate,
};

const FLEET: &str = "A1H;B8V;E3H;G3V;H8H";

/// Occupant map for `FLEET`, by fleet index, -1 for open water.
const FLEET_MAP: [[i8; 10]; 10] = [
    [0, 0, 0, 0, 0, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, 1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, 1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, 1, -1, -1],
    [-1, -1, 2, 2, 2, -1, -1, 1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, 3, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, 3, -1, -1, -1, -1, 4, 4, -1],
    [-1, -1, 3, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

fn loaded_game() -> Game {
    let mut game = Game::new();
    game.load_player_fleet(FLEET).unwrap();
    game.load_enemy_fleet(FLEET).unwrap();
    game
}

#[test]
fn loads_the_fleet_in_catalog_order() {
    let game = loaded_game();
    let expected = [
        (ShipKind::Carrier, (0, 0), Orientation::Horizontal),
        (ShipKind::Battleship, (1, 7), Orientation::Vertical),
        (ShipKind::Submarine, (4, 2), Orientation::Horizontal),
        (ShipKind::Cruiser, (6, 2), Orientation::Vertical),
        (ShipKind::Destroyer, (7, 7), Orientation::Horizontal),
    ];
    for &side in &[Side::Player, Side::Enemy] {
        let fleet = game.fleet(side);
        assert_eq!(fleet.len(), 5);
        for ((id, ship), &(kind, origin, orientation)) in fleet.iter().zip(expected.iter()) {
            assert_eq!(ship.kind(), kind, "{}", id);
            assert_eq!(ship.origin(), Coordinate::new(origin.0, origin.1));
            assert_eq!(ship.orientation(), orientation);
            assert_eq!(ship.hits(), 0);
        }
    }
}

#[test]
fn occupant_map_matches_the_fleet() {
    let game = loaded_game();
    for &side in &[Side::Player, Side::Enemy] {
        let map = game.board(side).occupant_map();
        for row in 0..10 {
            for col in 0..10 {
                let expected = match FLEET_MAP[row][col] {
                    -1 => None,
                    i => Some(ShipId::new(i as usize)),
                };
                assert_eq!(map[row][col], expected, "{} board at ({}, {})", side, row, col);
            }
        }
    }
}

#[test]
fn rejects_malformed_positions() {
    let cases = [
        ("a1H;B8V;E3H;G3V;H8H", "invalid letter in aircraft carrier"),
        ("A1H;z8V;E3H;G3V;H8H", "invalid letter in battleship"),
        ("A1H;B8V;Y3H;G3V;H8H", "invalid letter in submarine"),
        ("A1H;B8V;E3H;K3V;H8H", "invalid letter in cruiser"),
        ("A1H;B8V;E3H;G3V;Z8H", "invalid letter in destroyer"),
        ("A1Z;B8V;E3H;G3V;H8H", "invalid direction in aircraft carrier"),
        ("A1H;B8Z;E3H;G3V;H8H", "invalid direction in battleship"),
        ("A1H;B8V;E3Z;G3V;H8H", "invalid direction in submarine"),
        ("A1H;B8V;E3H;G3Z;H8H", "invalid direction in cruiser"),
        ("A1H;B8V;E3H;G3V;H8Z", "invalid direction in destroyer"),
        ("A1H;B8V;E3H;G3V", "missing destroyer"),
        ("A1H;B8V;E3H;G3V;H8H;J1H", "extra ship"),
    ];
    for &(position, message) in &cases {
        let mut game = Game::new();
        let err = game.load_player_fleet(position).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "{}", message);
        let err = game.load_enemy_fleet(position).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "{}", message);
        assert!(!game.is_placed(Side::Player) && !game.is_placed(Side::Enemy));
    }
}

#[test]
fn rejects_columns_off_the_board() {
    let cases = [
        ("A0H;B8V;E3H;G3V;H8H", "invalid number in aircraft carrier"),
        ("A1H;B11V;E3H;G3V;H8H", "invalid number in battleship"),
        ("A1H;B8V;E0H;G3V;H8H", "invalid number in submarine"),
        ("A1H;B8V;E3H;G13V;H8H", "invalid number in cruiser"),
        ("A1H;B8V;E3H;G3V;H0H", "invalid number in destroyer"),
    ];
    for &(position, message) in &cases {
        let mut game = Game::new();
        let err = game.load_player_fleet(position).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds, "{}", message);
    }
}

#[test]
fn rejects_ships_extending_off_the_board() {
    let cases = [
        ("G1V;B8V;E3H;G3V;H8H", "carrier off by one"),
        ("H1V;B8V;E3H;G3V;H8H", "carrier off by two"),
        ("I1V;B8V;E3H;G3V;H8H", "carrier off by three"),
        ("J1V;B8V;E3H;G3V;H8H", "carrier off by four"),
        ("A1H;B8V;E3H;G3V;J10H", "destroyer off by one"),
        ("A7H;B8V;E3H;G3V;H8H", "carrier off the right edge"),
    ];
    for &(position, message) in &cases {
        let mut game = Game::new();
        let err = game.load_player_fleet(position).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExtendsOffBoard, "{}", message);
        assert!(game.fleet(Side::Player).is_empty());
    }
}

#[test]
fn ships_may_touch_the_far_edge() {
    let mut game = Game::new();
    game.load_player_fleet("F1V;A7H;J2H;B1V;I9H").unwrap();
    let fleet = game.fleet(Side::Player);
    assert!(fleet.is_complete());
    let (_, carrier) = fleet.iter().next().unwrap();
    assert_eq!(carrier.cells().last(), Some(&Coordinate::new(9, 0)));
}

#[test]
fn rejects_overlapping_ships() {
    let cases = [
        ("A1V;B1H;E3H;G3V;H8H", ShipKind::Battleship),
        ("A1H;A2H;E3H;G3V;H8H", ShipKind::Battleship),
        ("A1H;B8V;E3H;G3V;E2H", ShipKind::Destroyer),
    ];
    for &(position, kind) in &cases {
        let mut game = Game::new();
        let err = game.load_player_fleet(position).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overlap, "{}", position);
        assert!(err.to_string().contains(kind.name()), "{}", err);
        assert!(game.fleet(Side::Player).is_empty());
        assert_eq!(game.board(Side::Player).occupant_map(), [[None; 10]; 10]);
    }
}

#[test]
fn volleys_are_recorded_as_hits_or_misses() {
    let mut game = loaded_game();
    game.load_player_volleys("A1;B1;C8").unwrap();
    game.load_enemy_volleys("A1;B1;C8").unwrap();
    for &side in &[Side::Player, Side::Enemy] {
        let map = game.board(side).volley_map();
        assert_eq!(map[0][0], Some(VolleyOutcome::Hit));
        assert_eq!(map[1][0], Some(VolleyOutcome::Miss));
        assert_eq!(map[2][7], Some(VolleyOutcome::Hit));
        let recorded = map.iter().flatten().filter(|cell| cell.is_some()).count();
        assert_eq!(recorded, 3);

        let fleet = game.fleet(side);
        assert_eq!(fleet.get(ShipId::new(0)).unwrap().hits(), 1);
        assert_eq!(fleet.get(ShipId::new(1)).unwrap().hits(), 1);
        assert_eq!(fleet.total_hits(), 2);
    }
}

#[test]
fn single_shots_report_hit_miss_hit() {
    let mut game = loaded_game();
    let replies: Vec<_> = ["A1", "B1", "C8"]
        .iter()
        .map(|token| game.fire_as_player(token).unwrap().to_string())
        .collect();
    assert_eq!(replies, vec!["Hit", "Miss", "Hit"]);
    let log: Vec<_> = game
        .volleys(Side::Enemy)
        .iter()
        .map(|volley| (volley.coord(), volley.outcome()))
        .collect();
    assert_eq!(
        log,
        vec![
            (Coordinate::new(0, 0), VolleyOutcome::Hit),
            (Coordinate::new(1, 0), VolleyOutcome::Miss),
            (Coordinate::new(2, 7), VolleyOutcome::Hit),
        ]
    );
}

#[test]
fn sinking_the_carrier() {
    let mut game = loaded_game();
    let replies: Vec<_> = ["A1", "A2", "A3", "A4", "A5"]
        .iter()
        .map(|token| game.fire_as_enemy(token).unwrap().to_string())
        .collect();
    assert_eq!(
        replies,
        vec!["Hit", "Hit", "Hit", "Hit", "You sunk my Aircraft Carrier"]
    );
    let carrier = game.fleet(Side::Player).get(ShipId::new(0)).unwrap();
    assert!(carrier.sunk());
    assert_eq!(carrier.hits(), carrier.len());
}

#[test]
fn replayed_volleys_count_towards_sinking() {
    let mut game = Game::new();
    game.load_enemy_fleet(FLEET).unwrap();
    game.load_player_volleys("A1;A4").unwrap();
    assert_eq!(game.fire_as_player("A5").unwrap().to_string(), "Hit");
    game.load_player_volleys("A2").unwrap();
    assert_eq!(
        game.fire_as_player("A3").unwrap(),
        ShotOutcome::Sunk(ShipKind::Carrier)
    );
}

#[test]
fn sunk_names_come_from_the_ship_kind() {
    let mut game = loaded_game();
    game.load_player_volleys("H8;E3;E4;G3;H3").unwrap();
    assert_eq!(
        game.fire_as_player("H9").unwrap().to_string(),
        "You sunk my Destroyer"
    );
    assert_eq!(
        game.fire_as_player("E5").unwrap().to_string(),
        "You sunk my Submarine"
    );
    assert_eq!(
        game.fire_as_player("I3").unwrap().to_string(),
        "You sunk my Cruiser"
    );
}

#[test]
fn cannot_fire_before_the_fleet_is_placed() {
    let mut game = Game::new();
    assert_eq!(
        game.load_player_volleys("A1;B1").unwrap_err().kind(),
        ErrorKind::FleetNotReady
    );
    assert_eq!(
        game.load_enemy_volleys("A1;B1").unwrap_err().kind(),
        ErrorKind::FleetNotReady
    );
    // The gate is checked before the input is read.
    assert_eq!(
        game.fire_as_player("not a coordinate").unwrap_err().kind(),
        ErrorKind::FleetNotReady
    );

    game.load_player_fleet(FLEET).unwrap();
    assert_eq!(
        game.fire_as_player("A1").unwrap_err().kind(),
        ErrorKind::FleetNotReady
    );
    assert!(game.fire_as_enemy("A1").is_ok());
    assert!(game.volleys(Side::Enemy).is_empty());
    assert_eq!(game.volleys(Side::Player).len(), 1);
}

#[test]
fn refiring_is_rejected() {
    let mut game = loaded_game();
    game.fire_as_player("A1").unwrap();
    let err = game.fire_as_player("A1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyFired);
    assert_eq!(game.fleet(Side::Enemy).get(ShipId::new(0)).unwrap().hits(), 1);
    assert_eq!(game.volleys(Side::Enemy).len(), 1);
}

#[test]
fn defeating_a_fleet() {
    let mut game = loaded_game();
    game.load_player_volleys("A1;A2;A3;A4;A5;B8;C8;D8;E8;E3;E4;E5;G3;H3;I3;H8")
        .unwrap();
    assert_eq!(game.winner(), None);
    assert!(!game.defeated(Side::Enemy));
    assert_eq!(
        game.fire_as_player("H9").unwrap(),
        ShotOutcome::Sunk(ShipKind::Destroyer)
    );
    assert!(game.defeated(Side::Enemy));
    assert!(!game.defeated(Side::Player));
    assert_eq!(game.winner(), Some(Side::Player));
}

#[test]
fn snapshots_are_independent() {
    let mut game = loaded_game();
    let snapshot = game.clone();
    game.fire_as_player("A1").unwrap();
    assert!(snapshot.volleys(Side::Enemy).is_empty());
    assert_eq!(game.volleys(Side::Enemy).len(), 1);
}
