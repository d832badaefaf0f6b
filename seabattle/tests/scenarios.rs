use seabattle::{
    board::{CannotPlaceReason, Coordinate, Dimensions, FleetGrid, Peg},
    game::{Match, Player, PlayerId, TakeShotError},
    ships::{ShipClass, Vessel},
};

fn at(label: &str) -> Coordinate {
    Dimensions::default().parse_label(label).unwrap()
}

/// Fleet laid out one ship per row, starting at the given row.
fn ready_player(name: &str, first_row: char) -> Player {
    let mut player = Player::new(name);
    for (offset, &class) in ShipClass::ALL.iter().enumerate() {
        let row = (first_row as u8 + offset as u8) as char;
        player
            .place(
                class,
                at(&format!("{}-1", row)),
                at(&format!("{}-{}", row, class.len())),
            )
            .unwrap();
    }
    player
}

#[test]
fn carrier_across_first_row() {
    let mut grid = FleetGrid::default();
    grid.place(at("A-1"), at("A-5"), Vessel::new(ShipClass::Carrier))
        .unwrap();

    let carrier = grid.vessel(ShipClass::Carrier).unwrap();
    assert!(carrier.is_placed());
    assert_eq!(carrier.start(), Some(at("A-1")));
    assert_eq!(carrier.end(), Some(at("A-5")));
    for col in 1..=5 {
        let coord = at(&format!("A-{}", col));
        assert_eq!(grid.at(coord).unwrap().unwrap().class(), ShipClass::Carrier);
    }
    assert!(grid.at(at("A-6")).unwrap().is_none());
    assert!(grid.at(at("B-1")).unwrap().is_none());
}

#[test]
fn carrier_sinks_on_last_segment() {
    // Player A's fleet sits on rows F-J, player B's carrier on A-1..A-5.
    let mut game = Match::new(ready_player("A", 'F'), ready_player("B", 'A')).unwrap();
    let misses = ["A-10", "B-10", "C-10", "D-10"];

    for (col, miss) in (1..=4).zip(&misses) {
        let hit = game.take_shot(at(&format!("A-{}", col))).unwrap().unwrap();
        assert_eq!(hit.class(), ShipClass::Carrier);
        assert!(!hit.is_destroyed());
        assert_eq!(hit.hits(), col);
        assert!(game.take_shot(at(miss)).unwrap().is_none());
    }

    let carrier = game.take_shot(at("A-5")).unwrap().unwrap();
    assert_eq!(carrier.class(), ShipClass::Carrier);
    assert!(carrier.is_destroyed());
    assert!(!game.is_over());

    let tracking = game.player(PlayerId::P1).tracking();
    for col in 1..=5 {
        assert_eq!(
            tracking.revealed(at(&format!("A-{}", col))),
            Some(ShipClass::Carrier)
        );
    }
}

#[test]
fn destroyer_too_long_for_run() {
    let mut grid = FleetGrid::default();
    let err = grid
        .place(at("B-1"), at("B-4"), Vessel::new(ShipClass::Destroyer))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::LengthMismatch);

    let destroyer = err.into_ship();
    assert!(!destroyer.is_placed());
    for col in 1..=4 {
        assert!(grid.at(at(&format!("B-{}", col))).unwrap().is_none());
    }
    assert!(grid.fleet().iter().next().is_none());

    // The rejected ship can be placed somewhere valid.
    grid.place(at("B-1"), at("B-3"), destroyer).unwrap();
}

#[test]
fn overlapping_ships_are_rejected() {
    let mut grid = FleetGrid::default();
    grid.place(at("C-2"), at("C-5"), Vessel::new(ShipClass::Battleship))
        .unwrap();
    let err = grid
        .place(at("A-3"), at("C-3"), Vessel::new(ShipClass::Submarine))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::CellOccupied);

    assert!(grid.at(at("A-3")).unwrap().is_none());
    assert!(grid.at(at("B-3")).unwrap().is_none());
    assert_eq!(
        grid.at(at("C-3")).unwrap().unwrap().class(),
        ShipClass::Battleship
    );
    assert!(grid.vessel(ShipClass::Submarine).is_none());
}

#[test]
fn full_match_first_player_wins() {
    let mut game = Match::new(ready_player("A", 'A'), ready_player("B", 'A')).unwrap();

    let targets: Vec<Coordinate> = ShipClass::ALL
        .iter()
        .enumerate()
        .flat_map(|(row, class)| (0..class.len()).map(move |col| Coordinate::new(row, col)))
        .collect();
    let mut misses = Dimensions::default()
        .iter_coordinates()
        .skip(6)
        .flatten();

    let (last, rest) = targets.split_last().unwrap();
    for &target in rest {
        assert_eq!(game.current(), PlayerId::P1);
        game.take_shot(target).unwrap().unwrap();
        assert_eq!(game.current(), PlayerId::P2);
        assert!(game.take_shot(misses.next().unwrap()).unwrap().is_none());
    }
    assert!(!game.is_over());

    let sunk = game.take_shot(*last).unwrap().unwrap();
    assert_eq!(sunk.class(), ShipClass::PatrolBoat);
    assert!(sunk.is_destroyed());
    assert!(game.is_over());
    assert_eq!(game.winner_id(), Some(PlayerId::P1));
    assert_eq!(game.winner().unwrap().name(), "A");

    match game.take_shot(at("J-10")) {
        Err(TakeShotError::GameOver) => {}
        other => panic!("expected game over, got {:?}", other),
    }

    let a = game.player(PlayerId::P1);
    let b = game.player(PlayerId::P2);
    assert!(b.ships_are_destroyed());
    assert!(!a.ships_are_destroyed());
    for &coord in &targets {
        assert_eq!(a.tracking().peg(coord), Some(Peg::Hit));
        assert!(a.tracking().revealed(coord).is_some());
    }
}

#[test]
fn turns_alternate_on_every_shot() {
    let mut game = Match::new(ready_player("A", 'A'), ready_player("B", 'F')).unwrap();
    let expected = [PlayerId::P2, PlayerId::P1, PlayerId::P2, PlayerId::P1];
    let shots = ["A-1", "A-1", "J-10", "J-10"];
    for (&label, &next) in shots.iter().zip(&expected) {
        game.take_shot(at(label)).unwrap();
        assert_eq!(game.current(), next);
    }

    // A repeated shot fails and the same player stays up.
    assert!(game.take_shot(at("A-1")).is_err());
    assert_eq!(game.current(), PlayerId::P1);
}

#[test]
fn renders_fleet_and_tracking_boards() {
    let mut game = Match::new(ready_player("A", 'A'), ready_player("B", 'A')).unwrap();
    game.take_shot(at("E-1")).unwrap();
    game.take_shot(at("A-10")).unwrap();
    game.take_shot(at("E-2")).unwrap();

    let a = game.player(PlayerId::P1);
    let fleet = a.fleet().to_string();
    let tracking = a.tracking().to_string();

    let fleet_lines: Vec<_> = fleet.lines().collect();
    assert_eq!(fleet_lines[0], "  1 2 3 4 5 6 7 8 9 10");
    assert_eq!(fleet_lines[1], "A S S S S S ........0 ");
    assert_eq!(fleet_lines[10], "J ....................");

    let tracking_lines: Vec<_> = tracking.lines().collect();
    assert_eq!(tracking_lines[5], "E H H ................");
    assert_eq!(tracking_lines[1], "A ....................");
}
