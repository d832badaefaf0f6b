use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use seabattle::{
    board::{Coordinate, Dimensions, PlaceError},
    game::{Match, Player},
    ships::{ShipClass, Vessel},
};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two player command line battleship game.")
        .arg(
            Arg::with_name("player1")
                .long("player1")
                .value_name("NAME")
                .help("name of the first player")
                .takes_value(true)
                .default_value("Player1"),
        )
        .arg(
            Arg::with_name("player2")
                .long("player2")
                .value_name("NAME")
                .help("name of the second player")
                .takes_value(true)
                .default_value("Player2"),
        )
        .arg(
            Arg::with_name("first")
                .short("f")
                .long("first")
                .value_name("FIRST")
                .help("pre-specify which player shoots first")
                .takes_value(true)
                .possible_values(&["1", "2", "random"])
                .case_insensitive(true),
        )
        .get_matches();

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let mut p1 = Player::new(matches.value_of("player1").unwrap_or("Player1"));
    let mut p2 = Player::new(matches.value_of("player2").unwrap_or("Player2"));
    choose_placements(&mut rng, &mut p1, &mut input)?;
    choose_placements(&mut rng, &mut p2, &mut input)?;

    let (first, second) = if p2_goes_first(&matches, &mut rng) {
        (p2, p1)
    } else {
        (p1, p2)
    };
    match Match::new(first, second) {
        Ok(game) => play(game, &mut input),
        Err(err) => {
            println!("{}", err);
            Ok(())
        }
    }
}

/// Decide from the args whether the second player shoots first.
fn p2_goes_first(matches: &ArgMatches, rng: &mut impl Rng) -> bool {
    match matches.value_of("first").map(str::to_ascii_lowercase).as_deref() {
        Some("2") => true,
        Some("random") => rng.gen(),
        _ => false,
    }
}

/// Commands accepted while a player sets up their fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Done,
    Place(ShipClass, Coordinate, Coordinate),
    Unplace(ShipClass),
    Clear,
    RandomizeRest,
    Help,
}

/// Parse a lowercased setup command. On failure returns the message to show the player.
fn parse_command(dim: &Dimensions, input: &str) -> Result<Command, String> {
    /// Matchers for commands with args.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
        (?P<ship>[a-z]+(?:[\s-]boat)?)\s+
        (?:(?:at|from)\s+)?
        (?P<start>[a-z]\s*-?\s*[0-9]+)\s+
        (?:(?:to|->)\s+)?
        (?P<end>[a-z]\s*-?\s*[0-9]+)$",
        )
        .unwrap()
    });
    static UNPLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:un-?place|remove)\s+
        (?P<ship>[a-z]+(?:[\s-]boat)?)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "randomize" | "rand" | "random" => Ok(Command::RandomizeRest),
        "done" | "start" => Ok(Command::Done),
        "clear" => Ok(Command::Clear),
        other => {
            if let Some(captures) = PLACE.captures(other) {
                let ship = captures["ship"].parse().map_err(|err| format!("{}", err))?;
                let start = dim
                    .parse_label(&captures["start"])
                    .map_err(|err| format!("{}", err))?;
                let end = dim
                    .parse_label(&captures["end"])
                    .map_err(|err| format!("{}", err))?;
                Ok(Command::Place(ship, start, end))
            } else if let Some(captures) = UNPLACE.captures(other) {
                match &captures["ship"] {
                    "all" => Ok(Command::Clear),
                    ship => ship
                        .parse()
                        .map(Command::Unplace)
                        .map_err(|err| format!("{}", err)),
                }
            } else {
                Err(format!(
                    "Invalid ship-placement command \"{}\". Use '?' for help",
                    other
                ))
            }
        }
    }
}

/// Choose placements for all ships using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    player: &mut Player,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    println!();
    println!(
        "{}, place your ships. Type help or ? for commands.",
        player.name()
    );
    let dim = *player.fleet().dimensions();
    loop {
        println!();
        if player.ships_are_placed() {
            println!("All ships placed, type done to finish");
        } else {
            let pending: Vec<_> = player.pending_ships().iter().map(ShipClass::name).collect();
            println!("Remaining ships to place: {}", pending.join(", "));
        }
        println!("Your current board setup:");
        println!("{}", player.fleet());
        println!();

        let cmd = input.read_input_lower("> ", |input| match parse_command(&dim, input) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;

        match cmd {
            Command::Done if player.ships_are_placed() => break,
            Command::Done => println!("You must place all your ships first!"),
            Command::Place(ship, start, end) => {
                if let Err(err) = move_ship(player, ship, start, end) {
                    println!("Invalid placement: {}", err.reason());
                }
            }
            Command::Unplace(ship) => {
                player.unplace(ship);
            }
            Command::Clear => {
                player.fleet_mut().clear();
            }
            Command::RandomizeRest => {
                if let Err(err) = player.place_remaining_randomly(rng) {
                    println!("Could not place the {}: {}", err.ship().class(), err.reason());
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    done                        if all ships are placed, finish setup.
    place <ship> <start> <end>  place the ship on the cells from start to end, e.g. place cv A-1 A-5.
        Cells are a row letter and a column number. See below for ships.
    unplace <ship>              clear the placement of the specified ship.
        See below for possible ship. Additionally \"all\" may be specified to clear all placements.
    clear                       clears all ship placements.
    randomize                   randomize the placements of the remaining ships.

Available Ships:"
                );
                for class in ShipClass::ALL {
                    println!("    {:<12} ({}) length {}", class.name(), class.abbrev(), class.len());
                }
            }
        }
    }
    Ok(())
}

/// Place the ship between `start` and `end`, moving it if it was already placed. If the new
/// placement fails, a previously placed ship stays where it was.
fn move_ship(
    player: &mut Player,
    ship: ShipClass,
    start: Coordinate,
    end: Coordinate,
) -> Result<(), PlaceError<Vessel>> {
    let old = player
        .fleet()
        .vessel(ship)
        .and_then(|vessel| Some((vessel.start()?, vessel.end()?)));
    let vessel = player.unplace(ship).unwrap_or_else(|| Vessel::new(ship));
    player
        .fleet_mut()
        .place(start, end, vessel)
        .or_else(|err| match old {
            Some((old_start, old_end)) => {
                // The failed placement left the grid untouched, so the old cells are free.
                player
                    .fleet_mut()
                    .place(old_start, old_end, Vessel::new(ship))
                    .unwrap();
                Err(err)
            }
            None => Err(err),
        })
}

/// Run the turns of the match until someone wins.
fn play(mut game: Match, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    while !game.is_over() {
        let player = game.current_player();
        println!();
        println!("=== {}'s turn ===", player.name());
        println!("Your fleet:");
        println!("{}", player.fleet());
        println!();
        println!("Your shots:");
        println!("{}", player.tracking());
        println!();

        let dim = *player.tracking().dimensions();
        loop {
            let target = input.read_input("Target (e.g. B-4)>", |input| {
                match dim.parse_label(input) {
                    Ok(coord) => Some(coord),
                    Err(err) => {
                        println!("{}", err);
                        None
                    }
                }
            })?;
            match game.take_shot(target) {
                Ok(Some(ship)) if ship.is_destroyed() => {
                    println!("HIT! You sank the {}!", ship.class());
                    break;
                }
                Ok(Some(_)) => {
                    println!("HIT!");
                    break;
                }
                Ok(None) => {
                    println!("MISS!");
                    break;
                }
                Err(err) => println!("{}", err),
            }
        }
    }
    if let Some(winner) = game.winner_id() {
        let loser = game.player(winner.opponent());
        println!();
        println!("{} wins!", game.player(winner).name());
        println!("Showing {}'s ships:", loser.name());
        println!("{}", loser.fleet());
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
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seabattle::board::CannotPlaceReason;

    fn parse(input: &str) -> Result<Command, String> {
        parse_command(&Dimensions::default(), input)
    }

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("done"), Ok(Command::Done));
        assert_eq!(parse("?"), Ok(Command::Help));
        assert_eq!(parse("clear"), Ok(Command::Clear));
        assert_eq!(parse("random"), Ok(Command::RandomizeRest));
        assert_eq!(parse("unplace all"), Ok(Command::Clear));
    }

    #[test]
    fn place_commands() {
        assert_eq!(
            parse("place carrier a-1 a-5"),
            Ok(Command::Place(ShipClass::Carrier, c(0, 0), c(0, 4)))
        );
        assert_eq!(
            parse("put pb at j9 to j10"),
            Ok(Command::Place(ShipClass::PatrolBoat, c(9, 8), c(9, 9)))
        );
        assert_eq!(
            parse("place patrol boat c-3 d-3"),
            Ok(Command::Place(ShipClass::PatrolBoat, c(2, 2), c(3, 2)))
        );
    }

    #[test]
    fn unplace_commands() {
        assert_eq!(parse("unplace ss"), Ok(Command::Unplace(ShipClass::Submarine)));
        assert_eq!(parse("remove destroyer"), Ok(Command::Unplace(ShipClass::Destroyer)));
    }

    #[test]
    fn failed_move_keeps_ship_in_place() {
        let mut player = Player::new("Ann");
        move_ship(&mut player, ShipClass::Carrier, c(0, 0), c(0, 4)).unwrap();

        let err = move_ship(&mut player, ShipClass::Carrier, c(1, 0), c(1, 2)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::LengthMismatch);
        let carrier = player.fleet().vessel(ShipClass::Carrier).unwrap();
        assert_eq!(carrier.start(), Some(c(0, 0)));
        assert_eq!(carrier.end(), Some(c(0, 4)));
        assert!(player.fleet().vessel_at(c(1, 0)).is_none());

        move_ship(&mut player, ShipClass::Carrier, c(1, 0), c(1, 4)).unwrap();
        assert!(player.fleet().vessel_at(c(0, 0)).is_none());
        assert_eq!(
            player.fleet().vessel(ShipClass::Carrier).unwrap().start(),
            Some(c(1, 0))
        );
    }

    #[test]
    fn failed_first_placement_leaves_ship_pending() {
        let mut player = Player::new("Ann");
        let err = move_ship(&mut player, ShipClass::PatrolBoat, c(0, 0), c(1, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Misaligned);
        assert!(player.fleet().vessel(ShipClass::PatrolBoat).is_none());
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse("place cruiser a-1 a-3").is_err());
        assert!(parse("place cv k-1 k-5").is_err());
        assert!(parse("place cv a-1").is_err());
        assert!(parse("fire").is_err());
    }
}
