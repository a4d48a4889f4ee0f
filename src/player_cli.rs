//! Interactive player driven from the terminal.

use std::collections::BTreeMap;
use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::convert::CellConverter;
use crate::coord::Coord;
use crate::player::Player;

/// A player typing coordinates like `C3` at a prompt. Malformed input is
/// reported and re-prompted; it never aborts the turn.
pub struct ManualPlayer {
    name: String,
    board: Board,
    converter: CellConverter,
    /// Outcome of every shot this player has fired, keyed by cell.
    history: BTreeMap<Coord, ShotOutcome>,
    last_target: Option<Coord>,
}

impl ManualPlayer {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        let converter = CellConverter::new(board.width(), board.height());
        Self {
            name: name.into(),
            board,
            converter,
            history: BTreeMap::new(),
            last_target: None,
        }
    }

    fn print_column_header(&self) {
        print!("   ");
        for x in 1..=self.board.width() {
            print!(" {}", (b'A' + (x - 1) as u8) as char);
        }
        println!();
    }

    /// Shots fired so far: `X` hit, `o` miss, `.` untried.
    fn print_tracking_board(&self) {
        println!("Your shots:");
        self.print_column_header();
        for y in 1..=self.board.height() {
            print!("{:2} ", y);
            for x in 1..=self.board.width() {
                let ch = match self.history.get(&Coord::new(x, y)) {
                    Some(outcome) if outcome.is_hit() => 'X',
                    Some(_) => 'o',
                    None => '.',
                };
                print!(" {}", ch);
            }
            println!();
        }
    }

    /// The player's own fleet: `S` intact, `X` damaged, `.` water.
    fn print_own_board(&self) {
        println!("Your board:");
        self.print_column_header();
        for y in 1..=self.board.height() {
            print!("{:2} ", y);
            for x in 1..=self.board.width() {
                let cell = Coord::new(x, y);
                let ship = self.board.ships().iter().find(|s| s.occupies(cell));
                let ch = match ship {
                    Some(s) if s.is_damaged(cell) => 'X',
                    Some(_) => 'S',
                    None => '.',
                };
                print!(" {}", ch);
            }
            println!();
        }
    }
}

impl Player for ManualPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Coord {
        println!("\nIt is now {}'s turn.", self.name);
        self.print_own_board();
        self.print_tracking_board();
        loop {
            print!("target coordinates = ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match self.converter.parse(line.trim()) {
                Ok(cell) => {
                    self.last_target = Some(cell);
                    return cell;
                }
                Err(err) => println!("{}", err),
            }
        }
    }

    fn receive_result(&mut self, outcome: ShotOutcome) {
        if let Some(cell) = self.last_target {
            self.history.insert(cell, outcome);
            println!("{} -> {:?}", self.converter.format(cell), outcome);
        }
    }
}
