//! Turn orchestration: a strictly alternating synchronous duel.

use rand::rngs::SmallRng;

use crate::player::Player;

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub winner: String,
    pub loser: String,
    pub turns: u32,
}

/// Two-player game loop. Each turn the attacker picks a cell, the
/// defender's board takes the attack, and the attacker is told the
/// outcome before the next turn starts. No overlap, no reentrancy.
pub struct Game {
    players: [Box<dyn Player>; 2],
}

impl Game {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            players: [first, second],
        }
    }

    /// Play until one player has lost all ships.
    pub fn play(&mut self, rng: &mut SmallRng) -> GameReport {
        let mut turns = 0u32;
        loop {
            let attacker_idx = (turns % 2) as usize;
            turns += 1;
            let (left, right) = self.players.split_at_mut(1);
            let (attacker, defender) = if attacker_idx == 0 {
                (&mut *left[0], &mut *right[0])
            } else {
                (&mut *right[0], &mut *left[0])
            };

            let cell = attacker.select_target(rng);
            let outcome = defender.board_mut().apply_attack(cell);
            log::debug!("{} fires at {} -> {:?}", attacker.name(), cell, outcome);
            attacker.receive_result(outcome);

            if defender.has_lost() {
                log::info!("{} wins after {} turns", attacker.name(), turns);
                return GameReport {
                    winner: attacker.name().to_string(),
                    loser: defender.name().to_string(),
                    turns,
                };
            }
        }
    }
}
