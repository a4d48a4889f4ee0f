use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::coord::Coord;

/// Interface implemented by the three player kinds: manual, random and
/// automatic. All randomness flows through the caller-supplied rng, so a
/// game replays exactly under a fixed seed. Names are supplied by the
/// constructing context.
pub trait Player {
    /// Player's display name.
    fn name(&self) -> &str;

    /// The player's own board.
    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;

    /// Choose the next cell to attack.
    fn select_target(&mut self, rng: &mut SmallRng) -> Coord;

    /// Learn the outcome of the attack this player just made.
    fn receive_result(&mut self, _outcome: ShotOutcome) {}

    /// `true` once every ship on this player's board is sunk.
    fn has_lost(&self) -> bool {
        self.board().all_ships_sunk()
    }
}
