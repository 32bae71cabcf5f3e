use rand::rngs::SmallRng;

use crate::common::Position;

/// Interface implemented by the two combatant kinds.
///
/// A player only proposes targets; legality (bounds, repeat shots) is judged
/// by the opposing grid, and an illegal proposal simply gets the player asked
/// again. The scripted player may therefore legitimately re-propose a cell
/// that was already resolved.
pub trait Player {
    /// Name used in turn and victory narration.
    fn name(&self) -> &'static str;

    /// Choose the next target coordinate.
    fn choose_target(&mut self, rng: &mut SmallRng) -> Position;
}
