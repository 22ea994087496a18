//! Player collaborator contract.
//!
//! The arena never owns the player; the host passes it into the operations
//! that need it. Anything that can be healed, damaged, and asked how hard it
//! hits can stand in, which is also what the tests do.

use crate::magnitude::Magnitude;

pub trait Player {
    /// Restores the player to full health and clears the dead flag.
    fn heal(&mut self);

    /// Applies incoming damage; may set the dead flag.
    fn hit(&mut self, amount: Magnitude);

    fn dead(&self) -> bool;

    /// How many multiples of a one-shot kill the player's damage output
    /// represents against the given hit-point pool.
    fn overkill_for_health(&self, hp: Magnitude) -> f64;
}
