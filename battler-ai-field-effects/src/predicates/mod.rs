//! Facts about Mons and sides that decide how a field effect is scored.

mod affinity;
mod moves;
mod side;

pub use affinity::*;
pub use moves::*;
pub use side::*;
