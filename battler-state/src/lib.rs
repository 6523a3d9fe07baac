mod error;
mod state;
mod state_util;

pub use error::StateError;
pub use state::*;
pub use state_util::*;
