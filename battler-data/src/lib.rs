extern crate alloc;

mod abilities;
mod battle;
mod common;
mod conditions;
mod datastore;
mod items;
mod mons;
mod moves;


pub use abilities::*;
pub use battle::*;
pub use common::*;
pub use conditions::*;
pub use datastore::*;
pub use items::*;
pub use mons::*;
pub use moves::*;
