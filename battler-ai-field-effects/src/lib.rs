//! Scoring of weather and field conditions for battler AI.
//!
//! The AI asks whether setting up, keeping, or removing a weather or field condition helps the
//! side of a given Mon. Every question is answered as a [`Verdict`] from a read-only
//! [`FieldEffectContext`] built once per decision point.

extern crate alloc;

mod checker;
mod context;
mod error;
mod evaluators;
mod options;
pub mod predicates;
mod verdict;

pub use checker::{
    check_field_status_benefit,
    check_weather_benefit,
    field_status_verdict,
    weather_verdict,
};
pub use context::FieldEffectContext;
pub use error::FieldEffectError;
pub use options::FieldEffectOptions;
pub use verdict::Verdict;
