use battler_data::BattleType;
use thiserror::Error;

use crate::BattlerRef;

/// An error describing a battle state snapshot that cannot be evaluated.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("expected 2 sides, found {0}")]
    InvalidSideCount(usize),
    #[error("side {side} has {count} active Mons, but {battle_type} allows at most {max}")]
    TooManyActiveMons {
        side: usize,
        count: usize,
        max: usize,
        battle_type: BattleType,
    },
    #[error("{name} has {count} move slots, but at most {max} are allowed")]
    TooManyMoveSlots {
        name: String,
        count: usize,
        max: usize,
    },
    #[error("{0} not found")]
    BattlerNotFound(BattlerRef),
}
