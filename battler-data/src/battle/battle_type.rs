use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a battle.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum BattleType {
    /// One Mon from each side battles at a time.
    #[string = "Singles"]
    #[default]
    Singles,
    /// Two Mons from each side battle at a time.
    #[string = "Doubles"]
    Doubles,
}

impl BattleType {
    /// The number of active Mons per side.
    pub fn active_per_side(&self) -> usize {
        match self {
            Self::Singles => 1,
            Self::Doubles => 2,
        }
    }
}
