use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Damage is calculated from Attack and Defense.
    #[string = "Physical"]
    Physical,
    /// Damage is calculated from Special Attack and Special Defense.
    #[string = "Special"]
    Special,
    /// Deals no direct damage.
    #[string = "Status"]
    #[default]
    Status,
}

impl MoveCategory {
    /// Checks if moves of this category deal damage.
    pub fn is_damaging(&self) -> bool {
        !matches!(self, Self::Status)
    }
}
