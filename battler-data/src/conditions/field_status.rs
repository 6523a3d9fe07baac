use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use strum::EnumIter;

/// A condition applied to the whole field, other than weather.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum FieldStatus {
    #[string = "Electric Terrain"]
    ElectricTerrain,
    #[string = "Grassy Terrain"]
    GrassyTerrain,
    #[string = "Misty Terrain"]
    MistyTerrain,
    #[string = "Psychic Terrain"]
    PsychicTerrain,
    /// Slower Mons move first within each priority bracket.
    #[string = "Trick Room"]
    TrickRoom,
}

impl FieldStatus {
    /// Checks if the status is a terrain.
    pub fn is_terrain(&self) -> bool {
        !matches!(self, Self::TrickRoom)
    }
}
