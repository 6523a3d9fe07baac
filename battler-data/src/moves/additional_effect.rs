use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// An additional effect applied when a move hits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AdditionalEffect {
    #[string = "Burn"]
    Burn,
    #[string = "Confusion"]
    Confusion,
    /// Heals the target, more so in Grassy Terrain.
    #[string = "Floral Healing"]
    FloralHealing,
    #[string = "Flinch"]
    Flinch,
    #[string = "Freeze"]
    Freeze,
    #[string = "Paralysis"]
    Paralysis,
    #[string = "Poison"]
    Poison,
    #[string = "Sleep"]
    Sleep,
}
