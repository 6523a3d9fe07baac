use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The effect category of a held item.
///
/// Many items share the same effect (for instance, every weather-extending rock), so the battle
/// state reports the category rather than the item itself.
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
pub enum HoldEffect {
    #[string = "None"]
    #[default]
    None,
    /// Ignores the effects of rain and harsh sunlight on the holder.
    #[string = "Utility Umbrella"]
    UtilityUmbrella,
    /// Protects the holder from weather damage and powder moves.
    #[string = "Safety Goggles"]
    SafetyGoggles,
    /// Extends weather set by the holder.
    #[string = "Weather Rock"]
    WeatherRock,
    /// Extends terrain set by the holder.
    #[string = "Terrain Extender"]
    TerrainExtender,
    /// Makes the holder ungrounded until hit.
    #[string = "Air Balloon"]
    AirBalloon,
    /// Grounds the holder.
    #[string = "Iron Ball"]
    IronBall,
    /// Restores HP at the end of each turn.
    #[string = "Leftovers"]
    Leftovers,
}
