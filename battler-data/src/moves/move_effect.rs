use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The primary effect of a move.
///
/// Most moves simply hit their target. The remaining effects are the ones that interact with
/// weather, terrain, or move order.
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
pub enum MoveEffect {
    #[string = "Hit"]
    #[default]
    Hit,

    // Light-sensitive.
    #[string = "Growth"]
    Growth,
    #[string = "Moonlight"]
    Moonlight,
    #[string = "Morning Sun"]
    MorningSun,
    #[string = "Solar Beam"]
    SolarBeam,
    #[string = "Synthesis"]
    Synthesis,

    // Weather.
    #[string = "Aurora Veil"]
    AuroraVeil,
    #[string = "Hail"]
    Hail,
    #[string = "Rain Dance"]
    RainDance,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Shore Up"]
    ShoreUp,
    #[string = "Snowscape"]
    Snowscape,
    #[string = "Sunny Day"]
    SunnyDay,

    // Terrain.
    #[string = "Electric Terrain"]
    ElectricTerrain,
    #[string = "Expanding Force"]
    ExpandingForce,
    #[string = "Grassy Glide"]
    GrassyGlide,
    #[string = "Grassy Terrain"]
    GrassyTerrain,
    #[string = "Misty Explosion"]
    MistyExplosion,
    #[string = "Misty Terrain"]
    MistyTerrain,
    #[string = "Psychic Terrain"]
    PsychicTerrain,
    #[string = "Rising Voltage"]
    RisingVoltage,

    // Ground-shaking.
    #[string = "Earthquake"]
    Earthquake,
    #[string = "Magnitude"]
    Magnitude,

    // Miscellaneous.
    #[string = "Protect"]
    Protect,
    #[string = "Rest"]
    Rest,
    #[string = "Trick Room"]
    TrickRoom,
    #[string = "Yawn"]
    Yawn,
}

impl MoveEffect {
    /// Checks if the effect's power or outcome depends on the presence of harsh sunlight.
    pub fn is_light_sensitive(&self) -> bool {
        matches!(
            self,
            Self::SolarBeam | Self::MorningSun | Self::Synthesis | Self::Moonlight | Self::Growth
        )
    }
}
