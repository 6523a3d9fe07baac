use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use strum::EnumIter;

/// An ability that is relevant when scoring weather and field conditions.
///
/// Abilities that have no interaction with weather, terrain, or move priority are reported as
/// [`Ability::NoAbility`] by the battle state.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Ability {
    #[string = "No Ability"]
    #[default]
    NoAbility,

    // Weather.
    #[string = "Chlorophyll"]
    Chlorophyll,
    #[string = "Drizzle"]
    Drizzle,
    #[string = "Drought"]
    Drought,
    #[string = "Dry Skin"]
    DrySkin,
    #[string = "Flower Gift"]
    FlowerGift,
    #[string = "Forecast"]
    Forecast,
    #[string = "Harvest"]
    Harvest,
    #[string = "Hydration"]
    Hydration,
    #[string = "Ice Body"]
    IceBody,
    #[string = "Ice Face"]
    IceFace,
    #[string = "Leaf Guard"]
    LeafGuard,
    #[string = "Magic Guard"]
    MagicGuard,
    #[string = "Orichalcum Pulse"]
    OrichalcumPulse,
    #[string = "Overcoat"]
    Overcoat,
    #[string = "Protosynthesis"]
    Protosynthesis,
    #[string = "Rain Dish"]
    RainDish,
    #[string = "Sand Force"]
    SandForce,
    #[string = "Sand Rush"]
    SandRush,
    #[string = "Sand Stream"]
    SandStream,
    #[string = "Sand Veil"]
    SandVeil,
    #[string = "Slush Rush"]
    SlushRush,
    #[string = "Snow Cloak"]
    SnowCloak,
    #[string = "Snow Warning"]
    SnowWarning,
    #[string = "Solar Power"]
    SolarPower,
    #[string = "Swift Swim"]
    SwiftSwim,

    // Terrain.
    #[string = "Electric Surge"]
    ElectricSurge,
    #[string = "Grass Pelt"]
    GrassPelt,
    #[string = "Grassy Surge"]
    GrassySurge,
    #[string = "Hadron Engine"]
    HadronEngine,
    #[string = "Misty Surge"]
    MistySurge,
    #[string = "Psychic Surge"]
    PsychicSurge,
    #[string = "Quark Drive"]
    QuarkDrive,
    #[string = "Surge Surfer"]
    SurgeSurfer,

    // Priority.
    #[string = "Gale Wings"]
    GaleWings,
    #[string = "Prankster"]
    Prankster,
    #[string = "Triage"]
    Triage,

    // Grounding.
    #[string = "Levitate"]
    Levitate,
}

impl Ability {
    /// Checks if the ability grants priority to some class of moves.
    ///
    /// Psychic Terrain stops these moves from hitting grounded targets.
    pub fn grants_priority(&self) -> bool {
        matches!(self, Self::GaleWings | Self::Prankster | Self::Triage)
    }
}
