use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for miscellaneous behavior (such as weather interactions).
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
pub enum MoveFlag {
    /// Bypasses accuracy checks in rain.
    #[string = "AlwaysHitsInRain"]
    AlwaysHitsInRain,
    /// Bypasses accuracy checks in hail or snow.
    #[string = "AlwaysHitsInHailOrSnow"]
    #[alias = "AlwaysHitsInHailSnow"]
    AlwaysHitsInHailOrSnow,
    /// Accuracy is halved in harsh sunlight.
    #[string = "HalfAccuracyInSun"]
    HalfAccuracyInSun,
    /// Makes contact.
    #[string = "Contact"]
    Contact,
    /// Heals the user or its target.
    #[string = "Heal"]
    Heal,
    /// A powder move.
    #[string = "Powder"]
    Powder,
    /// A sound move.
    #[string = "Sound"]
    Sound,
    /// A wind move.
    #[string = "Wind"]
    Wind,
}
