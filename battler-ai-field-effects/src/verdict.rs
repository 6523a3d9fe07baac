use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// How a weather or field condition affects one side of the battle.
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
pub enum Verdict {
    /// The condition helps the side.
    #[string = "Positive"]
    Positive,
    /// The condition does not meaningfully affect the side.
    #[string = "Neutral"]
    #[default]
    Neutral,
    /// The condition hurts the side.
    #[string = "Negative"]
    Negative,
    /// The condition cannot take effect, because a stronger effect overrides it.
    #[string = "Blocked"]
    Blocked,
}

impl Verdict {
    /// Checks if the verdict decides the outcome for a side on its own.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}
