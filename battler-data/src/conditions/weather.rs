use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use strum::EnumIter;

/// Weather on the field.
///
/// Only one weather can be active at a time.
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
pub enum Weather {
    #[string = "Rain"]
    Rain,
    #[string = "Harsh Sunlight"]
    #[alias = "Sun"]
    HarshSunlight,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Hail"]
    Hail,
    #[string = "Snow"]
    Snow,
    /// Primal rain. Cannot be replaced by regular weather.
    #[string = "Heavy Rain"]
    HeavyRain,
    /// Primal sunlight. Cannot be replaced by regular weather.
    #[string = "Extremely Harsh Sunlight"]
    ExtremelyHarshSunlight,
    /// Primal winds. Cannot be replaced by regular weather.
    #[string = "Strong Winds"]
    StrongWinds,
}

impl Weather {
    /// Checks if the weather belongs to the primal class, which overrides all other weather.
    pub fn is_primal(&self) -> bool {
        matches!(
            self,
            Self::HeavyRain | Self::ExtremelyHarshSunlight | Self::StrongWinds
        )
    }

    /// Checks if the weather is hail or snow.
    pub fn is_icy(&self) -> bool {
        matches!(self, Self::Hail | Self::Snow)
    }

    /// Checks if the weather damages Mons at the end of each turn.
    ///
    /// Snow replaced hail in later generations and does not deal damage, but some rule sets treat
    /// it as hail.
    pub fn is_damaging(&self, snow_deals_damage: bool) -> bool {
        match self {
            Self::Sandstorm | Self::Hail => true,
            Self::Snow => snow_deals_damage,
            _ => false,
        }
    }
}
